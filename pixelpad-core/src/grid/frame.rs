//! LED frame representation

use super::CELL_COUNT;

/// Per-channel intensities of one cell, each in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// All channels dark
    pub const OFF: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
}

/// One full grid image, row-major (`index = y * GRID_SIZE + x`, row 0 at
/// the bottom)
pub type Frame = [Rgb; CELL_COUNT];
