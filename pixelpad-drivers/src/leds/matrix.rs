//! 5×5 WS2812 matrix encoding
//!
//! The LEDs are chained in a serpentine starting at the bottom-right
//! corner: even rows run right to left, odd rows left to right.
//!
//! ```text
//! row 4: 24 23 22 21 20
//! row 3: 15 16 17 18 19
//! row 2: 14 13 12 11 10
//! row 1:  5  6  7  8  9
//! row 0:  4  3  2  1  0
//! ```

use pixelpad_core::grid::{Frame, Rgb, CELL_COUNT, GRID_SIZE};
use smart_leds::RGB8;

/// LEDs in the chain
pub const MATRIX_LEN: usize = CELL_COUNT;

/// Position in the chain of the LED at grid cell (x, y)
pub fn chain_index(x: u8, y: u8) -> usize {
    let (x, y) = (x as usize, y as usize);
    let row = y * GRID_SIZE;
    if y % 2 == 0 {
        row + (GRID_SIZE - 1 - x)
    } else {
        row + x
    }
}

/// Scale a `0.0..=1.0` intensity to a byte, clamping out-of-range input
fn channel(value: f32) -> u8 {
    // NaN fails both comparisons and lands on 0
    if value >= 1.0 {
        255
    } else if value > 0.0 {
        (value * 255.0 + 0.5) as u8
    } else {
        0
    }
}

/// Convert cell intensities to an 8-bit color
pub fn to_rgb8(color: Rgb) -> RGB8 {
    RGB8::new(channel(color.r), channel(color.g), channel(color.b))
}

/// Reorder a row-major frame into chain order
pub fn encode_frame(frame: &Frame) -> [RGB8; MATRIX_LEN] {
    let mut out = [RGB8::default(); MATRIX_LEN];
    for (i, color) in frame.iter().enumerate() {
        let (x, y) = ((i % GRID_SIZE) as u8, (i / GRID_SIZE) as u8);
        out[chain_index(x, y)] = to_rgb8(*color);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelpad_core::grid::{Cursor, CursorGridModel};

    #[test]
    fn test_chain_corners() {
        assert_eq!(chain_index(4, 0), 0);
        assert_eq!(chain_index(0, 0), 4);
        assert_eq!(chain_index(0, 1), 5);
        assert_eq!(chain_index(4, 1), 9);
        assert_eq!(chain_index(2, 2), 12);
        assert_eq!(chain_index(0, 4), 24);
    }

    #[test]
    fn test_chain_is_a_permutation() {
        let mut seen = [false; MATRIX_LEN];
        for y in 0..GRID_SIZE as u8 {
            for x in 0..GRID_SIZE as u8 {
                let i = chain_index(x, y);
                assert!(!seen[i]);
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_channel_scaling() {
        assert_eq!(channel(0.0), 0);
        assert_eq!(channel(1.0), 255);
        assert_eq!(channel(0.5), 128);
        assert_eq!(channel(0.1), 26);
        assert_eq!(channel(-0.5), 0);
        assert_eq!(channel(3.0), 255);
        assert_eq!(channel(f32::NAN), 0);
    }

    #[test]
    fn test_encode_model_frame() {
        let model = CursorGridModel::new();
        model.move_cursor(1.0, 0.0);
        model.toggle();

        let leds = encode_frame(&model.snapshot());
        let at = chain_index(3, 2);
        assert_eq!(leds[at], RGB8::new(0, 26, 26));
        assert_eq!(
            leds.iter().filter(|c| **c != RGB8::default()).count(),
            1
        );
        assert_ne!(Cursor::CENTER, model.cursor());
    }
}
