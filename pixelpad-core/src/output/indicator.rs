//! Joystick position indicator
//!
//! A filled square that follows the stick inside a one-pixel frame drawn
//! around the screen edge. Positive X moves it right, positive Y moves it
//! up (towards row 0 of the screen).

use crate::input::AxisSample;

/// Side of the indicator square in pixels
pub const INDICATOR_SIZE: u8 = 8;

/// Border thickness around the travel area
const BORDER: u8 = 1;

/// Screen rectangle of the indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorRect {
    pub top: u8,
    pub left: u8,
    pub size: u8,
}

impl IndicatorRect {
    /// Place the indicator for `sample` on a `width` × `height` screen
    pub fn place(sample: AxisSample, width: u8, height: u8) -> Self {
        let span_x = width.saturating_sub(INDICATOR_SIZE + 2 * BORDER);
        let span_y = height.saturating_sub(INDICATOR_SIZE + 2 * BORDER);

        let left = BORDER + scale(unit(sample.x), span_x);
        let top = BORDER + scale(1.0 - unit(sample.y), span_y);

        Self {
            top,
            left,
            size: INDICATOR_SIZE,
        }
    }
}

/// Map an axis value from `-1.0..=1.0` to `0.0..=1.0`
fn unit(axis: f32) -> f32 {
    let u = (axis + 1.0) * 0.5;
    if u < 0.0 {
        0.0
    } else if u > 1.0 {
        1.0
    } else {
        u
    }
}

/// Round `fraction * span` to the nearest pixel
fn scale(fraction: f32, span: u8) -> u8 {
    (fraction * span as f32 + 0.5) as u8
}
