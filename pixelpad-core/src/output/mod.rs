//! Output-side logic
//!
//! - [`tone`]: buzzer frequency to PWM parameters
//! - [`indicator`]: joystick position marker geometry for the display

pub mod indicator;
pub mod tone;

pub use indicator::{IndicatorRect, INDICATOR_SIZE};
pub use tone::{wrap_for, ToneGenerator};
