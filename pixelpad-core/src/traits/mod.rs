//! Device driver traits
//!
//! These traits define the interface between the update loop and the
//! display / LED matrix drivers.

pub mod display;
pub mod leds;

pub use display::{DisplayError, PixelDisplay};
pub use leds::{LedError, LedGrid};
