//! Peripheral drivers
//!
//! Concrete implementations of the output traits defined in
//! pixelpad-core:
//!
//! - SSD1306 128×64 OLED over async I²C
//! - 5×5 WS2812 matrix frame encoding (serpentine chain order)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod leds;
