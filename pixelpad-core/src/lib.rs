//! Board-agnostic core logic for the PixelPad firmware
//!
//! Everything here is independent of the concrete chip and can be tested
//! on the host:
//!
//! - Joystick axis normalization
//! - Per-button debounce gate and the edge-context input dispatcher
//! - The 5×5 cursor/grid model shared between the edge handler and the
//!   periodic update loop
//! - Tone frequency to PWM wrap mapping
//! - The fixed-rate update loop
//! - Board configuration and startup error types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod grid;
pub mod input;
pub mod output;
pub mod traits;
pub mod update;

pub use error::InitError;
pub use grid::{CursorGridModel, Frame};
pub use update::{TickReport, UpdateLoop};
