//! PixelPad Hardware Abstraction Layer
//!
//! Peripheral traits implemented by chip-specific HALs. The application
//! logic in `pixelpad-core` is written against these traits so it can be
//! exercised on the host with mock peripherals.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  pixelpad-firmware                      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pixelpad-core (model, loops)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pixelpad-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pixelpad-hal-rp2040 (embassy-rp)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (status indicator)
//! - [`adc::AnalogInput`] - Raw analog sampling (joystick axes)
//! - [`pwm::PwmSlice`] - PWM timer slice (tone output)

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod pwm;

pub use adc::AnalogInput;
pub use gpio::OutputPin;
pub use pwm::PwmSlice;
