//! RP2040-specific HAL for the PixelPad firmware
//!
//! Implements the `pixelpad-hal` and `pixelpad-core` peripheral traits on
//! top of embassy-rp:
//!
//! - PWM slice tone output
//! - ADC joystick input
//! - GPIO output pins
//! - PIO-driven WS2812 LED grid

#![no_std]

pub mod adc;
pub mod gpio;
pub mod pwm;
pub mod ws2812;

pub use adc::JoystickAdc;
pub use gpio::GpioOutput;
pub use pwm::PwmTone;
pub use ws2812::Ws2812Grid;
