//! GPIO output pins

use embassy_rp::gpio::Output;
use pixelpad_core::config::PinConfig;
use pixelpad_hal::OutputPin;

/// Push-pull output honoring the pin's configured polarity
///
/// `set_high` means "active": an inverted pin drives the line low.
pub struct GpioOutput<'d> {
    pin: Output<'d>,
    inverted: bool,
}

impl<'d> GpioOutput<'d> {
    /// Wrap `pin` and drive it inactive
    pub fn new(pin: Output<'d>, config: &PinConfig) -> Self {
        let mut out = Self {
            pin,
            inverted: config.inverted,
        };
        out.set_low();
        out
    }
}

impl OutputPin for GpioOutput<'_> {
    fn set_high(&mut self) {
        if self.inverted {
            self.pin.set_low();
        } else {
            self.pin.set_high();
        }
    }

    fn set_low(&mut self) {
        if self.inverted {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high() != self.inverted
    }
}
