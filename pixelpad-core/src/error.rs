//! Startup failures
//!
//! Initialization is the only fallible phase. Any failure is fatal: the
//! firmware abandons normal operation and announces the reason forever.

use crate::config::PinError;
use crate::traits::{DisplayError, LedError};

/// Fatal initialization failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    /// Pin map is inconsistent
    Pins(PinError),
    /// Display did not accept its init sequence
    Display(DisplayError),
    /// LED grid could not be blanked
    LedGrid(LedError),
}

impl InitError {
    /// Human-readable reason for the diagnostic line
    pub fn reason(&self) -> &'static str {
        match self {
            InitError::Pins(PinError::InvalidPin(_)) => "pin number out of range",
            InitError::Pins(PinError::AlreadyTaken(_)) => "pin assigned twice",
            InitError::Pins(PinError::NotAnalog(_)) => "joystick pin has no ADC input",
            InitError::Pins(PinError::NotWired(_)) => "pin map does not match board wiring",
            InitError::Display(DisplayError::Bus) => "display not responding on I2C",
            InitError::Display(DisplayError::NotInitialized) => "display not initialized",
            InitError::Display(DisplayError::UnsupportedGeometry) => "display size not supported",
            InitError::LedGrid(LedError::Transfer) => "LED matrix transfer failed",
        }
    }
}

impl From<PinError> for InitError {
    fn from(e: PinError) -> Self {
        InitError::Pins(e)
    }
}

impl From<DisplayError> for InitError {
    fn from(e: DisplayError) -> Self {
        InitError::Display(e)
    }
}

impl From<LedError> for InitError {
    fn from(e: LedError) -> Self {
        InitError::LedGrid(e)
    }
}

impl core::fmt::Display for InitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.reason())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(
            InitError::from(DisplayError::Bus),
            InitError::Display(DisplayError::Bus)
        );
        assert_eq!(
            InitError::from(PinError::AlreadyTaken(7)),
            InitError::Pins(PinError::AlreadyTaken(7))
        );
    }

    #[test]
    fn test_reason() {
        let err = InitError::from(DisplayError::Bus);
        assert_eq!(err.reason(), "display not responding on I2C");
        assert_eq!(format!("{}", err), "display not responding on I2C");

        let err = InitError::from(PinError::NotWired(20));
        assert_eq!(err.reason(), "pin map does not match board wiring");
    }
}
