//! Hardware configuration types
//!
//! Pin map and display geometry for the board.

/// Number of GPIO pins on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an active-low input with the internal pull-up enabled
    ///
    /// This is how push-buttons are wired: pressing pulls the line to
    /// ground, so a press is a falling edge.
    pub const fn active_low_pullup(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: true,
        }
    }
}

/// Display geometry and bus address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Width in pixels
    pub width: u8,
    /// Height in pixels (multiple of 8)
    pub height: u8,
    /// 7-bit I2C address
    pub address: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 64,
            address: 0x3C,
        }
    }
}

/// Pin assignment for every peripheral on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardPins {
    /// Button A (toggles the cell under the cursor)
    pub button_a: PinConfig,
    /// Button B (moves the cursor along the dominant joystick axis)
    pub button_b: PinConfig,
    /// Joystick horizontal axis
    pub joystick_x: PinConfig,
    /// Joystick vertical axis
    pub joystick_y: PinConfig,
    /// Buzzer PWM output
    pub buzzer: PinConfig,
    /// WS2812 LED matrix data line
    pub led_matrix: PinConfig,
    /// Secondary indicator LED
    pub indicator: PinConfig,
    /// Display I2C data
    pub display_sda: PinConfig,
    /// Display I2C clock
    pub display_scl: PinConfig,
}

/// Error returned when a pin map is not usable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin(u8),
    /// Pin assigned to more than one function
    AlreadyTaken(u8),
    /// Analog function on a pin without an ADC input
    NotAnalog(u8),
    /// Pin differs from the one the firmware is wired to
    NotWired(u8),
}

impl BoardPins {
    /// BitDogLab board layout
    pub const BITDOGLAB: Self = Self {
        button_a: PinConfig::active_low_pullup(5),
        button_b: PinConfig::active_low_pullup(6),
        joystick_x: PinConfig::new(27),
        joystick_y: PinConfig::new(26),
        buzzer: PinConfig::new(21),
        led_matrix: PinConfig::new(7),
        indicator: PinConfig::new(11),
        display_sda: PinConfig::new(14),
        display_scl: PinConfig::new(15),
    };

    /// All assigned pins
    pub fn all(&self) -> [PinConfig; 9] {
        [
            self.button_a,
            self.button_b,
            self.joystick_x,
            self.joystick_y,
            self.buzzer,
            self.led_matrix,
            self.indicator,
            self.display_sda,
            self.display_scl,
        ]
    }

    /// ADC input number of the joystick X axis
    pub fn joystick_x_channel(&self) -> Option<u8> {
        adc_channel(self.joystick_x.pin)
    }

    /// ADC input number of the joystick Y axis
    pub fn joystick_y_channel(&self) -> Option<u8> {
        adc_channel(self.joystick_y.pin)
    }

    /// Check that every pin exists, is used once, and that the joystick
    /// sits on ADC-capable pins
    pub fn validate(&self) -> Result<(), PinError> {
        let mut taken: u32 = 0;
        for cfg in self.all() {
            if cfg.pin >= GPIO_COUNT {
                return Err(PinError::InvalidPin(cfg.pin));
            }
            let bit = 1u32 << cfg.pin;
            if taken & bit != 0 {
                return Err(PinError::AlreadyTaken(cfg.pin));
            }
            taken |= bit;
        }

        for cfg in [self.joystick_x, self.joystick_y] {
            if adc_channel(cfg.pin).is_none() {
                return Err(PinError::NotAnalog(cfg.pin));
            }
        }

        Ok(())
    }

    /// Check that every function uses the same GPIO as `wired`
    ///
    /// Peripherals are claimed by type at build time, so a map that names
    /// other pins cannot be honored. Polarity and pull flags may differ.
    pub fn ensure_wired(&self, wired: &BoardPins) -> Result<(), PinError> {
        for (cfg, expected) in self.all().iter().zip(wired.all()) {
            if cfg.pin != expected.pin {
                return Err(PinError::NotWired(cfg.pin));
            }
        }
        Ok(())
    }
}

impl Default for BoardPins {
    fn default() -> Self {
        Self::BITDOGLAB
    }
}

/// Map a GPIO number to its ADC input (GPIO26-29 -> ADC0-3)
pub fn adc_channel(gpio: u8) -> Option<u8> {
    match gpio {
        26..=29 => Some(gpio - 26),
        _ => None,
    }
}
