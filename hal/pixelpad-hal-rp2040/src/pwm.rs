//! PWM slice driving the buzzer
//!
//! The buzzer sits on channel B of its slice. Every setter rewrites the
//! whole slice configuration, which embassy-rp applies atomically.

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use fixed::types::U12F4;
use pixelpad_hal::PwmSlice;

/// Largest divider the 8.4 fixed-point register holds (255 + 15/16)
const DIVIDER_MAX: U12F4 = U12F4::from_bits(0x0FFF);

/// Convert a fractional divider to the register format
///
/// Clamped to `1.0..=DIVIDER_MAX`; NaN maps to 1.0.
fn divider_bits(divider: f32) -> U12F4 {
    if divider.is_nan() {
        return U12F4::ONE;
    }
    U12F4::saturating_from_num(divider).clamp(U12F4::ONE, DIVIDER_MAX)
}

/// Tone output on PWM channel B
pub struct PwmTone<'d> {
    pwm: Pwm<'d>,
    config: PwmConfig,
}

impl<'d> PwmTone<'d> {
    /// Wrap a slice created with `Pwm::new_output_b`, starting silent
    pub fn new(mut pwm: Pwm<'d>) -> Self {
        let mut config = PwmConfig::default();
        config.compare_b = 0;
        config.enable = false;
        pwm.set_config(&config);
        Self { pwm, config }
    }

    fn apply(&mut self) {
        self.pwm.set_config(&self.config);
    }
}

impl PwmSlice for PwmTone<'_> {
    fn timebase_hz(&self) -> u32 {
        clk_sys_freq()
    }

    fn set_divider(&mut self, divider: f32) {
        self.config.divider = divider_bits(divider);
        self.apply();
    }

    fn set_wrap(&mut self, wrap: u16) {
        self.config.top = wrap;
        self.apply();
    }

    fn set_level(&mut self, level: u16) {
        self.config.compare_b = level;
        self.apply();
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.config.enable = enabled;
        self.apply();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divider_bits() {
        // 250 = 0xFA integer part, no fraction
        assert_eq!(divider_bits(250.0).to_bits(), 250 << 4);
        // 1.5 -> 0x18
        assert_eq!(divider_bits(1.5).to_bits(), 0x18);
    }

    #[test]
    fn test_divider_clamped() {
        assert_eq!(divider_bits(0.25), U12F4::ONE);
        assert_eq!(divider_bits(-3.0), U12F4::ONE);
        assert_eq!(divider_bits(f32::NAN), U12F4::ONE);
        assert_eq!(divider_bits(256.0), DIVIDER_MAX);
        assert_eq!(divider_bits(1.0e9), DIVIDER_MAX);
    }
}
