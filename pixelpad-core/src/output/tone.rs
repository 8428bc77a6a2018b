//! Square-wave tone generator on a PWM slice
//!
//! The slice runs from a fixed clock divider. For a requested frequency
//! the wrap value is
//!
//! ```text
//! wrap = f_sys / (divider * f) - 1
//! ```
//!
//! and the compare level is set to half of it for a 50% duty cycle.
//! Silencing only drops the level to zero; the period is left in place so
//! the next `start` at the same pitch changes a single register.

use embedded_hal::delay::DelayNs;
use pixelpad_hal::PwmSlice;

/// Wrap value for `frequency_hz`
///
/// Frequencies outside the representable range saturate: too low gives
/// `u16::MAX`, too high gives `0`.
pub fn wrap_for(timebase_hz: u32, divider: f32, frequency_hz: f32) -> u16 {
    // Float to int `as` casts saturate and map NaN to 0
    (timebase_hz as f32 / (divider * frequency_hz) - 1.0) as u16
}

/// Tone generator state
pub struct ToneGenerator<P> {
    pwm: P,
    divider: f32,
    /// Last started frequency (0 = never started)
    frequency_hz: f32,
    wrap: u16,
    level: u16,
}

impl<P: PwmSlice> ToneGenerator<P> {
    /// Configure the slice with `divider` and enable it, silent
    pub fn new(mut pwm: P, divider: f32) -> Self {
        pwm.set_divider(divider);
        pwm.set_level(0);
        pwm.set_enabled(true);
        Self {
            pwm,
            divider,
            frequency_hz: 0.0,
            wrap: 0,
            level: 0,
        }
    }

    /// Start a square wave at `frequency_hz`
    ///
    /// Zero, negative or non-finite frequencies silence the output instead.
    pub fn start(&mut self, frequency_hz: f32) {
        if !frequency_hz.is_finite() || frequency_hz <= 0.0 {
            self.stop();
            return;
        }

        let wrap = wrap_for(self.pwm.timebase_hz(), self.divider, frequency_hz);
        let level = wrap / 2;

        self.pwm.set_wrap(wrap);
        self.pwm.set_level(level);

        self.frequency_hz = frequency_hz;
        self.wrap = wrap;
        self.level = level;
    }

    /// Silence the output, keeping the configured period
    pub fn stop(&mut self) {
        self.pwm.set_level(0);
        self.level = 0;
    }

    /// Play `frequency_hz` for `duration_ms`, blocking the caller
    ///
    /// Must not be called from the edge handler.
    pub fn play_blocking<D: DelayNs>(&mut self, frequency_hz: f32, duration_ms: u32, delay: &mut D) {
        self.start(frequency_hz);
        delay.delay_ms(duration_ms);
        self.stop();
    }

    /// Whether a tone is currently sounding
    pub fn is_sounding(&self) -> bool {
        self.level != 0
    }

    /// Last started frequency in Hz
    pub fn frequency_hz(&self) -> f32 {
        self.frequency_hz
    }

    /// Current wrap value
    pub fn wrap(&self) -> u16 {
        self.wrap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SYS_HZ: u32 = 125_000_000;
    const DIVIDER: f32 = 250.0;

    #[derive(Default)]
    struct MockPwm {
        divider: f32,
        wrap: u16,
        level: u16,
        enabled: bool,
    }

    impl PwmSlice for MockPwm {
        fn timebase_hz(&self) -> u32 {
            SYS_HZ
        }

        fn set_divider(&mut self, divider: f32) {
            self.divider = divider;
        }

        fn set_wrap(&mut self, wrap: u16) {
            self.wrap = wrap;
        }

        fn set_level(&mut self, level: u16) {
            self.level = level;
        }

        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
        }
    }

    #[derive(Default)]
    struct MockDelay {
        elapsed_ms: u32,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.elapsed_ms += ns / 1_000_000;
        }

        fn delay_ms(&mut self, ms: u32) {
            self.elapsed_ms += ms;
        }
    }

    #[test]
    fn test_new_is_silent_and_enabled() {
        let tone = ToneGenerator::new(MockPwm::default(), DIVIDER);
        assert!(tone.pwm.enabled);
        assert_eq!(tone.pwm.divider, DIVIDER);
        assert_eq!(tone.pwm.level, 0);
        assert!(!tone.is_sounding());
    }

    #[test]
    fn test_wrap_for_a4() {
        // 500 kHz / 440 Hz = 1136.4 counts
        assert_eq!(wrap_for(SYS_HZ, DIVIDER, 440.0), 1135);
    }

    #[test]
    fn test_start_sets_half_duty() {
        let mut tone = ToneGenerator::new(MockPwm::default(), DIVIDER);
        tone.start(1000.0);
        assert_eq!(tone.pwm.wrap, 499);
        assert_eq!(tone.pwm.level, 249);
        assert!(tone.is_sounding());
        assert_eq!(tone.frequency_hz(), 1000.0);
    }

    #[test]
    fn test_stop_keeps_period() {
        let mut tone = ToneGenerator::new(MockPwm::default(), DIVIDER);
        tone.start(880.0);
        let wrap = tone.wrap();

        tone.stop();
        assert_eq!(tone.pwm.level, 0);
        assert_eq!(tone.pwm.wrap, wrap);
        assert_eq!(tone.wrap(), wrap);
        assert_eq!(tone.frequency_hz(), 880.0);
        assert!(!tone.is_sounding());
    }

    #[test]
    fn test_range_limits() {
        // Just above the lowest representable pitch
        assert_eq!(wrap_for(SYS_HZ, DIVIDER, 8.0), 62_499);
        // Below it the wrap saturates instead of wrapping around
        assert_eq!(wrap_for(SYS_HZ, DIVIDER, 1.0), u16::MAX);
        // At the top of the range the period is a single count
        assert_eq!(wrap_for(SYS_HZ, DIVIDER, 500_000.0), 0);
        assert_eq!(wrap_for(SYS_HZ, DIVIDER, 250_000.0), 1);
    }

    #[test]
    fn test_zero_frequency_is_silence() {
        let mut tone = ToneGenerator::new(MockPwm::default(), DIVIDER);
        tone.start(440.0);
        tone.start(0.0);
        assert_eq!(tone.pwm.level, 0);
        assert_eq!(tone.frequency_hz(), 440.0);

        tone.start(f32::NAN);
        assert!(!tone.is_sounding());
    }

    #[test]
    fn test_play_blocking() {
        let mut tone = ToneGenerator::new(MockPwm::default(), DIVIDER);
        let mut delay = MockDelay::default();
        tone.play_blocking(1320.0, 80, &mut delay);

        assert_eq!(delay.elapsed_ms, 80);
        assert!(!tone.is_sounding());
        assert_eq!(tone.wrap(), wrap_for(SYS_HZ, DIVIDER, 1320.0));
    }

    proptest! {
        #[test]
        fn wrap_decreases_with_frequency(a in 8.0f32..500_000.0, b in 8.0f32..500_000.0) {
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            prop_assert!(wrap_for(SYS_HZ, DIVIDER, lo) >= wrap_for(SYS_HZ, DIVIDER, hi));
        }

        #[test]
        fn stop_keeps_period_across_range(f in 7.7f32..500_000.0) {
            let mut tone = ToneGenerator::new(MockPwm::default(), DIVIDER);
            tone.start(f);
            let wrap = wrap_for(SYS_HZ, DIVIDER, f);
            prop_assert_eq!(tone.pwm.wrap, wrap);
            prop_assert_eq!(tone.pwm.level, wrap / 2);

            tone.stop();
            prop_assert_eq!(tone.pwm.level, 0);
            prop_assert_eq!(tone.pwm.wrap, wrap);
            prop_assert_eq!(tone.wrap(), wrap);
            prop_assert_eq!(tone.frequency_hz(), f);
            prop_assert!(!tone.is_sounding());
        }
    }
}
