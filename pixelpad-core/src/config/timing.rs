//! Timing and tone tuning

/// Loop rates and timeouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// Update loop rate in Hz
    pub update_rate_hz: u32,
    /// Minimum spacing between accepted presses of one button (ms)
    pub debounce_ms: u32,
    /// Interval between fatal error announcements (ms)
    pub fatal_announce_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            update_rate_hz: 30,
            debounce_ms: 150,
            fatal_announce_ms: 2000,
        }
    }
}

impl TimingConfig {
    /// Update loop period in microseconds
    pub fn update_period_us(&self) -> u64 {
        1_000_000 / self.update_rate_hz.max(1) as u64
    }

    /// Debounce threshold in microseconds
    pub fn debounce_us(&self) -> u64 {
        self.debounce_ms as u64 * 1000
    }
}

/// Buzzer tuning
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneConfig {
    /// PWM clock divider
    ///
    /// At 125 MHz a divider of 250 counts at 500 kHz, so with a 16-bit wrap
    /// the output spans roughly 7.6 Hz to 500 kHz.
    pub divider: f32,
    /// Tone played when a grid frame is emitted (Hz)
    pub confirm_hz: f32,
    /// Startup chirp frequency (Hz)
    pub boot_chirp_hz: f32,
    /// Startup chirp length (ms)
    pub boot_chirp_ms: u32,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            divider: 250.0,
            confirm_hz: 880.0,
            boot_chirp_hz: 1320.0,
            boot_chirp_ms: 80,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_periods() {
        let timing = TimingConfig::default();
        assert_eq!(timing.update_period_us(), 33_333);
        assert_eq!(timing.debounce_us(), 150_000);
    }

    #[test]
    fn test_zero_rate_does_not_divide_by_zero() {
        let timing = TimingConfig {
            update_rate_hz: 0,
            ..Default::default()
        };
        assert_eq!(timing.update_period_us(), 1_000_000);
    }
}
