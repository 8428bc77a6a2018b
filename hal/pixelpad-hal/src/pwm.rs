//! PWM timer slice abstraction
//!
//! Models one counter with a clock divider, a wrap (top) value and a
//! compare level on the output channel:
//!
//! ```text
//! f_out = f_sys / (divider * (wrap + 1))
//! duty  = level / (wrap + 1)
//! ```

/// One PWM slice driving a single output channel
pub trait PwmSlice {
    /// Frequency of the clock feeding the divider, in Hz
    fn timebase_hz(&self) -> u32;

    /// Set the fractional clock divider
    fn set_divider(&mut self, divider: f32);

    /// Set the wrap value (counter top)
    fn set_wrap(&mut self, wrap: u16);

    /// Set the compare level of the output channel
    fn set_level(&mut self, level: u16);

    /// Enable or disable the counter
    fn set_enabled(&mut self, enabled: bool);
}
