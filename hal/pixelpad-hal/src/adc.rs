//! Analog input abstraction

/// Analog-to-digital converter input
///
/// Returns raw, right-aligned samples. The sample width is fixed by the
/// converter (12 bits on the RP2040).
#[allow(async_fn_in_trait)]
pub trait AnalogInput {
    /// Sample width in bits
    const WIDTH_BITS: u8;

    /// Read one raw sample from the given ADC input
    ///
    /// Conversion errors are absorbed by the implementation; the caller
    /// always receives a value in `0..2^WIDTH_BITS`.
    async fn read_raw(&mut self, channel: u8) -> u16;
}
