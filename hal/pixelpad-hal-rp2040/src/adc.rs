//! ADC joystick input

use embassy_rp::adc::{Adc, Async, Channel};
use pixelpad_hal::AnalogInput;

/// Midpoint of the 12-bit range, reported when a conversion fails
const REST: u16 = 1 << 11;

/// Joystick channels on the on-chip ADC
///
/// Each channel is registered with its ADC input number (0-3 for GPIO
/// 26-29) so callers can address it the same way on any board.
pub struct JoystickAdc<'d> {
    adc: Adc<'d, Async>,
    channels: [(u8, Channel<'d>); 2],
}

impl<'d> JoystickAdc<'d> {
    pub fn new(adc: Adc<'d, Async>, channels: [(u8, Channel<'d>); 2]) -> Self {
        Self { adc, channels }
    }
}

/// Look up the channel registered for ADC input `number`
fn find_channel<T>(channels: &mut [(u8, T)], number: u8) -> Option<&mut T> {
    channels
        .iter_mut()
        .find(|(n, _)| *n == number)
        .map(|(_, ch)| ch)
}

impl AnalogInput for JoystickAdc<'_> {
    const WIDTH_BITS: u8 = 12;

    async fn read_raw(&mut self, channel: u8) -> u16 {
        let Some(ch) = find_channel(&mut self.channels, channel) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("ADC{} not registered", channel);
            return REST;
        };

        match self.adc.read(ch).await {
            Ok(value) => value,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("ADC{} read failed: {:?}", channel, _e);
                REST
            }
        }
    }
}
