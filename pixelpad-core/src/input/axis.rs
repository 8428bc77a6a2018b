//! Joystick axis sampling

use pixelpad_hal::AnalogInput;
use portable_atomic::{AtomicF32, Ordering};

/// Convert a raw unsigned sample to a signed axis value
///
/// The sample is centered on `2^(width_bits - 1)` and divided by the same
/// half-range, so the rest position maps to exactly `0.0`, a zero sample to
/// `-1.0` and full scale to just under `1.0`. No clamping is applied.
pub fn normalize(raw: u16, width_bits: u8) -> f32 {
    let half = (1u32 << (width_bits - 1)) as f32;
    (raw as f32 - half) / half
}

/// Both joystick axes, each in `-1.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisSample {
    pub x: f32,
    pub y: f32,
}

/// Reads the two joystick channels from an ADC
pub struct AxisReader<A> {
    adc: A,
    x_channel: u8,
    y_channel: u8,
}

impl<A: AnalogInput> AxisReader<A> {
    /// Create a reader for the given ADC inputs
    pub fn new(adc: A, x_channel: u8, y_channel: u8) -> Self {
        Self {
            adc,
            x_channel,
            y_channel,
        }
    }

    /// Sample and normalize both axes
    pub async fn sample(&mut self) -> AxisSample {
        let x = self.adc.read_raw(self.x_channel).await;
        let y = self.adc.read_raw(self.y_channel).await;
        AxisSample {
            x: normalize(x, A::WIDTH_BITS),
            y: normalize(y, A::WIDTH_BITS),
        }
    }
}

/// Last sampled axes, written by the update loop and read by the edge
/// handler when a move is requested
///
/// Each axis is an independent atomic; a reader may pair an X from one
/// tick with a Y from the next, which is harmless for direction picking.
pub struct SharedAxes {
    x: AtomicF32,
    y: AtomicF32,
}

impl Default for SharedAxes {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedAxes {
    /// Both axes at rest
    pub const fn new() -> Self {
        Self {
            x: AtomicF32::new(0.0),
            y: AtomicF32::new(0.0),
        }
    }

    /// Store a new sample
    pub fn publish(&self, sample: AxisSample) {
        self.x.store(sample.x, Ordering::Relaxed);
        self.y.store(sample.y, Ordering::Relaxed);
    }

    /// Most recently published sample
    pub fn load(&self) -> AxisSample {
        AxisSample {
            x: self.x.load(Ordering::Relaxed),
            y: self.y.load(Ordering::Relaxed),
        }
    }
}
