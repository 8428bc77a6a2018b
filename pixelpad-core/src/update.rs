//! Fixed-rate update loop
//!
//! One `tick` per timer period, never overlapping (the caller drives it
//! from a single ticker task). Each tick:
//!
//! 1. Silence the buzzer and clear the indicator LED
//! 2. Sample the joystick and publish the axes for the edge handler
//! 3. Redraw the joystick indicator and flush the display
//! 4. If a grid change is pending, push the frame to the LEDs, light the
//!    indicator and start the confirmation tone
//!
//! The tone in step 4 is not timed; the next tick's step 1 ends it.

use pixelpad_hal::{AnalogInput, OutputPin, PwmSlice};

use crate::grid::CursorGridModel;
use crate::input::{AxisReader, AxisSample, SharedAxes};
use crate::output::{IndicatorRect, ToneGenerator};
use crate::traits::{DisplayError, LedError, LedGrid, PixelDisplay};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Axes sampled this tick
    pub sample: AxisSample,
    /// A pending grid frame was sent to the LEDs
    pub frame_emitted: bool,
    /// Display flush result
    pub display: Result<(), DisplayError>,
    /// LED write result (`Ok` when no frame was due)
    pub leds: Result<(), LedError>,
}

/// Periodic context: joystick sampling and all bus output
pub struct UpdateLoop<'a, A, D, L, P, I> {
    model: &'a CursorGridModel,
    axes: &'a SharedAxes,
    reader: AxisReader<A>,
    display: D,
    leds: L,
    tone: ToneGenerator<P>,
    indicator: I,
    confirm_hz: f32,
}

impl<'a, A, D, L, P, I> UpdateLoop<'a, A, D, L, P, I>
where
    A: AnalogInput,
    D: PixelDisplay,
    L: LedGrid,
    P: PwmSlice,
    I: OutputPin,
{
    /// Assemble the loop from initialized peripherals
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        model: &'a CursorGridModel,
        axes: &'a SharedAxes,
        reader: AxisReader<A>,
        display: D,
        leds: L,
        tone: ToneGenerator<P>,
        indicator: I,
        confirm_hz: f32,
    ) -> Self {
        Self {
            model,
            axes,
            reader,
            display,
            leds,
            tone,
            indicator,
            confirm_hz,
        }
    }

    /// Run one update
    ///
    /// Bus faults are reported, not propagated: the remaining steps still
    /// run so a flaky display never stalls the LED grid.
    pub async fn tick(&mut self) -> TickReport {
        self.tone.stop();
        self.indicator.set_low();

        let sample = self.reader.sample().await;
        self.axes.publish(sample);

        let display = self.redraw(sample).await;

        let mut leds = Ok(());
        let frame_emitted = self.model.drain_pending();
        if frame_emitted {
            let frame = self.model.snapshot();
            leds = self.leds.draw_frame(&frame).await;
            self.indicator.set_high();
            self.tone.start(self.confirm_hz);
        }

        TickReport {
            sample,
            frame_emitted,
            display,
            leds,
        }
    }

    async fn redraw(&mut self, sample: AxisSample) -> Result<(), DisplayError> {
        let (width, height) = self.display.dimensions();
        let rect = IndicatorRect::place(sample, width, height);

        self.display.fill(false);
        self.display.draw_rect(0, 0, height, width, true, false);
        self.display
            .draw_rect(rect.top, rect.left, rect.size, rect.size, true, true);
        self.display.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cursor, Frame};
    use embassy_futures::block_on;

    struct MockAdc {
        x: u16,
        y: u16,
    }

    impl AnalogInput for MockAdc {
        const WIDTH_BITS: u8 = 12;

        async fn read_raw(&mut self, channel: u8) -> u16 {
            if channel == 1 {
                self.x
            } else {
                self.y
            }
        }
    }

    #[derive(Default)]
    struct MockDisplay {
        fills: u32,
        rects: [(u8, u8, u8, u8, bool); 2],
        rect_count: usize,
        flushes: u32,
        fail: bool,
    }

    impl PixelDisplay for MockDisplay {
        async fn init(&mut self) -> Result<(), DisplayError> {
            Ok(())
        }

        fn dimensions(&self) -> (u8, u8) {
            (128, 64)
        }

        fn fill(&mut self, _on: bool) {
            self.fills += 1;
            self.rect_count = 0;
        }

        fn draw_rect(&mut self, top: u8, left: u8, height: u8, width: u8, _on: bool, filled: bool) {
            if self.rect_count < self.rects.len() {
                self.rects[self.rect_count] = (top, left, height, width, filled);
            }
            self.rect_count += 1;
        }

        async fn flush(&mut self) -> Result<(), DisplayError> {
            self.flushes += 1;
            if self.fail {
                Err(DisplayError::Bus)
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct MockLeds {
        frames: u32,
        last: Option<Frame>,
    }

    impl LedGrid for MockLeds {
        async fn init(&mut self) -> Result<(), LedError> {
            Ok(())
        }

        async fn draw_frame(&mut self, frame: &Frame) -> Result<(), LedError> {
            self.frames += 1;
            self.last = Some(*frame);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockPwm {
        wrap: u16,
        level: u16,
    }

    impl PwmSlice for MockPwm {
        fn timebase_hz(&self) -> u32 {
            125_000_000
        }

        fn set_divider(&mut self, _divider: f32) {}

        fn set_wrap(&mut self, wrap: u16) {
            self.wrap = wrap;
        }

        fn set_level(&mut self, level: u16) {
            self.level = level;
        }

        fn set_enabled(&mut self, _enabled: bool) {}
    }

    #[derive(Default)]
    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    type TestLoop<'a> = UpdateLoop<'a, MockAdc, MockDisplay, MockLeds, MockPwm, MockPin>;

    fn make<'a>(model: &'a CursorGridModel, axes: &'a SharedAxes, x: u16, y: u16) -> TestLoop<'a> {
        UpdateLoop::new(
            model,
            axes,
            AxisReader::new(MockAdc { x, y }, 1, 0),
            MockDisplay::default(),
            MockLeds::default(),
            ToneGenerator::new(MockPwm::default(), 250.0),
            MockPin::default(),
            880.0,
        )
    }

    #[test]
    fn test_idle_tick() {
        let model = CursorGridModel::new();
        let axes = SharedAxes::new();
        let mut update = make(&model, &axes, 2048, 2048);

        let report = block_on(update.tick());
        assert!(!report.frame_emitted);
        assert_eq!(report.display, Ok(()));
        assert_eq!(update.leds.frames, 0);
        assert!(!update.indicator.high);
        assert!(!update.tone.is_sounding());
        assert_eq!(update.display.flushes, 1);
    }

    #[test]
    fn test_axes_are_published() {
        let model = CursorGridModel::new();
        let axes = SharedAxes::new();
        let mut update = make(&model, &axes, 4095, 0);

        let report = block_on(update.tick());
        assert_eq!(axes.load(), report.sample);
        assert_eq!(report.sample.y, -1.0);
        assert!(report.sample.x > 0.99);
    }

    #[test]
    fn test_display_shows_border_and_indicator() {
        let model = CursorGridModel::new();
        let axes = SharedAxes::new();
        let mut update = make(&model, &axes, 2048, 2048);

        block_on(update.tick());
        let display = &update.display;
        assert_eq!(display.fills, 1);
        assert_eq!(display.rect_count, 2);
        assert_eq!(display.rects[0], (0, 0, 64, 128, false));
        assert_eq!(display.rects[1], (28, 60, 8, 8, true));
    }

    #[test]
    fn test_pending_frame_is_emitted_once() {
        let model = CursorGridModel::new();
        let axes = SharedAxes::new();
        let mut update = make(&model, &axes, 2048, 2048);

        model.toggle();
        let report = block_on(update.tick());
        assert!(report.frame_emitted);
        assert_eq!(update.leds.frames, 1);
        assert!(update.indicator.high);
        assert!(update.tone.is_sounding());
        assert_eq!(update.tone.frequency_hz(), 880.0);

        let last = update.leds.last.unwrap();
        assert!(last[Cursor::CENTER.index()].g > 0.0);

        // Next tick silences the confirmation and emits nothing new
        let report = block_on(update.tick());
        assert!(!report.frame_emitted);
        assert_eq!(update.leds.frames, 1);
        assert!(!update.indicator.high);
        assert!(!update.tone.is_sounding());
    }

    #[test]
    fn test_one_frame_per_mutation() {
        let model = CursorGridModel::new();
        let axes = SharedAxes::new();
        let mut update = make(&model, &axes, 2048, 2048);

        model.toggle();
        model.toggle();
        model.move_cursor(0.0, -1.0);

        for _ in 0..5 {
            block_on(update.tick());
        }
        assert_eq!(update.leds.frames, 3);
        assert_eq!(model.pending(), 0);
    }

    #[test]
    fn test_display_fault_does_not_block_leds() {
        let model = CursorGridModel::new();
        let axes = SharedAxes::new();
        let mut update = make(&model, &axes, 2048, 2048);
        update.display.fail = true;

        model.toggle();
        let report = block_on(update.tick());
        assert_eq!(report.display, Err(DisplayError::Bus));
        assert!(report.frame_emitted);
        assert_eq!(report.leds, Ok(()));
        assert_eq!(update.leds.frames, 1);
    }
}
