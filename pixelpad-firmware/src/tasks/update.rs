//! Startup and the fixed-rate update loop
//!
//! Startup order:
//! 1. Display and LED grid init (any failure is fatal)
//! 2. Boot chirp
//! 3. Edge handler spawned on the interrupt executor
//! 4. Update loop, one tick per ticker period

use defmt::*;
use embassy_executor::SendSpawner;
use embassy_time::{Delay, Duration, Ticker};
use static_cell::StaticCell;

use pixelpad_core::config::{TimingConfig, ToneConfig};
use pixelpad_core::grid::CursorGridModel;
use pixelpad_core::input::{AxisReader, DebounceGate, InputDispatcher, SharedAxes};
use pixelpad_core::output::ToneGenerator;
use pixelpad_core::traits::{LedGrid, PixelDisplay};
use pixelpad_core::{InitError, UpdateLoop};

use super::{buttons_task, fatal::halt};
use crate::board::{Board, Display, Leds};

/// Grid state shared with the edge handler
static MODEL: StaticCell<CursorGridModel> = StaticCell::new();

/// Last joystick sample, published by the update loop
static AXES: SharedAxes = SharedAxes::new();

async fn init_outputs(display: &mut Display, leds: &mut Leds) -> Result<(), InitError> {
    display.init().await?;
    info!("Display initialized");

    leds.init().await?;
    info!("LED matrix initialized");

    Ok(())
}

#[embassy_executor::task]
pub async fn main_task(board: Board, high: SendSpawner) {
    let timing = TimingConfig::default();
    let tone_config = ToneConfig::default();

    let Board {
        mut display,
        mut leds,
        joystick,
        x_channel,
        y_channel,
        buzzer,
        indicator,
        button_a,
        button_b,
        pio: _pio,
    } = board;

    if let Err(e) = init_outputs(&mut display, &mut leds).await {
        halt(e).await;
    }

    let mut tone = ToneGenerator::new(buzzer, tone_config.divider);
    tone.play_blocking(
        tone_config.boot_chirp_hz,
        tone_config.boot_chirp_ms,
        &mut Delay,
    );

    let model: &'static CursorGridModel = MODEL.init(CursorGridModel::new());
    let dispatcher = InputDispatcher::new(DebounceGate::new(timing.debounce_us()), model, &AXES);
    high.spawn(buttons_task(button_a, button_b, dispatcher)).unwrap();

    let mut update = UpdateLoop::new(
        model,
        &AXES,
        AxisReader::new(joystick, x_channel, y_channel),
        display,
        leds,
        tone,
        indicator,
        tone_config.confirm_hz,
    );

    info!("Update loop started ({} Hz)", timing.update_rate_hz);
    let mut ticker = Ticker::every(Duration::from_micros(timing.update_period_us()));

    loop {
        ticker.next().await;

        let report = update.tick().await;
        if let Err(e) = report.display {
            warn!("Display flush failed: {}", e);
        }
        if let Err(e) = report.leds {
            warn!("LED frame failed: {}", e);
        }
        if report.frame_emitted {
            trace!("Frame emitted, cursor at ({}, {})", model.cursor().x, model.cursor().y);
        }
    }
}
