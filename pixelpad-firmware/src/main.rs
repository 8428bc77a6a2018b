//! PixelPad - 5×5 pixel editor firmware
//!
//! Main firmware binary for the RP2040 BitDogLab board. The joystick
//! picks a direction, button B moves the cursor, button A toggles the
//! cell under it; the LED matrix mirrors the grid and the OLED shows the
//! stick position.
//!
//! Two execution contexts share one core:
//!
//! - A high-priority interrupt executor (SWI_IRQ_1) runs the button edge
//!   handler, which only touches atomics
//! - The thread-mode executor runs startup and the 30 Hz update loop,
//!   which owns every bus

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::{Executor, InterruptExecutor};
use embassy_rp::adc::InterruptHandler as AdcInterruptHandler;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::InterruptHandler as I2cInterruptHandler;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::peripherals::{I2C1, PIO0};
use embassy_rp::pio::InterruptHandler as PioInterruptHandler;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use pixelpad_core::config::DisplayConfig;

mod board;
mod tasks;

use board::{Board, WIRED};

bind_interrupts!(pub struct Irqs {
    I2C1_IRQ => I2cInterruptHandler<I2C1>;
    ADC_IRQ_FIFO => AdcInterruptHandler;
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

/// Runs the button edge handler, preempting thread mode
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

/// Runs startup and the update loop
static EXECUTOR_LOW: StaticCell<Executor> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

#[entry]
fn main() -> ! {
    info!("PixelPad firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);

    let executor = EXECUTOR_LOW.init(Executor::new());
    executor.run(|spawner| {
        match Board::new(p, WIRED, DisplayConfig::default()) {
            Ok(board) => spawner.spawn(tasks::main_task(board, high)).unwrap(),
            Err(e) => spawner.spawn(tasks::fatal_task(e)).unwrap(),
        }
    })
}
