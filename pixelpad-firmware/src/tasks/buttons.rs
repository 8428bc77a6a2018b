//! Button edge handler
//!
//! Runs on the interrupt executor. Waits for a falling edge on either
//! button, timestamps it and hands it to the dispatcher. No bus I/O and no
//! blocking: the grid mutation is a handful of atomic operations.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Input;
use embassy_time::Instant;
use pixelpad_core::input::{Button, Dispatched, InputDispatcher};

#[embassy_executor::task]
pub async fn buttons_task(
    mut button_a: Input<'static>,
    mut button_b: Input<'static>,
    mut dispatcher: InputDispatcher<'static>,
) {
    info!("Button handler started");

    loop {
        let button = match select(
            button_a.wait_for_falling_edge(),
            button_b.wait_for_falling_edge(),
        )
        .await
        {
            Either::First(()) => Button::A,
            Either::Second(()) => Button::B,
        };

        let now_us = Instant::now().as_micros();
        match dispatcher.on_press(button, now_us) {
            Some(Dispatched::Toggled(cell)) => debug!("Toggle ({}, {})", cell.x, cell.y),
            Some(Dispatched::Moved(cell)) => debug!("Move to ({}, {})", cell.x, cell.y),
            Some(Dispatched::Held) => debug!("Move ignored"),
            None => trace!("Bounce on {}", button),
        }
    }
}
