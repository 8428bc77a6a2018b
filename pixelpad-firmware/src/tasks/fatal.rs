//! Fatal startup failure
//!
//! Normal operation never starts. The reason is repeated on the log
//! forever so a probe attached late still sees it.

use defmt::*;
use embassy_time::{Duration, Ticker};
use pixelpad_core::config::TimingConfig;
use pixelpad_core::InitError;

/// Announce `error` every few seconds, forever
pub async fn halt(error: InitError) -> ! {
    let timing = TimingConfig::default();
    let mut ticker = Ticker::every(Duration::from_millis(timing.fatal_announce_ms as u64));
    loop {
        error!("FATAL: {} ({})", error.reason(), error);
        ticker.next().await;
    }
}

/// Task wrapper for failures detected before the main task starts
#[embassy_executor::task]
pub async fn fatal_task(error: InitError) {
    halt(error).await
}
