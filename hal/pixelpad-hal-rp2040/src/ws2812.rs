//! WS2812 LED grid on a PIO state machine

use embassy_rp::pio::Instance;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use pixelpad_core::grid::Frame;
use pixelpad_core::traits::{LedError, LedGrid};
use pixelpad_drivers::leds::{encode_frame, MATRIX_LEN};
use smart_leds::RGB8;

/// The 5×5 matrix driven by one PIO state machine
pub struct Ws2812Grid<'d, P: Instance, const S: usize> {
    ws: PioWs2812<'d, P, S, MATRIX_LEN>,
}

impl<'d, P: Instance, const S: usize> Ws2812Grid<'d, P, S> {
    pub fn new(ws: PioWs2812<'d, P, S, MATRIX_LEN>) -> Self {
        Self { ws }
    }
}

impl<P: Instance, const S: usize> LedGrid for Ws2812Grid<'_, P, S> {
    async fn init(&mut self) -> Result<(), LedError> {
        self.ws.write(&[RGB8::default(); MATRIX_LEN]).await;
        Ok(())
    }

    async fn draw_frame(&mut self, frame: &Frame) -> Result<(), LedError> {
        // DMA transfer has no failure path
        self.ws.write(&encode_frame(frame)).await;
        Ok(())
    }
}
