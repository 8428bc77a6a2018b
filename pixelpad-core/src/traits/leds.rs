//! Addressable LED grid trait

use crate::grid::Frame;

/// Errors that can occur with the LED grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    /// Data line transfer failed
    Transfer,
}

/// 5×5 addressable RGB LED grid
#[allow(async_fn_in_trait)]
pub trait LedGrid {
    /// Prepare the data line and blank the grid
    async fn init(&mut self) -> Result<(), LedError>;

    /// Show a full frame
    async fn draw_frame(&mut self, frame: &Frame) -> Result<(), LedError>;
}
