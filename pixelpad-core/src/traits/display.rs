//! Monochrome pixel display trait

/// Errors that can occur with the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer failed (NACK, arbitration loss, timeout)
    Bus,
    /// Drawing before a successful `init`
    NotInitialized,
    /// Configured size does not match the panel controller
    UnsupportedGeometry,
}

/// Framebuffered monochrome display
///
/// Drawing calls only touch the local framebuffer; `flush` sends it over
/// the bus.
#[allow(async_fn_in_trait)]
pub trait PixelDisplay {
    /// Send the controller's power-up sequence
    async fn init(&mut self) -> Result<(), DisplayError>;

    /// Display size in pixels as (width, height)
    fn dimensions(&self) -> (u8, u8);

    /// Set every pixel
    fn fill(&mut self, on: bool);

    /// Draw a rectangle, clipped to the screen
    ///
    /// - `top`, `left`: upper-left corner
    /// - `filled`: fill the interior, otherwise draw the outline only
    fn draw_rect(&mut self, top: u8, left: u8, height: u8, width: u8, on: bool, filled: bool);

    /// Send the framebuffer to the panel
    async fn flush(&mut self) -> Result<(), DisplayError>;
}
