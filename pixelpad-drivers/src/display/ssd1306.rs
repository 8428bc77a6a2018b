//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via I2C.
//!
//! Drawing happens in a local page-organized framebuffer (one byte covers
//! eight vertical pixels). `flush` streams the whole buffer using
//! horizontal addressing mode, one I2C transfer per page.

use embedded_hal_async::i2c::I2c;
use pixelpad_core::config::DisplayConfig;
use pixelpad_core::traits::{DisplayError, PixelDisplay};

/// Display dimensions
const WIDTH: usize = 128;
const HEIGHT: usize = 64;
const PAGES: usize = HEIGHT / 8;

/// Control byte prefixes
const CONTROL_CMD: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const RESUME_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Power-up sequence, sent once as a single command transfer
const INIT_SEQUENCE: &[u8] = &[
    CONTROL_CMD,
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80,
    cmd::SET_MUX_RATIO,
    (HEIGHT - 1) as u8,
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::SET_CHARGE_PUMP,
    0x14,
    cmd::SET_MEMORY_MODE,
    0x00, // Horizontal addressing
    cmd::SET_SEG_REMAP,
    cmd::SET_COM_SCAN_DEC,
    cmd::SET_COM_PINS,
    0x12,
    cmd::SET_CONTRAST,
    0xCF,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::RESUME_RAM,
    cmd::SET_NORMAL,
    cmd::DISPLAY_ON,
];

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    initialized: bool,
    /// Frame buffer (1 bit per pixel, organized as pages)
    buffer: [[u8; WIDTH]; PAGES],
}

impl<I2C: I2c> Ssd1306<I2C> {
    /// Create a new driver for the panel described by `config`
    ///
    /// Only the 128x64 layout is supported; any other size is rejected
    /// before the bus is touched.
    pub fn new(i2c: I2C, config: &DisplayConfig) -> Result<Self, DisplayError> {
        if config.width as usize != WIDTH || config.height as usize != HEIGHT {
            return Err(DisplayError::UnsupportedGeometry);
        }
        Ok(Self {
            i2c,
            address: config.address,
            initialized: false,
            buffer: [[0; WIDTH]; PAGES],
        })
    }

    /// Whether the pixel at (x, y) is lit in the framebuffer
    pub fn pixel(&self, x: u8, y: u8) -> bool {
        let (x, y) = (x as usize, y as usize);
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.buffer[y / 8][x] & (1 << (y % 8)) != 0
    }

    fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let mask = 1 << (y % 8);
        if on {
            self.buffer[y / 8][x] |= mask;
        } else {
            self.buffer[y / 8][x] &= !mask;
        }
    }

    async fn write(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, bytes)
            .await
            .map_err(|_| DisplayError::Bus)
    }
}

impl<I2C: I2c> PixelDisplay for Ssd1306<I2C> {
    async fn init(&mut self) -> Result<(), DisplayError> {
        self.write(INIT_SEQUENCE).await?;
        self.initialized = true;
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (WIDTH as u8, HEIGHT as u8)
    }

    fn fill(&mut self, on: bool) {
        let value = if on { 0xFF } else { 0x00 };
        for page in self.buffer.iter_mut() {
            page.fill(value);
        }
    }

    fn draw_rect(&mut self, top: u8, left: u8, height: u8, width: u8, on: bool, filled: bool) {
        if height == 0 || width == 0 {
            return;
        }

        let (top, left) = (top as usize, left as usize);
        let bottom = top + height as usize - 1;
        let right = left + width as usize - 1;
        let x_end = right.min(WIDTH - 1);
        let y_end = bottom.min(HEIGHT - 1);

        if filled {
            for y in top..=y_end {
                for x in left..=x_end {
                    self.set_pixel(x, y, on);
                }
            }
            return;
        }

        for x in left..=x_end {
            self.set_pixel(x, top, on);
            self.set_pixel(x, bottom, on);
        }
        for y in top..=y_end {
            self.set_pixel(left, y, on);
            self.set_pixel(right, y, on);
        }
    }

    async fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }

        self.write(&[
            CONTROL_CMD,
            cmd::SET_COLUMN_ADDR,
            0,
            (WIDTH - 1) as u8,
            cmd::SET_PAGE_ADDR,
            0,
            (PAGES - 1) as u8,
        ])
        .await?;

        for page in 0..PAGES {
            let mut data = [0u8; WIDTH + 1];
            data[0] = CONTROL_DATA;
            data[1..].copy_from_slice(&self.buffer[page]);
            self.write(&data).await?;
        }

        Ok(())
    }
}
