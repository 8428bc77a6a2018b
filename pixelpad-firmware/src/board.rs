//! Board bring-up
//!
//! Claims the peripherals named by the pin map and wraps them in the
//! trait adapters. Nothing here talks to a bus yet; the async init
//! sequence runs in the main task.
//!
//! The peripheral singletons below are claimed by type, so they can only
//! follow `WIRED`. The assertions next to it fail the build if the two
//! drift apart, and `Board::new` rejects any pin map that names other pins.

use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C1, PIO0};
use embassy_rp::pio::{Common, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::Peripherals;

use pixelpad_core::config::{BoardPins, DisplayConfig, PinConfig, PinError};
use pixelpad_core::InitError;
use pixelpad_drivers::display::Ssd1306;
use pixelpad_hal_rp2040::{GpioOutput, JoystickAdc, PwmTone, Ws2812Grid};

use crate::Irqs;

/// I2C bus speed for the OLED
const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Pin map matching the `PIN_n` singletons claimed in `Board::new`
pub const WIRED: BoardPins = BoardPins::BITDOGLAB;

const _: () = {
    assert!(WIRED.button_a.pin == 5);
    assert!(WIRED.button_b.pin == 6);
    assert!(WIRED.joystick_x.pin == 27);
    assert!(WIRED.joystick_y.pin == 26);
    assert!(WIRED.buzzer.pin == 21);
    assert!(WIRED.led_matrix.pin == 7);
    assert!(WIRED.indicator.pin == 11);
    assert!(WIRED.display_sda.pin == 14);
    assert!(WIRED.display_scl.pin == 15);
};

pub type Display = Ssd1306<I2c<'static, I2C1, i2c::Async>>;
pub type Leds = Ws2812Grid<'static, PIO0, 0>;

/// Every peripheral the firmware uses, ready for async init
pub struct Board {
    pub display: Display,
    pub leds: Leds,
    pub joystick: JoystickAdc<'static>,
    pub x_channel: u8,
    pub y_channel: u8,
    pub buzzer: PwmTone<'static>,
    pub indicator: GpioOutput<'static>,
    pub button_a: Input<'static>,
    pub button_b: Input<'static>,
    /// Owns the PIO block the LED program is loaded into
    pub pio: Common<'static, PIO0>,
}

impl Board {
    pub fn new(p: Peripherals, pins: BoardPins, display: DisplayConfig) -> Result<Self, InitError> {
        pins.validate()?;
        pins.ensure_wired(&WIRED)?;
        let x_channel = pins
            .joystick_x_channel()
            .ok_or(PinError::NotAnalog(pins.joystick_x.pin))?;
        let y_channel = pins
            .joystick_y_channel()
            .ok_or(PinError::NotAnalog(pins.joystick_y.pin))?;

        // OLED on I2C1 (SDA GPIO14, SCL GPIO15)
        let mut i2c_config = i2c::Config::default();
        i2c_config.frequency = I2C_FREQUENCY_HZ;
        let i2c = I2c::new_async(p.I2C1, p.PIN_15, p.PIN_14, Irqs, i2c_config);
        let display = Ssd1306::new(i2c, &display)?;

        // LED matrix data on GPIO7
        let Pio { mut common, sm0, .. } = Pio::new(p.PIO0, Irqs);
        let program = PioWs2812Program::new(&mut common);
        let ws = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_7, &program);
        let leds = Ws2812Grid::new(ws);

        // Joystick X on GPIO27 (ADC1), Y on GPIO26 (ADC0)
        let adc = Adc::new(p.ADC, Irqs, adc::Config::default());
        let joystick = JoystickAdc::new(
            adc,
            [
                (x_channel, Channel::new_pin(p.PIN_27, Pull::None)),
                (y_channel, Channel::new_pin(p.PIN_26, Pull::None)),
            ],
        );

        // Buzzer on GPIO21 (PWM slice 2, channel B)
        let pwm = Pwm::new_output_b(p.PWM_SLICE2, p.PIN_21, PwmConfig::default());
        let buzzer = PwmTone::new(pwm);

        // Indicator LED on GPIO11
        let indicator = GpioOutput::new(Output::new(p.PIN_11, Level::Low), &pins.indicator);

        // Buttons on GPIO5 (A) and GPIO6 (B)
        let button_a = Input::new(p.PIN_5, pull(&pins.button_a));
        let button_b = Input::new(p.PIN_6, pull(&pins.button_b));

        Ok(Self {
            display,
            leds,
            joystick,
            x_channel,
            y_channel,
            buzzer,
            indicator,
            button_a,
            button_b,
            pio: common,
        })
    }
}

fn pull(config: &PinConfig) -> Pull {
    if config.pull_up {
        Pull::Up
    } else {
        Pull::None
    }
}
