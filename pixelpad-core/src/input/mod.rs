//! Joystick and button input
//!
//! - [`axis`]: raw ADC samples to signed axis values, plus the shared cell
//!   the update loop publishes them through
//! - [`debounce`]: per-button time gate
//! - [`dispatch`]: edge-context handler that turns accepted presses into
//!   grid commands

pub mod axis;
pub mod debounce;
pub mod dispatch;

pub use axis::{normalize, AxisReader, AxisSample, SharedAxes};
pub use debounce::DebounceGate;
pub use dispatch::{Dispatched, InputDispatcher};

/// Number of push-buttons
pub const BUTTON_COUNT: usize = 2;

/// Push-buttons on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Toggles the cell under the cursor
    A,
    /// Moves the cursor along the dominant joystick axis
    B,
}

impl Button {
    /// Slot of this button in per-button tables
    pub fn index(self) -> usize {
        match self {
            Button::A => 0,
            Button::B => 1,
        }
    }
}
