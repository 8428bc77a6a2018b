//! Edge-context input dispatcher
//!
//! Runs in the high-priority edge handler. Everything here is
//! non-blocking: a debounce check, a few atomic loads and stores.

use super::{Button, DebounceGate, SharedAxes};
use crate::grid::{Cursor, CursorGridModel};

/// Effect of an accepted press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatched {
    /// The cell under the cursor was toggled
    Toggled(Cursor),
    /// The cursor moved to a new cell
    Moved(Cursor),
    /// Move requested but the joystick was centered or pushing off the grid
    Held,
}

/// Applies debounced button presses to the grid model
pub struct InputDispatcher<'a> {
    gate: DebounceGate,
    model: &'a CursorGridModel,
    axes: &'a SharedAxes,
}

impl<'a> InputDispatcher<'a> {
    /// Create a dispatcher over the shared model and axes
    pub fn new(gate: DebounceGate, model: &'a CursorGridModel, axes: &'a SharedAxes) -> Self {
        Self { gate, model, axes }
    }

    /// Handle a falling edge of `button` at `now_us`
    ///
    /// Returns `None` when the edge was rejected as bounce.
    pub fn on_press(&mut self, button: Button, now_us: u64) -> Option<Dispatched> {
        if !self.gate.accept(button, now_us) {
            return None;
        }

        let dispatched = match button {
            Button::A => Dispatched::Toggled(self.model.toggle()),
            Button::B => {
                let axes = self.axes.load();
                match self.model.move_cursor(axes.x, axes.y) {
                    Some(cursor) => Dispatched::Moved(cursor),
                    None => Dispatched::Held,
                }
            }
        };
        Some(dispatched)
    }
}
