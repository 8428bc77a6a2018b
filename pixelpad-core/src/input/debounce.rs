//! Button debounce gate
//!
//! A mechanical button bounces for several milliseconds after it is
//! pressed, producing a burst of falling edges. The gate accepts the first
//! edge and rejects the rest until the threshold has elapsed.

use super::{Button, BUTTON_COUNT};

/// Per-button time gate
///
/// Owned by the edge-handling context; the update loop never touches it.
#[derive(Debug, Clone)]
pub struct DebounceGate {
    threshold_us: u64,
    /// Time of the last accepted edge of each button (µs)
    last_accepted_us: [u64; BUTTON_COUNT],
}

impl DebounceGate {
    /// Create a gate with the given threshold
    pub fn new(threshold_us: u64) -> Self {
        Self {
            threshold_us,
            last_accepted_us: [0; BUTTON_COUNT],
        }
    }

    /// Decide whether an edge of `button` at `now_us` is a new press
    ///
    /// Accepts iff more than the threshold has elapsed since the last
    /// accepted edge of the same button, and records `now_us` on accept.
    pub fn accept(&mut self, button: Button, now_us: u64) -> bool {
        let last = &mut self.last_accepted_us[button.index()];
        if now_us.saturating_sub(*last) > self.threshold_us {
            *last = now_us;
            true
        } else {
            false
        }
    }
}
