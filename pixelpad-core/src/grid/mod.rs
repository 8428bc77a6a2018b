//! The 5×5 pixel editor state
//!
//! The grid and cursor are written only from the button edge context and
//! read from the periodic update loop. All shared fields are atomics so
//! neither side ever takes a lock.

pub mod frame;
pub mod model;

pub use frame::{Frame, Rgb};
pub use model::{Cursor, CursorGridModel, Direction};

/// Cells per side
pub const GRID_SIZE: usize = 5;

/// Total number of cells
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Toggle channel intensity of a cell the user switched on
pub const TOGGLE_INTENSITY: f32 = 0.1;

/// Marker channel intensity of the cell under the cursor
pub const MARKER_INTENSITY: f32 = 0.1;

/// Axis magnitude below which a move gesture is ignored
pub const DEADZONE: f32 = 0.1;
