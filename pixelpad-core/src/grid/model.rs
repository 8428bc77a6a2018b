//! Cursor/grid state machine
//!
//! # Memory ordering
//!
//! The RP2040 runs both contexts on one core and each field has a single
//! writer, so cell and cursor accesses use `Relaxed`. The pending counter
//! is incremented with `Release` after the cell writes and drained with
//! `Acquire`, so a frame rendered after a successful drain sees every cell
//! write that preceded the matching increment.

use portable_atomic::{AtomicU32, AtomicU8, Ordering};

use super::{Frame, Rgb, CELL_COUNT, DEADZONE, GRID_SIZE, MARKER_INTENSITY, TOGGLE_INTENSITY};

/// Cell flag: switched on by the user
const TOGGLED: u8 = 1 << 0;
/// Cell flag: cursor is on this cell
const MARKER: u8 = 1 << 1;

/// Largest valid coordinate
const MAX_COORD: u8 = (GRID_SIZE - 1) as u8;

/// Cursor position, both coordinates in `0..GRID_SIZE`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    pub x: u8,
    pub y: u8,
}

impl Cursor {
    /// Center of the grid
    pub const CENTER: Self = Self {
        x: MAX_COORD / 2,
        y: MAX_COORD / 2,
    };

    /// Row-major cell index
    pub fn index(&self) -> usize {
        self.y as usize * GRID_SIZE + self.x as usize
    }

    fn from_index(index: u8) -> Self {
        Self {
            x: index % GRID_SIZE as u8,
            y: index / GRID_SIZE as u8,
        }
    }

    /// Neighbour one step in `direction`, or `None` past the edge
    pub fn step(&self, direction: Direction) -> Option<Self> {
        let (x, y) = match direction {
            Direction::Left => (self.x.checked_sub(1)?, self.y),
            Direction::Right => (self.x + 1, self.y),
            Direction::Down => (self.x, self.y.checked_sub(1)?),
            Direction::Up => (self.x, self.y + 1),
        };
        if x > MAX_COORD || y > MAX_COORD {
            return None;
        }
        Some(Self { x, y })
    }
}

/// One-cell move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// x - 1
    Left,
    /// x + 1
    Right,
    /// y - 1
    Down,
    /// y + 1
    Up,
}

impl Direction {
    /// Pick the move direction from joystick axes
    ///
    /// The axis with the larger magnitude wins; X must be strictly larger,
    /// so ties go to Y. Returns `None` when the winning axis is inside the
    /// deadzone.
    pub fn from_axes(x_axis: f32, y_axis: f32) -> Option<Self> {
        let (mx, my) = (magnitude(x_axis), magnitude(y_axis));
        if mx > my {
            if mx < DEADZONE {
                return None;
            }
            Some(if x_axis < 0.0 {
                Direction::Left
            } else {
                Direction::Right
            })
        } else {
            if my < DEADZONE {
                return None;
            }
            Some(if y_axis < 0.0 {
                Direction::Down
            } else {
                Direction::Up
            })
        }
    }
}

fn magnitude(v: f32) -> f32 {
    if v < 0.0 {
        -v
    } else {
        v
    }
}

/// Editable grid, cursor and pending-frame counter
///
/// Mutations (`toggle`, `move_cursor`) run in the button edge context.
/// `drain_pending` and `snapshot` run in the update loop.
pub struct CursorGridModel {
    cells: [AtomicU8; CELL_COUNT],
    /// Row-major index of the cursor cell
    cursor: AtomicU8,
    /// Mutations not yet propagated to the LED grid
    pending: AtomicU32,
}

impl Default for CursorGridModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorGridModel {
    /// Empty grid with the cursor (and its marker) at the center
    pub fn new() -> Self {
        let center = Cursor::CENTER.index();
        Self {
            cells: core::array::from_fn(|i| AtomicU8::new(if i == center { MARKER } else { 0 })),
            cursor: AtomicU8::new(center as u8),
            pending: AtomicU32::new(0),
        }
    }

    /// Current cursor position
    pub fn cursor(&self) -> Cursor {
        Cursor::from_index(self.cursor.load(Ordering::Relaxed))
    }

    /// Flip the toggle channel of the cell under the cursor
    ///
    /// Always counts as a change. Returns the toggled cell.
    pub fn toggle(&self) -> Cursor {
        let cursor = self.cursor();
        self.cells[cursor.index()].fetch_xor(TOGGLED, Ordering::Relaxed);
        self.pending.fetch_add(1, Ordering::Release);
        cursor
    }

    /// Move the cursor one cell along the dominant axis
    ///
    /// Returns the new position, or `None` if the gesture was inside the
    /// deadzone or would leave the grid. Only an actual move counts as a
    /// change.
    pub fn move_cursor(&self, x_axis: f32, y_axis: f32) -> Option<Cursor> {
        let direction = Direction::from_axes(x_axis, y_axis)?;
        let old = self.cursor();
        let new = old.step(direction)?;

        self.cells[old.index()].fetch_and(!MARKER, Ordering::Relaxed);
        self.cells[new.index()].fetch_or(MARKER, Ordering::Relaxed);
        self.cursor.store(new.index() as u8, Ordering::Relaxed);
        self.pending.fetch_add(1, Ordering::Release);
        Some(new)
    }

    /// Take one pending frame, if any
    ///
    /// Returns `true` when the caller should push a frame to the LEDs.
    pub fn drain_pending(&self) -> bool {
        self.pending
            .fetch_update(Ordering::Acquire, Ordering::Relaxed, |n| n.checked_sub(1))
            .is_ok()
    }

    /// Number of mutations not yet drained
    pub fn pending(&self) -> u32 {
        self.pending.load(Ordering::Relaxed)
    }

    /// Whether the user switched the cell at (x, y) on
    pub fn is_toggled(&self, x: u8, y: u8) -> bool {
        self.flags(x, y) & TOGGLED != 0
    }

    /// Whether the cell at (x, y) carries the cursor marker
    pub fn has_marker(&self, x: u8, y: u8) -> bool {
        self.flags(x, y) & MARKER != 0
    }

    fn flags(&self, x: u8, y: u8) -> u8 {
        self.cells[Cursor { x, y }.index()].load(Ordering::Relaxed)
    }

    /// Render the grid into per-cell intensities
    ///
    /// Toggled cells light the green channel, the cursor cell lights blue.
    pub fn snapshot(&self) -> Frame {
        let mut frame = [Rgb::OFF; CELL_COUNT];
        for (cell, out) in self.cells.iter().zip(frame.iter_mut()) {
            let flags = cell.load(Ordering::Relaxed);
            if flags & TOGGLED != 0 {
                out.g = TOGGLE_INTENSITY;
            }
            if flags & MARKER != 0 {
                out.b = MARKER_INTENSITY;
            }
        }
        frame
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Toggle,
        Move(f32, f32),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Toggle),
            (-1.0f32..=1.0, -1.0f32..=1.0).prop_map(|(x, y)| Op::Move(x, y)),
        ]
    }

    proptest! {
        #[test]
        fn cursor_stays_on_grid_with_one_marker(ops in prop::collection::vec(op(), 0..64)) {
            let model = CursorGridModel::new();
            let mut changes = 0u32;
            for op in ops {
                match op {
                    Op::Toggle => {
                        model.toggle();
                        changes += 1;
                    }
                    Op::Move(x, y) => {
                        if model.move_cursor(x, y).is_some() {
                            changes += 1;
                        }
                    }
                }
                let cursor = model.cursor();
                prop_assert!((cursor.x as usize) < GRID_SIZE);
                prop_assert!((cursor.y as usize) < GRID_SIZE);
                prop_assert!(model.has_marker(cursor.x, cursor.y));
                prop_assert_eq!(model.snapshot().iter().filter(|c| c.b != 0.0).count(), 1);
            }
            prop_assert_eq!(model.pending(), changes);

            let mut drained = 0;
            while model.drain_pending() {
                drained += 1;
            }
            prop_assert_eq!(drained, changes);
        }

        #[test]
        fn move_changes_one_coordinate_by_one(x in -1.0f32..=1.0, y in -1.0f32..=1.0) {
            let model = CursorGridModel::new();
            if let Some(new) = model.move_cursor(x, y) {
                let dx = (new.x as i8 - 2).abs();
                let dy = (new.y as i8 - 2).abs();
                prop_assert_eq!(dx + dy, 1);
            } else {
                prop_assert!(magnitude(x) < DEADZONE && magnitude(y) < DEADZONE);
            }
        }
    }
}
