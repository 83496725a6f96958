//! Pointer input model.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use stickerkit_core::Point;

/// Kind of pointer change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerAction {
    /// First pointer touches the surface
    Down,
    /// A second pointer joins
    PointerDown,
    Move,
    /// A pointer lifts while another remains
    PointerUp,
    /// Last pointer lifts
    Up,
    /// Tracking was lost
    Cancel,
}

/// One pointer sample. `pointers[0]` is the primary pointer, `pointers[1]`
/// the secondary one when two are down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub pointers: SmallVec<[Point; 2]>,
    /// Event time in milliseconds
    pub time_ms: u64,
}

impl PointerEvent {
    pub fn new(action: PointerAction, pointers: &[Point], time_ms: u64) -> Self {
        Self {
            action,
            pointers: SmallVec::from_slice(pointers),
            time_ms,
        }
    }

    pub fn down(x: f64, y: f64, time_ms: u64) -> Self {
        Self::single(PointerAction::Down, x, y, time_ms)
    }

    pub fn move_to(x: f64, y: f64, time_ms: u64) -> Self {
        Self::single(PointerAction::Move, x, y, time_ms)
    }

    pub fn up(x: f64, y: f64, time_ms: u64) -> Self {
        Self::single(PointerAction::Up, x, y, time_ms)
    }

    pub fn pointer_down(first: Point, second: Point, time_ms: u64) -> Self {
        Self::pair(PointerAction::PointerDown, first, second, time_ms)
    }

    pub fn two_finger_move(first: Point, second: Point, time_ms: u64) -> Self {
        Self::pair(PointerAction::Move, first, second, time_ms)
    }

    pub fn pointer_up(first: Point, second: Point, time_ms: u64) -> Self {
        Self::pair(PointerAction::PointerUp, first, second, time_ms)
    }

    pub fn cancel(time_ms: u64) -> Self {
        Self {
            action: PointerAction::Cancel,
            pointers: SmallVec::new(),
            time_ms,
        }
    }

    fn single(action: PointerAction, x: f64, y: f64, time_ms: u64) -> Self {
        Self {
            action,
            pointers: smallvec![Point::new(x, y)],
            time_ms,
        }
    }

    fn pair(action: PointerAction, first: Point, second: Point, time_ms: u64) -> Self {
        Self {
            action,
            pointers: smallvec![first, second],
            time_ms,
        }
    }

    /// Primary pointer, or the origin for an event without pointers.
    pub fn primary(&self) -> Point {
        self.pointers.first().copied().unwrap_or_default()
    }

    pub fn pointer(&self, index: usize) -> Option<Point> {
        self.pointers.get(index).copied()
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }
}
