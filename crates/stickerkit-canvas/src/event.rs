//! Sticker operation notifications.
//!
//! The controller reports what happened to stickers through a
//! [`StickerOperationListener`]. [`StickerEvent`] names the same set of
//! notifications as data, which is what [`EventLog`] records.

use std::fmt;

use serde::{Deserialize, Serialize};
use stickerkit_core::{shared, SharedVec};

use crate::sticker::{Sticker, StickerId};

/// Notification fired by the controller, tagged with the sticker involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "sticker", rename_all = "snake_case")]
pub enum StickerEvent {
    Added(StickerId),
    Clicked(StickerId),
    Deleted(StickerId),
    DragFinished(StickerId),
    ZoomFinished(StickerId),
    Flipped(StickerId),
    DoubleTapped(StickerId),
}

impl StickerEvent {
    pub fn sticker_id(&self) -> StickerId {
        match *self {
            Self::Added(id)
            | Self::Clicked(id)
            | Self::Deleted(id)
            | Self::DragFinished(id)
            | Self::ZoomFinished(id)
            | Self::Flipped(id)
            | Self::DoubleTapped(id) => id,
        }
    }

    /// Calls the listener method matching this event.
    pub fn dispatch(&self, listener: &mut dyn StickerOperationListener, sticker: &Sticker) {
        match self {
            Self::Added(_) => listener.on_sticker_added(sticker),
            Self::Clicked(_) => listener.on_sticker_clicked(sticker),
            Self::Deleted(_) => listener.on_sticker_deleted(sticker),
            Self::DragFinished(_) => listener.on_sticker_drag_finished(sticker),
            Self::ZoomFinished(_) => listener.on_sticker_zoom_finished(sticker),
            Self::Flipped(_) => listener.on_sticker_flipped(sticker),
            Self::DoubleTapped(_) => listener.on_sticker_double_tapped(sticker),
        }
    }
}

impl fmt::Display for StickerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added(id) => write!(f, "Sticker {} added", id),
            Self::Clicked(id) => write!(f, "Sticker {} clicked", id),
            Self::Deleted(id) => write!(f, "Sticker {} deleted", id),
            Self::DragFinished(id) => write!(f, "Sticker {} drag finished", id),
            Self::ZoomFinished(id) => write!(f, "Sticker {} zoom finished", id),
            Self::Flipped(id) => write!(f, "Sticker {} flipped", id),
            Self::DoubleTapped(id) => write!(f, "Sticker {} double tapped", id),
        }
    }
}

/// Listener for sticker operations
///
/// Implement this trait to receive notifications from a
/// [`GestureController`](crate::GestureController). Notifications fire
/// synchronously, after the state change they describe.
pub trait StickerOperationListener {
    /// Called when a sticker is placed on the surface
    fn on_sticker_added(&mut self, _sticker: &Sticker) {}

    /// Called when a pointer lands on a sticker
    fn on_sticker_clicked(&mut self, _sticker: &Sticker) {}

    /// Called after a sticker has left the surface
    fn on_sticker_deleted(&mut self, _sticker: &Sticker) {}

    /// Called when a tap follows the previous one within the click delay
    fn on_sticker_drag_finished(&mut self, _sticker: &Sticker) {}

    /// Called when a two-finger or icon zoom ends
    fn on_sticker_zoom_finished(&mut self, _sticker: &Sticker) {}

    /// Called after a sticker is flipped
    fn on_sticker_flipped(&mut self, _sticker: &Sticker) {}

    /// Called when the host reports a double tap
    fn on_sticker_double_tapped(&mut self, _sticker: &Sticker) {}
}

/// Listener that records every notification in order.
///
/// Clones share the same log, so one clone can be handed to the controller
/// while another is kept for inspection.
#[derive(Debug, Clone)]
pub struct EventLog {
    events: SharedVec<StickerEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            events: shared(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<StickerEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Number of recorded events matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&StickerEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| predicate(e)).count()
    }

    fn record(&self, event: StickerEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl StickerOperationListener for EventLog {
    fn on_sticker_added(&mut self, sticker: &Sticker) {
        self.record(StickerEvent::Added(sticker.id()));
    }

    fn on_sticker_clicked(&mut self, sticker: &Sticker) {
        self.record(StickerEvent::Clicked(sticker.id()));
    }

    fn on_sticker_deleted(&mut self, sticker: &Sticker) {
        self.record(StickerEvent::Deleted(sticker.id()));
    }

    fn on_sticker_drag_finished(&mut self, sticker: &Sticker) {
        self.record(StickerEvent::DragFinished(sticker.id()));
    }

    fn on_sticker_zoom_finished(&mut self, sticker: &Sticker) {
        self.record(StickerEvent::ZoomFinished(sticker.id()));
    }

    fn on_sticker_flipped(&mut self, sticker: &Sticker) {
        self.record(StickerEvent::Flipped(sticker.id()));
    }

    fn on_sticker_double_tapped(&mut self, sticker: &Sticker) {
        self.record(StickerEvent::DoubleTapped(sticker.id()));
    }
}
