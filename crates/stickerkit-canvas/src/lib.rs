//! # StickerKit Canvas
//!
//! Transform and gesture engine for a surface of stickers.
//!
//! Stickers are placed with [`GestureController::add_sticker`], then moved,
//! scaled, rotated, flipped and deleted either through pointer events fed
//! to [`GestureController::on_pointer_event`] or through the corner icons of
//! the active sticker. Changes are reported to a
//! [`StickerOperationListener`].
//!
//! ```no_run
//! use stickerkit_canvas::{Anchor, BlankContent, EventLog, GestureController, PointerEvent, Sticker};
//! use stickerkit_settings::StickerViewConfig;
//!
//! let mut controller = GestureController::with_size(StickerViewConfig::editing(), 800.0, 600.0);
//! let log = EventLog::new();
//! controller.set_listener(log.clone());
//!
//! let id = controller.add_sticker(Sticker::new(BlankContent::new(200, 100)), Anchor::Center);
//! controller.on_pointer_event(&PointerEvent::down(400.0, 300.0, 0));
//! controller.on_pointer_event(&PointerEvent::move_to(450.0, 320.0, 16));
//! controller.on_pointer_event(&PointerEvent::up(450.0, 320.0, 32));
//! assert_eq!(controller.current_sticker_id(), Some(id));
//! ```

pub mod collection;
pub mod content;
pub mod controller;
pub mod event;
pub mod icon;
pub mod pointer;
pub mod renderer;
pub mod sticker;

pub use collection::StickerCollection;
pub use content::{BlankContent, ImageContent, TextAlignment, TextContent};
pub use controller::{
    fit_transform, ActionMode, Anchor, GestureBaseline, GestureController, SurfaceSize,
};
pub use event::{EventLog, StickerEvent, StickerOperationListener};
pub use icon::{
    DeleteIconEvent, FlipDirection, FlipIconEvent, IconEventHandler, IconGravity, IconHandle,
    ZoomIconEvent,
};
pub use pointer::{PointerAction, PointerEvent};
pub use renderer::StickerRenderer;
pub use sticker::{Sticker, StickerContent, StickerId};
