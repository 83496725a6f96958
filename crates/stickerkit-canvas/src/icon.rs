//! Corner icons attached to the active sticker.
//!
//! An [`IconHandle`] sits on one corner of the active sticker's mapped quad
//! and forwards the pointer events it captures to an [`IconEventHandler`].
//! The handlers act on the controller, never on a sticker directly, so an
//! icon holds no reference to what it decorates.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use stickerkit_core::{AffineTransform2D, Point};
use tracing::debug;

use crate::controller::GestureController;
use crate::event::StickerEvent;
use crate::pointer::PointerEvent;

/// Corner of the sticker quad an icon is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconGravity {
    LeftTop,
    RightTop,
    LeftBottom,
    RightBottom,
}

impl IconGravity {
    /// Index into [`Sticker::bound_points`](crate::Sticker::bound_points).
    pub fn corner_index(self) -> usize {
        match self {
            Self::LeftTop => 0,
            Self::RightTop => 1,
            Self::LeftBottom => 2,
            Self::RightBottom => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlipDirection {
    Horizontal,
    Vertical,
    Both,
}

impl FlipDirection {
    pub fn flips_horizontally(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }

    pub fn flips_vertically(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }
}

impl fmt::Display for FlipDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
            Self::Both => write!(f, "both"),
        }
    }
}

/// Behavior behind an icon. Every method defaults to doing nothing.
pub trait IconEventHandler: fmt::Debug {
    fn on_pointer_down(&self, _controller: &mut GestureController, _event: &PointerEvent) {}

    fn on_pointer_move(&self, _controller: &mut GestureController, _event: &PointerEvent) {}

    fn on_pointer_up(&self, _controller: &mut GestureController, _event: &PointerEvent) {}
}

/// Removes the active sticker when the pointer is lifted.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteIconEvent;

impl IconEventHandler for DeleteIconEvent {
    fn on_pointer_up(&self, controller: &mut GestureController, _event: &PointerEvent) {
        controller.remove_current_sticker();
    }
}

/// Scales and rotates the active sticker about its center while the pointer
/// moves; reports the finished zoom on release.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoomIconEvent;

impl IconEventHandler for ZoomIconEvent {
    fn on_pointer_move(&self, controller: &mut GestureController, event: &PointerEvent) {
        controller.zoom_and_rotate_current(event);
    }

    fn on_pointer_up(&self, controller: &mut GestureController, _event: &PointerEvent) {
        if let Some(id) = controller.current_sticker_id() {
            controller.notify(StickerEvent::ZoomFinished(id));
        }
    }
}

/// Flips the active sticker when the pointer is lifted.
#[derive(Debug, Clone, Copy)]
pub struct FlipIconEvent {
    direction: FlipDirection,
}

impl FlipIconEvent {
    pub fn new(direction: FlipDirection) -> Self {
        Self { direction }
    }

    pub fn direction(&self) -> FlipDirection {
        self.direction
    }
}

impl IconEventHandler for FlipIconEvent {
    fn on_pointer_up(&self, controller: &mut GestureController, _event: &PointerEvent) {
        controller.flip_current(self.direction);
    }
}

/// A corner affordance of the active sticker.
#[derive(Debug, Clone)]
pub struct IconHandle {
    gravity: IconGravity,
    hit_radius: f64,
    visual_radius: f64,
    width: f64,
    height: f64,
    x: f64,
    y: f64,
    transform: AffineTransform2D,
    handler: Option<Rc<dyn IconEventHandler>>,
}

impl IconHandle {
    /// Icon with no handler; the image is a square of twice the radius.
    pub fn new(gravity: IconGravity, radius: f64) -> Self {
        Self {
            gravity,
            hit_radius: radius,
            visual_radius: radius,
            width: radius * 2.0,
            height: radius * 2.0,
            x: 0.0,
            y: 0.0,
            transform: AffineTransform2D::identity(),
            handler: None,
        }
    }

    pub fn with_handler(mut self, handler: impl IconEventHandler + 'static) -> Self {
        self.handler = Some(Rc::new(handler));
        self
    }

    pub fn with_image_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Delete at the top-left corner, zoom at the bottom-right and a
    /// horizontal flip at the top-right.
    pub fn default_icons(radius: f64) -> Vec<IconHandle> {
        vec![
            IconHandle::new(IconGravity::LeftTop, radius).with_handler(DeleteIconEvent),
            IconHandle::new(IconGravity::RightBottom, radius).with_handler(ZoomIconEvent),
            IconHandle::new(IconGravity::RightTop, radius)
                .with_handler(FlipIconEvent::new(FlipDirection::Horizontal)),
        ]
    }

    pub fn gravity(&self) -> IconGravity {
        self.gravity
    }

    pub fn hit_radius(&self) -> f64 {
        self.hit_radius
    }

    pub fn set_hit_radius(&mut self, radius: f64) {
        self.hit_radius = radius;
    }

    pub fn visual_radius(&self) -> f64 {
        self.visual_radius
    }

    pub fn set_visual_radius(&mut self, radius: f64) {
        self.visual_radius = radius;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Center of the icon in screen space, as of the last layout pass.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn transform(&self) -> &AffineTransform2D {
        &self.transform
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// True when `(px, py)` is within twice the hit radius of the icon center.
    pub fn hit_test(&self, px: f64, py: f64) -> bool {
        self.hit_test_at(Point::new(self.x, self.y), px, py)
    }

    /// Hit test as if the icon were centered on `center`.
    pub fn hit_test_at(&self, center: Point, px: f64, py: f64) -> bool {
        let dx = px - center.x;
        let dy = py - center.y;
        let reach = 2.0 * self.hit_radius;
        dx * dx + dy * dy <= reach * reach
    }

    /// Centers the icon on `corner`, turned by `rotation` degrees about its
    /// own center.
    pub fn place(&mut self, corner: Point, rotation: f64) {
        self.x = corner.x;
        self.y = corner.y;
        self.transform.reset();
        self.transform
            .post_rotate(rotation, self.width / 2.0, self.height / 2.0);
        self.transform
            .post_translate(corner.x - self.width / 2.0, corner.y - self.height / 2.0);
    }

    pub fn on_pointer_down(&self, controller: &mut GestureController, event: &PointerEvent) {
        if let Some(handler) = &self.handler {
            handler.on_pointer_down(controller, event);
        }
    }

    pub fn on_pointer_move(&self, controller: &mut GestureController, event: &PointerEvent) {
        if let Some(handler) = &self.handler {
            handler.on_pointer_move(controller, event);
        }
    }

    pub fn on_pointer_up(&self, controller: &mut GestureController, event: &PointerEvent) {
        match &self.handler {
            Some(handler) => handler.on_pointer_up(controller, event),
            None => debug!("Icon at {:?} has no handler", self.gravity),
        }
    }
}
