//! Pointer handling: the action-mode state machine.

use stickerkit_core::{calculate_distance, calculate_midpoint, calculate_rotation, Point};
use tracing::{debug, trace};

use super::{ActionMode, GestureBaseline, GestureController};
use crate::event::StickerEvent;
use crate::pointer::{PointerAction, PointerEvent};
use crate::sticker::StickerId;

impl GestureController {
    /// Feeds one pointer event through the state machine.
    ///
    /// Returns whether the controller claims the gesture. A locked
    /// controller claims nothing, and a gesture whose down landed on
    /// neither an icon nor a sticker stays unclaimed until the next down.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if self.config.locked {
            return false;
        }

        match event.action {
            PointerAction::Down => self.on_down(event),
            PointerAction::PointerDown => {
                if self.claimed {
                    self.on_second_pointer_down(event);
                }
                self.claimed
            }
            PointerAction::Move => {
                if self.claimed {
                    self.on_move(event);
                }
                self.claimed
            }
            PointerAction::PointerUp => {
                if self.claimed {
                    self.on_second_pointer_up();
                }
                self.claimed
            }
            PointerAction::Up => {
                let claimed = self.claimed;
                if claimed {
                    self.on_up(event);
                }
                self.claimed = false;
                claimed
            }
            PointerAction::Cancel => {
                let claimed = self.claimed;
                self.reset();
                claimed
            }
        }
    }

    /// Whether a down at `point` would start a gesture, without changing
    /// any state.
    pub fn would_claim(&self, point: Point) -> bool {
        if self.config.locked {
            return false;
        }
        self.icon_at(point).is_some() || self.stickers.topmost_at(point).is_some()
    }

    /// Drops the transient gesture state. The active sticker stays active.
    pub fn reset(&mut self) {
        self.mode = ActionMode::None;
        self.active_icon = None;
        self.baseline = GestureBaseline::default();
        self.claimed = false;
    }

    /// Hit-tests the icons against the current quad of the active sticker,
    /// not against the positions of the last layout.
    fn icon_at(&self, point: Point) -> Option<usize> {
        if !self.config.show_icons {
            return None;
        }
        let quad = self.current_sticker()?.mapped_bound_points();
        self.icons.iter().position(|icon| {
            let corner = quad[icon.gravity().corner_index()];
            icon.hit_test_at(corner, point.x, point.y)
        })
    }

    fn on_down(&mut self, event: &PointerEvent) -> bool {
        self.layout();
        let down = event.primary();

        let midpoint = self.active_center();
        let mut baseline = GestureBaseline {
            transform: self
                .current_sticker()
                .map(|s| *s.transform())
                .unwrap_or_default(),
            down,
            midpoint,
            distance: calculate_distance(midpoint, down),
            rotation: calculate_rotation(midpoint, down),
        };

        if let Some(index) = self.icon_at(down) {
            self.baseline = baseline;
            self.active_icon = Some(index);
            self.mode = ActionMode::Icon;
            self.claimed = true;
            trace!("Icon {} engaged at ({:.1}, {:.1})", index, down.x, down.y);

            let icon = self.icons[index].clone();
            icon.on_pointer_down(self, event);
            return true;
        }

        let Some(id) = self.stickers.topmost_at(down) else {
            trace!("Down at ({:.1}, {:.1}) hit nothing", down.x, down.y);
            self.claimed = false;
            return false;
        };

        if let Some(sticker) = self.stickers.get(id) {
            baseline.transform = *sticker.transform();
            baseline.midpoint = sticker.mapped_center_point();
            baseline.distance = calculate_distance(baseline.midpoint, down);
            baseline.rotation = calculate_rotation(baseline.midpoint, down);
        }
        self.baseline = baseline;
        self.active = Some(id);
        self.active_icon = None;
        self.mode = ActionMode::Drag;
        self.claimed = true;

        if self.config.bring_to_front_on_touch {
            self.stickers.bring_to_front(id);
        }
        self.notify(StickerEvent::Clicked(id));
        true
    }

    fn on_second_pointer_down(&mut self, event: &PointerEvent) {
        let (Some(first), Some(second)) = (event.pointer(0), event.pointer(1)) else {
            return;
        };
        if self.mode == ActionMode::Icon {
            return;
        }
        let Some(sticker) = self.current_sticker() else {
            return;
        };
        if !sticker.contains(second) {
            return;
        }

        let distance = calculate_distance(first, second);
        if distance <= 0.0 {
            debug!("Second pointer on top of the first, staying in drag");
            return;
        }

        self.baseline = GestureBaseline {
            transform: *sticker.transform(),
            down: first,
            midpoint: calculate_midpoint(first, second),
            distance,
            rotation: calculate_rotation(first, second),
        };
        self.mode = ActionMode::ZoomWithTwoFinger;
        trace!("Two-finger zoom from distance {:.1}", distance);
    }

    fn on_move(&mut self, event: &PointerEvent) {
        match self.mode {
            ActionMode::Drag => self.drag_current(event.primary()),
            ActionMode::ZoomWithTwoFinger => self.zoom_two_finger(event),
            ActionMode::Icon => {
                if let Some(icon) = self.current_icon().cloned() {
                    icon.on_pointer_move(self, event);
                }
            }
            ActionMode::None | ActionMode::Click => {}
        }
    }

    fn on_second_pointer_up(&mut self) {
        if self.mode == ActionMode::ZoomWithTwoFinger {
            if let Some(id) = self.active {
                self.notify(StickerEvent::ZoomFinished(id));
            }
        }
        self.mode = ActionMode::None;
    }

    fn on_up(&mut self, event: &PointerEvent) {
        let now = event.time_ms;
        let up = event.primary();

        match self.mode {
            ActionMode::Icon => {
                if self.active.is_some() {
                    if let Some(icon) = self.current_icon().cloned() {
                        icon.on_pointer_up(self, event);
                    }
                }
            }
            ActionMode::Drag => {
                let slop = self.config.touch_slop;
                let within_slop = (up.x - self.baseline.down.x).abs() < slop
                    && (up.y - self.baseline.down.y).abs() < slop;
                if within_slop {
                    if let Some(id) = self.active {
                        self.mode = ActionMode::Click;
                        let repeated = self.last_click_ms.is_some_and(|last| {
                            now.saturating_sub(last) < self.config.min_click_delay_ms
                        });
                        if repeated {
                            self.notify(StickerEvent::DragFinished(id));
                        }
                    }
                }
            }
            _ => {}
        }

        self.mode = ActionMode::None;
        self.active_icon = None;
        self.last_click_ms = Some(now);
    }

    fn drag_current(&mut self, point: Point) {
        let Some(id) = self.active else {
            return;
        };
        let delta = Point::new(point.x - self.baseline.down.x, point.y - self.baseline.down.y);
        let baseline = self.baseline.transform;
        let Some(sticker) = self.stickers.get_mut(id) else {
            return;
        };
        sticker.set_transform(&baseline);
        sticker.transform_mut().post_translate(delta.x, delta.y);

        if self.config.constrained {
            self.constrain_sticker(id);
        }
    }

    fn zoom_two_finger(&mut self, event: &PointerEvent) {
        let (Some(first), Some(second)) = (event.pointer(0), event.pointer(1)) else {
            return;
        };
        debug_assert!(
            self.baseline.distance > 0.0,
            "two-finger zoom entered without a baseline distance"
        );
        if self.baseline.distance <= 0.0 {
            return;
        }
        let Some(id) = self.active else {
            return;
        };

        let factor = calculate_distance(first, second) / self.baseline.distance;
        let angle = calculate_rotation(first, second) - self.baseline.rotation;
        let mid = self.baseline.midpoint;
        let baseline = self.baseline.transform;

        if let Some(sticker) = self.stickers.get_mut(id) {
            sticker.set_transform(&baseline);
            let transform = sticker.transform_mut();
            transform.post_scale(factor, factor, mid.x, mid.y);
            transform.post_rotate(angle, mid.x, mid.y);
        }
    }

    /// Nudges the sticker so its mapped center lies inside the surface.
    pub fn constrain_sticker(&mut self, id: StickerId) {
        let Some(surface) = self.surface else {
            return;
        };
        let Some(sticker) = self.stickers.get_mut(id) else {
            return;
        };
        let center = sticker.mapped_center_point();
        let dx = if center.x < 0.0 {
            -center.x
        } else if center.x > surface.width {
            surface.width - center.x
        } else {
            0.0
        };
        let dy = if center.y < 0.0 {
            -center.y
        } else if center.y > surface.height {
            surface.height - center.y
        } else {
            0.0
        };
        sticker.transform_mut().post_translate(dx, dy);
    }

    /// Scales and rotates the active sticker about the center captured at
    /// down, following the primary pointer. Used by the zoom icon.
    pub fn zoom_and_rotate_current(&mut self, event: &PointerEvent) -> bool {
        match self.active {
            Some(id) => self.zoom_and_rotate_sticker(id, event),
            None => false,
        }
    }

    pub fn zoom_and_rotate_sticker(&mut self, id: StickerId, event: &PointerEvent) -> bool {
        if self.baseline.distance <= 0.0 {
            debug!("Zoom from the sticker center ignored");
            return false;
        }
        let point = event.primary();
        let mid = self.baseline.midpoint;
        let factor = calculate_distance(mid, point) / self.baseline.distance;
        let angle = calculate_rotation(mid, point) - self.baseline.rotation;
        let baseline = self.baseline.transform;

        let Some(sticker) = self.stickers.get_mut(id) else {
            return false;
        };
        sticker.set_transform(&baseline);
        let transform = sticker.transform_mut();
        transform.post_scale(factor, factor, mid.x, mid.y);
        transform.post_rotate(angle, mid.x, mid.y);
        true
    }
}
