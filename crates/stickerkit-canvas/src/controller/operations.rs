//! Surface operations: attach, add, remove, flip, replace and layers.

use stickerkit_core::Point;
use tracing::{debug, info, warn};

use super::{fit_transform, ActionMode, Anchor, GestureController, SurfaceSize};
use crate::event::{StickerEvent, StickerOperationListener};
use crate::icon::{FlipDirection, IconHandle};
use crate::sticker::{Sticker, StickerId};

impl GestureController {
    /// Records the surface size and places every sticker added before it
    /// was known, in the order they were added.
    pub fn attach_to_surface(&mut self, width: f64, height: f64) {
        self.surface = Some(SurfaceSize::new(width, height));
        info!(
            "Sticker surface attached at {}x{} with {} pending",
            width,
            height,
            self.pending.len()
        );
        for (sticker, anchor) in std::mem::take(&mut self.pending) {
            self.place_sticker(sticker, anchor);
        }
    }

    /// Changes the surface size and refits every sticker, centered.
    pub fn resize_surface(&mut self, width: f64, height: f64) {
        if self.surface.is_none() {
            self.attach_to_surface(width, height);
            return;
        }
        let surface = SurfaceSize::new(width, height);
        self.surface = Some(surface);
        debug!("Sticker surface resized to {}x{}", width, height);

        for sticker in self.stickers.iter_mut() {
            fit_sticker(sticker, surface, Anchor::Center);
        }
    }

    /// Adds a sticker on top of the others and makes it active.
    ///
    /// Before [`attach_to_surface`](Self::attach_to_surface) the sticker is
    /// queued; its id is valid right away but it joins the surface only on
    /// attach.
    pub fn add_sticker(&mut self, sticker: Sticker, anchor: Anchor) -> StickerId {
        let id = sticker.id();
        if self.surface.is_none() {
            debug!("Surface not attached, queueing sticker {}", id);
            self.pending.push((sticker, anchor));
        } else {
            self.place_sticker(sticker, anchor);
        }
        id
    }

    fn place_sticker(&mut self, mut sticker: Sticker, anchor: Anchor) {
        let Some(surface) = self.surface else {
            return;
        };
        fit_sticker(&mut sticker, surface, anchor);

        let id = sticker.id();
        if let Err(sticker) = self.stickers.push(sticker) {
            warn!("Sticker {} is already on the surface", sticker.id());
            return;
        }
        self.active = Some(id);
        self.notify(StickerEvent::Added(id));
    }

    /// Removes a sticker and releases its content.
    ///
    /// Returns `false`, and fires nothing, when the sticker is not on the
    /// surface.
    pub fn remove_sticker(&mut self, id: StickerId) -> bool {
        if let Some(index) = self.pending.iter().position(|(s, _)| s.id() == id) {
            let (mut sticker, _) = self.pending.remove(index);
            sticker.release();
            return true;
        }

        let Some(mut sticker) = self.stickers.remove(id) else {
            debug!("Remove: sticker {} is not on this surface", id);
            return false;
        };

        if self.active == Some(id) {
            self.active = None;
        }
        self.notify_detached(StickerEvent::Deleted(id), &sticker);
        sticker.release();
        true
    }

    pub fn remove_current_sticker(&mut self) -> bool {
        match self.active {
            Some(id) => self.remove_sticker(id),
            None => false,
        }
    }

    /// Removes and releases every sticker, queued ones included. Fires no
    /// notifications.
    pub fn remove_all(&mut self) {
        let count = self.stickers.len() + self.pending.len();
        for mut sticker in self.stickers.clear() {
            sticker.release();
        }
        for (mut sticker, _) in self.pending.drain(..) {
            sticker.release();
        }
        self.active = None;
        self.reset();
        debug!("Removed all {} stickers", count);
    }

    /// Mirrors a sticker in place.
    pub fn flip(&mut self, id: StickerId, direction: FlipDirection) -> bool {
        let Some(sticker) = self.stickers.get_mut(id) else {
            return false;
        };
        sticker.flip(direction);
        debug!("Flipped sticker {} {}", id, direction);
        self.notify(StickerEvent::Flipped(id));
        true
    }

    pub fn flip_current(&mut self, direction: FlipDirection) -> bool {
        match self.active {
            Some(id) => self.flip(id, direction),
            None => false,
        }
    }

    /// Puts `replacement` in the slot of `id`. With `keep_transform` the
    /// replacement takes over the old transform and flips; otherwise it gets
    /// a fresh centered fit. The replacement becomes the active sticker and
    /// the old one is released.
    pub fn replace(&mut self, id: StickerId, mut replacement: Sticker, keep_transform: bool) -> bool {
        let Some(surface) = self.surface else {
            return false;
        };
        let Some(old) = self.stickers.get(id) else {
            debug!("Replace: sticker {} is not on this surface", id);
            return false;
        };

        if keep_transform {
            replacement.set_transform(old.transform());
            replacement.set_flipped_horizontally(old.is_flipped_horizontally());
            replacement.set_flipped_vertically(old.is_flipped_vertically());
        } else {
            fit_sticker(&mut replacement, surface, Anchor::Center);
        }

        let new_id = replacement.id();
        match self.stickers.replace(id, replacement) {
            Ok(mut old) => {
                old.release();
                if self.active == Some(id) {
                    self.active = Some(new_id);
                }
                debug!("Replaced sticker {} with {}", id, new_id);
                true
            }
            Err(_) => {
                warn!("Sticker {} is already on the surface", new_id);
                false
            }
        }
    }

    pub fn replace_current(&mut self, replacement: Sticker, keep_transform: bool) -> bool {
        match self.active {
            Some(id) => self.replace(id, replacement, keep_transform),
            None => false,
        }
    }

    /// Swaps two layers. Out-of-range indices leave the order unchanged.
    pub fn swap_layers(&mut self, first: usize, second: usize) -> bool {
        self.stickers.swap(first, second)
    }

    /// Moves the sticker at layer `from` to layer `to`. Out-of-range
    /// indices leave the order unchanged.
    pub fn send_to_layer(&mut self, from: usize, to: usize) -> bool {
        self.stickers.move_to(from, to)
    }

    /// Mapped bound quad of a sticker; all zeros when it is not on the
    /// surface.
    pub fn get_sticker_points(&self, id: StickerId) -> [Point; 4] {
        self.stickers
            .get(id)
            .map(Sticker::mapped_bound_points)
            .unwrap_or_default()
    }

    /// Forwards a double tap detected by the host.
    pub fn notify_double_tapped(&mut self, id: StickerId) -> bool {
        self.notify(StickerEvent::DoubleTapped(id))
    }

    /// Locks or unlocks the surface. Locking ends any gesture in progress.
    pub fn update_locked(&mut self, locked: bool) {
        self.config.locked = locked;
        if locked && self.mode != ActionMode::None {
            self.reset();
        }
    }

    pub fn update_constrained(&mut self, constrained: bool) {
        self.config.constrained = constrained;
    }

    /// Replaces the icon set.
    pub fn update_icons(&mut self, icons: Vec<IconHandle>) {
        self.icons = icons;
        self.active_icon = None;
        self.layout();
    }

    pub fn set_listener(&mut self, listener: impl StickerOperationListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }
}

/// Applies the initial fit and re-applies the sticker's flips on top of it.
fn fit_sticker(sticker: &mut Sticker, surface: SurfaceSize, anchor: Anchor) {
    match fit_transform(surface, sticker.width(), sticker.height(), anchor) {
        Ok(transform) => sticker.set_transform(&transform),
        Err(e) => {
            warn!("Cannot fit sticker {}: {}", sticker.id(), e);
            return;
        }
    }

    let center = sticker.center_point();
    if sticker.is_flipped_horizontally() {
        sticker.transform_mut().pre_scale(-1.0, 1.0, center.x, center.y);
    }
    if sticker.is_flipped_vertically() {
        sticker.transform_mut().pre_scale(1.0, -1.0, center.x, center.y);
    }
}
