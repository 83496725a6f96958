//! Gesture controller for a sticker surface.
//!
//! The controller owns the stickers and the icon handles of one surface,
//! turns pointer events into transform changes (see `gesture`) and exposes
//! the surface operations (see `operations`). Layout and paint are separate
//! passes: [`GestureController::layout`] places the icons,
//! [`GestureController::paint`] only reads.

mod gesture;
mod operations;
mod types;

pub use types::{fit_transform, ActionMode, Anchor, GestureBaseline, SurfaceSize};

use std::fmt;

use stickerkit_core::{calculate_rotation, Point};
use stickerkit_settings::StickerViewConfig;
use tracing::trace;

use crate::collection::StickerCollection;
use crate::event::{StickerEvent, StickerOperationListener};
use crate::icon::IconHandle;
use crate::renderer::StickerRenderer;
use crate::sticker::{Sticker, StickerId};

/// Controller state for one sticker surface.
pub struct GestureController {
    config: StickerViewConfig,
    stickers: StickerCollection,
    icons: Vec<IconHandle>,
    /// Additions made before the surface size is known
    pending: Vec<(Sticker, Anchor)>,
    surface: Option<SurfaceSize>,
    listener: Option<Box<dyn StickerOperationListener>>,
    active: Option<StickerId>,
    active_icon: Option<usize>,
    mode: ActionMode,
    baseline: GestureBaseline,
    last_click_ms: Option<u64>,
    /// Whether the current gesture started on a sticker or an icon
    claimed: bool,
}

impl GestureController {
    /// Creates a detached controller with the default icon set.
    pub fn new(config: StickerViewConfig) -> Self {
        let icons = IconHandle::default_icons(config.icon_radius);
        Self {
            config,
            stickers: StickerCollection::new(),
            icons,
            pending: Vec::new(),
            surface: None,
            listener: None,
            active: None,
            active_icon: None,
            mode: ActionMode::None,
            baseline: GestureBaseline::default(),
            last_click_ms: None,
            claimed: false,
        }
    }

    /// Creates a controller already attached to a surface of the given size.
    pub fn with_size(config: StickerViewConfig, width: f64, height: f64) -> Self {
        let mut controller = Self::new(config);
        controller.attach_to_surface(width, height);
        controller
    }

    pub fn config(&self) -> &StickerViewConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: StickerViewConfig) {
        self.config = config;
    }

    pub fn surface_size(&self) -> Option<SurfaceSize> {
        self.surface
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    pub fn stickers(&self) -> &StickerCollection {
        &self.stickers
    }

    pub fn sticker(&self, id: StickerId) -> Option<&Sticker> {
        self.stickers.get(id)
    }

    pub fn sticker_count(&self) -> usize {
        self.stickers.len()
    }

    pub fn has_stickers(&self) -> bool {
        !self.stickers.is_empty()
    }

    /// Number of additions waiting for the surface to be attached.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn current_sticker_id(&self) -> Option<StickerId> {
        self.active
    }

    pub fn current_sticker(&self) -> Option<&Sticker> {
        self.active.and_then(|id| self.stickers.get(id))
    }

    pub fn icons(&self) -> &[IconHandle] {
        &self.icons
    }

    pub fn current_icon(&self) -> Option<&IconHandle> {
        self.active_icon.and_then(|index| self.icons.get(index))
    }

    pub fn action_mode(&self) -> ActionMode {
        self.mode
    }

    pub fn baseline(&self) -> &GestureBaseline {
        &self.baseline
    }

    pub fn is_locked(&self) -> bool {
        self.config.locked
    }

    pub fn is_constrained(&self) -> bool {
        self.config.constrained
    }

    /// Places the icons on the corners of the active sticker's mapped quad,
    /// turned with the quad's bottom edge.
    pub fn layout(&mut self) {
        let Some(sticker) = self.current_sticker() else {
            return;
        };
        let quad = sticker.mapped_bound_points();
        let rotation = calculate_rotation(quad[3], quad[2]);
        for icon in &mut self.icons {
            icon.place(quad[icon.gravity().corner_index()], rotation);
        }
        trace!("Laid out {} icons at {:.1} degrees", self.icons.len(), rotation);
    }

    /// Paints every sticker bottom to top, then the border and icons of the
    /// active sticker when enabled. Icons are drawn where the last
    /// [`layout`](Self::layout) put them.
    pub fn paint(&self, renderer: &mut dyn StickerRenderer) {
        for sticker in self.stickers.iter() {
            renderer.draw_sticker(sticker);
        }

        if self.config.locked {
            return;
        }
        let Some(sticker) = self.current_sticker() else {
            return;
        };

        if self.config.show_border {
            renderer.draw_border(&sticker.mapped_bound_points(), &self.config.border);
        }
        if self.config.show_icons {
            for icon in &self.icons {
                renderer.draw_icon(icon, &self.config.border);
            }
        }
    }

    /// Delivers `event` to the listener. Returns `false` when no listener is
    /// set or the sticker is not on the surface.
    pub fn notify(&mut self, event: StickerEvent) -> bool {
        let Some(listener) = self.listener.as_mut() else {
            return false;
        };
        let Some(sticker) = self.stickers.get(event.sticker_id()) else {
            return false;
        };
        trace!("{}", event);
        event.dispatch(listener.as_mut(), sticker);
        true
    }

    /// Like [`notify`](Self::notify) for a sticker that already left the
    /// collection.
    fn notify_detached(&mut self, event: StickerEvent, sticker: &Sticker) {
        if let Some(listener) = self.listener.as_mut() {
            trace!("{}", event);
            event.dispatch(listener.as_mut(), sticker);
        }
    }

    /// Center of the active sticker, or the origin.
    fn active_center(&self) -> Point {
        self.current_sticker()
            .map(Sticker::mapped_center_point)
            .unwrap_or_default()
    }
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(StickerViewConfig::default())
    }
}

impl fmt::Debug for GestureController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureController")
            .field("surface", &self.surface)
            .field("stickers", &self.stickers.ids())
            .field("pending", &self.pending.len())
            .field("active", &self.active)
            .field("active_icon", &self.active_icon)
            .field("mode", &self.mode)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}
