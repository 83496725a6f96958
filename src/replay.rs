//! Gesture-script replay.
//!
//! A gesture script describes a surface, the stickers placed on it and a
//! sequence of pointer events. Replaying feeds the events to a
//! [`GestureController`] and reports the notifications it fired together
//! with the final placement of every sticker.
//!
//! ```json
//! {
//!   "surface": { "width": 800, "height": 600 },
//!   "stickers": [ { "width": 200, "height": 100, "anchor": "center" } ],
//!   "events": [
//!     { "action": "down", "pointers": [ { "x": 400, "y": 300 } ], "time_ms": 0 },
//!     { "action": "up", "pointers": [ { "x": 400, "y": 300 } ], "time_ms": 40 }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use stickerkit_canvas::{
    Anchor, BlankContent, EventLog, GestureController, PointerEvent, Sticker, StickerEvent,
    StickerId, SurfaceSize, TextContent,
};
use stickerkit_core::Point;
use stickerkit_settings::{SettingsError, StickerViewConfig};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading or replaying a script.
#[derive(Error, Debug)]
pub enum ReplayError {
    /// The script file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The script is not valid JSON for a gesture script.
    #[error("Invalid gesture script: {0}")]
    Parse(#[from] serde_json::Error),

    /// The embedded configuration is invalid.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// The surface has no area.
    #[error("Surface must have a positive size, got {width}x{height}")]
    EmptySurface { width: f64, height: f64 },
}

/// A sticker to place before the events are replayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptSticker {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub anchor: Anchor,
    /// Text carried by the sticker, if any
    #[serde(default)]
    pub text: Option<String>,
}

impl ScriptSticker {
    fn build(&self) -> Sticker {
        match &self.text {
            Some(text) => Sticker::new(TextContent::new(text.clone(), self.width, self.height)),
            None => Sticker::new(BlankContent::new(self.width, self.height)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureScript {
    pub surface: SurfaceSize,
    /// Overrides the configuration given to [`run_script`]
    #[serde(default)]
    pub config: Option<StickerViewConfig>,
    #[serde(default)]
    pub stickers: Vec<ScriptSticker>,
    #[serde(default)]
    pub events: Vec<PointerEvent>,
}

/// Final placement of one sticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerSummary {
    pub id: StickerId,
    pub center: Point,
    pub scale: f64,
    /// Degrees
    pub angle: f64,
    pub flipped_horizontally: bool,
    pub flipped_vertically: bool,
}

impl StickerSummary {
    fn of(sticker: &Sticker) -> Self {
        Self {
            id: sticker.id(),
            center: sticker.mapped_center_point(),
            scale: sticker.current_scale(),
            angle: sticker.current_angle(),
            flipped_horizontally: sticker.is_flipped_horizontally(),
            flipped_vertically: sticker.is_flipped_vertically(),
        }
    }
}

/// Outcome of a replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayReport {
    /// Notifications in the order they fired
    pub events: Vec<StickerEvent>,
    /// Stickers left on the surface, bottom first
    pub stickers: Vec<StickerSummary>,
    pub active: Option<StickerId>,
    /// How many pointer events the controller claimed
    pub claimed: usize,
}

/// Reads a gesture script from a JSON file.
pub fn load_script(path: &Path) -> Result<GestureScript, ReplayError> {
    let content = std::fs::read_to_string(path)?;
    let script: GestureScript = serde_json::from_str(&content)?;
    debug!(
        "Loaded gesture script {} ({} stickers, {} events)",
        path.display(),
        script.stickers.len(),
        script.events.len()
    );
    Ok(script)
}

/// Replays `script` on a fresh controller.
///
/// The stickers are queued first and placed when the surface is attached,
/// the same way a host adds stickers before its layout is known.
pub fn run_script(
    script: &GestureScript,
    config: &StickerViewConfig,
) -> Result<ReplayReport, ReplayError> {
    let surface = script.surface;
    if surface.is_degenerate() {
        return Err(ReplayError::EmptySurface {
            width: surface.width,
            height: surface.height,
        });
    }

    let config = script.config.clone().unwrap_or_else(|| config.clone());
    config.validate()?;

    let mut controller = GestureController::new(config);
    let log = EventLog::new();
    controller.set_listener(log.clone());

    for sticker in &script.stickers {
        controller.add_sticker(sticker.build(), sticker.anchor);
    }
    controller.attach_to_surface(surface.width, surface.height);

    let claimed = script
        .events
        .iter()
        .filter(|event| controller.on_pointer_event(event))
        .count();

    info!(
        "Replayed {} pointer events, {} claimed, {} notifications",
        script.events.len(),
        claimed,
        log.len()
    );

    Ok(ReplayReport {
        events: log.events(),
        stickers: controller.stickers().iter().map(StickerSummary::of).collect(),
        active: controller.current_sticker_id(),
        claimed,
    })
}
