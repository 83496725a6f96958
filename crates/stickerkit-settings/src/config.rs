//! Configuration for a sticker surface.
//!
//! Mirrors the attributes a host view would expose: overlay visibility,
//! gesture policy (locking, constrained dragging, bring-to-front), click
//! timing and the touch slop used to tell a tap from a drag.
//!
//! Configuration files may be JSON or TOML; the format is picked from the
//! file extension. Missing keys fall back to their defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{SettingsError, SettingsResult};

/// Default minimum delay between two clicks, in milliseconds.
pub const DEFAULT_MIN_CLICK_DELAY_MS: u64 = 200;

/// Default touch slop in pixels.
pub const DEFAULT_TOUCH_SLOP: f64 = 8.0;

/// Default icon radius in pixels.
pub const DEFAULT_ICON_RADIUS: f64 = 25.0;

/// Border and icon outline style for the active sticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderStyle {
    /// RGB color
    pub color: [u8; 3],
    /// Alpha, 0 (transparent) to 255 (opaque)
    pub alpha: u8,
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self {
            color: [0, 0, 0],
            alpha: 128,
        }
    }
}

/// Complete sticker view configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StickerViewConfig {
    /// Draw a border around the active sticker
    pub show_border: bool,
    /// Draw the corner icons of the active sticker
    pub show_icons: bool,
    /// Move a touched sticker to the top of the z-order
    pub bring_to_front_on_touch: bool,
    /// Claim no gestures at all
    pub locked: bool,
    /// Keep a dragged sticker's center inside the surface
    pub constrained: bool,
    /// A tap closer than this to the previous one counts as a repeat click
    pub min_click_delay_ms: u64,
    /// Maximum pointer travel, per axis, for a gesture to count as a tap
    pub touch_slop: f64,
    /// Radius of the corner icons
    pub icon_radius: f64,
    /// Border style
    pub border: BorderStyle,
}

impl Default for StickerViewConfig {
    fn default() -> Self {
        Self {
            show_border: false,
            show_icons: false,
            bring_to_front_on_touch: false,
            locked: false,
            constrained: false,
            min_click_delay_ms: DEFAULT_MIN_CLICK_DELAY_MS,
            touch_slop: DEFAULT_TOUCH_SLOP,
            icon_radius: DEFAULT_ICON_RADIUS,
            border: BorderStyle::default(),
        }
    }
}

impl StickerViewConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Config with border and icons visible, the usual editing setup.
    pub fn editing() -> Self {
        Self {
            show_border: true,
            show_icons: true,
            ..Self::default()
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::read(path, e))?;

        let config: Self = match Format::from_path(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded sticker view config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| SettingsError::write(path, e))?;
            }
        }
        std::fs::write(path, content).map_err(|e| SettingsError::write(path, e))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if !self.touch_slop.is_finite() || self.touch_slop < 0.0 {
            return Err(SettingsError::invalid(
                "touch_slop",
                "must be a finite, non-negative distance",
            ));
        }

        if !self.icon_radius.is_finite() || self.icon_radius <= 0.0 {
            return Err(SettingsError::invalid("icon_radius", "must be > 0"));
        }

        Ok(())
    }
}

/// `<config_dir>/stickerkit/config.toml`, falling back to the home directory.
pub fn default_config_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
    path.push("stickerkit");
    path.push("config.toml");
    Some(path)
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(SettingsError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}
