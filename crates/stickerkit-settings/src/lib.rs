//! StickerKit Settings Crate
//!
//! Handles the configuration surface of a sticker view: which overlays are
//! drawn, how gestures are interpreted, and how the settings are persisted.

pub mod config;
pub mod error;

pub use config::{default_config_path, BorderStyle, StickerViewConfig};
pub use error::{SettingsError, SettingsResult};
