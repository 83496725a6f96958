//! # StickerKit
//!
//! Transform and gesture engine for an image/text overlay editor: stickers
//! on a surface that the user drags, pinches, rotates, flips and deletes
//! with one or two pointers.
//!
//! ## Architecture
//!
//! StickerKit is organized as a workspace with multiple crates:
//!
//! 1. **stickerkit-core** - Points, rectangles, affine transforms, errors
//! 2. **stickerkit-canvas** - Stickers, icons, the gesture controller
//! 3. **stickerkit-settings** - Surface configuration and persistence
//! 4. **stickerkit** - Logging setup, gesture-script replay and the binary

pub mod replay;

pub use stickerkit_canvas::{
    ActionMode, Anchor, BlankContent, EventLog, FlipDirection, GestureController, IconGravity,
    IconHandle, ImageContent, PointerAction, PointerEvent, Sticker, StickerCollection,
    StickerEvent, StickerId, StickerOperationListener, StickerRenderer, TextContent,
};
pub use stickerkit_core::{AffineTransform2D, Error, Point, Rect, Result};
pub use stickerkit_settings::{SettingsError, StickerViewConfig};

pub use replay::{load_script, run_script, GestureScript, ReplayError, ReplayReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr, so stdout stays free for reports
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
