//! Content collaborators for stickers.
//!
//! The engine only cares about intrinsic size and release; these types carry
//! whatever a renderer needs on top of that.

use std::any::Any;
use std::path::Path;

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use stickerkit_core::{Error, Result};
use tracing::debug;

use crate::sticker::StickerContent;

/// Size-only content, for placeholders and scripted sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlankContent {
    width: u32,
    height: u32,
    release_count: u32,
}

impl BlankContent {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            release_count: 0,
        }
    }

    /// How many times the owning sticker released this content.
    pub fn release_count(&self) -> u32 {
        self.release_count
    }
}

impl StickerContent for BlankContent {
    fn intrinsic_width(&self) -> u32 {
        self.width
    }

    fn intrinsic_height(&self) -> u32 {
        self.height
    }

    fn release(&mut self) {
        self.release_count += 1;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Bitmap content. The decoded pixels are dropped on release; the intrinsic
/// size survives so a released sticker still reports its geometry.
#[derive(Debug, Clone)]
pub struct ImageContent {
    image: Option<RgbaImage>,
    width: u32,
    height: u32,
    alpha: u8,
}

impl ImageContent {
    pub fn new(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            image: Some(image),
            width,
            height,
            alpha: u8::MAX,
        }
    }

    /// Decodes an image file from disk.
    pub fn open(path: &Path) -> Result<Self> {
        let image = image::open(path)
            .map_err(|e| Error::other(format!("Failed to open image {}: {}", path.display(), e)))?
            .to_rgba8();
        debug!(
            "Loaded sticker image {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Self::new(image))
    }

    pub fn image(&self) -> Option<&RgbaImage> {
        self.image.as_ref()
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        self.alpha = alpha;
    }
}

impl StickerContent for ImageContent {
    fn intrinsic_width(&self) -> u32 {
        self.width
    }

    fn intrinsic_height(&self) -> u32 {
        self.height
    }

    fn release(&mut self) {
        self.image = None;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[default]
    Normal,
    Center,
    Opposite,
}

/// Text content laid out by the host inside a fixed box. The box is the
/// sticker's intrinsic size; layout and font fitting happen elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct TextContent {
    text: String,
    alignment: TextAlignment,
    box_width: u32,
    box_height: u32,
    alpha: u8,
}

impl TextContent {
    pub fn new(text: impl Into<String>, box_width: u32, box_height: u32) -> Self {
        Self {
            text: text.into(),
            alignment: TextAlignment::default(),
            box_width,
            box_height,
            alpha: u8::MAX,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn alignment(&self) -> TextAlignment {
        self.alignment
    }

    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        self.alpha = alpha;
    }
}

impl StickerContent for TextContent {
    fn intrinsic_width(&self) -> u32 {
        self.box_width
    }

    fn intrinsic_height(&self) -> u32 {
        self.box_height
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
