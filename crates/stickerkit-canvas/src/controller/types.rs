//! Controller type definitions: ActionMode, Anchor, SurfaceSize, GestureBaseline.

use serde::{Deserialize, Serialize};
use stickerkit_core::{AffineTransform2D, GeometryError, Point, Result};

/// Gesture state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionMode {
    #[default]
    None,
    Drag,
    ZoomWithTwoFinger,
    Icon,
    Click,
}

/// Where a new sticker lands before it is scaled to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    #[default]
    Center,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Anchor {
    /// Fractions of the free space `(surface - sticker)` used as the offset
    /// along x and y.
    pub fn offset_factors(self) -> (f64, f64) {
        let x = match self {
            Self::Left | Self::TopLeft | Self::BottomLeft => 0.25,
            Self::Right | Self::TopRight | Self::BottomRight => 0.75,
            _ => 0.5,
        };
        let y = match self {
            Self::Top | Self::TopLeft | Self::TopRight => 0.25,
            Self::Bottom | Self::BottomLeft | Self::BottomRight => 0.75,
            _ => 0.5,
        };
        (x, y)
    }
}

/// Size of the surface the stickers live on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// State captured when a gesture starts; moves are computed against it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureBaseline {
    /// Transform of the active sticker at gesture start
    pub transform: AffineTransform2D,
    /// Primary pointer at down
    pub down: Point,
    /// Pivot for scale and rotation
    pub midpoint: Point,
    pub distance: f64,
    /// Degrees
    pub rotation: f64,
}

/// Initial transform for a `width` x `height` sticker: offset into the free
/// space per `anchor`, then scaled about the surface center to half of the
/// largest factor that still fits both dimensions.
pub fn fit_transform(
    surface: SurfaceSize,
    width: u32,
    height: u32,
    anchor: Anchor,
) -> Result<AffineTransform2D> {
    if surface.is_degenerate() {
        return Err(GeometryError::DegenerateSize {
            width: surface.width,
            height: surface.height,
        }
        .into());
    }
    if width == 0 || height == 0 {
        return Err(GeometryError::DegenerateSize {
            width: width as f64,
            height: height as f64,
        }
        .into());
    }

    let w = width as f64;
    let h = height as f64;
    let (fx, fy) = anchor.offset_factors();

    let mut transform = AffineTransform2D::identity();
    transform.post_translate((surface.width - w) * fx, (surface.height - h) * fy);

    let scale = (surface.width / w).min(surface.height / h);
    let center = surface.center();
    transform.post_scale(scale / 2.0, scale / 2.0, center.x, center.y);
    Ok(transform)
}
