//! Stickers: transformable objects with content supplied by a collaborator.
//!
//! A [`Sticker`] owns its affine transform, the intrinsic size reported by
//! its content when it was created, and two flip flags. Everything else
//! (bounds, center, scale, angle, hit testing) is derived from those on
//! demand.

use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use stickerkit_core::{trap_to_rect, AffineTransform2D, Point, Rect, Result};
use tracing::debug;

use crate::icon::FlipDirection;

static NEXT_STICKER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a sticker. Unique for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StickerId(pub u64);

impl StickerId {
    fn next() -> Self {
        Self(NEXT_STICKER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for StickerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Content carried by a sticker (a bitmap, a text block, ...).
///
/// The engine never paints content itself; it only needs the intrinsic size
/// to place and hit-test the sticker, and a way to drop heavy resources once
/// the sticker leaves the surface.
pub trait StickerContent: fmt::Debug {
    fn intrinsic_width(&self) -> u32;

    fn intrinsic_height(&self) -> u32;

    /// Drops any heavy resource held by the content.
    fn release(&mut self) {}

    fn as_any(&self) -> &dyn Any;
}

#[derive(Debug)]
pub struct Sticker {
    id: StickerId,
    transform: AffineTransform2D,
    width: u32,
    height: u32,
    flipped_horizontally: bool,
    flipped_vertically: bool,
    content: Box<dyn StickerContent>,
    released: bool,
}

impl Sticker {
    /// Creates a sticker with an identity transform. The intrinsic size is
    /// read from `content` once, here.
    pub fn new(content: impl StickerContent + 'static) -> Self {
        Self::from_boxed(Box::new(content))
    }

    pub fn from_boxed(content: Box<dyn StickerContent>) -> Self {
        Self {
            id: StickerId::next(),
            transform: AffineTransform2D::identity(),
            width: content.intrinsic_width(),
            height: content.intrinsic_height(),
            flipped_horizontally: false,
            flipped_vertically: false,
            content,
            released: false,
        }
    }

    pub fn id(&self) -> StickerId {
        self.id
    }

    pub fn transform(&self) -> &AffineTransform2D {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut AffineTransform2D {
        &mut self.transform
    }

    pub fn set_transform(&mut self, transform: &AffineTransform2D) {
        self.transform.set(transform);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_flipped_horizontally(&self) -> bool {
        self.flipped_horizontally
    }

    pub fn set_flipped_horizontally(&mut self, flipped: bool) {
        self.flipped_horizontally = flipped;
    }

    pub fn is_flipped_vertically(&self) -> bool {
        self.flipped_vertically
    }

    pub fn set_flipped_vertically(&mut self, flipped: bool) {
        self.flipped_vertically = flipped;
    }

    pub fn content(&self) -> &dyn StickerContent {
        self.content.as_ref()
    }

    /// Downcasts the content to a concrete collaborator type.
    pub fn content_as<T: 'static>(&self) -> Option<&T> {
        self.content.as_any().downcast_ref::<T>()
    }

    /// The four local-space corners, ordered so that index 0 is always the
    /// corner that appears top-left once the flips are applied, followed by
    /// top-right, bottom-left and bottom-right.
    pub fn bound_points(&self) -> [Point; 4] {
        let w = self.width as f64;
        let h = self.height as f64;
        match (self.flipped_horizontally, self.flipped_vertically) {
            (false, false) => [
                Point::new(0.0, 0.0),
                Point::new(w, 0.0),
                Point::new(0.0, h),
                Point::new(w, h),
            ],
            (false, true) => [
                Point::new(0.0, h),
                Point::new(w, h),
                Point::new(0.0, 0.0),
                Point::new(w, 0.0),
            ],
            (true, false) => [
                Point::new(w, 0.0),
                Point::new(0.0, 0.0),
                Point::new(w, h),
                Point::new(0.0, h),
            ],
            (true, true) => [
                Point::new(w, h),
                Point::new(0.0, h),
                Point::new(w, 0.0),
                Point::new(0.0, 0.0),
            ],
        }
    }

    /// Bound points mapped into screen space.
    pub fn mapped_bound_points(&self) -> [Point; 4] {
        let mut mapped = [Point::default(); 4];
        self.transform.map_points(&mut mapped, &self.bound_points());
        mapped
    }

    pub fn mapped_points(&self, src: &[Point]) -> Vec<Point> {
        src.iter().map(|p| self.transform.map_point(*p)).collect()
    }

    pub fn bound(&self) -> Rect {
        Rect::from_size(self.width as f64, self.height as f64)
    }

    /// Axis-aligned screen bounds of the transformed sticker.
    pub fn mapped_bound(&self) -> Rect {
        self.transform.map_rect(&self.bound())
    }

    pub fn center_point(&self) -> Point {
        Point::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    pub fn mapped_center_point(&self) -> Point {
        self.transform.map_point(self.center_point())
    }

    pub fn current_scale(&self) -> f64 {
        self.transform.scale_magnitude()
    }

    pub fn current_width(&self) -> f64 {
        self.current_scale() * self.width as f64
    }

    pub fn current_height(&self) -> f64 {
        self.current_scale() * self.height as f64
    }

    /// Rotation of the transform in degrees.
    pub fn current_angle(&self) -> f64 {
        self.transform.rotation_degrees()
    }

    /// Hit test in screen space.
    ///
    /// The mapped quad and the query point are both rotated back by the
    /// current angle about the origin, then the point is tested against the
    /// axis-aligned rectangle enclosing the quad. This is exact for
    /// rotation, scale and translation of an unflipped sticker. A sheared
    /// transform, or a sticker that is both flipped and rotated, only gets
    /// an approximate answer: the flip makes the decomposed angle 180 minus
    /// the real one, and the quad stays tilted after un-rotating.
    pub fn contains(&self, point: Point) -> bool {
        let mut unrotate = AffineTransform2D::identity();
        unrotate.post_rotate(-self.current_angle(), 0.0, 0.0);

        let mut unrotated = [Point::default(); 4];
        unrotate.map_points(&mut unrotated, &self.mapped_bound_points());
        let p = unrotate.map_point(point);

        trap_to_rect(&unrotated).contains(p.x, p.y)
    }

    /// Maps a screen point back into the sticker's local space.
    pub fn map_to_local(&self, point: Point) -> Result<Point> {
        Ok(self.transform.inverted()?.map_point(point))
    }

    /// Mirrors the sticker in its own space about its local center, so the
    /// mapped center stays where it is, and toggles the matching flags.
    pub fn flip(&mut self, direction: FlipDirection) {
        let center = self.center_point();
        if direction.flips_horizontally() {
            self.transform.pre_scale(-1.0, 1.0, center.x, center.y);
            self.flipped_horizontally = !self.flipped_horizontally;
        }
        if direction.flips_vertically() {
            self.transform.pre_scale(1.0, -1.0, center.x, center.y);
            self.flipped_vertically = !self.flipped_vertically;
        }
    }

    /// Releases the content's heavy resources. Only the first call reaches
    /// the content.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        debug!("Releasing sticker {}", self.id);
        self.content.release();
        self.released = true;
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}
