//! Affine transform model for stickers.
//!
//! An [`AffineTransform2D`] wraps a homogeneous 3x3 matrix laid out as
//!
//! ```text
//! | scale_x  skew_x   trans_x |
//! | skew_y   scale_y  trans_y |
//! | 0        0        1       |
//! ```
//!
//! `post_*` operations compose in screen space after the current transform
//! (`M' = T * M`). They are what gestures use to apply a delta on top of a
//! baseline snapshot. `pre_scale` composes before (`M' = M * S`), in the
//! sticker's local space, which is what flipping needs so that the mirror
//! axis follows the sticker regardless of its on-screen rotation.
//!
//! Nothing here panics or fails: degenerate inputs (zero scale) simply
//! propagate zeros or NaN and callers are expected to guard against them.

use std::fmt;

use nalgebra::{Matrix3, Vector2};
use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::geometry::{radians_to_degrees, Point, Rect};

/// Index of the x scale coefficient in [`AffineTransform2D::values`].
pub const MSCALE_X: usize = 0;
/// Index of the x skew coefficient.
pub const MSKEW_X: usize = 1;
/// Index of the x translation.
pub const MTRANS_X: usize = 2;
/// Index of the y skew coefficient.
pub const MSKEW_Y: usize = 3;
/// Index of the y scale coefficient.
pub const MSCALE_Y: usize = 4;
/// Index of the y translation.
pub const MTRANS_Y: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform2D {
    matrix: Matrix3<f64>,
}

impl Default for AffineTransform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform2D {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// Builds a transform from nine row-major coefficients.
    pub fn from_values(values: [f64; 9]) -> Self {
        Self {
            matrix: Matrix3::from_row_slice(&values),
        }
    }

    /// Nine row-major coefficients, indexable with the `M*` constants.
    pub fn values(&self) -> [f64; 9] {
        let mut out = [0.0; 9];
        for (i, v) in out.iter_mut().enumerate() {
            *v = self.matrix[(i / 3, i % 3)];
        }
        out
    }

    pub fn value(&self, index: usize) -> f64 {
        self.matrix[(index / 3, index % 3)]
    }

    /// Copies `other` into this transform.
    pub fn set(&mut self, other: &AffineTransform2D) {
        self.matrix = other.matrix;
    }

    /// Resets to identity.
    pub fn reset(&mut self) {
        self.matrix = Matrix3::identity();
    }

    pub fn is_identity(&self) -> bool {
        self.matrix == Matrix3::identity()
    }

    pub fn post_translate(&mut self, dx: f64, dy: f64) {
        self.matrix = Matrix3::new_translation(&Vector2::new(dx, dy)) * self.matrix;
    }

    pub fn post_scale(&mut self, sx: f64, sy: f64, px: f64, py: f64) {
        self.matrix = Self::scale_about(sx, sy, px, py) * self.matrix;
    }

    pub fn pre_scale(&mut self, sx: f64, sy: f64, px: f64, py: f64) {
        self.matrix *= Self::scale_about(sx, sy, px, py);
    }

    /// Rotates by `degrees` (clockwise on a Y-down screen) about `(px, py)`.
    pub fn post_rotate(&mut self, degrees: f64, px: f64, py: f64) {
        let rotation = Matrix3::new_rotation(degrees.to_radians());
        self.matrix = Self::about_pivot(rotation, px, py) * self.matrix;
    }

    /// Concatenates `other` after this transform.
    pub fn post_concat(&mut self, other: &AffineTransform2D) {
        self.matrix = other.matrix * self.matrix;
    }

    fn scale_about(sx: f64, sy: f64, px: f64, py: f64) -> Matrix3<f64> {
        Self::about_pivot(
            Matrix3::new_nonuniform_scaling(&Vector2::new(sx, sy)),
            px,
            py,
        )
    }

    fn about_pivot(op: Matrix3<f64>, px: f64, py: f64) -> Matrix3<f64> {
        Matrix3::new_translation(&Vector2::new(px, py))
            * op
            * Matrix3::new_translation(&Vector2::new(-px, -py))
    }

    pub fn map_point(&self, point: Point) -> Point {
        let m = &self.matrix;
        Point::new(
            m[(0, 0)] * point.x + m[(0, 1)] * point.y + m[(0, 2)],
            m[(1, 0)] * point.x + m[(1, 1)] * point.y + m[(1, 2)],
        )
    }

    /// Maps `src` into `dst` pairwise. Extra entries on either side are left
    /// untouched.
    pub fn map_points(&self, dst: &mut [Point], src: &[Point]) {
        for (out, p) in dst.iter_mut().zip(src) {
            *out = self.map_point(*p);
        }
    }

    /// Maps the corners of `src` and returns their axis-aligned bounds.
    pub fn map_rect(&self, src: &Rect) -> Rect {
        let corners = [
            Point::new(src.left, src.top),
            Point::new(src.right, src.top),
            Point::new(src.left, src.bottom),
            Point::new(src.right, src.bottom),
        ];
        let mut mapped = [Point::default(); 4];
        self.map_points(&mut mapped, &corners);
        Rect::bounding(&mapped)
    }

    /// Uniform scale factor, `sqrt(scale_x² + skew_y²)`.
    pub fn scale_magnitude(&self) -> f64 {
        let a = self.value(MSCALE_X);
        let c = self.value(MSKEW_Y);
        (a * a + c * c).sqrt()
    }

    /// Rotation in degrees, `-atan2(skew_x, scale_x)`.
    pub fn rotation_degrees(&self) -> f64 {
        radians_to_degrees(-self.value(MSKEW_X).atan2(self.value(MSCALE_X)))
    }

    pub fn translation(&self) -> Point {
        Point::new(self.value(MTRANS_X), self.value(MTRANS_Y))
    }

    pub fn determinant(&self) -> f64 {
        self.value(MSCALE_X) * self.value(MSCALE_Y) - self.value(MSKEW_X) * self.value(MSKEW_Y)
    }

    /// Inverse transform, failing when the linear part is singular.
    pub fn inverted(&self) -> Result<AffineTransform2D> {
        let determinant = self.determinant();
        if determinant == 0.0 || !determinant.is_finite() {
            trace!("Refusing to invert singular transform {}", self);
            return Err(GeometryError::NotInvertible { determinant }.into());
        }
        self.matrix
            .try_inverse()
            .map(|matrix| Self { matrix })
            .ok_or_else(|| GeometryError::NotInvertible { determinant }.into())
    }

    /// Coefficient-wise comparison within `epsilon`.
    pub fn approx_eq(&self, other: &AffineTransform2D, epsilon: f64) -> bool {
        self.values()
            .iter()
            .zip(other.values().iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl fmt::Display for AffineTransform2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.values();
        write!(
            f,
            "[{:.3}, {:.3}, {:.3}][{:.3}, {:.3}, {:.3}]",
            v[0], v[1], v[2], v[3], v[4], v[5]
        )
    }
}
