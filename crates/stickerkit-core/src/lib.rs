//! # StickerKit Core
//!
//! Core types and utilities for StickerKit.
//! Provides the affine transform model, the small 2D geometry vocabulary
//! (points, rectangles, distance and rotation helpers) and the unified
//! error type shared by the other crates.

pub mod error;
pub mod geometry;
pub mod transform;
pub mod types;

pub use error::{Error, GeometryError, Result};

pub use geometry::{
    calculate_distance, calculate_midpoint, calculate_rotation, radians_to_degrees, trap_to_rect,
    Point, Rect,
};

pub use transform::AffineTransform2D;

// Re-export type aliases for convenience
pub use types::{shared, Shared, SharedVec};
