//! Small 2D geometry vocabulary used across the workspace.
//!
//! Screen space has its origin at the top-left with Y growing downwards, so
//! a positive rotation turns clockwise on screen.

use serde::{Deserialize, Serialize};

/// A point in screen or sticker-local space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned rectangle stored as edges.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle spanning `(0, 0)` to `(width, height)`.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// True when the rectangle encloses no area.
    pub fn is_empty(&self) -> bool {
        !(self.left < self.right && self.top < self.bottom)
    }

    /// Half-open containment: the left and top edges are inside, the right
    /// and bottom edges are not. An empty rectangle contains nothing.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        !self.is_empty() && x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Swaps edges so that `left <= right` and `top <= bottom`.
    pub fn sort(&mut self) {
        if self.left > self.right {
            std::mem::swap(&mut self.left, &mut self.right);
        }
        if self.top > self.bottom {
            std::mem::swap(&mut self.top, &mut self.bottom);
        }
    }

    /// Smallest rectangle enclosing all `points`, or the zero rectangle for
    /// an empty slice.
    pub fn bounding(points: &[Point]) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };
        points.iter().skip(1).fold(
            Self::new(first.x, first.y, first.x, first.y),
            |r, p| Self::new(r.left.min(p.x), r.top.min(p.y), r.right.max(p.x), r.bottom.max(p.y)),
        )
    }
}

/// Encloses a (possibly rotated) quad in an axis-aligned rectangle.
///
/// Every coordinate is rounded to one decimal place first so that the
/// floating-point noise left over from un-rotating a quad does not nudge an
/// edge across a query point.
pub fn trap_to_rect(points: &[Point]) -> Rect {
    let rounded: Vec<Point> = points
        .iter()
        .map(|p| Point::new((p.x * 10.0).round() / 10.0, (p.y * 10.0).round() / 10.0))
        .collect();
    let mut rect = Rect::bounding(&rounded);
    rect.sort();
    rect
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / std::f64::consts::PI)
}

/// Euclidean distance between two pointers.
pub fn calculate_distance(a: Point, b: Point) -> f64 {
    a.distance_to(&b)
}

/// Angle in degrees of the line from `b` to `a` against the x-axis.
pub fn calculate_rotation(a: Point, b: Point) -> f64 {
    radians_to_degrees((a.y - b.y).atan2(a.x - b.x))
}

pub fn calculate_midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}
