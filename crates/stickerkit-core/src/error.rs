//! Error handling for StickerKit
//!
//! Interactive paths (gestures, layer operations, removals) never fail: they
//! are silent no-ops. Errors only surface from explicit geometry queries that
//! cannot be answered and from I/O at the edges of the system.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised by queries that need a well-formed transform or a non-empty
/// sticker, such as mapping a screen point back into sticker space.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The transform has a zero determinant
    #[error("Transform is not invertible (determinant {determinant})")]
    NotInvertible {
        /// The determinant of the linear part.
        determinant: f64,
    },

    /// A sticker or surface has a zero or negative extent
    #[error("Degenerate size {width}x{height}")]
    DegenerateSize {
        /// The offending width.
        width: f64,
        /// The offending height.
        height: f64,
    },
}

/// Main error type for StickerKit
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
