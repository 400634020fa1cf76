//! Error types.

use crate::{Point, Rectangle};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// No node on the insertion path strictly contains the point. Either it is outside the root
    /// or it lies exactly on a split line.
    #[error("Point {point} is not inside any quadrant of {boundary}")]
    PointOutsideBoundary { point: Point, boundary: Rectangle },

    #[error("Invalid capacity: {0}, nodes must hold at least one point")]
    InvalidCapacity(usize),

    #[error("Invalid boundary: {0}, center must be finite and half extents finite and non-negative")]
    InvalidExtents(Rectangle),

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Config(#[from] toml::de::Error),
}
