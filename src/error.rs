//! Error types for grid operations.

use crate::Coord;

/// Errors raised when a grid precondition is violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A grid was requested with a zero dimension, or one too large to address.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// A coordinate or index falls outside the grid.
    #[error("coordinate {coord} is outside of the {width}x{height} grid")]
    OutOfRange {
        /// The offending coordinate.
        coord: Coord,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },
}

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;
