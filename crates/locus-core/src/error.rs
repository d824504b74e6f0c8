//! Error types shared by the Locus crates.

use std::fmt;
use thiserror::Error;

/// Which coordinate of a nonzero an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => f.write_str("row"),
            Self::Col => f.write_str("col"),
        }
    }
}

/// Error type for matrix construction and kernel preconditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocusError {
    /// Parallel coordinate/value arrays differ in length.
    #[error("row/col/data must have equal length (row {row}, col {col}, data {data})")]
    LengthMismatch { row: usize, col: usize, data: usize },

    /// A stored coordinate lies outside the matrix.
    #[error("{axis} index {index} at position {position} out of bounds for dimension {bound}")]
    IndexOutOfBounds {
        axis: Axis,
        position: usize,
        index: u64,
        bound: usize,
    },

    /// A dimension cannot be addressed with 32-bit coordinates.
    #[error("dimension {0} exceeds the 32-bit coordinate range")]
    DimensionTooLarge(usize),

    /// Tile side must be at least one.
    #[error("block size must be at least 1, got {0}")]
    InvalidBlockSize(usize),

    /// Dense operand or output buffer has the wrong length.
    #[error("vector length mismatch: expected {expected}, got {actual}")]
    VectorLength { expected: usize, actual: usize },

    /// Number of right-hand sides for a batched kernel must be at least one.
    #[error("batch width must be at least 1, got {0}")]
    InvalidWidth(usize),
}

/// Result type for Locus operations.
pub type Result<T> = std::result::Result<T, LocusError>;
