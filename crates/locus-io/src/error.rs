//! Error types for matrix file IO.

use locus_core::LocusError;
use thiserror::Error;

/// Error type for reading and writing matrix files.
#[derive(Debug, Error)]
pub enum IoError {
    /// Underlying reader or writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stream ended before the named section was complete.
    #[error("file is truncated while reading {0}")]
    Truncated(&'static str),

    /// A header field is negative or does not fit the platform.
    #[error("invalid header field {field} = {value}")]
    InvalidHeader { field: &'static str, value: i64 },

    /// On-disk coordinates are 1-based; zero or negative values are corrupt.
    #[error("{axis} coordinate {value} at position {position} is not 1-based")]
    NotOneBased {
        axis: &'static str,
        position: usize,
        value: i32,
    },

    /// A coordinate cannot be represented in the on-disk `i32` encoding.
    #[error("coordinate {0} does not fit the 1-based i32 file encoding")]
    CoordinateTooLarge(u32),

    /// Decoded contents violate a matrix invariant.
    #[error(transparent)]
    Matrix(#[from] LocusError),
}

/// Result type for matrix file IO.
pub type Result<T> = std::result::Result<T, IoError>;
