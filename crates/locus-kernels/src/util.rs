//! Tuning defaults and shared precondition checks for the kernels
//
// The defaults mirror what the benchmark driver exposes on its command line.
// The checks turn caller mistakes on dense buffers into `LocusError` values
// instead of out-of-bounds panics deep inside a kernel.

use locus_core::{LocusError, Result};

/// Tile side used when the caller does not choose one.
///
/// 1024 doubles of `x` plus 1024 of `y` is 16 KiB, comfortably inside L1/L2.
pub const DEFAULT_BLOCK_SIZE: usize = 1024;
/// Timed repetitions per single-shot scenario.
pub const DEFAULT_REPEATS: usize = 10;
/// Timed repetitions of the `y = A x; x = A' y` ping-pong scenarios.
pub const DEFAULT_CG_REPEATS: usize = 100;

/// Ensure a dense buffer has exactly `expected` elements.
#[inline]
pub fn check_len(actual: usize, expected: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(LocusError::VectorLength { expected, actual })
    }
}

/// Ensure an interleaved `len x k` buffer has the right size.
#[inline]
pub fn check_batch(actual: usize, len: usize, k: usize) -> Result<()> {
    if k == 0 {
        return Err(LocusError::InvalidWidth(k));
    }
    check_len(actual, len * k)
}

/// Coordinate as a slice index.
#[inline(always)]
#[must_use]
pub const fn idx(i: u32) -> usize {
    i as usize
}
