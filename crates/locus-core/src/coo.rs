//! COO format definitions (binary and real-valued) and constructors

use crate::error::{Axis, LocusError, Result};

/// Largest supported row or column count; coordinates are stored as `u32`.
pub const MAX_DIM: usize = u32::MAX as usize;

/// Value stored with a nonzero.
///
/// Kernels are generic over the weight so the binary and the real-valued
/// matrix share one implementation. For [`Pattern`] the multiplication by one
/// folds away at compile time.
pub trait Weight: Copy + Send + Sync + 'static {
    fn value(self) -> f64;
}

/// Marker for a binary (structure-only) matrix: every stored entry is `1.0`.
///
/// `Vec<Pattern>` is zero-sized per element, so a binary matrix pays nothing
/// for its values array while still tracking `nnz` through its length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pattern;

impl Weight for Pattern {
    #[inline(always)]
    fn value(self) -> f64 {
        1.0
    }
}

impl Weight for f64 {
    #[inline(always)]
    fn value(self) -> f64 {
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Coo<W> {
    pub data: Vec<W>,
    pub row: Vec<u32>, // length nnz
    pub col: Vec<u32>, // length nnz
    pub ncols: usize,
    pub nrows: usize,
}

impl<W> Coo<W> {
    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Larger of the two dimensions; the side of the Hilbert square.
    #[inline]
    #[must_use]
    pub fn max_dim(&self) -> usize {
        self.nrows.max(self.ncols)
    }

    /// Iterate `(row, col, value)` triples in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, W)> + '_
    where
        W: Copy,
    {
        self.row
            .iter()
            .zip(&self.col)
            .zip(&self.data)
            .map(|((&r, &c), &w)| (r, c, w))
    }

    /// Build a matrix from parallel arrays, taking ownership without copying.
    ///
    /// Lengths and dimension limits are always checked; every coordinate is
    /// checked against the shape when `check` is set.
    pub fn from_parts(
        nrows: usize,
        ncols: usize,
        row: Vec<u32>,
        col: Vec<u32>,
        data: Vec<W>,
        check: bool,
    ) -> Result<Self> {
        if row.len() != data.len() || col.len() != data.len() {
            return Err(LocusError::LengthMismatch {
                row: row.len(),
                col: col.len(),
                data: data.len(),
            });
        }
        for dim in [nrows, ncols] {
            if dim > MAX_DIM {
                return Err(LocusError::DimensionTooLarge(dim));
            }
        }
        if check {
            check_axis(&row, nrows, Axis::Row)?;
            check_axis(&col, ncols, Axis::Col)?;
        }
        Ok(Self {
            data,
            row,
            col,
            ncols,
            nrows,
        })
    }

    #[inline]
    #[must_use]
    pub const fn from_parts_unchecked(
        nrows: usize,
        ncols: usize,
        row: Vec<u32>,
        col: Vec<u32>,
        data: Vec<W>,
    ) -> Self {
        Self {
            data,
            row,
            col,
            ncols,
            nrows,
        }
    }

    /// Matrix with the given shape and no stored entries.
    #[must_use]
    pub const fn empty(nrows: usize, ncols: usize) -> Self {
        Self::from_parts_unchecked(nrows, ncols, Vec::new(), Vec::new(), Vec::new())
    }
}

impl Coo<Pattern> {
    /// Binary matrix from coordinates alone.
    pub fn from_pattern(
        nrows: usize,
        ncols: usize,
        row: Vec<u32>,
        col: Vec<u32>,
        check: bool,
    ) -> Result<Self> {
        let data = vec![Pattern; row.len()];
        Self::from_parts(nrows, ncols, row, col, data, check)
    }
}

fn check_axis(idx: &[u32], bound: usize, axis: Axis) -> Result<()> {
    match idx.iter().position(|&i| i as usize >= bound) {
        Some(position) => Err(LocusError::IndexOutOfBounds {
            axis,
            position,
            index: u64::from(idx[position]),
            bound,
        }),
        None => Ok(()),
    }
}
