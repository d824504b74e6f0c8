//! Blocked COO: nonzeros partitioned into square tiles

use std::ops::Range;

/// Directory entry for one non-empty tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub block_row: u32,
    pub block_col: u32,
    pub start: usize, // into Blocked::{row, col, data}
    pub end: usize,
}

impl Block {
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end == self.start
    }

    #[inline]
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Sparse matrix stored tile by tile.
///
/// Each tile covers rows `block_row * block_size ..` and columns
/// `block_col * block_size ..` (clipped to the matrix shape). Its nonzeros are
/// contiguous in `row`/`col`/`data` and keep their global coordinates. Only
/// non-empty tiles have a directory entry, ordered row-major by
/// `(block_row, block_col)`.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Blocked<W> {
    pub nrows: usize,
    pub ncols: usize,
    pub block_size: usize,
    pub blocks: Vec<Block>,
    pub row: Vec<u32>,
    pub col: Vec<u32>,
    pub data: Vec<W>,
}

impl<W> Blocked<W> {
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

    /// Tile grid dimensions `(ceil(nrows / bs), ceil(ncols / bs))`.
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> (usize, usize) {
        (
            self.nrows.div_ceil(self.block_size),
            self.ncols.div_ceil(self.block_size),
        )
    }

    /// Number of non-empty tiles.
    #[inline]
    #[must_use]
    pub fn nblocks(&self) -> usize {
        self.blocks.len()
    }

    /// Row range covered by a tile, clipped to the matrix.
    #[inline]
    #[must_use]
    pub fn row_window(&self, b: &Block) -> Range<usize> {
        let r0 = b.block_row as usize * self.block_size;
        r0..(r0 + self.block_size).min(self.nrows)
    }

    /// Column range covered by a tile, clipped to the matrix.
    #[inline]
    #[must_use]
    pub fn col_window(&self, b: &Block) -> Range<usize> {
        let c0 = b.block_col as usize * self.block_size;
        c0..(c0 + self.block_size).min(self.ncols)
    }

    #[inline]
    #[must_use]
    pub const fn from_parts_unchecked(
        nrows: usize,
        ncols: usize,
        block_size: usize,
        blocks: Vec<Block>,
        row: Vec<u32>,
        col: Vec<u32>,
        data: Vec<W>,
    ) -> Self {
        Self {
            nrows,
            ncols,
            block_size,
            blocks,
            row,
            col,
            data,
        }
    }
}
