//! Nonzero reordering: Hilbert order for COO, and per-tile orders for blocked matrices.

use crate::hilbert::{ceil_power_of_two, distance_to_xy, xy_to_distance};
use crate::sort::{first_unsorted, sort_with};
use crate::util::idx;
use locus_core::{Blocked, Coo};
use tracing::debug;

/// Hilbert side covering a whole matrix.
#[inline]
#[must_use]
pub fn hilbert_side(nrows: usize, ncols: usize) -> u64 {
    ceil_power_of_two(nrows.max(ncols) as u64)
}

/// Hilbert distance of every nonzero, in storage order.
#[must_use]
pub fn hilbert_keys<W>(a: &Coo<W>) -> Vec<u64> {
    let n = hilbert_side(a.nrows, a.ncols);
    a.row
        .iter()
        .zip(&a.col)
        .map(|(&i, &j)| xy_to_distance(n, i, j))
        .collect()
}

/// Index of the first nonzero whose Hilbert distance is smaller than its
/// predecessor's, or `None` when the matrix is in Hilbert order.
#[must_use]
pub fn first_unsorted_nonzero<W>(a: &Coo<W>) -> Option<usize> {
    first_unsorted(&hilbert_keys(a))
}

#[inline]
#[must_use]
pub fn is_hilbert_sorted<W>(a: &Coo<W>) -> bool {
    first_unsorted_nonzero(a).is_none()
}

/// Reorder the nonzeros of `a` along the Hilbert curve.
///
/// Only the values travel with the keys; coordinates are rebuilt from the
/// sorted distances, which determine them uniquely.
pub fn sort_coo_by_hilbert<W>(a: &mut Coo<W>) {
    let n = hilbert_side(a.nrows, a.ncols);
    let mut keys = hilbert_keys(a);
    sort_with(&mut keys, &mut a.data);
    for ((r, c), &d) in a.row.iter_mut().zip(a.col.iter_mut()).zip(&keys) {
        (*r, *c) = distance_to_xy(n, d);
    }
    debug!(nnz = keys.len(), side = n, "sorted COO by Hilbert distance");
}

/// Reorder the nonzeros inside every tile along a Hilbert curve over the
/// tile's local coordinates. Tile membership does not change.
///
/// All tiles share one curve of side `ceil_power_of_two(min(block_size,
/// max(nrows, ncols)))`, so equal local positions get equal keys everywhere.
pub fn sort_blocks_by_hilbert<W>(b: &mut Blocked<W>) {
    let side = b.block_size.min(b.nrows.max(b.ncols));
    let n = ceil_power_of_two(side as u64);
    let Blocked {
        block_size,
        blocks,
        row,
        col,
        data,
        ..
    } = b;
    let bs = *block_size;
    let mut keys: Vec<u64> = Vec::new();
    for blk in blocks.iter() {
        let r0 = idx(blk.block_row) * bs;
        let c0 = idx(blk.block_col) * bs;
        let p = blk.range();
        let rows = &mut row[p.clone()];
        let cols = &mut col[p.clone()];
        keys.clear();
        keys.extend(
            rows.iter()
                .zip(cols.iter())
                .map(|(&i, &j)| xy_to_distance(n, local(i, r0), local(j, c0))),
        );
        sort_with(&mut keys, &mut data[p]);
        for ((r, c), &d) in rows.iter_mut().zip(cols.iter_mut()).zip(&keys) {
            let (lr, lc) = distance_to_xy(n, d);
            *r = global(lr, r0);
            *c = global(lc, c0);
        }
    }
    debug!(nblocks = blocks.len(), side = n, "sorted tiles by Hilbert distance");
}

/// Reorder the nonzeros inside every tile by row, then column.
pub fn sort_blocks_by_row<W>(b: &mut Blocked<W>) {
    let Blocked {
        blocks,
        row,
        col,
        data,
        ..
    } = b;
    let mut keys: Vec<u64> = Vec::new();
    for blk in blocks.iter() {
        let p = blk.range();
        keys.clear();
        keys.extend(
            row[p.clone()]
                .iter()
                .zip(&col[p.clone()])
                .map(|(&i, &j)| (u64::from(i) << 32) | u64::from(j)),
        );
        sort_with(
            &mut keys,
            &mut (&mut row[p.clone()], &mut col[p.clone()], &mut data[p]),
        );
    }
    debug!(nblocks = blocks.len(), "sorted tiles by row");
}

#[inline(always)]
fn local(i: u32, origin: usize) -> u32 {
    #[allow(clippy::cast_possible_truncation)]
    {
        (idx(i) - origin) as u32
    }
}

#[inline(always)]
fn global(i: u32, origin: usize) -> u32 {
    #[allow(clippy::cast_possible_truncation)]
    {
        (idx(i) + origin) as u32
    }
}
