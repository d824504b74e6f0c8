use crate::util::idx;
use locus_core::{Block, Blocked, Coo, LocusError, Result};
use tracing::debug;

#[inline]
fn usize_to_u32(x: usize) -> u32 {
    debug_assert!(u32::try_from(x).is_ok(), "value must fit in u32");
    #[allow(clippy::cast_possible_truncation)]
    {
        x as u32
    }
}

/// One stable counting-sort pass: reorder `order` by `key`, which must map
/// into `0..nbuckets`.
fn bucket_pass(order: &[usize], nbuckets: usize, key: impl Fn(usize) -> usize) -> Vec<usize> {
    let mut next = vec![0usize; nbuckets + 1];
    for &p in order {
        next[key(p) + 1] += 1;
    }
    for b in 0..nbuckets {
        next[b + 1] += next[b];
    }
    let mut out = vec![0usize; order.len()];
    for &p in order {
        let b = key(p);
        out[next[b]] = p;
        next[b] += 1;
    }
    out
}

/// Convert COO -> blocked COO with square tiles of side `block_size`.
///
/// Two stable counting passes (block column, then block row) put the
/// nonzeros in row-major tile order in `O(nnz + grid)` time, keeping the
/// original relative order inside each tile. Empty tiles get no directory
/// entry. The source matrix is copied, not consumed.
pub fn build_blocked<W: Copy>(a: &Coo<W>, block_size: usize) -> Result<Blocked<W>> {
    if block_size == 0 {
        return Err(LocusError::InvalidBlockSize(block_size));
    }
    let nnz = a.nnz();
    let grid_rows = a.nrows.div_ceil(block_size);
    let grid_cols = a.ncols.div_ceil(block_size);

    let order: Vec<usize> = (0..nnz).collect();
    let order = bucket_pass(&order, grid_cols, |p| idx(a.col[p]) / block_size);
    let order = bucket_pass(&order, grid_rows, |p| idx(a.row[p]) / block_size);

    let row: Vec<u32> = order.iter().map(|&p| a.row[p]).collect();
    let col: Vec<u32> = order.iter().map(|&p| a.col[p]).collect();
    let data: Vec<W> = order.iter().map(|&p| a.data[p]).collect();

    let mut blocks: Vec<Block> = Vec::new();
    let mut start = 0usize;
    while start < nnz {
        let br = idx(row[start]) / block_size;
        let bc = idx(col[start]) / block_size;
        let mut end = start + 1;
        while end < nnz && idx(row[end]) / block_size == br && idx(col[end]) / block_size == bc {
            end += 1;
        }
        blocks.push(Block {
            block_row: usize_to_u32(br),
            block_col: usize_to_u32(bc),
            start,
            end,
        });
        start = end;
    }

    debug!(
        nnz,
        block_size,
        grid_rows,
        grid_cols,
        nblocks = blocks.len(),
        "built blocked matrix"
    );
    Ok(Blocked::from_parts_unchecked(
        a.nrows, a.ncols, block_size, blocks, row, col, data,
    ))
}

/// Convert blocked COO -> COO; nonzeros come out in tile order.
#[must_use]
pub fn blocked_to_coo<W: Copy>(b: &Blocked<W>) -> Coo<W> {
    Coo::from_parts_unchecked(
        b.nrows,
        b.ncols,
        b.row.clone(),
        b.col.clone(),
        b.data.clone(),
    )
}
