#![allow(
    clippy::many_single_char_names,
    reason = "Math kernels conventionally use i/j/k/p to denote indices and pointers"
)]
use crate::util::{check_len, idx};
use locus_core::{Blocked, Coo, Result, Weight};

/// y = A @ x for COO, into a caller buffer of length `nrows`.
///
/// Reference kernel: visits nonzeros in storage order, so its access pattern
/// over `x` and `y` is whatever order the matrix happens to be in.
pub fn spmv_coo_into<W: Weight>(y: &mut [f64], a: &Coo<W>, x: &[f64]) -> Result<()> {
    check_len(x.len(), a.ncols)?;
    check_len(y.len(), a.nrows)?;
    y.fill(0.0);
    for ((&i, &j), &w) in a.row.iter().zip(&a.col).zip(&a.data) {
        y[idx(i)] += x[idx(j)] * w.value();
    }
    Ok(())
}

/// y = A @ x for COO
pub fn spmv_coo<W: Weight>(a: &Coo<W>, x: &[f64]) -> Result<Vec<f64>> {
    let mut y = vec![0.0f64; a.nrows];
    spmv_coo_into(&mut y, a, x)?;
    Ok(y)
}

/// y = A' @ x for COO without materializing the transpose; `y` has length `ncols`.
pub fn spmv_t_coo_into<W: Weight>(y: &mut [f64], a: &Coo<W>, x: &[f64]) -> Result<()> {
    check_len(x.len(), a.nrows)?;
    check_len(y.len(), a.ncols)?;
    y.fill(0.0);
    for ((&i, &j), &w) in a.row.iter().zip(&a.col).zip(&a.data) {
        y[idx(j)] += x[idx(i)] * w.value();
    }
    Ok(())
}

/// y = A' @ x for COO
pub fn spmv_t_coo<W: Weight>(a: &Coo<W>, x: &[f64]) -> Result<Vec<f64>> {
    let mut y = vec![0.0f64; a.ncols];
    spmv_t_coo_into(&mut y, a, x)?;
    Ok(y)
}

/// y = A @ x for a blocked matrix, into a caller buffer of length `nrows`.
///
/// Each tile only reads its column window of `x` and writes its row window of
/// `y`, so with a suitable `block_size` both windows stay cache resident while
/// the tile is processed.
pub fn spmv_blocked_into<W: Weight>(y: &mut [f64], b: &Blocked<W>, x: &[f64]) -> Result<()> {
    check_len(x.len(), b.ncols)?;
    check_len(y.len(), b.nrows)?;
    y.fill(0.0);
    for blk in &b.blocks {
        let rw = b.row_window(blk);
        let cw = b.col_window(blk);
        let (r0, c0) = (rw.start, cw.start);
        let ys = &mut y[rw];
        let xs = &x[cw];
        let p = blk.range();
        for ((&i, &j), &w) in b.row[p.clone()].iter().zip(&b.col[p.clone()]).zip(&b.data[p]) {
            ys[idx(i) - r0] += xs[idx(j) - c0] * w.value();
        }
    }
    Ok(())
}

/// y = A @ x for a blocked matrix
pub fn spmv_blocked<W: Weight>(b: &Blocked<W>, x: &[f64]) -> Result<Vec<f64>> {
    let mut y = vec![0.0f64; b.nrows];
    spmv_blocked_into(&mut y, b, x)?;
    Ok(y)
}
