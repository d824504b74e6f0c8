#![allow(
    clippy::many_single_char_names,
    reason = "Math kernels conventionally use i/j/k/p for indices"
)]
//! Batched multiply `Y = A @ X` for `k` right-hand sides.
//!
//! `X` is `ncols x k` and `Y` is `nrows x k`, both row-major, i.e. the `k`
//! values belonging to one row index are adjacent (`X[j * k + c]`). Each
//! nonzero is read once and feeds `k` multiply-adds. The 2- and 4-wide kernels
//! only exist so the inner loop has a constant trip count; they produce the
//! same numbers as [`spmm_blocked_n`].

use crate::util::{check_batch, idx};
use locus_core::{Blocked, Coo, Result, Weight};
use wide::f64x4;

/// Y = A @ X for COO with runtime width `k`
pub fn spmm_coo_n_into<W: Weight>(y: &mut [f64], a: &Coo<W>, x: &[f64], k: usize) -> Result<()> {
    check_batch(x.len(), a.ncols, k)?;
    check_batch(y.len(), a.nrows, k)?;
    y.fill(0.0);
    for ((&i, &j), &w) in a.row.iter().zip(&a.col).zip(&a.data) {
        let v = w.value();
        let yi = &mut y[idx(i) * k..(idx(i) + 1) * k];
        let xj = &x[idx(j) * k..(idx(j) + 1) * k];
        for (yc, &xc) in yi.iter_mut().zip(xj) {
            *yc += xc * v;
        }
    }
    Ok(())
}

/// Y = A @ X for COO, X is (ncols, k) row-major; returns Y as (nrows, k) row-major
pub fn spmm_coo_n<W: Weight>(a: &Coo<W>, x: &[f64], k: usize) -> Result<Vec<f64>> {
    let mut y = vec![0.0f64; a.nrows * k];
    spmm_coo_n_into(&mut y, a, x, k)?;
    Ok(y)
}

/// Walk the tiles of `b`, handing each nonzero to `f` with the tile-local
/// offsets of its `y` and `x` slots (already scaled by `k`).
#[inline(always)]
fn for_each_tile<W: Weight, F>(y: &mut [f64], b: &Blocked<W>, x: &[f64], k: usize, mut f: F)
where
    F: FnMut(&mut [f64], &[f64], usize, usize, f64),
{
    for blk in &b.blocks {
        let rw = b.row_window(blk);
        let cw = b.col_window(blk);
        let (r0, c0) = (rw.start, cw.start);
        let ys = &mut y[rw.start * k..rw.end * k];
        let xs = &x[cw.start * k..cw.end * k];
        let p = blk.range();
        for ((&i, &j), &w) in b.row[p.clone()].iter().zip(&b.col[p.clone()]).zip(&b.data[p]) {
            f(&mut *ys, xs, (idx(i) - r0) * k, (idx(j) - c0) * k, w.value());
        }
    }
}

/// Y = A @ X for a blocked matrix, two right-hand sides
pub fn spmm_blocked_2_into<W: Weight>(y: &mut [f64], b: &Blocked<W>, x: &[f64]) -> Result<()> {
    check_batch(x.len(), b.ncols, 2)?;
    check_batch(y.len(), b.nrows, 2)?;
    y.fill(0.0);
    for_each_tile(y, b, x, 2, |ys, xs, yi, xj, v| {
        ys[yi] += xs[xj] * v;
        ys[yi + 1] += xs[xj + 1] * v;
    });
    Ok(())
}

pub fn spmm_blocked_2<W: Weight>(b: &Blocked<W>, x: &[f64]) -> Result<Vec<f64>> {
    let mut y = vec![0.0f64; b.nrows * 2];
    spmm_blocked_2_into(&mut y, b, x)?;
    Ok(y)
}

/// Y = A @ X for a blocked matrix, four right-hand sides in one SIMD lane group
pub fn spmm_blocked_4_into<W: Weight>(y: &mut [f64], b: &Blocked<W>, x: &[f64]) -> Result<()> {
    check_batch(x.len(), b.ncols, 4)?;
    check_batch(y.len(), b.nrows, 4)?;
    y.fill(0.0);
    for_each_tile(y, b, x, 4, |ys, xs, yi, xj, v| {
        let vb = f64x4::new([xs[xj], xs[xj + 1], xs[xj + 2], xs[xj + 3]]);
        let vy = f64x4::new([ys[yi], ys[yi + 1], ys[yi + 2], ys[yi + 3]]);
        let r = vy + vb * f64x4::splat(v);
        ys[yi..yi + 4].copy_from_slice(&r.to_array());
    });
    Ok(())
}

pub fn spmm_blocked_4<W: Weight>(b: &Blocked<W>, x: &[f64]) -> Result<Vec<f64>> {
    let mut y = vec![0.0f64; b.nrows * 4];
    spmm_blocked_4_into(&mut y, b, x)?;
    Ok(y)
}

/// Y = A @ X for a blocked matrix with runtime width `k`
pub fn spmm_blocked_n_into<W: Weight>(
    y: &mut [f64],
    b: &Blocked<W>,
    x: &[f64],
    k: usize,
) -> Result<()> {
    check_batch(x.len(), b.ncols, k)?;
    check_batch(y.len(), b.nrows, k)?;
    y.fill(0.0);
    for_each_tile(y, b, x, k, |ys, xs, yi, xj, v| {
        for (yc, &xc) in ys[yi..yi + k].iter_mut().zip(&xs[xj..xj + k]) {
            *yc += xc * v;
        }
    });
    Ok(())
}

pub fn spmm_blocked_n<W: Weight>(b: &Blocked<W>, x: &[f64], k: usize) -> Result<Vec<f64>> {
    let mut y = vec![0.0f64; b.nrows * k];
    spmm_blocked_n_into(&mut y, b, x, k)?;
    Ok(y)
}
