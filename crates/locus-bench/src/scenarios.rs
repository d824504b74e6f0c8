//! Timed kernel scenarios.
//!
//! Scenarios run in a fixed order because later ones build on earlier state:
//! the matrix is Hilbert-sorted before it is blocked, and the tile re-sorts
//! happen last.

use anyhow::{bail, Result};
use cpu_time::ProcessTime;
use locus_core::{Coo, Weight};
use locus_kernels::{
    build_blocked, first_unsorted_nonzero, sort_blocks_by_hilbert, sort_blocks_by_row,
    sort_coo_by_hilbert, spmm_blocked_2_into, spmm_blocked_4_into, spmm_blocked_n_into,
    spmv_blocked_into, spmv_coo_into, transpose_coo,
};
use std::fmt;
use std::time::Instant;
use tracing::{debug, info};

/// Largest accepted difference between products of the same matrix.
pub const TOLERANCE: f64 = 1e-6;

/// Knobs for one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub block_size: usize,
    pub repeats: usize,
    pub cg_repeats: usize,
}

/// Mean wall and process CPU time per call of one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub label: &'static str,
    pub wall_secs: f64,
    pub cpu_secs: f64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]\tWall: {:.5e}\tcpu: {:.5e}",
            self.label, self.wall_secs, self.cpu_secs
        )
    }
}

/// `x[i] = sin(7i + 0.3)` for a single vector; column `c` of a `k`-wide input
/// is `sin(7i + 17c + 0.3)`, except the second column of a 2-wide input,
/// which is `sin(11i - 0.2)`.
#[must_use]
pub fn input_vectors(len: usize, k: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(len * k);
    for i in 0..len {
        let fi = i as f64;
        for c in 0..k {
            let v = match (k, c) {
                (2, 1) => (11.0 * fi - 0.2).sin(),
                _ => (7.0 * fi + 17.0 * c as f64 + 0.3).sin(),
            };
            out.push(v);
        }
    }
    out
}

fn time<F>(label: &'static str, repeats: usize, mut f: F) -> Result<Report>
where
    F: FnMut() -> locus_core::Result<()>,
{
    let wall = Instant::now();
    let cpu = ProcessTime::now();
    for _ in 0..repeats {
        f()?;
    }
    let per_call = repeats.max(1) as f64;
    let cpu_secs = cpu.elapsed().as_secs_f64() / per_call;
    let wall_secs = wall.elapsed().as_secs_f64() / per_call;
    debug!(label, repeats, wall_secs, cpu_secs, "scenario finished");
    Ok(Report {
        label,
        wall_secs,
        cpu_secs,
    })
}

fn ensure_close(label: &str, got: &[f64], want: &[f64]) -> Result<()> {
    for (j, (&g, &w)) in got.iter().zip(want).enumerate() {
        if (g - w).abs() > TOLERANCE {
            bail!("{label}: y[{j}] = {g} differs from reference {w}");
        }
    }
    Ok(())
}

/// Run every scenario on `a` and return one report per scenario.
///
/// Fails if a reordered or blocked product disagrees with the unsorted one.
pub fn run<W: Weight>(mut a: Coo<W>, s: &Settings) -> Result<Vec<Report>> {
    let (nrows, ncols) = a.shape();
    let mut reports = Vec::new();

    let x = input_vectors(ncols, 1);
    let x2 = input_vectors(ncols, 2);
    let x4 = input_vectors(ncols, 4);
    let mut y = vec![0.0f64; nrows];
    let mut y2 = vec![0.0f64; nrows * 2];
    let mut y4 = vec![0.0f64; nrows * 4];

    reports.push(time("unsorted", s.repeats, || spmv_coo_into(&mut y, &a, &x))?);
    let mut reference = vec![0.0f64; nrows];
    spmv_coo_into(&mut reference, &a, &x)?;

    sort_coo_by_hilbert(&mut a);
    if let Some(p) = first_unsorted_nonzero(&a) {
        bail!("matrix is not in Hilbert order at nonzero {p}");
    }
    spmv_coo_into(&mut y, &a, &x)?;
    ensure_close("sort", &y, &reference)?;
    reports.push(time("sort", s.repeats, || spmv_coo_into(&mut y, &a, &x))?);

    info!(block_size = s.block_size, "building blocked matrices");
    let mut b = build_blocked(&a, s.block_size)?;
    let bt = build_blocked(&transpose_coo(&a), s.block_size)?;
    debug!(nblocks = b.nblocks(), nblocks_t = bt.nblocks(), "blocked");

    spmv_blocked_into(&mut y, &b, &x)?;
    ensure_close("block", &y, &reference)?;
    reports.push(time("block", s.repeats, || spmv_blocked_into(&mut y, &b, &x))?);
    reports.push(time("2xblock", s.repeats, || spmm_blocked_2_into(&mut y2, &b, &x2))?);
    reports.push(time("2xblock*", s.repeats, || {
        spmm_blocked_n_into(&mut y2, &b, &x2, 2)
    })?);

    let mut xp = x.clone();
    reports.push(time("cg", s.cg_repeats, || {
        spmv_blocked_into(&mut y, &b, &xp)?;
        spmv_blocked_into(&mut xp, &bt, &y)
    })?);
    let mut xp2 = x2.clone();
    reports.push(time("cg2", s.cg_repeats, || {
        spmm_blocked_2_into(&mut y2, &b, &xp2)?;
        spmm_blocked_2_into(&mut xp2, &bt, &y2)
    })?);

    reports.push(time("4xblock", s.repeats, || spmm_blocked_4_into(&mut y4, &b, &x4))?);

    sort_blocks_by_hilbert(&mut b);
    reports.push(time("sort+block", s.repeats, || spmv_blocked_into(&mut y, &b, &x))?);

    sort_blocks_by_row(&mut b);
    reports.push(time("rowsort+block", s.repeats, || spmv_blocked_into(&mut y, &b, &x))?);
    spmv_blocked_into(&mut y, &b, &x)?;
    ensure_close("rowsort+block", &y, &reference)?;

    Ok(reports)
}
