#![allow(dead_code)]

use locus_core::{Coo, Pattern};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

pub fn assert_vec_close(got: &[f64], want: &[f64]) {
    assert_eq!(got.len(), want.len(), "length mismatch");
    for (i, (&g, &w)) in got.iter().zip(want).enumerate() {
        assert!(approx_eq(g, w), "component {i}: got {g}, want {w}");
    }
}

pub fn random_coo(nrows: usize, ncols: usize, nnz: usize, seed: u64) -> Coo<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut row = Vec::with_capacity(nnz);
    let mut col = Vec::with_capacity(nnz);
    let mut data = Vec::with_capacity(nnz);
    for _ in 0..nnz {
        row.push(rng.gen_range(0..nrows as u32));
        col.push(rng.gen_range(0..ncols as u32));
        data.push(rng.gen_range(-1.0..1.0));
    }
    Coo::from_parts(nrows, ncols, row, col, data, true).unwrap()
}

pub fn random_pattern(nrows: usize, ncols: usize, nnz: usize, seed: u64) -> Coo<Pattern> {
    let a = random_coo(nrows, ncols, nnz, seed);
    Coo::from_pattern(nrows, ncols, a.row, a.col, true).unwrap()
}

pub fn random_vec(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

/// Sorted (row, col, value bits) triples, for multiset comparisons.
pub fn triples(row: &[u32], col: &[u32], data: &[f64]) -> Vec<(u32, u32, u64)> {
    let mut t: Vec<(u32, u32, u64)> = row
        .iter()
        .zip(col)
        .zip(data)
        .map(|((&r, &c), &v)| (r, c, v.to_bits()))
        .collect();
    t.sort_unstable();
    t
}

/// The 4x4 permutation-like matrix used across the scenario tests.
pub fn scenario_matrix() -> Coo<Pattern> {
    Coo::from_pattern(4, 4, vec![0, 1, 2, 3], vec![0, 2, 1, 3], true).unwrap()
}
