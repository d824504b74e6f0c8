mod common;

use common::{assert_vec_close, random_coo, random_pattern, random_vec, scenario_matrix, triples};
use locus_core::{Coo, LocusError, Pattern};
use locus_kernels::*;

fn simple_coo() -> Coo<f64> {
    // A = [[1,0,2],[0,3,0]] in COO
    let row = vec![0u32, 1, 0];
    let col = vec![0u32, 1, 2];
    let data = vec![1.0f64, 3.0, 2.0];
    Coo::from_parts(2, 3, row, col, data, true).unwrap()
}

#[test]
fn test_spmv_coo() {
    let a = simple_coo();
    let y = spmv_coo(&a, &[10.0, 20.0, 30.0]).unwrap();
    assert_vec_close(&y, &[70.0, 60.0]);
}

#[test]
fn test_spmv_t_coo() {
    let a = simple_coo();
    let y = spmv_t_coo(&a, &[1.0, 2.0]).unwrap();
    assert_vec_close(&y, &[1.0, 6.0, 2.0]);
}

#[test]
fn test_scenario_naive_blocked_sorted() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let want = [1.0, 3.0, 2.0, 4.0];

    let mut a = scenario_matrix();
    assert_eq!(spmv_coo(&a, &x).unwrap(), want);

    let b = build_blocked(&a, 2).unwrap();
    assert_eq!(spmv_blocked(&b, &x).unwrap(), want);

    sort_coo_by_hilbert(&mut a);
    assert!(is_hilbert_sorted(&a));
    assert_eq!(spmv_coo(&a, &x).unwrap(), want);
}

#[test]
fn test_empty_matrix_gives_zeros() {
    let a: Coo<Pattern> = Coo::empty(3, 4);
    let x = [1.0; 4];
    assert_eq!(spmv_coo(&a, &x).unwrap(), vec![0.0; 3]);
    assert_eq!(spmv_t_coo(&a, &[1.0; 3]).unwrap(), vec![0.0; 4]);
    let b = build_blocked(&a, 2).unwrap();
    assert_eq!(b.nblocks(), 0);
    assert_eq!(spmv_blocked(&b, &x).unwrap(), vec![0.0; 3]);
    assert_eq!(spmm_blocked_4(&b, &[1.0; 16]).unwrap(), vec![0.0; 12]);
}

#[test]
fn test_vector_length_is_checked() {
    let a = simple_coo();
    let err = spmv_coo(&a, &[1.0, 2.0]).unwrap_err();
    assert_eq!(
        err,
        LocusError::VectorLength {
            expected: 3,
            actual: 2
        }
    );
    let mut y = vec![0.0; 5];
    assert!(spmv_coo_into(&mut y, &a, &[1.0; 3]).is_err());
    assert!(spmv_t_coo(&a, &[1.0; 3]).is_err());
}

#[test]
fn test_into_overwrites_previous_contents() {
    let a = simple_coo();
    let mut y = vec![99.0; 2];
    spmv_coo_into(&mut y, &a, &[10.0, 20.0, 30.0]).unwrap();
    assert_vec_close(&y, &[70.0, 60.0]);
}

#[test]
fn test_transpose_coo_kernel_basic() {
    let a = simple_coo();
    let t = transpose_coo(&a);
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t.row, vec![0u32, 1, 2]);
    assert_eq!(t.col, vec![0u32, 1, 0]);
    assert_eq!(t.data, a.data);
    // input untouched
    assert_eq!(a.shape(), (2, 3));
    assert_eq!(a.row, vec![0u32, 1, 0]);
}

#[test]
fn test_transpose_in_place_matches_transpose_multiply() {
    let a = random_coo(17, 9, 60, 1);
    let x = random_vec(17, 2);
    let want = spmv_t_coo(&a, &x).unwrap();
    let mut t = a.clone();
    transpose_in_place(&mut t);
    assert_eq!(t.shape(), (9, 17));
    assert_vec_close(&spmv_coo(&t, &x).unwrap(), &want);
}

#[test]
fn test_transpose_involution() {
    let a = random_coo(13, 21, 80, 3);
    let tt = transpose_coo(&transpose_coo(&a));
    assert_eq!(tt.shape(), a.shape());
    assert_eq!(triples(&tt.row, &tt.col, &tt.data), triples(&a.row, &a.col, &a.data));

    let mut b = a.clone();
    transpose_in_place(&mut b);
    transpose_in_place(&mut b);
    assert_eq!(b, a);
}

#[test]
fn test_hilbert_sort_invariance() {
    let mut a = random_coo(300, 170, 2000, 11);
    let x = random_vec(170, 12);
    let before_triples = triples(&a.row, &a.col, &a.data);
    let before = spmv_coo(&a, &x).unwrap();

    sort_coo_by_hilbert(&mut a);

    assert_eq!(first_unsorted_nonzero(&a), None);
    let keys = hilbert_keys(&a);
    assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(triples(&a.row, &a.col, &a.data), before_triples);
    assert_vec_close(&spmv_coo(&a, &x).unwrap(), &before);
}

#[test]
fn test_hilbert_sort_binary_matrix() {
    let mut a = random_pattern(64, 200, 500, 5);
    let x = random_vec(200, 6);
    let before = spmv_coo(&a, &x).unwrap();
    let mut coords: Vec<(u32, u32)> = a.row.iter().copied().zip(a.col.iter().copied()).collect();
    coords.sort_unstable();

    sort_coo_by_hilbert(&mut a);

    assert!(is_hilbert_sorted(&a));
    let mut after: Vec<(u32, u32)> = a.row.iter().copied().zip(a.col.iter().copied()).collect();
    after.sort_unstable();
    assert_eq!(after, coords);
    assert_vec_close(&spmv_coo(&a, &x).unwrap(), &before);
}

#[test]
fn test_unsorted_matrix_is_detected() {
    // (1,0) is the last cell of the 2x2 curve, (0,0) the first
    let a = Coo::from_pattern(2, 2, vec![1, 0], vec![0, 0], true).unwrap();
    assert_eq!(first_unsorted_nonzero(&a), Some(1));
    assert!(!is_hilbert_sorted(&a));
}

#[test]
fn test_spmm_coo_matches_columns() {
    let a = simple_coo();
    // X row-major (3x2): [[1,2],[3,4],[5,6]]
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let y = spmm_coo_n(&a, &x, 2).unwrap();
    assert_vec_close(&y, &[11.0, 14.0, 9.0, 12.0]);
    assert_eq!(spmm_coo_n(&a, &x, 0).unwrap_err(), LocusError::InvalidWidth(0));
}
