//! Cache-locality kernels for Locus (pure Rust, single core, SIMD ready)
//!
//! Pipeline: a [`Coo`](locus_core::Coo) is optionally reordered along a
//! Hilbert curve ([`sort_coo_by_hilbert`]), tiled into a
//! [`Blocked`](locus_core::Blocked) matrix ([`build_blocked`]), and multiplied
//! by one ([`spmv_blocked`]) or several ([`spmm_blocked_2`],
//! [`spmm_blocked_4`], [`spmm_blocked_n`]) dense vectors. [`spmv_coo`] is the
//! reference every other kernel is checked against.

pub mod convert;
pub mod hilbert;
pub mod reorder;
pub mod sort;
pub mod spmm;
pub mod spmv;
pub mod transform;
pub mod util;

pub use convert::{blocked_to_coo, build_blocked};
pub use hilbert::{ceil_power_of_two, distance_to_xy, xy_to_distance};
pub use reorder::{
    first_unsorted_nonzero, hilbert_keys, hilbert_side, is_hilbert_sorted, sort_blocks_by_hilbert,
    sort_blocks_by_row, sort_coo_by_hilbert,
};
pub use sort::{first_unsorted, sort_keys, sort_with, Satellite};
pub use spmm::{
    spmm_blocked_2, spmm_blocked_2_into, spmm_blocked_4, spmm_blocked_4_into, spmm_blocked_n,
    spmm_blocked_n_into, spmm_coo_n, spmm_coo_n_into,
};
pub use spmv::{
    spmv_blocked, spmv_blocked_into, spmv_coo, spmv_coo_into, spmv_t_coo, spmv_t_coo_into,
};
pub use transform::{transpose_coo, transpose_in_place};
pub use util::{DEFAULT_BLOCK_SIZE, DEFAULT_CG_REPEATS, DEFAULT_REPEATS};
