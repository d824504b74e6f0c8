//! Core data structures for Locus (pure Rust)
//!
//! Locus multiplies very large sparse matrices by dense vectors on a single
//! core, relying on nonzero ordering (Hilbert curve) and tiling (blocks) to keep
//! the working set inside the cache. This crate only holds the containers and
//! their invariants; the algorithms live in `locus-kernels`.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod blocked;
pub mod coo;
pub mod error;

pub use blocked::{Block, Blocked};
pub use coo::{Coo, Pattern, Weight};
pub use error::{Axis, LocusError, Result};
