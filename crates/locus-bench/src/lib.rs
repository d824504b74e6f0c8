//! Benchmark driver for Locus
//!
//! Loads a matrix file and times every kernel configuration on it: naive COO
//! before and after Hilbert sorting, blocked single- and multi-vector
//! multiplies, the `y = A x; x = A' y` ping-pong, and blocked multiplies after
//! re-sorting each tile.

pub mod cli;
pub mod scenarios;

pub use cli::Args;
pub use scenarios::{run, Report, Settings};
