//! Command-line arguments.

use crate::scenarios::Settings;
use clap::Parser;
use locus_kernels::{DEFAULT_BLOCK_SIZE, DEFAULT_CG_REPEATS, DEFAULT_REPEATS};
use std::path::PathBuf;

/// Benchmark cache-locality SpMV kernels on a sparse matrix file
#[derive(Parser, Debug, Clone)]
#[command(name = "locus-bench")]
#[command(about = "Benchmark Hilbert-sorted and blocked SpMV kernels on a matrix file")]
#[command(version)]
pub struct Args {
    /// Matrix file (`.sbm` binary or `.sdm` real-valued)
    pub matrix: PathBuf,

    /// Tile side for the blocked kernels
    #[arg(default_value_t = DEFAULT_BLOCK_SIZE, value_parser = parse_block_size)]
    pub block_size: usize,

    /// Transpose the matrix after loading
    #[arg(short, long)]
    pub transpose: bool,

    /// Read the file as a real-valued matrix even without a `.sdm` extension
    #[arg(long)]
    pub real: bool,

    /// Timed repetitions per scenario
    #[arg(long, default_value_t = DEFAULT_REPEATS)]
    pub repeats: usize,

    /// Timed repetitions of the ping-pong scenarios
    #[arg(long, default_value_t = DEFAULT_CG_REPEATS)]
    pub cg_repeats: usize,
}

impl Args {
    /// Whether the file holds values as well as coordinates.
    #[must_use]
    pub fn is_real(&self) -> bool {
        self.real || self.matrix.extension().is_some_and(|e| e == "sdm")
    }

    #[must_use]
    pub const fn settings(&self) -> Settings {
        Settings {
            block_size: self.block_size,
            repeats: self.repeats,
            cg_repeats: self.cg_repeats,
        }
    }
}

fn parse_block_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("block size must be at least 1".into()),
        Ok(v) => Ok(v),
        Err(e) => Err(e.to_string()),
    }
}
