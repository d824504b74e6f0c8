//! `locus-bench`: time Hilbert-sorted and blocked SpMV kernels on a matrix file.
//!
//! ```bash
//! # binary matrix, default block size (1024)
//! locus-bench matrix.sbm
//!
//! # real-valued matrix, 4096-wide tiles, transposed
//! locus-bench matrix.sdm 4096 -t
//!
//! # more detail
//! RUST_LOG=debug locus-bench matrix.sbm
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use locus_bench::{run, Args};
use locus_core::{Coo, Weight};
use locus_io::{extrema, read_sbm, read_sdm};
use locus_kernels::transpose_in_place;

fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    tracing::info!(version = locus_core::VERSION, "locus-bench starting");
    println!("Benchmarking A*x with '{}'.", args.matrix.display());
    if args.is_real() {
        let a = read_sdm(&args.matrix)
            .with_context(|| format!("failed to read {}", args.matrix.display()))?;
        bench(a, &args)
    } else {
        let a = read_sbm(&args.matrix)
            .with_context(|| format!("failed to read {}", args.matrix.display()))?;
        bench(a, &args)
    }
}

fn bench<W: Weight>(mut a: Coo<W>, args: &Args) -> Result<()> {
    if args.transpose {
        transpose_in_place(&mut a);
    }
    println!("Size of A is {} x {}.", a.nrows, a.ncols);
    println!("Number of nonzeros = {}", a.nnz());
    println!("Number of repeats = {}", args.repeats);
    println!("Number of CG repeats = {}", args.cg_repeats);
    if let (Some(rows), Some(cols)) = (extrema(&a.row), extrema(&a.col)) {
        tracing::info!(?rows, ?cols, "coordinate extrema");
    }
    println!("Block size = {}", args.block_size);

    for report in run(a, &args.settings())? {
        println!("{report}");
    }
    Ok(())
}
