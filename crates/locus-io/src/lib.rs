//! Matrix file IO for Locus
//!
//! Two little-endian binary layouts share one header of three `i64` values
//! (`nrow`, `ncol`, `nnz`) followed by `nnz` `i32` row indices and `nnz` `i32`
//! column indices, 1-based:
//!
//! - binary matrices (`.sbm`) stop there; every entry is an implicit one,
//! - real-valued matrices (`.sdm`) append `nnz` `f64` values.
//!
//! Readers convert to 0-based coordinates and validate them against the
//! header, so kernels never see an out-of-range index.

mod error;

pub use error::{IoError, Result};

use locus_core::{Coo, Pattern};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;
use tracing::debug;

/// Smallest and largest value, or `None` for an empty slice.
#[must_use]
pub fn extrema(values: &[u32]) -> Option<(u32, u32)> {
    let (&first, rest) = values.split_first()?;
    Some(rest.iter().fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))))
}

/// Upfront allocation cap; the header's claimed size is not trusted.
const PREALLOC_LIMIT: usize = 1 << 20;

fn read_bytes<R: Read>(r: &mut R, len: usize, what: &'static str) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(len.min(PREALLOC_LIMIT));
    r.by_ref().take(len as u64).read_to_end(&mut buf)?;
    if buf.len() < len {
        return Err(IoError::Truncated(what));
    }
    Ok(buf)
}

fn read_i64<R: Read>(r: &mut R, what: &'static str) -> Result<i64> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => IoError::Truncated(what),
        _ => IoError::Io(e),
    })?;
    Ok(i64::from_le_bytes(buf))
}

fn header_usize(field: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| IoError::InvalidHeader { field, value })
}

struct Header {
    nrows: usize,
    ncols: usize,
    nnz: usize,
}

fn read_header<R: Read>(r: &mut R) -> Result<Header> {
    let nrows = header_usize("nrow", read_i64(r, "header")?)?;
    let ncols = header_usize("ncol", read_i64(r, "header")?)?;
    let nnz = header_usize("nnz", read_i64(r, "header")?)?;
    Ok(Header { nrows, ncols, nnz })
}

/// Byte length of an `nnz`-element section.
fn section_len(nnz: usize, width: usize) -> Result<usize> {
    nnz.checked_mul(width).ok_or(IoError::InvalidHeader {
        field: "nnz",
        value: usize_to_i64(nnz),
    })
}

#[inline]
fn usize_to_i64(x: usize) -> i64 {
    // nnz comes from an i64 header and dimensions are bounded by u32
    debug_assert!(i64::try_from(x).is_ok(), "value must fit in i64");
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    {
        x as i64
    }
}

/// Read `nnz` 1-based `i32` coordinates and return them 0-based.
fn read_coords<R: Read>(r: &mut R, nnz: usize, axis: &'static str) -> Result<Vec<u32>> {
    let len = section_len(nnz, 4)?;
    let bytes = read_bytes(r, len, axis)?;
    bytes
        .chunks_exact(4)
        .enumerate()
        .map(|(position, b)| {
            let value = i32::from_le_bytes([b[0], b[1], b[2], b[3]]);
            u32::try_from(value)
                .ok()
                .and_then(|v| v.checked_sub(1))
                .ok_or(IoError::NotOneBased {
                    axis,
                    position,
                    value,
                })
        })
        .collect()
}

fn read_values<R: Read>(r: &mut R, nnz: usize) -> Result<Vec<f64>> {
    let len = section_len(nnz, 8)?;
    let bytes = read_bytes(r, len, "values")?;
    Ok(bytes
        .chunks_exact(8)
        .map(|b| f64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]))
        .collect())
}

/// Read a binary matrix from any byte stream.
pub fn read_sbm_from<R: Read>(mut r: R) -> Result<Coo<Pattern>> {
    let h = read_header(&mut r)?;
    let row = read_coords(&mut r, h.nnz, "row")?;
    let col = read_coords(&mut r, h.nnz, "col")?;
    Ok(Coo::from_pattern(h.nrows, h.ncols, row, col, true)?)
}

/// Read a real-valued matrix from any byte stream.
pub fn read_sdm_from<R: Read>(mut r: R) -> Result<Coo<f64>> {
    let h = read_header(&mut r)?;
    let row = read_coords(&mut r, h.nnz, "row")?;
    let col = read_coords(&mut r, h.nnz, "col")?;
    let data = read_values(&mut r, h.nnz)?;
    Ok(Coo::from_parts(h.nrows, h.ncols, row, col, data, true)?)
}

/// Load a binary matrix file.
pub fn read_sbm(path: impl AsRef<Path>) -> Result<Coo<Pattern>> {
    let path = path.as_ref();
    let a = read_sbm_from(BufReader::new(File::open(path)?))?;
    debug!(
        path = %path.display(),
        nrows = a.nrows,
        ncols = a.ncols,
        nnz = a.nnz(),
        "loaded binary matrix"
    );
    Ok(a)
}

/// Load a real-valued matrix file.
pub fn read_sdm(path: impl AsRef<Path>) -> Result<Coo<f64>> {
    let path = path.as_ref();
    let a = read_sdm_from(BufReader::new(File::open(path)?))?;
    debug!(
        path = %path.display(),
        nrows = a.nrows,
        ncols = a.ncols,
        nnz = a.nnz(),
        "loaded real matrix"
    );
    Ok(a)
}

fn write_header<W: Write, V>(w: &mut W, a: &Coo<V>) -> Result<()> {
    for v in [a.nrows, a.ncols, a.nnz()] {
        w.write_all(&usize_to_i64(v).to_le_bytes())?;
    }
    Ok(())
}

fn write_coords<W: Write>(w: &mut W, coords: &[u32]) -> Result<()> {
    for &c in coords {
        let one_based = i32::try_from(c)
            .ok()
            .and_then(|v| v.checked_add(1))
            .ok_or(IoError::CoordinateTooLarge(c))?;
        w.write_all(&one_based.to_le_bytes())?;
    }
    Ok(())
}

/// Write a binary matrix to any byte sink.
pub fn write_sbm_to<W: Write>(mut w: W, a: &Coo<Pattern>) -> Result<()> {
    write_header(&mut w, a)?;
    write_coords(&mut w, &a.row)?;
    write_coords(&mut w, &a.col)?;
    w.flush()?;
    Ok(())
}

/// Write a real-valued matrix to any byte sink.
pub fn write_sdm_to<W: Write>(mut w: W, a: &Coo<f64>) -> Result<()> {
    write_header(&mut w, a)?;
    write_coords(&mut w, &a.row)?;
    write_coords(&mut w, &a.col)?;
    for v in &a.data {
        w.write_all(&v.to_le_bytes())?;
    }
    w.flush()?;
    Ok(())
}

/// Save a binary matrix file.
pub fn write_sbm(path: impl AsRef<Path>, a: &Coo<Pattern>) -> Result<()> {
    write_sbm_to(BufWriter::new(File::create(path)?), a)
}

/// Save a real-valued matrix file.
pub fn write_sdm(path: impl AsRef<Path>, a: &Coo<f64>) -> Result<()> {
    write_sdm_to(BufWriter::new(File::create(path)?), a)
}
