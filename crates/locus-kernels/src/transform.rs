use locus_core::Coo;
use tracing::trace;

/// Transpose in place by swapping the coordinate arrays and the shape. O(1).
pub fn transpose_in_place<W>(a: &mut Coo<W>) {
    std::mem::swap(&mut a.row, &mut a.col);
    std::mem::swap(&mut a.nrows, &mut a.ncols);
}

/// Transpose COO -> COO into freshly allocated arrays; `a` is left untouched.
#[must_use]
pub fn transpose_coo<W: Copy>(a: &Coo<W>) -> Coo<W> {
    trace!(nnz = a.nnz(), nrows = a.nrows, ncols = a.ncols, "transpose_coo");
    Coo::from_parts_unchecked(
        a.ncols,
        a.nrows,
        a.col.clone(),
        a.row.clone(),
        a.data.clone(),
    )
}
