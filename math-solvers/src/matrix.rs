//! Dense fixed-point matrix and vector helpers
//!
//! Matrices are `ndarray::Array2<Fixed>` in row-major order, vectors are
//! `Array1<Fixed>`. Entries are built through a [`FixedArithmetic`]
//! implementation so that rounding and overflow follow one format.

use crate::error::{Result, SolverError};
use math_fixed_point::{Fixed, FixedArithmetic};
use ndarray::{Array1, Array2};

/// Identity matrix in the given arithmetic
pub fn identity<A: FixedArithmetic + ?Sized>(n: usize, arith: &A) -> Array2<Fixed> {
    let mut m = Array2::from_elem((n, n), arith.zero());
    for i in 0..n {
        m[[i, i]] = arith.one();
    }
    m
}

/// Build an N×N matrix from a row-major slice
pub fn matrix_from_flat(n: usize, data: &[Fixed]) -> Result<Array2<Fixed>> {
    if n == 0 {
        return Err(SolverError::EmptySystem);
    }
    if data.len() != n * n {
        return Err(SolverError::DimensionMismatch {
            what: "flattened matrix",
            expected: n * n,
            got: data.len(),
        });
    }
    Array2::from_shape_vec((n, n), data.to_vec())
        .map_err(|e| SolverError::InvalidInput(e.to_string()))
}

/// Build a length-N vector from a slice
pub fn vector_from_slice(n: usize, data: &[Fixed]) -> Result<Array1<Fixed>> {
    if data.len() != n {
        return Err(SolverError::DimensionMismatch {
            what: "right-hand side",
            expected: n,
            got: data.len(),
        });
    }
    Ok(Array1::from_vec(data.to_vec()))
}

/// Check that `m` is square and `b` matches it; returns N
pub fn system_dimension(m: &Array2<Fixed>, b: &Array1<Fixed>) -> Result<usize> {
    let n = m.nrows();
    if n == 0 {
        return Err(SolverError::EmptySystem);
    }
    if m.ncols() != n {
        return Err(SolverError::DimensionMismatch {
            what: "matrix columns",
            expected: n,
            got: m.ncols(),
        });
    }
    if b.len() != n {
        return Err(SolverError::DimensionMismatch {
            what: "right-hand side",
            expected: n,
            got: b.len(),
        });
    }
    Ok(n)
}

/// Swap rows `i` and `k` of `m` from column `from_col` onward, and entries
/// `i` and `k` of `b`.
///
/// Columns before `from_col` are left untouched.
pub fn swap_rows_from(
    m: &mut Array2<Fixed>,
    b: &mut Array1<Fixed>,
    i: usize,
    k: usize,
    from_col: usize,
) {
    if i == k {
        return;
    }
    for j in from_col..m.ncols() {
        m.swap([i, j], [k, j]);
    }
    b.swap(i, k);
}

/// Largest raw difference between the upper triangle of `m` (diagonal
/// included) applied to `x`, and `y`.
///
/// Entries below the diagonal are ignored, which is how an eliminated matrix
/// is read even when rounding left residue there. Each row is summed exactly
/// in 128 bits and rescaled once by `frac_bits`, so the measure does not go
/// through any rounding or overflow policy and cannot fail. Saturates at
/// `i64::MAX`.
pub fn upper_residual(
    m: &Array2<Fixed>,
    x: &Array1<Fixed>,
    y: &Array1<Fixed>,
    frac_bits: u32,
) -> i64 {
    m.rows()
        .into_iter()
        .zip(y.iter())
        .enumerate()
        .map(|(i, (row, yi))| {
            let sum: i128 = (i..row.len().min(x.len()))
                .map(|j| i128::from(row[j].raw()) * i128::from(x[j].raw()))
                .sum();
            ((sum >> frac_bits) - i128::from(yi.raw())).unsigned_abs()
        })
        .max()
        .map_or(0, |d| i64::try_from(d).unwrap_or(i64::MAX))
}
