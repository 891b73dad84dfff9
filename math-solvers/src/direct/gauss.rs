//! Gaussian elimination with sequential pivoting
//!
//! Reduces a fixed-point system to upper-triangular form. The pivot search
//! walks the rows below the diagonal in order and swaps whenever an entry is
//! strictly greater (as a signed value) than the current diagonal entry, so
//! the diagonal is a running maximum and every improvement is a separate
//! swap. This is not textbook partial pivoting: magnitudes are not compared
//! and the row order left behind differs from a single max-then-swap.

use crate::direct::triangular::back_substitute;
use crate::error::Result;
use crate::matrix::{identity, swap_rows_from, system_dimension};
use math_fixed_point::{Fixed, FixedArithmetic};
use ndarray::{Array1, Array2};
use serde::Serialize;

/// A row interchange performed during elimination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowSwap {
    /// Elimination step (and diagonal row) at which the swap happened
    pub step: usize,
    /// Row exchanged with the diagonal row
    pub row: usize,
}

/// By-products of an in-place elimination
#[derive(Debug, Clone, Serialize)]
pub struct Elimination {
    /// Unit lower-triangular factor; multipliers below the diagonal
    pub lower: Array2<Fixed>,
    /// Swaps in the order they were performed
    pub swaps: Vec<RowSwap>,
}

/// Reduce `m` to upper-triangular form in place, applying the same row
/// operations to `b`.
///
/// There is no zero-pivot check: a zero diagonal entry is handed to
/// [`FixedArithmetic::divide`] and its result (or error) is used as is.
/// Entries left below the diagonal are rounding residue and are not read by
/// [`back_substitute`].
pub fn eliminate<A: FixedArithmetic + ?Sized>(
    m: &mut Array2<Fixed>,
    b: &mut Array1<Fixed>,
    arith: &A,
) -> Result<Elimination> {
    let n = system_dimension(m, b)?;
    let mut lower = identity(n, arith);
    let mut swaps = Vec::new();

    for i in 0..n - 1 {
        for k in (i + 1)..n {
            if m[[k, i]] > m[[i, i]] {
                log::debug!(
                    "step {}: row {} ({}) exceeds pivot ({}), swapping",
                    i,
                    k,
                    m[[k, i]],
                    m[[i, i]]
                );
                swap_rows_from(m, b, i, k, i);
                swaps.push(RowSwap { step: i, row: k });
            }
        }

        let pivot = m[[i, i]];
        for k in (i + 1)..n {
            let factor = arith.divide(m[[k, i]], pivot)?;
            lower[[k, i]] = factor;

            for j in i..n {
                let update = arith.multiply(factor, m[[i, j]])?;
                m[[k, j]] = arith.subtract(m[[k, j]], update)?;
            }
            let update = arith.multiply(factor, b[i])?;
            b[k] = arith.subtract(b[k], update)?;
        }
    }

    Ok(Elimination { lower, swaps })
}

/// A system reduced to upper-triangular form
#[derive(Debug, Clone, Serialize)]
pub struct GaussElimination {
    /// Eliminated matrix; only the upper triangle is meaningful
    pub upper: Array2<Fixed>,
    /// Right-hand side after the same row operations
    pub rhs: Array1<Fixed>,
    /// Unit lower-triangular factor
    pub lower: Array2<Fixed>,
    /// Swaps in the order they were performed
    pub swaps: Vec<RowSwap>,
    /// Matrix dimension
    pub n: usize,
}

impl GaussElimination {
    /// Solve the triangular system by back substitution
    pub fn solve<A: FixedArithmetic + ?Sized>(&self, arith: &A) -> Result<Array1<Fixed>> {
        back_substitute(&self.upper, &self.rhs, arith)
    }
}

/// Eliminate copies of `a` and `b`, leaving the inputs untouched
pub fn gauss_factorize<A: FixedArithmetic + ?Sized>(
    a: &Array2<Fixed>,
    b: &Array1<Fixed>,
    arith: &A,
) -> Result<GaussElimination> {
    let mut upper = a.clone();
    let mut rhs = b.clone();
    let Elimination { lower, swaps } = eliminate(&mut upper, &mut rhs, arith)?;
    let n = upper.nrows();
    Ok(GaussElimination {
        upper,
        rhs,
        lower,
        swaps,
        n,
    })
}

/// Solve `A x = b` by elimination followed by back substitution
pub fn gauss_solve<A: FixedArithmetic + ?Sized>(
    a: &Array2<Fixed>,
    b: &Array1<Fixed>,
    arith: &A,
) -> Result<Array1<Fixed>> {
    gauss_factorize(a, b, arith)?.solve(arith)
}
