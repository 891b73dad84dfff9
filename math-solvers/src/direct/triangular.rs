//! Back substitution for upper-triangular fixed-point systems

use crate::error::Result;
use crate::matrix::system_dimension;
use math_fixed_point::{Fixed, FixedArithmetic};
use ndarray::{Array1, Array2};

/// Solve `U x = y` for upper-triangular `U`, last row first.
///
/// Only the diagonal and the entries above it are read. Division by a zero
/// diagonal entry is left to [`FixedArithmetic::divide`].
pub fn back_substitute<A: FixedArithmetic + ?Sized>(
    u: &Array2<Fixed>,
    y: &Array1<Fixed>,
    arith: &A,
) -> Result<Array1<Fixed>> {
    let n = system_dimension(u, y)?;
    let mut x = Array1::from_elem(n, arith.zero());

    x[n - 1] = arith.divide(y[n - 1], u[[n - 1, n - 1]])?;
    for i in (0..n - 1).rev() {
        let mut acc = arith.zero();
        for j in (i + 1)..n {
            acc = arith.add(acc, arith.multiply(x[j], u[[i, j]])?)?;
        }
        x[i] = arith.divide(arith.subtract(y[i], acc)?, u[[i, i]])?;
    }

    Ok(x)
}
