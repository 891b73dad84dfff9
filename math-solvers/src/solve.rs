//! Entry points taking flattened inputs
//!
//! The matrix arrives as a row-major slice of N×N values and the right-hand
//! side as N values, both already in the configured fixed-point format. N
//! comes from the [`SolverConfig`].

use crate::config::SolverConfig;
use crate::direct::{GaussElimination, gauss_factorize};
use crate::error::Result;
use crate::matrix::{matrix_from_flat, upper_residual, vector_from_slice};
use crate::private::Private;
use math_fixed_point::Fixed;
use ndarray::Array1;
use serde::Serialize;

/// Everything a solve produces
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    /// Triangularized system, multipliers and swaps
    pub elimination: GaussElimination,
    /// Solution vector
    pub solution: Array1<Fixed>,
    /// Largest raw difference between `U x`, computed exactly, and the
    /// transformed right-hand side
    pub residual: i64,
}

/// Solve a flattened system, returning the full report
pub fn solve_detailed(
    config: &SolverConfig,
    matrix: &[Fixed],
    rhs: &[Fixed],
) -> Result<SolveReport> {
    config.validate()?;
    let n = config.dimension;
    let a = matrix_from_flat(n, matrix)?;
    let b = vector_from_slice(n, rhs)?;
    let arith = &config.format;

    log::debug!(
        "solving {}x{} system with {} fractional bits",
        n,
        n,
        arith.frac_bits()
    );

    let elimination = gauss_factorize(&a, &b, arith)?;
    if config.verbosity > 0 {
        for swap in &elimination.swaps {
            log::info!("step {}: swapped rows {} and {}", swap.step, swap.step, swap.row);
        }
    }

    let solution = elimination.solve(arith)?;
    let residual = upper_residual(
        &elimination.upper,
        &solution,
        &elimination.rhs,
        arith.frac_bits(),
    );
    log::trace!("solution {:?}, residual {} raw units", solution, residual);

    Ok(SolveReport {
        elimination,
        solution,
        residual,
    })
}

/// Solve a flattened system
pub fn solve_flat(config: &SolverConfig, matrix: &[Fixed], rhs: &[Fixed]) -> Result<Vec<Fixed>> {
    let report = solve_detailed(config, matrix, rhs)?;
    Ok(report.solution.to_vec())
}

/// Solve a system whose inputs are marked as privately held.
///
/// The markers are dropped at the boundary; they have no effect on the result.
pub fn solve_private(
    config: &SolverConfig,
    matrix: Private<Vec<Fixed>>,
    rhs: Private<Vec<Fixed>>,
) -> Result<Vec<Fixed>> {
    solve_flat(config, &matrix.into_inner(), &rhs.into_inner())
}
