//! Direct solvers for fixed-point linear systems
//!
//! This module provides:
//! - [`eliminate`]: in-place Gaussian elimination with sequential pivoting
//! - [`back_substitute`]: solution of the resulting upper-triangular system
//! - [`gauss_solve`]: both steps on copies of the inputs

mod gauss;
mod triangular;

pub use gauss::{Elimination, GaussElimination, RowSwap, eliminate, gauss_factorize, gauss_solve};
pub use triangular::back_substitute;
