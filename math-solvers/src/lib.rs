//! Dense linear solvers over fixed-point arithmetic
//!
//! Solves small dense systems `A x = b` where every value is a scaled
//! integer, using Gaussian elimination followed by back substitution. The
//! arithmetic (scale, rounding, overflow, division by zero) is delegated to
//! [`math_fixed_point`]; the algorithms here never special-case a result the
//! arithmetic produced.
//!
//! # Features
//!
//! - **Elimination**: in-place, with a sequential running-max pivot scan
//! - **Back substitution**: reads only the upper triangle
//! - **Flattened entry points**: row-major matrix plus right-hand side, size
//!   taken from [`SolverConfig`]
//! - **Batch solving**: independent systems, parallel with the `rayon` feature
//!
//! # Example
//!
//! ```
//! use math_fixed_solvers::{SolverConfig, solve_flat};
//!
//! let config = SolverConfig::with_dimension(2);
//! let fmt = config.format;
//! let a: Vec<_> = [1, 1, 2, 1].iter().map(|&v| fmt.from_int(v).unwrap()).collect();
//! let b: Vec<_> = [3, 4].iter().map(|&v| fmt.from_int(v).unwrap()).collect();
//!
//! let x = solve_flat(&config, &a, &b).unwrap();
//! assert_eq!(fmt.to_f64(x[0]), 1.0);
//! assert_eq!(fmt.to_f64(x[1]), 2.0);
//! ```

pub mod config;
pub mod direct;
pub mod error;
pub mod matrix;
pub mod parallel;
pub mod private;
pub mod solve;
pub mod system;

pub use math_fixed_point::{ArithmeticError, Fixed, FixedArithmetic, FixedFormat, Overflow, Rounding};

pub use config::SolverConfig;
pub use error::{Result, SolverError};
pub use private::{Party, Private};
pub use system::{FlatSystem, SystemInput, Values};

// Re-export solvers
pub use direct::{
    Elimination, GaussElimination, RowSwap, back_substitute, eliminate, gauss_factorize,
    gauss_solve,
};
pub use parallel::solve_batch;
pub use solve::{SolveReport, solve_detailed, solve_flat, solve_private};
