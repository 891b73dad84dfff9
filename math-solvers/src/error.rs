//! Error type shared by the solvers

use math_fixed_point::ArithmeticError;
use thiserror::Error;

/// Errors that can occur while setting up or solving a fixed-point system
#[derive(Error, Debug)]
pub enum SolverError {
    /// Raised by the fixed-point primitives and passed through unchanged
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    #[error("Dimension mismatch in {what}: expected {expected}, got {got}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("System dimension must be at least 1")]
    EmptySystem,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SolverError>;
