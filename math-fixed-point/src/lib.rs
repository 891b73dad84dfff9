//! Scaled-integer fixed-point arithmetic
//!
//! Values are stored as `i32` with a configurable number of fractional bits.
//! Multiplication and division rescale through a 64-bit intermediate and
//! follow an explicit rounding mode and overflow policy, so every operation
//! has a defined result (or a defined error) for every input, including a
//! zero divisor.
//!
//! # Example
//! ```
//! use math_fixed_point::{FixedArithmetic, FixedFormat};
//!
//! let fmt = FixedFormat::default(); // Q15.16, truncating, wrapping
//! let a = fmt.from_f64(1.5).unwrap();
//! let b = fmt.from_f64(2.0).unwrap();
//! let c = fmt.multiply(a, b).unwrap();
//! assert_eq!(fmt.to_f64(c), 3.0);
//! ```

mod format;
mod scalar;
mod traits;

pub use format::{FixedFormat, MAX_FRAC_BITS, Overflow, Rounding};
pub use scalar::Fixed;
pub use traits::FixedArithmetic;

/// Errors produced by fixed-point operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Fixed-point overflow in {op}")]
    Overflow { op: &'static str },

    #[error("Value is not a finite real number")]
    NotFinite,

    #[error("Unsupported number of fractional bits: {frac_bits} (maximum {max})")]
    InvalidFormat { frac_bits: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, ArithmeticError>;
