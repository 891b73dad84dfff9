//! Arithmetic seam between fixed-point formats and the algorithms using them

use crate::{Fixed, Result};

/// Fixed-point arithmetic primitives.
///
/// Every method is total: it either returns a value or a defined
/// [`ArithmeticError`](crate::ArithmeticError). Algorithms built on this trait
/// propagate those errors unchanged and never substitute values of their own.
pub trait FixedArithmetic: Send + Sync {
    /// Rescaled product `a * b`
    fn multiply(&self, a: Fixed, b: Fixed) -> Result<Fixed>;

    /// Rescaled quotient `a / b`
    fn divide(&self, a: Fixed, b: Fixed) -> Result<Fixed>;

    /// Sum `a + b`
    fn add(&self, a: Fixed, b: Fixed) -> Result<Fixed>;

    /// Difference `a - b`
    fn subtract(&self, a: Fixed, b: Fixed) -> Result<Fixed>;

    /// The representation of 1
    fn one(&self) -> Fixed;

    /// The representation of 0
    fn zero(&self) -> Fixed {
        Fixed::ZERO
    }
}
