//! The fixed-point scalar type

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed-point number stored as its raw scaled integer.
///
/// The scale is not part of the value: the same raw integer means different
/// reals under different [`FixedFormat`](crate::FixedFormat)s. Ordering is the
/// ordering of the raw integers, which matches the ordering of the reals for
/// any fixed scale.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Fixed(i32);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);
    pub const MAX: Fixed = Fixed(i32::MAX);
    pub const MIN: Fixed = Fixed(i32::MIN);

    /// Wrap a raw scaled integer
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Fixed(raw)
    }

    /// The raw scaled integer
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Absolute value.
    ///
    /// `Fixed::MIN` has no positive counterpart and maps to `Fixed::MAX`.
    #[inline]
    pub const fn abs(self) -> Self {
        Fixed(self.0.saturating_abs())
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
