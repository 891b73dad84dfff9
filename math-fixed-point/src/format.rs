//! Fixed-point formats: scale, rounding and overflow behaviour

use crate::traits::FixedArithmetic;
use crate::{ArithmeticError, Fixed, Result};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Largest supported number of fractional bits.
///
/// With 30 fractional bits the value 1 is still representable in an `i32`,
/// and a widened numerator (`i32 << 30`) still fits in an `i64`.
pub const MAX_FRAC_BITS: u32 = 30;

/// Rounding applied when a 64-bit intermediate is rescaled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    /// Products shift right arithmetically (round toward negative infinity),
    /// quotients truncate toward zero.
    #[default]
    Truncate,
    /// Round to nearest, ties away from zero.
    Nearest,
}

/// What happens when a result does not fit in 32 bits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Two's-complement wrap-around
    #[default]
    Wrapping,
    /// Clamp to `Fixed::MIN` / `Fixed::MAX`
    Saturating,
    /// Report [`ArithmeticError::Overflow`]
    Checked,
}

/// A fixed-point format: a binary scale plus rounding and overflow policies.
///
/// The scale is checked on construction and on deserialization, so every
/// format in hand has at most [`MAX_FRAC_BITS`] fractional bits.
///
/// A zero divisor yields `Fixed::MAX`/`Fixed::MIN` (by the numerator's sign,
/// `0 / 0 = 0`) under [`Overflow::Saturating`], and
/// [`ArithmeticError::DivisionByZero`] under the other policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FormatFields")]
pub struct FixedFormat {
    frac_bits: u32,
    rounding: Rounding,
    overflow: Overflow,
}

/// Unchecked serialized form of [`FixedFormat`]
#[derive(Deserialize)]
#[serde(default)]
struct FormatFields {
    frac_bits: u32,
    rounding: Rounding,
    overflow: Overflow,
}

impl Default for FormatFields {
    fn default() -> Self {
        let format = FixedFormat::default();
        Self {
            frac_bits: format.frac_bits,
            rounding: format.rounding,
            overflow: format.overflow,
        }
    }
}

impl TryFrom<FormatFields> for FixedFormat {
    type Error = ArithmeticError;

    fn try_from(fields: FormatFields) -> Result<Self> {
        Ok(FixedFormat::new(fields.frac_bits)?
            .with_rounding(fields.rounding)
            .with_overflow(fields.overflow))
    }
}

impl Default for FixedFormat {
    fn default() -> Self {
        Self {
            frac_bits: 16,
            rounding: Rounding::Truncate,
            overflow: Overflow::Wrapping,
        }
    }
}

impl FixedFormat {
    /// Create a truncating, wrapping format with `frac_bits` fractional bits
    pub fn new(frac_bits: u32) -> Result<Self> {
        Self::default().with_frac_bits(frac_bits)
    }

    /// Plain integers (scale 1)
    pub fn integer() -> Self {
        Self {
            frac_bits: 0,
            ..Default::default()
        }
    }

    /// Same policies with a different scale
    pub fn with_frac_bits(mut self, frac_bits: u32) -> Result<Self> {
        if frac_bits > MAX_FRAC_BITS {
            return Err(ArithmeticError::InvalidFormat {
                frac_bits,
                max: MAX_FRAC_BITS,
            });
        }
        self.frac_bits = frac_bits;
        Ok(self)
    }

    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Number of fractional bits (scale factor `2^frac_bits`)
    pub fn frac_bits(&self) -> u32 {
        self.frac_bits
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    pub fn overflow(&self) -> Overflow {
        self.overflow
    }

    /// Scale factor as a real number
    pub fn scale(&self) -> f64 {
        (1u64 << self.frac_bits) as f64
    }

    /// The real value of one raw unit
    pub fn ulp(&self) -> f64 {
        1.0 / self.scale()
    }

    /// Convert an integer to this format
    pub fn from_int(&self, value: i32) -> Result<Fixed> {
        self.narrow(i64::from(value) << self.frac_bits, "conversion")
    }

    /// Convert a real to this format, rounding to the nearest raw value
    pub fn from_f64(&self, value: f64) -> Result<Fixed> {
        if !value.is_finite() {
            return Err(ArithmeticError::NotFinite);
        }
        let scaled = (value * self.scale()).round();
        match scaled.to_i64() {
            Some(wide) => self.narrow(wide, "conversion"),
            None if self.overflow == Overflow::Saturating => Ok(if scaled > 0.0 {
                Fixed::MAX
            } else {
                Fixed::MIN
            }),
            None => Err(ArithmeticError::Overflow { op: "conversion" }),
        }
    }

    /// Convert a value of this format to a real
    pub fn to_f64(&self, value: Fixed) -> f64 {
        f64::from(value.raw()) / self.scale()
    }

    fn narrow(&self, wide: i64, op: &'static str) -> Result<Fixed> {
        match self.overflow {
            Overflow::Wrapping => Ok(Fixed::from_raw(wide as i32)),
            Overflow::Saturating => Ok(Fixed::from_raw(
                wide.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            )),
            Overflow::Checked => wide
                .to_i32()
                .map(Fixed::from_raw)
                .ok_or(ArithmeticError::Overflow { op }),
        }
    }

    fn rescale_product(&self, product: i64) -> i64 {
        let shift = self.frac_bits;
        match self.rounding {
            Rounding::Truncate => product >> shift,
            Rounding::Nearest if shift == 0 => product,
            Rounding::Nearest => {
                let half = 1i64 << (shift - 1);
                if product >= 0 {
                    (product + half) >> shift
                } else {
                    -((half - product) >> shift)
                }
            }
        }
    }

    fn rescale_quotient(&self, numerator: i64, denominator: i64) -> i64 {
        let quotient = numerator / denominator;
        match self.rounding {
            Rounding::Truncate => quotient,
            Rounding::Nearest => {
                let remainder = numerator % denominator;
                if 2 * remainder.abs() >= denominator.abs() {
                    quotient + numerator.signum() * denominator.signum()
                } else {
                    quotient
                }
            }
        }
    }
}

impl FixedArithmetic for FixedFormat {
    fn multiply(&self, a: Fixed, b: Fixed) -> Result<Fixed> {
        let product = i64::from(a.raw()) * i64::from(b.raw());
        self.narrow(self.rescale_product(product), "multiply")
    }

    fn divide(&self, a: Fixed, b: Fixed) -> Result<Fixed> {
        if b.is_zero() {
            return match self.overflow {
                Overflow::Saturating => Ok(match a.raw().signum() {
                    1 => Fixed::MAX,
                    -1 => Fixed::MIN,
                    _ => Fixed::ZERO,
                }),
                Overflow::Wrapping | Overflow::Checked => Err(ArithmeticError::DivisionByZero),
            };
        }
        let numerator = i64::from(a.raw()) << self.frac_bits;
        let quotient = self.rescale_quotient(numerator, i64::from(b.raw()));
        self.narrow(quotient, "divide")
    }

    fn add(&self, a: Fixed, b: Fixed) -> Result<Fixed> {
        self.narrow(i64::from(a.raw()) + i64::from(b.raw()), "add")
    }

    fn subtract(&self, a: Fixed, b: Fixed) -> Result<Fixed> {
        self.narrow(i64::from(a.raw()) - i64::from(b.raw()), "subtract")
    }

    fn one(&self) -> Fixed {
        Fixed::from_raw(1i32 << self.frac_bits)
    }
}
