// ============================================================================
// Fixed-Point Real
// Signed 64-bit scaled integer with a fixed binary point at bit 28
// ============================================================================

use super::convert::{FromFixed, ToFixed};
use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of fractional bits in the representation.
pub const FRACTIONAL_BITS: u32 = 28;

/// Deterministic fixed-point real number.
///
/// Internally stores `value × 2^28` as an i64, giving a range of roughly
/// ±3.4 × 10^10 with a resolution of 2^-28 (~3.7 × 10^-9). Every operation
/// works on the raw integer, so results are bit-identical on every target.
///
/// Out-of-domain inputs never panic: division by zero, `log` of a
/// non-positive value and `exp` overflow return saturated sentinels, and
/// overflowing multiplication wraps.
///
/// # Example
/// ```
/// use deterministic_fixed::Fixed;
///
/// let x = Fixed::from(3) / Fixed::from(2);
/// assert_eq!(x.to_f64(), 1.5);
/// assert_eq!(Fixed::ONE / Fixed::ZERO, Fixed::MAX);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Fixed(i64);

impl Fixed {
    /// The scale factor (2^FRACTIONAL_BITS)
    pub const SCALE: i64 = 1 << FRACTIONAL_BITS;

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One (1.0)
    pub const ONE: Self = Self(1 << FRACTIONAL_BITS);

    /// One half (0.5)
    pub const HALF: Self = Self(1 << (FRACTIONAL_BITS - 1));

    /// Smallest positive value (2^-28)
    pub const EPSILON: Self = Self(1);

    /// Maximum representable value, also the saturation sentinel
    pub const MAX: Self = Self(i64::MAX);

    /// Minimum representable value
    pub const MIN: Self = Self(i64::MIN);

    /// π
    pub const PI: Self = Self(0x3243_F6A8);

    /// 2π
    pub const TWO_PI: Self = Self(0x6487_ED51);

    /// π/2
    pub const HALF_PI: Self = Self(0x1921_FB54);

    /// π/4
    pub const QUARTER_PI: Self = Self(0x0C90_FDAA);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation.
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create from any native numeric type.
    ///
    /// Integers are shifted into place, floats are scaled and truncated
    /// toward zero.
    #[inline]
    pub fn from_num<T: ToFixed>(value: T) -> Self {
        value.to_fixed()
    }

    /// Create from an integer value, rejecting values that do not fit.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if `value × 2^28` leaves the i64 range.
    #[inline]
    pub fn from_integer(value: i64) -> NumericResult<Self> {
        value.checked_mul(Self::SCALE).map(Self).ok_or(if value < 0 {
            NumericError::Underflow
        } else {
            NumericError::Overflow
        })
    }

    /// Create from integer and raw fractional parts.
    ///
    /// `fraction` is in units of 2^-28 and must be below `SCALE`. The
    /// fraction takes the sign of `integer`, so `from_parts(-5, SCALE / 2)`
    /// is -5.5.
    ///
    /// # Errors
    /// - `InvalidInput` if `fraction >= SCALE`
    /// - `Overflow`/`Underflow` if the integer part does not fit
    #[inline]
    pub fn from_parts(integer: i64, fraction: u32) -> NumericResult<Self> {
        if i64::from(fraction) >= Self::SCALE {
            return Err(NumericError::InvalidInput);
        }

        let int_part = Self::from_integer(integer)?;
        let frac_signed = if integer < 0 {
            -i64::from(fraction)
        } else {
            i64::from(fraction)
        };

        int_part.0.checked_add(frac_signed).map(Self).ok_or(if integer < 0 {
            NumericError::Underflow
        } else {
            NumericError::Overflow
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled by 2^28).
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Get the integer part (truncated toward zero).
    #[inline]
    pub const fn integer_part(self) -> i64 {
        self.0 / Self::SCALE
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if value is positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Check if value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// -1, 0 or 1 depending on the sign.
    #[inline]
    pub const fn signum(self) -> Self {
        Self(self.0.signum() << FRACTIONAL_BITS)
    }

    /// Convert to any native numeric type, truncating toward zero.
    #[inline]
    pub fn to_num<T: FromFixed>(self) -> T {
        T::from_fixed(self)
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.to_num()
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        self.to_num()
    }

    #[inline]
    pub fn to_i64(self) -> i64 {
        self.to_num()
    }

    #[inline]
    pub fn to_i32(self) -> i32 {
        self.to_num()
    }

    /// Add one.
    #[inline]
    pub fn inc(&mut self) {
        self.0 = self.0.wrapping_add(Self::SCALE);
    }

    /// Subtract one.
    #[inline]
    pub fn dec(&mut self) {
        self.0 = self.0.wrapping_sub(Self::SCALE);
    }

    // ========================================================================
    // Checked Arithmetic
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_add(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 > 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_sub(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 < 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Checked multiplication.
    ///
    /// Uses an i128 intermediate only to detect overflow; when it returns
    /// `Ok` the value is bit-identical to `self * rhs`.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        let product = i128::from(self.0) * i128::from(rhs.0);
        let result = product / i128::from(Self::SCALE);

        if result > i128::from(i64::MAX) {
            Err(NumericError::Overflow)
        } else if result < i128::from(i64::MIN) {
            Err(NumericError::Underflow)
        } else {
            Ok(self * rhs)
        }
    }

    /// Checked division.
    ///
    /// # Errors
    /// - `DivisionByZero` instead of the saturated `MAX`
    /// - `Overflow`/`Underflow` if the quotient is out of range
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.0 == 0 {
            return Err(NumericError::DivisionByZero);
        }

        let quotient = (i128::from(self.0) << FRACTIONAL_BITS) / i128::from(rhs.0);

        if quotient > i128::from(i64::MAX) {
            Err(NumericError::Overflow)
        } else if quotient < i128::from(i64::MIN) {
            Err(NumericError::Underflow)
        } else {
            Ok(self / rhs)
        }
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed({}, raw={:#x})", self, self.0)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f64(), f)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Fixed {
    /// Convert from rust_decimal::Decimal, truncating toward zero.
    ///
    /// # Errors
    /// Returns `Overflow`/`Underflow` if the value is out of range.
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        let out_of_range = if d.is_sign_negative() {
            NumericError::Underflow
        } else {
            NumericError::Overflow
        };

        let scaled = d
            .checked_mul(Decimal::from(Self::SCALE))
            .ok_or(out_of_range)?;

        scaled.trunc().to_i64().map(Self).ok_or(out_of_range)
    }

    /// Convert from rust_decimal::Decimal, rejecting values that are not an
    /// exact multiple of 2^-28.
    ///
    /// # Errors
    /// - `PrecisionLoss` if truncation would drop significant digits
    /// - `Overflow`/`Underflow` if the value is out of range
    pub fn from_decimal_exact(d: Decimal) -> NumericResult<Self> {
        let value = Self::from_decimal(d)?;
        if value.to_decimal() != d {
            return Err(NumericError::PrecisionLoss);
        }
        Ok(value)
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// Exact for magnitudes below about 2^35; larger values are rounded to
    /// Decimal's 28 significant digits.
    pub fn to_decimal(self) -> Decimal {
        Decimal::from(self.0) / Decimal::from(Self::SCALE)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Fixed {
    type Err = NumericError;

    /// Parse from a decimal string, truncating digits below 2^-28.
    ///
    /// # Examples
    /// - "123" -> 123.0
    /// - "-0.5" -> -0.5
    /// - "0.1" -> 0.099999999627...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let d = Decimal::from_str_exact(s).map_err(|_| NumericError::InvalidInput)?;
        Self::from_decimal(d)
    }
}

// ============================================================================
// Tests
// ============================================================================
