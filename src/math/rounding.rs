// ============================================================================
// Rounding
// floor / ceil / abs / modf on the raw representation
// ============================================================================

use crate::numeric::Fixed;

impl Fixed {
    /// Largest integer value not above `self`.
    #[inline]
    pub fn floor(self) -> Self {
        let raw = self.raw();
        let frac = raw % Self::SCALE;
        if frac == 0 {
            return self;
        }
        let truncated = raw - frac;
        if raw < 0 {
            Self::from_raw(truncated.wrapping_sub(Self::SCALE))
        } else {
            Self::from_raw(truncated)
        }
    }

    /// Smallest integer value not below `self`.
    #[inline]
    pub fn ceil(self) -> Self {
        let raw = self.raw();
        let frac = raw % Self::SCALE;
        if frac == 0 {
            return self;
        }
        let truncated = raw - frac;
        if raw > 0 {
            Self::from_raw(truncated.wrapping_add(Self::SCALE))
        } else {
            Self::from_raw(truncated)
        }
    }

    /// Absolute value. `MIN.abs()` wraps to `MIN`.
    #[inline]
    pub fn abs(self) -> Self {
        Self::from_raw(self.raw().wrapping_abs())
    }

    /// Split into `(integral, fractional)` parts, both carrying the sign of
    /// `self`, so `integral + fractional == self`.
    ///
    /// # Example
    /// ```
    /// use deterministic_fixed::Fixed;
    ///
    /// let (int, frac) = Fixed::from(-2.75).modf();
    /// assert_eq!(int, Fixed::from(-2));
    /// assert_eq!(frac, Fixed::from(-0.75));
    /// ```
    #[inline]
    pub fn modf(self) -> (Self, Self) {
        let raw = self.raw();
        let frac = raw % Self::SCALE;
        (Self::from_raw(raw - frac), Self::from_raw(frac))
    }
}
