// ============================================================================
// Trigonometry
// Scalar functions layered over the CORDIC engine
// ============================================================================

use crate::numeric::Fixed;

impl Fixed {
    /// Sine of an angle in radians.
    #[inline]
    pub fn sin(self) -> Self {
        self.sin_cos().0
    }

    /// Cosine of an angle in radians.
    #[inline]
    pub fn cos(self) -> Self {
        self.sin_cos().1
    }

    /// Tangent, computed as `sin / cos`.
    ///
    /// Where the cosine rounds to zero the division saturates to `MAX`.
    #[inline]
    pub fn tan(self) -> Self {
        let (sin, cos) = self.sin_cos();
        sin / cos
    }

    /// Arctangent in `(-π/2, π/2)`.
    #[inline]
    pub fn atan(self) -> Self {
        Self::to_polar(Self::ONE, self).1
    }

    /// Four-quadrant arctangent of `self / x`, in `(-π, π]`.
    ///
    /// # Example
    /// ```
    /// use deterministic_fixed::Fixed;
    ///
    /// let angle = Fixed::from(1).atan2(Fixed::from(-1));
    /// assert!((angle.to_f64() - 3.0 * std::f64::consts::FRAC_PI_4).abs() < 1e-7);
    /// ```
    #[inline]
    pub fn atan2(self, x: Self) -> Self {
        Self::to_polar(x, self).1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_4, PI};

    #[test]
    fn test_sin_cos_agree_with_pair() {
        let x = Fixed::from(2.5);
        assert_eq!((x.sin(), x.cos()), x.sin_cos());
    }

    #[test]
    fn test_pythagorean_identity() {
        for step in -25..=25 {
            let x = Fixed::from(step as f64 * 0.77);
            let one = x.sin() * x.sin() + x.cos() * x.cos();
            assert!((one.to_f64() - 1.0).abs() < 1e-7, "at {x}");
        }
    }

    #[test]
    fn test_tan() {
        assert!((Fixed::from(FRAC_PI_4).tan().to_f64() - 1.0).abs() < 1e-7);
        assert!((Fixed::from(-0.3).tan().to_f64() - (-0.3f64).tan()).abs() < 1e-7);
        assert!(Fixed::ZERO.tan().to_f64().abs() < 1e-8);
    }

    #[test]
    fn test_atan() {
        assert!((Fixed::ONE.atan().to_f64() - FRAC_PI_4).abs() < 1e-7);
        assert!((Fixed::from(-2).atan().to_f64() - (-2f64).atan()).abs() < 1e-7);
        assert!(Fixed::ZERO.atan().to_f64().abs() < 1e-8);
        assert!((Fixed::from(1000).atan().to_f64() - 1000f64.atan()).abs() < 1e-6);
    }

    #[test]
    fn test_atan2_quadrants() {
        let one = Fixed::ONE;
        let cases = [
            (one, one, FRAC_PI_4),
            (one, -one, 3.0 * FRAC_PI_4),
            (-one, -one, -3.0 * FRAC_PI_4),
            (-one, one, -FRAC_PI_4),
        ];
        for (y, x, expected) in cases {
            assert!((y.atan2(x).to_f64() - expected).abs() < 1e-7, "atan2({y}, {x})");
        }
        assert!((Fixed::ZERO.atan2(-one).to_f64() - PI).abs() < 1e-7);
    }
}
