// ============================================================================
// Complex Numbers
// Cartesian complex over Fixed with CORDIC-backed polar conversion
// ============================================================================

use super::fixed::Fixed;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complex number with fixed-point components.
///
/// # Example
/// ```
/// use deterministic_fixed::{Fixed, FixedComplex};
///
/// let z = FixedComplex::from_polar(Fixed::from(2), Fixed::HALF_PI);
/// assert!(z.re.to_f64().abs() < 1e-6);
/// assert!((z.im.to_f64() - 2.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixedComplex {
    pub re: Fixed,
    pub im: Fixed,
}

impl FixedComplex {
    pub const ZERO: Self = Self::new(Fixed::ZERO, Fixed::ZERO);
    pub const ONE: Self = Self::new(Fixed::ONE, Fixed::ZERO);
    pub const I: Self = Self::new(Fixed::ZERO, Fixed::ONE);

    #[inline]
    pub const fn new(re: Fixed, im: Fixed) -> Self {
        Self { re, im }
    }

    /// Build from magnitude and angle: `(rho·cos θ, rho·sin θ)`.
    #[inline]
    pub fn from_polar(rho: Fixed, theta: Fixed) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(rho * cos, rho * sin)
    }

    /// `(magnitude, angle)` via CORDIC vectoring.
    #[inline]
    pub fn to_polar(self) -> (Fixed, Fixed) {
        Fixed::to_polar(self.re, self.im)
    }

    /// Angle in `(-π, π]`; zero for the origin.
    #[inline]
    pub fn arg(self) -> Fixed {
        self.to_polar().1
    }

    /// Magnitude.
    #[inline]
    pub fn norm(self) -> Fixed {
        self.to_polar().0
    }

    /// Squared magnitude, without the CORDIC pass.
    #[inline]
    pub fn norm_sqr(self) -> Fixed {
        self.re * self.re + self.im * self.im
    }

    #[inline]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }
}

impl fmt::Display for FixedComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_negative() {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

impl From<Fixed> for FixedComplex {
    #[inline]
    fn from(re: Fixed) -> Self {
        Self::new(re, Fixed::ZERO)
    }
}

impl Add for FixedComplex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for FixedComplex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for FixedComplex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Mul<Fixed> for FixedComplex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Fixed) -> Self::Output {
        Self::new(self.re * rhs, self.im * rhs)
    }
}

impl Neg for FixedComplex {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.re, -self.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    fn c(re: f64, im: f64) -> FixedComplex {
        FixedComplex::new(Fixed::from(re), Fixed::from(im))
    }

    #[test]
    fn test_arithmetic() {
        let a = c(1.5, -2.0);
        let b = c(0.5, 4.0);
        assert_eq!(a + b, c(2.0, 2.0));
        assert_eq!(a - b, c(1.0, -6.0));
        // (1.5 - 2i)(0.5 + 4i) = 0.75 + 8 + (6 - 1)i
        assert_eq!(a * b, c(8.75, 5.0));
        assert_eq!(a * Fixed::from(2), c(3.0, -4.0));
        assert_eq!(-a, c(-1.5, 2.0));
        assert_eq!(a.conj(), c(1.5, 2.0));
    }

    #[test]
    fn test_i_squared() {
        assert_eq!(FixedComplex::I * FixedComplex::I, -FixedComplex::ONE);
    }

    #[test]
    fn test_arg_and_norm() {
        let z = c(3.0, 4.0);
        assert!((z.norm().to_f64() - 5.0).abs() < 1e-6);
        assert!((z.arg().to_f64() - 4f64.atan2(3.0)).abs() < 1e-7);
        assert_eq!(z.norm_sqr(), Fixed::from(25));

        assert!((c(-1.0, 1.0).arg().to_f64() - 3.0 * FRAC_PI_4).abs() < 1e-7);
        assert_eq!(FixedComplex::ZERO.arg(), Fixed::ZERO);
    }

    #[test]
    fn test_from_polar() {
        let z = FixedComplex::from_polar(Fixed::from(2), Fixed::from(FRAC_PI_2));
        assert!(z.re.to_f64().abs() < 1e-6);
        assert!((z.im.to_f64() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_polar_round_trip() {
        let z = c(-2.5, 1.25);
        let (rho, theta) = z.to_polar();
        let back = FixedComplex::from_polar(rho, theta);
        assert!((back.re - z.re).abs().to_f64() < 1e-6);
        assert!((back.im - z.im).abs().to_f64() < 1e-6);
    }

    #[test]
    fn test_display() {
        assert_eq!(c(1.5, -2.0).to_string(), "1.5-2i");
        assert_eq!(c(0.0, 0.25).to_string(), "0+0.25i");
    }
}
