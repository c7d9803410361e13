// ============================================================================
// CORDIC Engine
// Shift-and-add rotation (sin/cos) and vectoring (polar) modes
// ============================================================================
//
// Iteration `i` rotates by ±atan(2^-i), so each step is a pair of shifts and
// adds. `i` starts at -1 (a rotation by atan(2)) which lets the rotation
// cover the whole [0, π/2] quadrant without pre-scaling.

use super::tables::{ARCTAN_TABLE, CORDIC_GAIN};
use crate::numeric::{Fixed, FRACTIONAL_BITS};

/// First iteration index; `-1` shifts left by one.
const FIRST_ITERATION: i32 = -1;

/// Shift applied after multiplying by the Q31 gain.
const GAIN_SHIFT: u32 = 31;

#[inline]
fn shift_right(value: i64, shift: i32) -> i64 {
    if shift < 0 {
        value << -shift
    } else {
        value >> shift
    }
}

#[inline]
fn remove_gain(value: i64) -> i64 {
    (value * CORDIC_GAIN) >> GAIN_SHIFT
}

/// Iteration indices paired with their arctangent.
#[inline]
fn iterations() -> impl Iterator<Item = (i32, i64)> {
    (FIRST_ITERATION..=FRACTIONAL_BITS as i32).zip(ARCTAN_TABLE.iter().map(|&a| i64::from(a)))
}

/// Rotate `(x, y)` by `theta` (raw radians); returns the gain-corrected
/// vector.
fn rotate(mut x: i64, mut y: i64, mut theta: i64) -> (i64, i64) {
    for (i, atan) in iterations() {
        let x_shifted = shift_right(x, i);
        let y_shifted = shift_right(y, i);
        if theta < 0 {
            x += y_shifted;
            y -= x_shifted;
            theta += atan;
        } else {
            x -= y_shifted;
            y += x_shifted;
            theta -= atan;
        }
    }
    (remove_gain(x), remove_gain(y))
}

/// Drive `(x, y)` onto the positive x-axis; returns the gain-corrected
/// length and the accumulated angle. Expects `x >= 0`.
fn vector(mut x: i64, mut y: i64) -> (i64, i64) {
    let mut theta = 0;
    for (i, atan) in iterations() {
        let x_shifted = shift_right(x, i);
        let y_shifted = shift_right(y, i);
        if y < 0 {
            y += x_shifted;
            x -= y_shifted;
            theta -= atan;
        } else {
            y -= x_shifted;
            x += y_shifted;
            theta += atan;
        }
    }
    (remove_gain(x), theta)
}

impl Fixed {
    /// Sine and cosine of an angle in radians, as `(sin, cos)`.
    ///
    /// Any angle is accepted; it is reduced modulo 2π and folded into the
    /// first quadrant before rotating.
    pub fn sin_cos(self) -> (Self, Self) {
        let two_pi = Self::TWO_PI.raw();
        let pi = Self::PI.raw();
        let half_pi = Self::HALF_PI.raw();

        let mut angle = self.raw() % two_pi;
        if angle < 0 {
            angle += two_pi;
        }

        let mut negate_sin = false;
        let mut negate_cos = false;
        if angle > pi {
            angle = two_pi - angle;
            negate_sin = true;
        }
        if angle > half_pi {
            angle = pi - angle;
            negate_cos = true;
        }

        let (cos, sin) = rotate(Self::ONE.raw(), 0, angle);
        let sin = if negate_sin { -sin } else { sin };
        let cos = if negate_cos { -cos } else { cos };
        (Self::from_raw(sin), Self::from_raw(cos))
    }

    /// Cartesian to polar conversion, as `(radius, angle)`.
    ///
    /// The angle lies in `[-PI, PI]`, and the negative x-axis gives `PI`.
    /// The origin maps to `(0, 0)`. The components are scaled into
    /// `[1/2, 1)` before vectoring, so tiny vectors keep full angular
    /// precision. A radius beyond `Fixed::MAX` saturates to `MAX`.
    ///
    /// # Example
    /// ```
    /// use deterministic_fixed::Fixed;
    ///
    /// let (r, theta) = Fixed::to_polar(Fixed::from(3), Fixed::from(4));
    /// assert!((r.to_f64() - 5.0).abs() < 1e-6);
    /// assert!((theta.to_f64() - 4f64.atan2(3.0)).abs() < 1e-7);
    /// ```
    pub fn to_polar(x: Self, y: Self) -> (Self, Self) {
        if x.is_zero() && y.is_zero() {
            return (Self::ZERO, Self::ZERO);
        }

        let mut x_mag = x.raw().unsigned_abs();
        let mut y_mag = y.raw().unsigned_abs();

        // Larger component in [1/2, 1) so the iterations neither overflow
        // nor shift the operands away
        let unit = Self::SCALE as u64;
        let mut right_shift = 0u32;
        while x_mag >= unit || y_mag >= unit {
            x_mag >>= 1;
            y_mag >>= 1;
            right_shift += 1;
        }
        let mut left_shift = 0u32;
        while x_mag < unit / 2 && y_mag < unit / 2 {
            x_mag <<= 1;
            y_mag <<= 1;
            left_shift += 1;
        }

        let (radius, angle) = vector(x_mag as i64, y_mag as i64);

        let pi = Self::PI.raw();
        let angle = angle.clamp(0, Self::HALF_PI.raw());
        let angle = match (x.is_negative(), y.is_negative()) {
            (true, true) => angle - pi,
            (true, false) => pi - angle,
            (false, true) => -angle,
            (false, false) => angle,
        };

        let radius = if radius > i64::MAX >> right_shift {
            tracing::trace!(x = x.raw(), y = y.raw(), "polar radius saturated");
            i64::MAX
        } else {
            (radius << right_shift) >> left_shift
        };

        (Self::from_raw(radius), Self::from_raw(angle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const TOL: f64 = 1e-7;

    #[test]
    fn test_shift_right_handles_negative_index() {
        assert_eq!(shift_right(3, -1), 6);
        assert_eq!(shift_right(-8, 2), -2);
    }

    #[test]
    fn test_sin_cos_known_angles() {
        let cases = [
            (0.0, 0.0, 1.0),
            (FRAC_PI_4, FRAC_PI_4.sin(), FRAC_PI_4.cos()),
            (FRAC_PI_2, 1.0, 0.0),
            (PI, 0.0, -1.0),
            (-FRAC_PI_2, -1.0, 0.0),
            (1.0, 1f64.sin(), 1f64.cos()),
        ];
        for (theta, sin, cos) in cases {
            let (s, c) = Fixed::from(theta).sin_cos();
            assert!((s.to_f64() - sin).abs() < TOL, "sin({theta}) = {s}");
            assert!((c.to_f64() - cos).abs() < TOL, "cos({theta}) = {c}");
        }
    }

    #[test]
    fn test_sin_cos_every_quadrant() {
        for step in -40..=40 {
            let theta = step as f64 * 0.2;
            let value = Fixed::from(theta);
            let (s, c) = value.sin_cos();
            let exact = value.to_f64();
            assert!((s.to_f64() - exact.sin()).abs() < TOL, "sin({theta})");
            assert!((c.to_f64() - exact.cos()).abs() < TOL, "cos({theta})");
        }
    }

    #[test]
    fn test_sin_cos_large_angles() {
        let turns = Fixed::TWO_PI * 1000i32 + Fixed::from(0.5);
        let (s, c) = turns.sin_cos();
        let (s0, c0) = Fixed::from(0.5).sin_cos();
        // 1000 turns of the truncated 2π constant reduce to exactly 0.5
        assert_eq!(s, s0);
        assert_eq!(c, c0);
    }

    #[test]
    fn test_to_polar_quadrants() {
        let cases = [
            (1.0, 1.0, FRAC_PI_4),
            (-1.0, 1.0, 3.0 * FRAC_PI_4),
            (-1.0, -1.0, -3.0 * FRAC_PI_4),
            (1.0, -1.0, -FRAC_PI_4),
        ];
        for (x, y, expected) in cases {
            let (r, theta) = Fixed::to_polar(Fixed::from(x), Fixed::from(y));
            assert!((r.to_f64() - 2f64.sqrt()).abs() < 1e-6);
            assert!((theta.to_f64() - expected).abs() < TOL, "angle of ({x}, {y})");
        }
    }

    #[test]
    fn test_to_polar_axes() {
        let (r, theta) = Fixed::to_polar(Fixed::from(2), Fixed::ZERO);
        assert!((r.to_f64() - 2.0).abs() < 1e-6);
        assert!(theta.to_f64().abs() < TOL);

        let (r, theta) = Fixed::to_polar(Fixed::ZERO, Fixed::from(-3));
        assert!((r.to_f64() - 3.0).abs() < 1e-6);
        assert!((theta.to_f64() + FRAC_PI_2).abs() < TOL);
    }

    #[test]
    fn test_to_polar_large_magnitudes() {
        let (r, theta) = Fixed::to_polar(Fixed::from(30_000), Fixed::from(40_000));
        assert!(((r.to_f64() - 50_000.0) / 50_000.0).abs() < 1e-6);
        assert!((theta.to_f64() - 4f64.atan2(3.0)).abs() < 1e-6);
    }

    #[test]
    fn test_to_polar_origin() {
        assert_eq!(Fixed::to_polar(Fixed::ZERO, Fixed::ZERO), (Fixed::ZERO, Fixed::ZERO));
    }

    #[test]
    fn test_to_polar_small_magnitudes() {
        let cases = [
            (1e-5, 1e-5),
            (-1e-6, -1e-6),
            (-1e-7, 0.0),
            (2e-8, -7e-8),
        ];
        for (x, y) in cases {
            let (fx, fy) = (Fixed::from(x), Fixed::from(y));
            let expected = fy.to_f64().atan2(fx.to_f64());
            let (r, theta) = Fixed::to_polar(fx, fy);
            assert!((theta.to_f64() - expected).abs() < 1e-6, "angle of ({x}, {y}) = {theta}");
            let norm = fx.to_f64().hypot(fy.to_f64());
            assert!((r.to_f64() - norm).abs() <= 2.0 * Fixed::EPSILON.to_f64(), "radius of ({x}, {y})");
        }
    }

    #[test]
    fn test_to_polar_single_raw_units() {
        let eps = Fixed::EPSILON;
        assert_eq!(Fixed::to_polar(-eps, Fixed::ZERO), (eps, Fixed::PI));
        assert_eq!(Fixed::to_polar(eps, Fixed::ZERO), (eps, Fixed::ZERO));

        let (r, theta) = Fixed::to_polar(eps, eps);
        assert_eq!(r, eps);
        assert!((theta.to_f64() - FRAC_PI_4).abs() < TOL);
    }

    #[test]
    fn test_to_polar_angle_stays_in_range() {
        let tiny = Fixed::EPSILON;
        for (x, y) in [
            (-tiny, Fixed::ZERO),
            (Fixed::MIN, Fixed::ZERO),
            (Fixed::MIN, -tiny),
            (Fixed::MIN, tiny),
            (-tiny, Fixed::MIN),
        ] {
            let theta = Fixed::to_polar(x, y).1;
            assert!(theta >= -Fixed::PI && theta <= Fixed::PI, "angle of ({x:?}, {y:?}) = {theta}");
        }
    }

    #[test]
    fn test_to_polar_radius_saturates() {
        assert_eq!(Fixed::to_polar(Fixed::MAX, Fixed::EPSILON).0, Fixed::MAX);
        assert_eq!(Fixed::to_polar(Fixed::MIN, Fixed::ZERO).0, Fixed::MAX);

        // Near the limit but representable
        let big = Fixed::from(1i64 << 33);
        let (r, _) = Fixed::to_polar(big, big);
        let expected = (1i64 << 33) as f64 * 2f64.sqrt();
        assert!(((r.to_f64() - expected) / expected).abs() < 1e-6);
    }
}
