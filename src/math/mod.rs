// ============================================================================
// Math Module
// Elementary functions on Fixed, computed with integer-only algorithms
// ============================================================================
//
// Each submodule adds inherent methods to `Fixed`; the free functions below
// mirror them for call sites that read better in prefix form.

mod cordic;
mod log_exp;
mod rounding;
mod sqrt;
mod tables;
mod trig;

use crate::numeric::Fixed;

#[inline]
pub fn sqrt(x: Fixed) -> Fixed {
    x.sqrt()
}

#[inline]
pub fn exp(x: Fixed) -> Fixed {
    x.exp()
}

#[inline]
pub fn log(x: Fixed) -> Fixed {
    x.log()
}

#[inline]
pub fn sin(x: Fixed) -> Fixed {
    x.sin()
}

#[inline]
pub fn cos(x: Fixed) -> Fixed {
    x.cos()
}

#[inline]
pub fn tan(x: Fixed) -> Fixed {
    x.tan()
}

#[inline]
pub fn atan(x: Fixed) -> Fixed {
    x.atan()
}

/// Four-quadrant arctangent of `y / x`.
#[inline]
pub fn atan2(y: Fixed, x: Fixed) -> Fixed {
    y.atan2(x)
}

#[inline]
pub fn floor(x: Fixed) -> Fixed {
    x.floor()
}

#[inline]
pub fn ceil(x: Fixed) -> Fixed {
    x.ceil()
}

#[inline]
pub fn abs(x: Fixed) -> Fixed {
    x.abs()
}

/// `(integral, fractional)` parts, both with the sign of `x`.
#[inline]
pub fn modf(x: Fixed) -> (Fixed, Fixed) {
    x.modf()
}
