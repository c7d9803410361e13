// ============================================================================
// Logarithm / Exponential
// Bit-decomposition ladders over the precomputed log tables
// ============================================================================
//
// exp walks a ladder of tabulated logarithms from the largest down,
// subtracting each one that still fits and applying the matching factor
// (a shift for powers of two, `1 ± 2^-n` for the fractional rungs). log
// runs the same idea in reverse on the normalised mantissa.

use super::tables::{
    LOG_ONE_OVER_ONE_MINUS_TWO_POWER_MINUS_N as LOG_DECAY,
    LOG_ONE_PLUS_TWO_POWER_MINUS_N as LOG_GROWTH, LOG_TWO_POWER_N_REVERSED as LOG_POW2,
};
use crate::numeric::{Fixed, FRACTIONAL_BITS};
use std::cmp::Ordering;

/// Largest `k` with `ln(2^k)` in the table: `63 - FRACTIONAL_BITS`.
const MAX_POWER: i32 = 63 - FRACTIONAL_BITS as i32;

/// Lowest rung of either ladder, `-FRACTIONAL_BITS`.
const MIN_POWER: i32 = -(FRACTIONAL_BITS as i32);

/// `exp(x)` for `x` at or above `ln(2^35)` does not fit.
const EXP_OVERFLOW_BOUND: i64 = LOG_POW2[0];

/// `exp(x)` below `-ln(2^28)` is smaller than one raw unit.
const EXP_UNDERFLOW_BOUND: i64 = -LOG_POW2[(MAX_POWER + MIN_POWER) as usize];

const ONE: i64 = Fixed::ONE.raw();

/// Rung `power` of the growth ladder: `ln(2^power)` for positive powers,
/// `ln(1 + 2^power)` for negative ones.
#[inline]
fn growth_entry(power: i32) -> i64 {
    if power > 0 {
        LOG_POW2[(MAX_POWER - power) as usize]
    } else {
        LOG_GROWTH[(-power - 1) as usize]
    }
}

/// Rung `power` of the decay ladder: `ln(2^power)` for positive powers,
/// `ln(1 / (1 - 2^power))` for negative ones.
#[inline]
fn decay_entry(power: i32) -> i64 {
    if power > 0 {
        LOG_POW2[(MAX_POWER - power) as usize]
    } else {
        LOG_DECAY[(-power - 1) as usize]
    }
}

/// `e^x` on raw values.
pub(crate) fn exp_raw(x: i64) -> i64 {
    if x >= EXP_OVERFLOW_BOUND {
        tracing::trace!(x, "fixed-point exp overflow saturated");
        return Fixed::MAX.raw();
    }
    if x < EXP_UNDERFLOW_BOUND {
        tracing::trace!(x, "fixed-point exp underflow flushed to zero");
        return 0;
    }
    if x == 0 {
        return ONE;
    }

    let mut res = ONE;
    let mut temp = x;

    if x > 0 {
        let mut power = MAX_POWER;
        while temp != 0 && power > MIN_POWER {
            while power == 0 || temp < growth_entry(power) {
                power -= 1;
            }
            temp -= growth_entry(power);
            if power < 0 {
                res = res.wrapping_add(res >> -power);
            } else {
                res <<= power;
            }
        }
    } else {
        let mut power = FRACTIONAL_BITS as i32;
        while temp != 0 && power > MIN_POWER {
            while power == 0 || temp > -decay_entry(power) {
                power -= 1;
            }
            temp += decay_entry(power);
            if power < 0 {
                res -= res >> -power;
            } else {
                res >>= power;
            }
        }
    }

    res
}

/// Natural logarithm on raw values.
pub(crate) fn log_raw(x: i64) -> i64 {
    if x <= 0 {
        tracing::trace!(x, "fixed-point log of non-positive value");
        return -Fixed::MAX.raw();
    }
    if x == ONE {
        return 0;
    }

    // Normalise so bit 63 is set; the value is then (temp / 2^63) × 2^power
    let left_shift = x.leading_zeros();
    let mut temp = (x as u64) << left_shift;
    let power = MAX_POWER - left_shift as i32;

    let mut res = match power.cmp(&0) {
        Ordering::Greater => LOG_POW2[left_shift as usize],
        Ordering::Equal => 0,
        Ordering::Less => -LOG_POW2[(MAX_POWER + power) as usize],
    };

    // temp is now a mantissa in [1, 2) with the point at bit 63. Strip
    // factors (1 - 2^-n) while it stays at or above one.
    const MANTISSA_ONE: u64 = 1 << 63;
    let mut right_shift = 1u32;
    let mut shifted = temp >> 1;

    while right_shift < FRACTIONAL_BITS {
        while right_shift < FRACTIONAL_BITS && temp < shifted + MANTISSA_ONE {
            shifted >>= 1;
            right_shift += 1;
        }
        temp -= shifted;
        shifted = temp >> right_shift;
        res += LOG_DECAY[(right_shift - 1) as usize];
    }

    res
}

impl Fixed {
    /// e raised to `self`.
    ///
    /// Saturates to `MAX` for inputs at or above `ln(2^35)` and returns
    /// zero below `-ln(2^28)`.
    ///
    /// # Example
    /// ```
    /// use deterministic_fixed::Fixed;
    ///
    /// assert_eq!(Fixed::ZERO.exp(), Fixed::ONE);
    /// assert!((Fixed::ONE.exp().to_f64() - std::f64::consts::E).abs() < 1e-7);
    /// ```
    #[inline]
    pub fn exp(self) -> Self {
        Self::from_raw(exp_raw(self.raw()))
    }

    /// Natural logarithm.
    ///
    /// Returns `-MAX` for zero and negative inputs.
    ///
    /// # Example
    /// ```
    /// use deterministic_fixed::Fixed;
    ///
    /// assert_eq!(Fixed::ONE.log(), Fixed::ZERO);
    /// assert_eq!(Fixed::ZERO.log(), -Fixed::MAX);
    /// ```
    #[inline]
    pub fn log(self) -> Self {
        Self::from_raw(log_raw(self.raw()))
    }
}
