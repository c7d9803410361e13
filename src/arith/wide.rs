// ============================================================================
// Wide Multiply / Divide
// Overflow-safe Q35.28 multiplication and restoring long division
// ============================================================================
//
// All functions take and return raw scaled integers. Signs are stripped up
// front, the magnitudes are combined unsigned, and the XOR of the operand
// signs is applied at the end.

use crate::numeric::FRACTIONAL_BITS;

const HALF_WORD: u32 = 32;
const LOW_MASK: u64 = 0xFFFF_FFFF;

/// Raw value produced when dividing by zero.
pub const SATURATED: i64 = i64::MAX;

#[inline]
fn apply_sign(magnitude: u64, negate: bool) -> i64 {
    let value = magnitude as i64;
    if negate {
        value.wrapping_neg()
    } else {
        value
    }
}

/// Fixed-point product `lhs × rhs / 2^28`, truncated toward zero.
///
/// The magnitudes are split into 32-bit halves and the partial products are
/// shifted into place individually, so no 128-bit intermediate is formed.
/// The only truncation is in the low×low term, which makes the result
/// exactly `floor(|lhs × rhs| / 2^28)` with the sign applied. Products that
/// do not fit wrap.
#[inline]
pub fn mul(lhs: i64, rhs: i64) -> i64 {
    let negate = (lhs < 0) ^ (rhs < 0);
    let a = lhs.unsigned_abs();
    let b = rhs.unsigned_abs();

    let a_upper = a >> HALF_WORD;
    let a_lower = a & LOW_MASK;
    let b_upper = b >> HALF_WORD;
    let b_lower = b & LOW_MASK;

    let upper = a_upper.wrapping_mul(b) << (HALF_WORD - FRACTIONAL_BITS);
    let cross = (a_lower * b_upper) << (HALF_WORD - FRACTIONAL_BITS);
    let lower = (a_lower * b_lower) >> FRACTIONAL_BITS;

    apply_sign(upper.wrapping_add(cross).wrapping_add(lower), negate)
}

/// Fixed-point quotient `dividend × 2^28 / divisor`, truncated toward zero.
///
/// Binary restoring division: the divisor is shifted up until it sits just
/// below the dividend, then walked back down one bit at a time, subtracting
/// wherever it fits and setting the matching quotient bit. The dividend is
/// pre-scaled into a 128-bit register so the divisor never loses low bits
/// on the way down. Quotients wider than 64 bits wrap.
///
/// This is deterministic across platforms but not bit-identical to a 64-bit
/// restoring division that shifts the divisor right: that variant drops the
/// divisor's low bits and can land up to about 11 raw units away, where this
/// one returns the exactly truncated quotient.
///
/// A zero divisor saturates to [`SATURATED`] regardless of sign.
pub fn div(dividend: i64, divisor: i64) -> i64 {
    if divisor == 0 {
        tracing::trace!(dividend, "fixed-point division by zero saturated");
        return SATURATED;
    }

    let negate = (dividend < 0) ^ (divisor < 0);
    let mut remainder = u128::from(dividend.unsigned_abs()) << FRACTIONAL_BITS;
    let mut shifted = u128::from(divisor.unsigned_abs());
    let mut shift = 0u32;
    let mut quotient = 0u128;

    while (shifted << 1) <= remainder {
        shifted <<= 1;
        shift += 1;
    }

    loop {
        if shifted <= remainder {
            remainder -= shifted;
            quotient |= 1u128 << shift;
        }
        if shift == 0 || remainder == 0 {
            break;
        }
        shifted >>= 1;
        shift -= 1;
    }

    apply_sign(quotient as u64, negate)
}

/// Remainder of the raw values, with the sign of the dividend.
///
/// A zero divisor saturates like [`div`]; `MIN % -1` is zero.
#[inline]
pub fn rem(dividend: i64, divisor: i64) -> i64 {
    if divisor == 0 {
        tracing::trace!(dividend, "fixed-point remainder by zero saturated");
        return SATURATED;
    }
    dividend.wrapping_rem(divisor)
}

/// Multiply a raw value by a plain integer.
#[inline]
pub fn scale_mul(raw: i64, factor: i64) -> i64 {
    raw.wrapping_mul(factor)
}

/// Divide a raw value by a plain integer, truncating toward zero.
#[inline]
pub fn scale_div(raw: i64, divisor: i64) -> i64 {
    if divisor == 0 {
        tracing::trace!(raw, "fixed-point integer division by zero saturated");
        return SATURATED;
    }
    raw.wrapping_div(divisor)
}
