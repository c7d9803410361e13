// ============================================================================
// Square Root
// Integer root of the raw value widened by the fractional scale
// ============================================================================
//
// For a raw value `r` the root's raw value is `sqrt(r / 2^28) * 2^28`, which is
// `sqrt(r * 2^28)`. That product needs 92 bits, so the root runs on `u128`.

use crate::numeric::{Fixed, FRACTIONAL_BITS};

/// Highest power of four that can sit below `u64::MAX << 28`.
const TOP_BIT: u128 = 1 << 90;

/// Square root of a raw Q35.28 value, rounded to nearest.
///
/// `root` collects the result bit by bit from the top, and `bit` walks down
/// the powers of four. Whatever is left in `rest` after the last bit is
/// `n - root^2`, and `rest > root` means `n` is past `(root + 1/2)^2`.
pub(crate) fn sqrt_raw(raw: i64) -> i64 {
    let mut rest = u128::from(raw as u64) << FRACTIONAL_BITS;
    if rest == 0 {
        return 0;
    }

    let mut bit = TOP_BIT;
    while bit > rest {
        bit >>= 2;
    }

    let mut root = 0u128;
    while bit != 0 {
        if rest >= root + bit {
            rest -= root + bit;
            root = (root >> 1) + bit;
        } else {
            root >>= 1;
        }
        bit >>= 2;
    }

    if rest > root {
        root += 1;
    }
    root as i64
}

impl Fixed {
    /// Square root.
    ///
    /// Exact to the nearest raw unit over the whole range, including inputs
    /// below one. `sqrt(0)` is zero. Negative inputs are not validated: the raw bits
    /// are read as unsigned and some value is returned.
    ///
    /// # Example
    /// ```
    /// use deterministic_fixed::Fixed;
    ///
    /// assert_eq!(Fixed::from(16).sqrt(), Fixed::from(4));
    /// assert_eq!(Fixed::from(0.25).sqrt(), Fixed::HALF);
    /// ```
    #[inline]
    pub fn sqrt(self) -> Self {
        Self::from_raw(sqrt_raw(self.raw()))
    }
}
