// ============================================================================
// Native Conversions
// Single conversion path between Fixed and every native numeric type
// ============================================================================
//
// Every mixed-type operator in `ops` goes through `ToFixed`, so the core
// arithmetic only ever sees two `Fixed` operands.

use super::fixed::{Fixed, FRACTIONAL_BITS};

/// Conversion of a native numeric value into [`Fixed`].
///
/// Integers are shifted left by 28 bits (bits shifted past the top of the
/// i64 are lost, like a native shift). Floats are multiplied by 2^28 in
/// their own precision and truncated toward zero.
pub trait ToFixed: Copy {
    fn to_fixed(self) -> Fixed;
}

/// Extraction of a native numeric value from [`Fixed`].
///
/// Integers take the raw value divided by 2^28, truncated toward zero, then
/// cast; floats divide as reals.
pub trait FromFixed: Sized {
    fn from_fixed(value: Fixed) -> Self;
}

impl ToFixed for Fixed {
    #[inline]
    fn to_fixed(self) -> Fixed {
        self
    }
}

impl FromFixed for Fixed {
    #[inline]
    fn from_fixed(value: Fixed) -> Self {
        value
    }
}

macro_rules! int_conversions {
    ($($t:ty),* $(,)?) => {$(
        impl ToFixed for $t {
            #[inline]
            fn to_fixed(self) -> Fixed {
                Fixed::from_raw((self as i64) << FRACTIONAL_BITS)
            }
        }

        impl FromFixed for $t {
            #[inline]
            fn from_fixed(value: Fixed) -> Self {
                (value.raw() / Fixed::SCALE) as $t
            }
        }

        impl From<$t> for Fixed {
            #[inline]
            fn from(value: $t) -> Self {
                value.to_fixed()
            }
        }
    )*};
}

int_conversions!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! float_conversions {
    ($($t:ty),* $(,)?) => {$(
        impl ToFixed for $t {
            #[inline]
            fn to_fixed(self) -> Fixed {
                Fixed::from_raw((self * Fixed::SCALE as $t) as i64)
            }
        }

        impl FromFixed for $t {
            #[inline]
            fn from_fixed(value: Fixed) -> Self {
                value.raw() as $t / Fixed::SCALE as $t
            }
        }

        impl From<$t> for Fixed {
            #[inline]
            fn from(value: $t) -> Self {
                value.to_fixed()
            }
        }
    )*};
}

float_conversions!(f32, f64);
