// ============================================================================
// Operators
// Core Fixed arithmetic and the mixed native-type operator family
// ============================================================================

use super::convert::ToFixed;
use super::fixed::Fixed;
use crate::arith::wide;
use std::cmp::Ordering;
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

// ============================================================================
// Fixed ⊕ Fixed
// ============================================================================

impl Neg for Fixed {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_raw(self.raw().wrapping_neg())
    }
}

// Add/Sub wrap on overflow so debug and release builds agree bit-for-bit
impl Add for Fixed {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_raw(self.raw().wrapping_add(rhs.raw()))
    }
}

impl Sub for Fixed {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_raw(self.raw().wrapping_sub(rhs.raw()))
    }
}

impl Mul for Fixed {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_raw(wide::mul(self.raw(), rhs.raw()))
    }
}

impl Div for Fixed {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        Self::from_raw(wide::div(self.raw(), rhs.raw()))
    }
}

impl Rem for Fixed {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self::Output {
        Self::from_raw(wide::rem(self.raw(), rhs.raw()))
    }
}

macro_rules! assign_via_binary {
    ($($assign:ident, $assign_fn:ident, $op_fn:ident;)*) => {$(
        impl $assign for Fixed {
            #[inline]
            fn $assign_fn(&mut self, rhs: Self) {
                *self = (*self).$op_fn(rhs);
            }
        }
    )*};
}

assign_via_binary! {
    AddAssign, add_assign, add;
    SubAssign, sub_assign, sub;
    MulAssign, mul_assign, mul;
    DivAssign, div_assign, div;
    RemAssign, rem_assign, rem;
}

impl Sum for Fixed {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Fixed> for Fixed {
    fn sum<I: Iterator<Item = &'a Fixed>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for Fixed {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, Mul::mul)
    }
}

// ============================================================================
// Mixed Native-Type Operators
// Convert the native operand with ToFixed, then delegate to Fixed ⊕ Fixed
// ============================================================================

macro_rules! convert_then_delegate {
    ($t:ty; $($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident;)*) => {$(
        impl $op<$t> for Fixed {
            type Output = Fixed;

            #[inline]
            fn $op_fn(self, rhs: $t) -> Fixed {
                self.$op_fn(rhs.to_fixed())
            }
        }

        impl $op<Fixed> for $t {
            type Output = Fixed;

            #[inline]
            fn $op_fn(self, rhs: Fixed) -> Fixed {
                self.to_fixed().$op_fn(rhs)
            }
        }

        impl $assign<$t> for Fixed {
            #[inline]
            fn $assign_fn(&mut self, rhs: $t) {
                *self = (*self).$op_fn(rhs.to_fixed());
            }
        }
    )*};
}

macro_rules! mixed_comparisons {
    ($t:ty) => {
        impl PartialEq<$t> for Fixed {
            #[inline]
            fn eq(&self, other: &$t) -> bool {
                *self == other.to_fixed()
            }
        }

        impl PartialEq<Fixed> for $t {
            #[inline]
            fn eq(&self, other: &Fixed) -> bool {
                self.to_fixed() == *other
            }
        }

        impl PartialOrd<$t> for Fixed {
            #[inline]
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                Some(self.cmp(&other.to_fixed()))
            }
        }

        impl PartialOrd<Fixed> for $t {
            #[inline]
            fn partial_cmp(&self, other: &Fixed) -> Option<Ordering> {
                Some(self.to_fixed().cmp(other))
            }
        }
    };
}

// Integers on the right of * and / scale the raw value directly, which is
// exact; everything else converts first.
macro_rules! int_operators {
    ($($t:ty),* $(,)?) => {$(
        convert_then_delegate! { $t;
            Add, add, AddAssign, add_assign;
            Sub, sub, SubAssign, sub_assign;
            Rem, rem, RemAssign, rem_assign;
        }
        mixed_comparisons!($t);

        impl Mul<$t> for Fixed {
            type Output = Fixed;

            #[inline]
            fn mul(self, rhs: $t) -> Fixed {
                Fixed::from_raw(wide::scale_mul(self.raw(), rhs as i64))
            }
        }

        impl Mul<Fixed> for $t {
            type Output = Fixed;

            #[inline]
            fn mul(self, rhs: Fixed) -> Fixed {
                rhs * self
            }
        }

        impl MulAssign<$t> for Fixed {
            #[inline]
            fn mul_assign(&mut self, rhs: $t) {
                *self = *self * rhs;
            }
        }

        impl Div<$t> for Fixed {
            type Output = Fixed;

            #[inline]
            fn div(self, rhs: $t) -> Fixed {
                Fixed::from_raw(wide::scale_div(self.raw(), rhs as i64))
            }
        }

        impl Div<Fixed> for $t {
            type Output = Fixed;

            #[inline]
            fn div(self, rhs: Fixed) -> Fixed {
                self.to_fixed() / rhs
            }
        }

        impl DivAssign<$t> for Fixed {
            #[inline]
            fn div_assign(&mut self, rhs: $t) {
                *self = *self / rhs;
            }
        }
    )*};
}

macro_rules! float_operators {
    ($($t:ty),* $(,)?) => {$(
        convert_then_delegate! { $t;
            Add, add, AddAssign, add_assign;
            Sub, sub, SubAssign, sub_assign;
            Mul, mul, MulAssign, mul_assign;
            Div, div, DivAssign, div_assign;
            Rem, rem, RemAssign, rem_assign;
        }
        mixed_comparisons!($t);
    )*};
}

int_operators!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
float_operators!(f32, f64);
