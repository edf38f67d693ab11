use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Numeric component type usable inside a `Vec2` and as quadtree coordinates.
pub trait Scalar:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const MAX: Self;

    fn from_u8(value: u8) -> Self;

    /// `None` if the sum overflows, or is not finite for floats.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// `None` if the difference overflows, or is not finite for floats.
    fn checked_sub(self, rhs: Self) -> Option<Self>;
}

/// Integer coordinate type usable for grid addressing.
///
/// Conversions to and from `usize` come in a checked form and an unchecked
/// form for call sites that have already validated bounds.
pub trait GridCoord: Scalar + Eq + Ord + Hash {
    fn to_usize(self) -> Option<usize>;
    fn from_usize(value: usize) -> Option<Self>;
    fn to_usize_unchecked(self) -> usize;
    fn from_usize_unchecked(value: usize) -> Self;

    /// Offsets by a signed unit step. Wraps on overflow, so stepping below zero
    /// on an unsigned type lands on a value no grid considers valid.
    fn step(self, delta: i8) -> Self;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const TWO: Self = 2;
                const MAX: Self = <$t>::MAX;

                #[inline(always)]
                fn from_u8(value: u8) -> Self {
                    value as $t
                }

                #[inline(always)]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline(always)]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }
            }

            impl GridCoord for $t {
                #[inline(always)]
                fn to_usize(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline(always)]
                fn from_usize(value: usize) -> Option<Self> {
                    <$t>::try_from(value).ok()
                }

                #[inline(always)]
                fn to_usize_unchecked(self) -> usize {
                    self as usize
                }

                #[inline(always)]
                fn from_usize_unchecked(value: usize) -> Self {
                    value as $t
                }

                #[inline(always)]
                fn step(self, delta: i8) -> Self {
                    self.wrapping_add(delta as $t)
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const TWO: Self = 2.0;
                const MAX: Self = <$t>::MAX;

                #[inline(always)]
                fn from_u8(value: u8) -> Self {
                    value as $t
                }

                #[inline(always)]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs).filter(|sum| sum.is_finite())
                }

                #[inline(always)]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    Some(self - rhs).filter(|diff| diff.is_finite())
                }
            }
        )*
    };
}

impl_scalar_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_wraps_unsigned_below_zero() {
        assert_eq!(0u32.step(-1), u32::MAX);
        assert_eq!(5u32.step(-1), 4);
        assert_eq!(5i32.step(-1), 4);
        assert_eq!((-1i32).step(1), 0);
    }

    #[test]
    fn checked_conversions_reject_negative() {
        assert_eq!((-1i32).to_usize(), None);
        assert_eq!(7i32.to_usize(), Some(7));
        assert_eq!(u8::from_usize(300), None);
    }

    #[test]
    fn checked_arithmetic_reports_overflow() {
        assert_eq!(Scalar::checked_sub(i32::MAX, i32::MIN), None);
        assert_eq!(Scalar::checked_sub(i32::MAX, 0), Some(i32::MAX));
        assert_eq!(Scalar::checked_add(u8::MAX, 1), None);
        assert_eq!(Scalar::checked_sub(0u8, 1), None);
        assert_eq!(Scalar::checked_sub(f32::MAX, -f32::MAX), None);
        assert_eq!(Scalar::checked_add(1.5f64, 2.0), Some(3.5));
    }
}
