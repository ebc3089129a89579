//! Mixing fixed-point values with native floating-point values.
//!
//! Any operation with a floating operand is carried out in floating point:
//! the fixed-point operand is converted first and the result is the
//! floating type.

use core::cmp::Ordering;
use core::ops::{Add, Div, Mul, Sub};

use typenum::Integer;

use crate::convert::unscale_rounded;
use crate::fixed_point::FixedPoint;
use crate::rep::Rep;

mod sealed {
    pub trait Sealed {}
}

/// A floating-point type fixed-point values convert to and from.
///
/// Implemented for `f32` and `f64`, and for `half::f16` and `half::bf16`
/// with the `half_support` feature.
pub trait Floating: Copy + sealed::Sealed {
    /// Significand bits, implicit leading bit included.
    const MANTISSA_DIGITS: u32;

    /// Nearest value of this type to `value`.
    fn from_f64_lossy(value: f64) -> Self;

    fn into_f64(self) -> f64;

    /// Nearest value of this type to `wide * 2^exponent`, rounded once.
    #[inline]
    fn from_scaled(wide: i128, exponent: i32) -> Self {
        Self::from_f64_lossy(unscale_rounded(wide, exponent, Self::MANTISSA_DIGITS))
    }
}

impl sealed::Sealed for f32 {}

impl Floating for f32 {
    const MANTISSA_DIGITS: u32 = f32::MANTISSA_DIGITS;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn into_f64(self) -> f64 {
        f64::from(self)
    }
}

impl sealed::Sealed for f64 {}

impl Floating for f64 {
    const MANTISSA_DIGITS: u32 = f64::MANTISSA_DIGITS;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }

    #[inline]
    fn into_f64(self) -> f64 {
        self
    }
}

macro_rules! float_op {
    ($Op:ident, $op:ident: $($float:ty),+) => {
        $(
            impl<R: Rep, E: Integer> $Op<$float> for FixedPoint<R, E> {
                type Output = $float;

                #[inline]
                fn $op(self, rhs: $float) -> $float {
                    $Op::$op(self.to_float::<$float>(), rhs)
                }
            }

            impl<R: Rep, E: Integer> $Op<FixedPoint<R, E>> for $float {
                type Output = $float;

                #[inline]
                fn $op(self, rhs: FixedPoint<R, E>) -> $float {
                    $Op::$op(self, rhs.to_float::<$float>())
                }
            }
        )+
    };
}

macro_rules! float_cmp {
    ($($float:ty),+) => {
        $(
            impl<R: Rep, E: Integer> PartialEq<$float> for FixedPoint<R, E> {
                #[inline]
                fn eq(&self, other: &$float) -> bool {
                    self.to_float::<$float>() == *other
                }
            }

            impl<R: Rep, E: Integer> PartialEq<FixedPoint<R, E>> for $float {
                #[inline]
                fn eq(&self, other: &FixedPoint<R, E>) -> bool {
                    *self == other.to_float::<$float>()
                }
            }

            impl<R: Rep, E: Integer> PartialOrd<$float> for FixedPoint<R, E> {
                #[inline]
                fn partial_cmp(&self, other: &$float) -> Option<Ordering> {
                    self.to_float::<$float>().partial_cmp(other)
                }
            }

            impl<R: Rep, E: Integer> PartialOrd<FixedPoint<R, E>> for $float {
                #[inline]
                fn partial_cmp(&self, other: &FixedPoint<R, E>) -> Option<Ordering> {
                    self.partial_cmp(&other.to_float::<$float>())
                }
            }
        )+
    };
}

float_op!(Add, add: f32, f64);
float_op!(Sub, sub: f32, f64);
float_op!(Mul, mul: f32, f64);
float_op!(Div, div: f32, f64);
float_cmp!(f32, f64);

#[cfg(feature = "half_support")]
mod half_support {
    use super::*;
    use half::{bf16, f16};

    impl sealed::Sealed for f16 {}

    impl Floating for f16 {
        const MANTISSA_DIGITS: u32 = f16::MANTISSA_DIGITS;

        #[inline]
        fn from_f64_lossy(value: f64) -> Self {
            f16::from_f64(value)
        }

        #[inline]
        fn into_f64(self) -> f64 {
            self.to_f64()
        }
    }

    impl sealed::Sealed for bf16 {}

    impl Floating for bf16 {
        const MANTISSA_DIGITS: u32 = bf16::MANTISSA_DIGITS;

        #[inline]
        fn from_f64_lossy(value: f64) -> Self {
            bf16::from_f64(value)
        }

        #[inline]
        fn into_f64(self) -> f64 {
            self.to_f64()
        }
    }

    float_op!(Add, add: f16, bf16);
    float_op!(Sub, sub: f16, bf16);
    float_op!(Mul, mul: f16, bf16);
    float_op!(Div, div: f16, bf16);
    float_cmp!(f16, bf16);

    #[cfg(test)]
    mod tests {
        use super::*;
        use typenum::{N3, N8};

        #[test]
        fn test_half_operand_promotes_to_half() {
            let x = FixedPoint::<u8, N3>::from_int(8);
            let sum: f16 = x + f16::from_f32(3.0);
            assert_eq!(sum, f16::from_f32(11.0));

            let product: bf16 = bf16::from_f32(0.5) * x;
            assert_eq!(product, bf16::from_f32(4.0));
        }

        #[test]
        fn test_half_comparisons() {
            let x = FixedPoint::<i16, N8>::from_f64(-1.5);
            assert_eq!(x, f16::from_f32(-1.5));
            assert!(x < bf16::from_f32(0.0));
            assert_eq!(FixedPoint::<i16, N8>::from_float(f16::from_f32(2.25)), 2.25);
        }

        #[test]
        fn test_half_conversion_rounds_once() {
            // 1024.5 + 2^-50 sits just above the midpoint of f16 neighbours
            // 1024 and 1025; an f64 intermediate would land on the midpoint.
            let x = FixedPoint::<i64, typenum::N50>::from_raw((1 << 60) + (1 << 49) + 1);
            assert_eq!(x.to_float::<f16>(), f16::from_f32(1025.0));
            assert_eq!(x, f16::from_f32(1025.0));

            let y = FixedPoint::<u64, typenum::Z0>::from_raw((1 << 60) + (1 << 52) + 1);
            assert_eq!(y.to_float::<bf16>(), bf16::from_f64(((1u64 << 60) + (1 << 53)) as f64));
        }
    }
}
