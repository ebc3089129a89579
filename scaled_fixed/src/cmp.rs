//! Comparisons between fixed-point values of any format and native integers.
//!
//! Operands are aligned to the finer exponent and compared as integers, so
//! equality is equality of the represented values regardless of width or
//! exponent.

use core::cmp::Ordering;

use typenum::Integer;

use crate::convert::cmp_scaled;
use crate::fixed_point::{FixedPoint, Scaled};
use crate::rep::Rep;

impl<RA, EA, RB, EB> PartialEq<FixedPoint<RB, EB>> for FixedPoint<RA, EA>
where
    RA: Rep,
    EA: Integer,
    RB: Rep,
    EB: Integer,
{
    #[inline]
    fn eq(&self, other: &FixedPoint<RB, EB>) -> bool {
        cmp_scaled(self.to_wide(), EA::I32, other.to_wide(), EB::I32) == Ordering::Equal
    }
}

impl<R: Rep, E: Integer> Eq for FixedPoint<R, E> {}

impl<RA, EA, RB, EB> PartialOrd<FixedPoint<RB, EB>> for FixedPoint<RA, EA>
where
    RA: Rep,
    EA: Integer,
    RB: Rep,
    EB: Integer,
{
    #[inline]
    fn partial_cmp(&self, other: &FixedPoint<RB, EB>) -> Option<Ordering> {
        Some(cmp_scaled(self.to_wide(), EA::I32, other.to_wide(), EB::I32))
    }
}

impl<R: Rep, E: Integer> Ord for FixedPoint<R, E> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw_value().cmp(&other.raw_value())
    }
}

macro_rules! int_cmp {
    ($($int:ty),+) => {
        $(
            impl<R: Rep, E: Integer> PartialEq<$int> for FixedPoint<R, E> {
                #[inline]
                fn eq(&self, other: &$int) -> bool {
                    cmp_scaled(self.to_wide(), E::I32, other.widen(), 0) == Ordering::Equal
                }
            }

            impl<R: Rep, E: Integer> PartialEq<FixedPoint<R, E>> for $int {
                #[inline]
                fn eq(&self, other: &FixedPoint<R, E>) -> bool {
                    other == self
                }
            }

            impl<R: Rep, E: Integer> PartialOrd<$int> for FixedPoint<R, E> {
                #[inline]
                fn partial_cmp(&self, other: &$int) -> Option<Ordering> {
                    Some(cmp_scaled(self.to_wide(), E::I32, other.widen(), 0))
                }
            }

            impl<R: Rep, E: Integer> PartialOrd<FixedPoint<R, E>> for $int {
                #[inline]
                fn partial_cmp(&self, other: &FixedPoint<R, E>) -> Option<Ordering> {
                    other.partial_cmp(self).map(Ordering::reverse)
                }
            }
        )+
    };
}

int_cmp!(i8, u8, i16, u16, i32, u32, i64, u64);

#[cfg(test)]
mod tests {
    use super::*;
    use typenum::{N3, N4, N8, P4};

    #[test]
    fn test_equal_across_formats() {
        let a = FixedPoint::<u8, N3>::from_int(11);
        let b = FixedPoint::<i64, N8>::from_f64(11.0);
        let c = FixedPoint::<u16, P4>::from_raw(0);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, c);
    }

    #[test]
    fn test_ordering_across_formats() {
        let small = FixedPoint::<i8, N4>::from_f64(-7.5);
        let big = FixedPoint::<u16, P4>::from_raw(1);
        assert!(small < big);
        assert!(big > small);
        assert!(FixedPoint::<u8, N4>::from_f64(0.0625) > FixedPoint::<i32, N8>::from_raw(15));
        assert!(FixedPoint::<u8, N4>::from_f64(0.0625) <= FixedPoint::<i32, N8>::from_raw(16));
    }

    #[test]
    fn test_ord_within_type() {
        let mut values = [
            FixedPoint::<i16, N4>::from_f64(1.5),
            FixedPoint::from_f64(-3.0),
            FixedPoint::from_f64(0.25),
        ];
        values.sort();
        assert_eq!(values[0], -3);
        assert_eq!(values[2], 1.5);
    }

    #[test]
    fn test_native_integer_comparisons() {
        let x = FixedPoint::<u32, typenum::N30>::from_int(3);
        assert_eq!(x, 3u8);
        assert_eq!(3i64, x);
        assert!(x > 2i32);
        assert!(x < 4u64);
        assert!(-1i8 < x);
        assert_ne!(FixedPoint::<i16, N4>::from_f64(2.5), 2i16);
    }
}
