//! Arithmetic operators.
//!
//! Operands are aligned to the result exponent chosen by the promotion
//! rules, combined as `i128`, and wrapped into the result representation.

use core::ops::{Add, Div, Mul, Neg, Sub};

use typenum::{B1, Integer, PInt, Sum, Z0};

use crate::convert::{pow2, rescale, sqrt_scaled};
use crate::error::FixedPointError;
use crate::fixed_point::{FixedPoint, Scaled};
use crate::promotion::{
    AddPromotion, DivPromotion, MulPromotion, Operation, ProductOf, QuotientOf, SumOf, TruncExp,
    promotes_to,
};
use crate::rep::Rep;

/// Aligns both operands to `Out`'s exponent and applies `op` to the raw
/// values.
#[inline]
fn aligned<L: Scaled, R: Scaled, Out: Scaled>(lhs: L, rhs: R, op: fn(i128, i128) -> i128) -> Out {
    let exponent = Out::FORMAT.exponent;
    let lhs = rescale(lhs.to_wide(), L::FORMAT.exponent, exponent);
    let rhs = rescale(rhs.to_wide(), R::FORMAT.exponent, exponent);
    Out::from_wide(op(lhs, rhs))
}

impl<RA, EA, RB, EB> Add<FixedPoint<RB, EB>> for FixedPoint<RA, EA>
where
    RA: Rep,
    EA: Integer,
    RB: Rep,
    EB: Integer,
    Self: AddPromotion<FixedPoint<RB, EB>>,
{
    type Output = SumOf<Self, FixedPoint<RB, EB>>;

    #[inline]
    fn add(self, rhs: FixedPoint<RB, EB>) -> SumOf<Self, FixedPoint<RB, EB>> {
        const {
            assert!(promotes_to(
                Operation::Add,
                <Self as Scaled>::FORMAT,
                <FixedPoint<RB, EB> as Scaled>::FORMAT,
                <SumOf<Self, FixedPoint<RB, EB>> as Scaled>::FORMAT,
            ))
        };
        aligned(self, rhs, i128::wrapping_add)
    }
}

impl<RA, EA, RB, EB> Sub<FixedPoint<RB, EB>> for FixedPoint<RA, EA>
where
    RA: Rep,
    EA: Integer,
    RB: Rep,
    EB: Integer,
    Self: AddPromotion<FixedPoint<RB, EB>>,
{
    type Output = SumOf<Self, FixedPoint<RB, EB>>;

    #[inline]
    fn sub(self, rhs: FixedPoint<RB, EB>) -> SumOf<Self, FixedPoint<RB, EB>> {
        const {
            assert!(promotes_to(
                Operation::Sub,
                <Self as Scaled>::FORMAT,
                <FixedPoint<RB, EB> as Scaled>::FORMAT,
                <SumOf<Self, FixedPoint<RB, EB>> as Scaled>::FORMAT,
            ))
        };
        aligned(self, rhs, i128::wrapping_sub)
    }
}

impl<RA, EA, RB, EB> Mul<FixedPoint<RB, EB>> for FixedPoint<RA, EA>
where
    RA: Rep,
    EA: Integer,
    RB: Rep,
    EB: Integer,
    Self: MulPromotion<FixedPoint<RB, EB>>,
{
    type Output = ProductOf<Self, FixedPoint<RB, EB>>;

    /// The product of the raw values is already at exponent `ea + eb`, so no
    /// alignment is needed.
    #[inline]
    fn mul(self, rhs: FixedPoint<RB, EB>) -> ProductOf<Self, FixedPoint<RB, EB>> {
        const {
            assert!(promotes_to(
                Operation::Mul,
                <Self as Scaled>::FORMAT,
                <FixedPoint<RB, EB> as Scaled>::FORMAT,
                <ProductOf<Self, FixedPoint<RB, EB>> as Scaled>::FORMAT,
            ))
        };
        Scaled::from_wide(self.to_wide().wrapping_mul(rhs.to_wide()))
    }
}

impl<RA, EA, RB, EB> Div<FixedPoint<RB, EB>> for FixedPoint<RA, EA>
where
    RA: Rep,
    EA: Integer,
    RB: Rep,
    EB: Integer,
    Self: DivPromotion<FixedPoint<RB, EB>>,
{
    type Output = QuotientOf<Self, FixedPoint<RB, EB>>;

    /// Truncating division of the raw values; the quotient is at exponent
    /// `ea - eb`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero, like integer division. Use
    /// [`FixedPoint::checked_div`] to get an error instead.
    #[inline]
    fn div(self, rhs: FixedPoint<RB, EB>) -> QuotientOf<Self, FixedPoint<RB, EB>> {
        const {
            assert!(promotes_to(
                Operation::Div,
                <Self as Scaled>::FORMAT,
                <FixedPoint<RB, EB> as Scaled>::FORMAT,
                <QuotientOf<Self, FixedPoint<RB, EB>> as Scaled>::FORMAT,
            ))
        };
        Scaled::from_wide(self.to_wide() / rhs.to_wide())
    }
}

impl<R, E> Neg for FixedPoint<R, E>
where
    R: Rep<Signedness = B1>,
    E: Integer,
{
    type Output = Self;

    /// Wrapping negation: the minimum value negates to itself.
    #[inline]
    fn neg(self) -> Self {
        Self::from_wide(self.to_wide().wrapping_neg())
    }
}

impl<RA: Rep, EA: Integer> FixedPoint<RA, EA> {
    /// Divides, reporting a zero divisor instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns `FixedPointError::DivisionByZero` if `rhs` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaled_fixed::{FixedPoint, FixedPointError};
    /// use scaled_fixed::typenum::Z0;
    ///
    /// let a = FixedPoint::<i8, Z0>::from_int(15);
    /// assert_eq!(a.checked_div(FixedPoint::<i8, Z0>::from_int(2))?, 7);
    /// assert_eq!(a.checked_div(FixedPoint::<i8, Z0>::zero()), Err(FixedPointError::DivisionByZero));
    /// # Ok::<(), FixedPointError>(())
    /// ```
    pub fn checked_div<RB: Rep, EB: Integer>(
        self,
        rhs: FixedPoint<RB, EB>,
    ) -> Result<QuotientOf<Self, FixedPoint<RB, EB>>, FixedPointError>
    where
        Self: DivPromotion<FixedPoint<RB, EB>>,
    {
        if rhs.raw_value() == RB::ZERO {
            return Err(FixedPointError::DivisionByZero);
        }
        Ok(self / rhs)
    }

    /// Multiplies two values of the same type, keeping the representation
    /// and dropping the low half of the product.
    ///
    /// The exponent becomes `2E + width`, so the integer range doubles while
    /// the fractional bits shrink accordingly.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaled_fixed::MakeUfixed;
    /// use scaled_fixed::typenum::{U2, U4, U6};
    ///
    /// let three = MakeUfixed::<U2, U6>::from_int(3);
    /// let nine: MakeUfixed<U4, U4> = three.trunc_mul(three);
    /// assert_eq!(nine, 9);
    /// ```
    pub fn trunc_mul(self, rhs: Self) -> FixedPoint<RA, TruncExp<RA, EA>>
    where
        EA: Add<EA>,
        Sum<EA, EA>: Add<PInt<RA::Width>>,
        TruncExp<RA, EA>: Integer,
    {
        let (lhs, rhs) = (self.to_wide(), rhs.to_wide());
        let product = if RA::SIGNED {
            lhs.wrapping_mul(rhs) >> RA::BITS
        } else {
            ((lhs as u128).wrapping_mul(rhs as u128) >> RA::BITS) as i128
        };
        FixedPoint::from_wide(product)
    }

    /// `trunc_mul(self, self)`.
    ///
    /// ```
    /// use scaled_fixed::MakeUfixed;
    /// use scaled_fixed::typenum::{U0, U2, U6, U8};
    ///
    /// let three = MakeUfixed::<U2, U6>::from_int(3);
    /// let n: MakeUfixed<U8, U0> = three.trunc_square().trunc_square();
    /// assert_eq!(n, 81);
    /// ```
    pub fn trunc_square(self) -> FixedPoint<RA, TruncExp<RA, EA>>
    where
        EA: Add<EA>,
        Sum<EA, EA>: Add<PInt<RA::Width>>,
        TruncExp<RA, EA>: Integer,
    {
        self.trunc_mul(self)
    }

    /// Square root in the same format, truncated to its resolution.
    ///
    /// A root too large for the representation wraps like any other
    /// result.
    ///
    /// # Panics
    ///
    /// Panics if `self` is negative, like the native integer `isqrt`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaled_fixed::FixedPoint;
    /// use scaled_fixed::typenum::N6;
    ///
    /// let x = FixedPoint::<u16, N6>::from_int(98);
    /// assert_eq!(x.sqrt(), 9.890625);
    /// ```
    pub fn sqrt(self) -> Self {
        match sqrt_scaled(self.to_wide(), EA::I32) {
            Some(root) => Self::from_wide(root),
            None => panic!("square root of negative fixed-point value {}", self),
        }
    }

    /// Square root, reporting negative input and roots out of range.
    ///
    /// # Errors
    ///
    /// Returns `FixedPointError::NegativeSquareRoot` if `self` is negative
    /// and `FixedPointError::Overflow` if the root does not fit.
    pub fn checked_sqrt(self) -> Result<Self, FixedPointError> {
        let root = sqrt_scaled(self.to_wide(), EA::I32)
            .ok_or(FixedPointError::NegativeSquareRoot(self.to_f64()))?;
        RA::checked_narrow(root).map(Self::from_raw).ok_or(FixedPointError::Overflow {
            value: root as f64 * pow2(EA::I32),
            format: Self::format(),
        })
    }
}

// A native integer operand behaves as `FixedPoint<Int, Z0>`.
macro_rules! native_int_op {
    ($Op:ident, $op:ident: $($int:ty),+) => {
        $(
            impl<R: Rep, E: Integer> $Op<$int> for FixedPoint<R, E>
            where
                Self: $Op<FixedPoint<$int, Z0>>,
            {
                type Output = <Self as $Op<FixedPoint<$int, Z0>>>::Output;

                #[inline]
                fn $op(self, rhs: $int) -> <Self as $Op<FixedPoint<$int, Z0>>>::Output {
                    $Op::$op(self, FixedPoint::<$int, Z0>::from_raw(rhs))
                }
            }

            impl<R: Rep, E: Integer> $Op<FixedPoint<R, E>> for $int
            where
                FixedPoint<$int, Z0>: $Op<FixedPoint<R, E>>,
            {
                type Output = <FixedPoint<$int, Z0> as $Op<FixedPoint<R, E>>>::Output;

                #[inline]
                fn $op(self, rhs: FixedPoint<R, E>) -> <FixedPoint<$int, Z0> as $Op<FixedPoint<R, E>>>::Output {
                    $Op::$op(FixedPoint::<$int, Z0>::from_raw(self), rhs)
                }
            }
        )+
    };
}

native_int_op!(Add, add: i8, u8, i16, u16, i32, u32, i64, u64);
native_int_op!(Sub, sub: i8, u8, i16, u16, i32, u32, i64, u64);
native_int_op!(Mul, mul: i8, u8, i16, u16, i32, u32, i64, u64);
native_int_op!(Div, div: i8, u8, i16, u16, i32, u32, i64, u64);
