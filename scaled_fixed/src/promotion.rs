//! Result-type rules for binary operators.
//!
//! The rules exist twice. [`promote`] is a plain `const fn` over [`Format`]
//! descriptors and can be tested in isolation. [`AddPromotion`],
//! [`MulPromotion`] and [`DivPromotion`] compute the same answer with
//! `typenum` arithmetic so that every operator has a concrete output type;
//! the operators assert at compile time that the two agree.
//!
//! | operator | exponent        | width                               |
//! |----------|-----------------|-------------------------------------|
//! | `+ -`    | `min(ea, eb)`   | widest operand after alignment      |
//! | `*`      | `ea + eb`       | `wa + wb`                           |
//! | `/`      | `ea - eb`       | `wa`                                |
//!
//! The result is signed if either operand is. An unsigned operand gains one
//! bit when the result is signed, and the width is rounded up to the next
//! 8/16/32/64-bit tier.

use core::fmt::{self, Display};
use core::ops::{Add, BitOr, Sub};

use typenum::{B0, B1, Diff, Integer, Max, Maximum, Min, Minimum, NonZero, PInt, Sum, U0, U1, Unsigned, Z0};

use crate::fixed_point::{FixedPoint, Scaled};
use crate::rep::{Rep, RepKind, SelectRep, Selected};

/// Width, exponent and signedness of a fixed-point type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Format {
    /// Bits of the representation, sign bit included.
    pub width: u32,
    pub exponent: i32,
    pub signed: bool,
}

impl Format {
    pub const fn new(width: u32, exponent: i32, signed: bool) -> Self {
        Self { width, exponent, signed }
    }

    /// Descriptor of `FixedPoint<R, E>`.
    pub const fn of<R: Rep, E: Integer>() -> Self {
        Self::new(R::BITS, E::I32, R::SIGNED)
    }

    /// Descriptor a native integer takes on as an operand.
    pub const fn native<T: Rep>() -> Self {
        Self::of::<T, Z0>()
    }

    /// Field-wise equality usable in `const` contexts.
    pub const fn same_as(self, other: Self) -> bool {
        self.width == other.width && self.exponent == other.exponent && self.signed == other.signed
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.signed { 'i' } else { 'u' };
        write!(f, "{}{} x 2^{}", prefix, self.width, self.exponent)
    }
}

/// Binary arithmetic operators with a promotion rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

/// Exponent both operands are aligned to before adding, subtracting or
/// comparing them: the finer of the two.
pub const fn alignment_exponent(lhs: Format, rhs: Format) -> i32 {
    if lhs.exponent < rhs.exponent { lhs.exponent } else { rhs.exponent }
}

/// Result format of `lhs <op> rhs`, or `None` when no representation tier is
/// wide enough.
///
/// # Examples
///
/// ```
/// use scaled_fixed::promotion::{promote, Format, Operation};
///
/// let a = Format::new(8, -3, false);
/// let b = Format::new(8, -4, true);
/// assert_eq!(promote(Operation::Add, a, b), Some(Format::new(16, -4, true)));
/// assert_eq!(promote(Operation::Mul, a, b), Some(Format::new(16, -7, true)));
///
/// let wide = Format::new(64, 0, true);
/// assert_eq!(promote(Operation::Mul, wide, b), None);
/// ```
pub const fn promote(op: Operation, lhs: Format, rhs: Format) -> Option<Format> {
    let signed = lhs.signed || rhs.signed;
    let (width, exponent) = match op {
        Operation::Add | Operation::Sub => {
            let exponent = alignment_exponent(lhs, rhs);
            let a = aligned_width(lhs, exponent, signed);
            let b = aligned_width(rhs, exponent, signed);
            (if a > b { a } else { b }, exponent)
        }
        Operation::Mul => (lhs.width + rhs.width, lhs.exponent + rhs.exponent),
        Operation::Div => (lhs.width + sign_extension(lhs, signed), lhs.exponent - rhs.exponent),
    };
    match RepKind::for_width(width, signed) {
        Some(kind) => Some(Format::new(kind.bits(), exponent, signed)),
        None => None,
    }
}

/// `true` if `promote(op, lhs, rhs)` is exactly `out`.
pub const fn promotes_to(op: Operation, lhs: Format, rhs: Format, out: Format) -> bool {
    match promote(op, lhs, rhs) {
        Some(format) => format.same_as(out),
        None => false,
    }
}

const fn aligned_width(format: Format, exponent: i32, signed: bool) -> u32 {
    format.width + (format.exponent - exponent) as u32 + sign_extension(format, signed)
}

const fn sign_extension(format: Format, signed: bool) -> u32 {
    if signed && !format.signed { 1 } else { 0 }
}

// Type-level mirror of `promote`.

/// Bits an operand of signedness `Self` gains inside a result of
/// signedness `S`.
pub trait SignExtension<S> {
    type Output: Unsigned;
}

impl SignExtension<B0> for B0 {
    type Output = U0;
}

impl SignExtension<B1> for B0 {
    type Output = U1;
}

impl<S> SignExtension<S> for B1 {
    type Output = U0;
}

/// Magnitude of a non-negative type-level integer.
pub trait NonNegative {
    type Output: Unsigned;
}

impl NonNegative for Z0 {
    type Output = U0;
}

impl<U: Unsigned + NonZero> NonNegative for PInt<U> {
    type Output = U;
}

/// Width of representation `Self` at exponent `E` once re-expressed at the
/// finer exponent `To` inside a result of signedness `S`.
pub trait Aligned<E, To, S> {
    type Output: Unsigned;
}

type SignOf<R> = <R as Rep>::Signedness;
type WidthOf<R> = <R as Rep>::Width;
type Either<A, B> = <A as BitOr<B>>::Output;
type ResultSign<RA, RB> = Either<SignOf<RA>, SignOf<RB>>;
type Shift<E, To> = <Diff<E, To> as NonNegative>::Output;
type Extension<R, S> = <SignOf<R> as SignExtension<S>>::Output;
type AlignedWidth<R, E, To, S> = <R as Aligned<E, To, S>>::Output;

impl<R, E, To, S> Aligned<E, To, S> for R
where
    R: Rep,
    E: Sub<To>,
    Diff<E, To>: NonNegative,
    SignOf<R>: SignExtension<S>,
    WidthOf<R>: Add<Shift<E, To>>,
    Sum<WidthOf<R>, Shift<E, To>>: Add<Extension<R, S>>,
    Sum<Sum<WidthOf<R>, Shift<E, To>>, Extension<R, S>>: Unsigned,
{
    type Output = Sum<Sum<WidthOf<R>, Shift<E, To>>, Extension<R, S>>;
}

/// Result type of `Self + Rhs` and `Self - Rhs`.
pub trait AddPromotion<Rhs> {
    type Promoted: Scaled;
}

/// Result type of `Self * Rhs`.
pub trait MulPromotion<Rhs> {
    type Promoted: Scaled;
}

/// Result type of `Self / Rhs`.
pub trait DivPromotion<Rhs> {
    type Promoted: Scaled;
}

/// Output of `L + R` and `L - R`.
pub type SumOf<L, R> = <L as AddPromotion<R>>::Promoted;
/// Output of `L * R`.
pub type ProductOf<L, R> = <L as MulPromotion<R>>::Promoted;
/// Output of `L / R`.
pub type QuotientOf<L, R> = <L as DivPromotion<R>>::Promoted;

type SumExp<EA, EB> = Minimum<EA, EB>;
type SumWidth<RA, EA, RB, EB> = Maximum<
    AlignedWidth<RA, EA, SumExp<EA, EB>, ResultSign<RA, RB>>,
    AlignedWidth<RB, EB, SumExp<EA, EB>, ResultSign<RA, RB>>,
>;

impl<RA, EA, RB, EB> AddPromotion<FixedPoint<RB, EB>> for FixedPoint<RA, EA>
where
    RA: Rep,
    RB: Rep,
    EA: Integer + Min<EB>,
    EB: Integer,
    SumExp<EA, EB>: Integer,
    SignOf<RA>: BitOr<SignOf<RB>>,
    RA: Aligned<EA, SumExp<EA, EB>, ResultSign<RA, RB>>,
    RB: Aligned<EB, SumExp<EA, EB>, ResultSign<RA, RB>>,
    AlignedWidth<RA, EA, SumExp<EA, EB>, ResultSign<RA, RB>>:
        Max<AlignedWidth<RB, EB, SumExp<EA, EB>, ResultSign<RA, RB>>>,
    SumWidth<RA, EA, RB, EB>: SelectRep<ResultSign<RA, RB>>,
{
    type Promoted = FixedPoint<Selected<SumWidth<RA, EA, RB, EB>, ResultSign<RA, RB>>, SumExp<EA, EB>>;
}

type ProductWidth<RA, RB> = Sum<WidthOf<RA>, WidthOf<RB>>;

impl<RA, EA, RB, EB> MulPromotion<FixedPoint<RB, EB>> for FixedPoint<RA, EA>
where
    RA: Rep,
    RB: Rep,
    EA: Integer + Add<EB>,
    EB: Integer,
    Sum<EA, EB>: Integer,
    SignOf<RA>: BitOr<SignOf<RB>>,
    WidthOf<RA>: Add<WidthOf<RB>>,
    ProductWidth<RA, RB>: SelectRep<ResultSign<RA, RB>>,
{
    type Promoted = FixedPoint<Selected<ProductWidth<RA, RB>, ResultSign<RA, RB>>, Sum<EA, EB>>;
}

type QuotientWidth<RA, RB> = Sum<WidthOf<RA>, Extension<RA, ResultSign<RA, RB>>>;

impl<RA, EA, RB, EB> DivPromotion<FixedPoint<RB, EB>> for FixedPoint<RA, EA>
where
    RA: Rep,
    RB: Rep,
    EA: Integer + Sub<EB>,
    EB: Integer,
    Diff<EA, EB>: Integer,
    SignOf<RA>: BitOr<SignOf<RB>>,
    SignOf<RA>: SignExtension<ResultSign<RA, RB>>,
    WidthOf<RA>: Add<Extension<RA, ResultSign<RA, RB>>>,
    QuotientWidth<RA, RB>: SelectRep<ResultSign<RA, RB>>,
{
    type Promoted = FixedPoint<Selected<QuotientWidth<RA, RB>, ResultSign<RA, RB>>, Diff<EA, EB>>;
}

/// Exponent of `trunc_mul` on two `FixedPoint<R, E>`: the full product
/// shifted right by the representation width.
pub type TruncExp<R, E> = Sum<Sum<E, E>, PInt<WidthOf<R>>>;
