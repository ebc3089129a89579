//! Backing integers and the rules for picking the narrowest one.
//!
//! Every [`FixedPoint`](crate::FixedPoint) stores its value in one of eight
//! built-in integers. The [`Rep`] trait describes them both as run-time values
//! and as type-level widths, so promotion can be computed by the compiler.

use core::fmt::{self, Debug, Display};
use core::hash::Hash;

use bytemuck::Pod;
use typenum::{B0, B1, Bit, NonZero, Unsigned};

mod sealed {
    pub trait Sealed {}
}

/// Widest supported representation, in bits.
pub const MAX_BITS: u32 = 64;

/// The built-in integer kinds that can back a fixed-point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
}

impl RepKind {
    /// Width of the kind in bits, sign bit included.
    pub const fn bits(self) -> u32 {
        match self {
            RepKind::I8 | RepKind::U8 => 8,
            RepKind::I16 | RepKind::U16 => 16,
            RepKind::I32 | RepKind::U32 => 32,
            RepKind::I64 | RepKind::U64 => 64,
        }
    }

    pub const fn is_signed(self) -> bool {
        matches!(self, RepKind::I8 | RepKind::I16 | RepKind::I32 | RepKind::I64)
    }

    /// Narrowest kind holding `bits` bits (sign bit included), if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaled_fixed::RepKind;
    ///
    /// assert_eq!(RepKind::for_width(9, false), Some(RepKind::U16));
    /// assert_eq!(RepKind::for_width(33, true), Some(RepKind::I64));
    /// assert_eq!(RepKind::for_width(65, true), None);
    /// ```
    pub const fn for_width(bits: u32, signed: bool) -> Option<Self> {
        match (bits, signed) {
            (0..=8, false) => Some(RepKind::U8),
            (0..=8, true) => Some(RepKind::I8),
            (9..=16, false) => Some(RepKind::U16),
            (9..=16, true) => Some(RepKind::I16),
            (17..=32, false) => Some(RepKind::U32),
            (17..=32, true) => Some(RepKind::I32),
            (33..=MAX_BITS, false) => Some(RepKind::U64),
            (33..=MAX_BITS, true) => Some(RepKind::I64),
            _ => None,
        }
    }
}

impl Display for RepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.is_signed() { 'i' } else { 'u' };
        write!(f, "{}{}", prefix, self.bits())
    }
}

/// Picks the narrowest representation able to hold `integer_digits` plus
/// `fractional_digits` magnitude bits, plus a sign bit when `signed`.
///
/// Returns `None` when more than [`MAX_BITS`] bits are required. The
/// type-level [`SelectRep`] makes the same choice at compile time and turns
/// the `None` case into a build error.
///
/// # Examples
///
/// ```
/// use scaled_fixed::rep::{select, RepKind};
///
/// assert_eq!(select(4, 4, false), Some(RepKind::U8));
/// assert_eq!(select(7, 0, true), Some(RepKind::I8));
/// assert_eq!(select(2, 29, true), Some(RepKind::I32));
/// assert_eq!(select(40, 30, false), None);
/// ```
pub const fn select(integer_digits: u32, fractional_digits: u32, signed: bool) -> Option<RepKind> {
    let total = integer_digits
        .saturating_add(fractional_digits)
        .saturating_add(signed as u32);
    RepKind::for_width(total, signed)
}

/// A built-in integer usable as the raw value of a fixed-point number.
///
/// Sealed: implemented for `i8`, `u8`, `i16`, `u16`, `i32`, `u32`, `i64`
/// and `u64` only. The same set doubles as the native integer operands that
/// mix with fixed-point values.
pub trait Rep:
    Copy + Default + Debug + Display + Eq + Ord + Hash + Pod + Send + Sync + sealed::Sealed
{
    /// Width in bits as a type-level number.
    type Width: Unsigned + NonZero;
    /// `B1` for signed kinds, `B0` for unsigned ones.
    type Signedness: Bit;

    const KIND: RepKind;
    const BITS: u32;
    const SIGNED: bool;
    const ZERO: Self;
    const MIN: Self;
    const MAX: Self;

    /// Lossless widening into the common working integer.
    fn widen(self) -> i128;

    /// Keeps the low `BITS` bits of `wide` (two's-complement wraparound).
    fn wrapping_narrow(wide: i128) -> Self;

    /// Narrows `wide`, or `None` if it is out of range.
    fn checked_narrow(wide: i128) -> Option<Self>;
}

macro_rules! impl_rep {
    ($($ty:ty => $kind:ident, $width:ty, $sign:ty;)+) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Rep for $ty {
                type Width = $width;
                type Signedness = $sign;

                const KIND: RepKind = RepKind::$kind;
                const BITS: u32 = <$ty>::BITS;
                const SIGNED: bool = <$sign as Bit>::BOOL;
                const ZERO: Self = 0;
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;

                #[inline]
                fn widen(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn wrapping_narrow(wide: i128) -> Self {
                    wide as $ty
                }

                #[inline]
                fn checked_narrow(wide: i128) -> Option<Self> {
                    <$ty>::try_from(wide).ok()
                }
            }
        )+
    };
}

impl_rep! {
    i8 => I8, typenum::U8, B1;
    u8 => U8, typenum::U8, B0;
    i16 => I16, typenum::U16, B1;
    u16 => U16, typenum::U16, B0;
    i32 => I32, typenum::U32, B1;
    u32 => U32, typenum::U32, B0;
    i64 => I64, typenum::U64, B1;
    u64 => U64, typenum::U64, B0;
}

/// Type-level representation selector: maps a bit count (sign bit included)
/// and a signedness to the narrowest [`Rep`] holding it.
///
/// Implemented for widths 1 through 64; anything wider has no impl and fails
/// to compile.
#[diagnostic::on_unimplemented(
    message = "no built-in integer holds `{Self}` bits",
    label = "requested width exceeds the 64-bit representation tier"
)]
pub trait SelectRep<S> {
    type Output: Rep;
}

/// The representation [`SelectRep`] picks for `W` bits of signedness `S`.
pub type Selected<W, S> = <W as SelectRep<S>>::Output;

macro_rules! select_rep {
    ($unsigned:ty, $signed:ty: $($width:ident)+) => {
        $(
            impl SelectRep<B0> for typenum::$width {
                type Output = $unsigned;
            }

            impl SelectRep<B1> for typenum::$width {
                type Output = $signed;
            }
        )+
    };
}

select_rep!(u8, i8: U1 U2 U3 U4 U5 U6 U7 U8);
select_rep!(u16, i16: U9 U10 U11 U12 U13 U14 U15 U16);
select_rep!(u32, i32:
    U17 U18 U19 U20 U21 U22 U23 U24 U25 U26 U27 U28 U29 U30 U31 U32);
select_rep!(u64, i64:
    U33 U34 U35 U36 U37 U38 U39 U40 U41 U42 U43 U44 U45 U46 U47 U48
    U49 U50 U51 U52 U53 U54 U55 U56 U57 U58 U59 U60 U61 U62 U63 U64);
