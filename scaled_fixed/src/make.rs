//! Fixed-point types named by digit counts.
//!
//! `MakeFixed<I, F>` and `MakeUfixed<I, F>` pick the narrowest backing
//! integer that holds `I` integer and `F` fractional binary digits, and set
//! the exponent to `-F`. Any value with magnitude below `2^I` is then
//! representable with resolution `2^-F`.
//!
//! ```
//! use scaled_fixed::{FixedPoint, MakeFixed, MakeUfixed};
//! use scaled_fixed::typenum::{N3, N29, U2, U3, U5, U29};
//!
//! let _: FixedPoint<u8, N3> = MakeUfixed::<U5, U3>::zero();
//! let _: FixedPoint<i32, N29> = MakeFixed::<U2, U29>::zero();
//! ```

use typenum::{B0, B1, Integer, NInt, Sum, U1, UInt, UTerm, Unsigned, Z0};

use crate::fixed_point::FixedPoint;
use crate::rep::Selected;

/// Maps a count of fractional digits `F` to the exponent `-F`.
pub trait FractionalExp: Unsigned {
    type Exp: Integer;
}

impl FractionalExp for UTerm {
    type Exp = Z0;
}

impl<U: Unsigned, B: typenum::Bit> FractionalExp for UInt<U, B> {
    type Exp = NInt<UInt<U, B>>;
}

/// Exponent of a type with `F` fractional digits.
pub type FractionalExponent<F> = <F as FractionalExp>::Exp;

/// Signed fixed-point type with `I` integer and `F` fractional digits; the
/// sign bit comes on top of both.
pub type MakeFixed<I, F> = FixedPoint<Selected<Sum<Sum<I, F>, U1>, B1>, FractionalExponent<F>>;

/// Unsigned fixed-point type with `I` integer and `F` fractional digits.
pub type MakeUfixed<I, F> = FixedPoint<Selected<Sum<I, F>, B0>, FractionalExponent<F>>;
