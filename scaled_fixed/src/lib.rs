//! # scaled_fixed
//!
//! Binary fixed-point numbers whose representation and scale are chosen at
//! compile time.
//!
//! ## Features
//!
//! - `FixedPoint<R, E>`: a built-in integer `R` scaled by `2^E`, with `E` a
//!   `typenum` integer
//! - Digit-count constructors `MakeFixed<I, F>` / `MakeUfixed<I, F>` that
//!   pick the narrowest integer holding the requested digits
//! - Arithmetic between any two formats, with the result type computed by
//!   promotion rules instead of losing bits silently
//! - Mixed arithmetic with native integers and floats
//! - Zero-copy casts through `bytemuck`
//! - `no_std` when the default `std` feature is disabled
//!
//! ## Examples
//!
//! ```
//! use scaled_fixed::{FixedPoint, MakeFixed, MakeUfixed};
//! use scaled_fixed::typenum::{N3, N4, U0, U4, U5, U3, U7};
//!
//! let x = MakeUfixed::<U4, U4>::from_f64(15.9375);
//! assert_eq!(x, 15.9375);
//!
//! // Mixed exponents align to the finer one; the width grows to fit.
//! let sum: FixedPoint<u16, N4> = FixedPoint::<u8, N3>::from_int(8) + FixedPoint::<u8, N4>::from_int(3);
//! assert_eq!(sum, 11);
//!
//! // Native integers act as exponent-0 fixed-point values.
//! let y = MakeUfixed::<U5, U3>::from_int(8) + 3;
//! assert_eq!(y, 11);
//!
//! // Floats take over: the result is a float.
//! let z: f32 = MakeUfixed::<U5, U3>::from_int(8) + 3.0f32;
//! assert_eq!(z, 11.0);
//!
//! // Division truncates.
//! let q = MakeFixed::<U7, U0>::from_int(15) / MakeFixed::<U7, U0>::from_int(2);
//! assert_eq!(q, 7);
//! ```
//!
//! ## Panics
//!
//! Arithmetic wraps instead of failing, with two exceptions that mirror the
//! native integers: `/` panics on a zero divisor and
//! [`sqrt`](FixedPoint::sqrt) panics on a negative value. Use
//! [`checked_div`](FixedPoint::checked_div) and
//! [`checked_sqrt`](FixedPoint::checked_sqrt) to get a
//! [`FixedPointError`] instead.

#![cfg_attr(not(feature = "std"), no_std)]

mod cmp;
mod convert;
pub mod error;
pub mod fixed_point;
pub mod float;
pub mod make;
mod ops;
pub mod promotion;
pub mod rep;
pub mod scalar_formats;

pub use error::FixedPointError;
pub use fixed_point::{FixedPoint, Scaled};
pub use float::Floating;
pub use make::{MakeFixed, MakeUfixed};
pub use promotion::{Format, Operation, ProductOf, QuotientOf, SumOf};
pub use rep::{Rep, RepKind};
pub use typenum;
