use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use bytemuck::{Pod, Zeroable};
use typenum::{Integer, Z0};

use crate::convert::{checked_rescale, rescale, scale_float, unscale_float};
use crate::error::FixedPointError;
use crate::float::Floating;
use crate::promotion::Format;
use crate::rep::Rep;

/// A binary fixed-point number: the integer `raw` scaled by `2^E`.
///
/// `R` is the backing integer (see [`Rep`]) and `E` a `typenum` integer
/// exponent. Negative exponents give fractional bits, positive ones trade
/// resolution for range.
///
/// Arithmetic never fails: results that do not fit wrap modulo `2^width`,
/// and conversions that lose fractional bits truncate.
///
/// # Type Parameters
///
/// - `R`: Backing integer, one of `i8 u8 i16 u16 i32 u32 i64 u64`
/// - `E`: Exponent, e.g. `N4` for four fractional bits
///
/// # Examples
///
/// ```
/// use scaled_fixed::FixedPoint;
/// use scaled_fixed::typenum::{N3, N4};
///
/// let x = FixedPoint::<u8, N3>::from_int(8);
/// let y = FixedPoint::<u8, N4>::from_f64(3.0);
///
/// // The sum is aligned to the finer exponent and widened to hold both operands.
/// let sum: FixedPoint<u16, N4> = x + y;
/// assert_eq!(sum, 11);
/// ```
#[repr(transparent)]
pub struct FixedPoint<R = i32, E = Z0> {
    raw: R,
    exponent: PhantomData<E>,
}

// Safety: FixedPoint is a transparent wrapper around a Pod integer; the
// PhantomData exponent is zero-sized.
unsafe impl<R: Rep, E: Integer + 'static> Zeroable for FixedPoint<R, E> {}

unsafe impl<R: Rep, E: Integer + 'static> Pod for FixedPoint<R, E> {}

/// A fixed-point type seen through its format, for code that is generic over
/// operator results.
pub trait Scaled: Copy {
    type Bits: Rep;
    type Exp: Integer;

    const FORMAT: Format;

    /// Wraps `wide`, already scaled to this type's exponent, into the
    /// representation.
    fn from_wide(wide: i128) -> Self;

    fn to_wide(self) -> i128;
}

impl<R: Rep, E: Integer> Scaled for FixedPoint<R, E> {
    type Bits = R;
    type Exp = E;

    const FORMAT: Format = Format::of::<R, E>();

    #[inline]
    fn from_wide(wide: i128) -> Self {
        Self::from_raw(R::wrapping_narrow(wide))
    }

    #[inline]
    fn to_wide(self) -> i128 {
        self.raw.widen()
    }
}

impl<R: Rep, E: Integer> FixedPoint<R, E> {
    /// The exponent `E` as a value.
    pub const EXPONENT: i32 = E::I32;

    /// Creates a fixed-point number from its raw representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaled_fixed::FixedPoint;
    /// use scaled_fixed::typenum::N8;
    ///
    /// // With 8 fractional bits, raw value 256 represents 1.0
    /// let x = FixedPoint::<i16, N8>::from_raw(256);
    /// assert_eq!(x.to_f32(), 1.0);
    /// ```
    pub const fn from_raw(raw: R) -> Self {
        Self { raw, exponent: PhantomData }
    }

    /// Returns the raw integer representation.
    pub fn raw_value(self) -> R {
        self.raw
    }

    /// Create a fixed-point value of zero
    pub const fn zero() -> Self {
        Self::from_raw(R::ZERO)
    }

    /// Returns the maximum representable value.
    pub const fn max_value() -> Self {
        Self::from_raw(R::MAX)
    }

    /// Returns the minimum representable value.
    pub const fn min_value() -> Self {
        Self::from_raw(R::MIN)
    }

    /// Descriptor of this type.
    pub const fn format() -> Format {
        Format::of::<R, E>()
    }

    /// Converts a native integer, shifting it to the exponent and wrapping
    /// into the representation.
    ///
    /// With a positive exponent the low bits are shifted out arithmetically.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaled_fixed::FixedPoint;
    /// use scaled_fixed::typenum::{N4, P2};
    ///
    /// assert_eq!(FixedPoint::<u8, N4>::from_int(3).raw_value(), 48);
    /// assert_eq!(FixedPoint::<i8, P2>::from_int(-7).raw_value(), -2);
    /// ```
    pub fn from_int<T: Rep>(value: T) -> Self {
        Self::from_wide(rescale(value.widen(), 0, E::I32))
    }

    /// Converts an `f64`, truncating toward zero and wrapping out-of-range
    /// values. NaN converts to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaled_fixed::FixedPoint;
    /// use scaled_fixed::typenum::N4;
    ///
    /// assert_eq!(FixedPoint::<u8, N4>::from_f64(15.9375), 15.9375);
    /// assert_eq!(FixedPoint::<u8, N4>::from_f64(0.006), 0);
    /// assert_eq!(FixedPoint::<i8, N4>::from_f64(-1.99), -1.9375);
    /// ```
    pub fn from_f64(value: f64) -> Self {
        Self::from_wide(scale_float(value, E::I32))
    }

    /// Converts an `f32`; see [`from_f64`](Self::from_f64).
    pub fn from_f32(value: f32) -> Self {
        Self::from_f64(f64::from(value))
    }

    /// Converts any supported floating-point value.
    pub fn from_float<T: Floating>(value: T) -> Self {
        Self::from_f64(value.into_f64())
    }

    /// Converts from a fixed-point number of another width or exponent.
    ///
    /// Moving to a finer exponent is exact as long as the result fits;
    /// moving to a coarser one shifts the low bits out.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaled_fixed::FixedPoint;
    /// use scaled_fixed::typenum::{N2, N12};
    ///
    /// let fine = FixedPoint::<i32, N12>::from_f64(-2.625);
    /// let coarse = FixedPoint::<i8, N2>::from_fixed(fine);
    /// assert_eq!(coarse, -2.75);
    /// ```
    pub fn from_fixed<R2: Rep, E2: Integer>(other: FixedPoint<R2, E2>) -> Self {
        Self::from_wide(rescale(other.raw.widen(), E2::I32, E::I32))
    }

    /// Converts an `f64`, reporting values that do not fit instead of
    /// wrapping them.
    ///
    /// # Errors
    ///
    /// Returns `FixedPointError::NotFinite` for NaN and infinities, and
    /// `FixedPointError::Overflow` if the truncated value is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaled_fixed::FixedPoint;
    /// use scaled_fixed::typenum::N4;
    ///
    /// let x = FixedPoint::<u8, N4>::checked_from_f64(3.5)?;
    /// assert_eq!(x, 3.5);
    ///
    /// // Out of range
    /// assert!(FixedPoint::<u8, N4>::checked_from_f64(16.0).is_err());
    /// # Ok::<(), scaled_fixed::FixedPointError>(())
    /// ```
    pub fn checked_from_f64(value: f64) -> Result<Self, FixedPointError> {
        if !value.is_finite() {
            return Err(FixedPointError::NotFinite(value));
        }
        R::checked_narrow(scale_float(value, E::I32))
            .map(Self::from_raw)
            .ok_or(FixedPointError::Overflow { value, format: Self::format() })
    }

    /// Converts an `f32`; see [`checked_from_f64`](Self::checked_from_f64).
    pub fn checked_from_f32(value: f32) -> Result<Self, FixedPointError> {
        Self::checked_from_f64(f64::from(value))
    }

    /// Converts a native integer, reporting values that do not fit.
    ///
    /// # Errors
    ///
    /// Returns `FixedPointError::Overflow` if the scaled value is out of range.
    pub fn checked_from_int<T: Rep>(value: T) -> Result<Self, FixedPointError> {
        let wide = value.widen();
        checked_rescale(wide, 0, E::I32)
            .and_then(R::checked_narrow)
            .map(Self::from_raw)
            .ok_or(FixedPointError::Overflow { value: wide as f64, format: Self::format() })
    }

    /// Converts from another fixed-point type, reporting values that do not
    /// fit. Discarded fractional bits are not an error.
    ///
    /// # Errors
    ///
    /// Returns `FixedPointError::Overflow` if the rescaled value is out of range.
    pub fn checked_from_fixed<R2: Rep, E2: Integer>(
        other: FixedPoint<R2, E2>,
    ) -> Result<Self, FixedPointError> {
        checked_rescale(other.raw.widen(), E2::I32, E::I32)
            .and_then(R::checked_narrow)
            .map(Self::from_raw)
            .ok_or(FixedPointError::Overflow { value: other.to_f64(), format: Self::format() })
    }

    /// Converts the fixed-point number to an `f64`.
    pub fn to_f64(self) -> f64 {
        unscale_float(self.raw.widen(), E::I32)
    }

    /// Converts the fixed-point number to an `f32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaled_fixed::FixedPoint;
    /// use scaled_fixed::typenum::N8;
    ///
    /// let x = FixedPoint::<i16, N8>::from_f32(3.14);
    /// assert!((x.to_f32() - 3.14).abs() < 0.01);
    /// ```
    pub fn to_f32(self) -> f32 {
        self.to_float()
    }

    /// Converts to any supported floating-point type, rounding once to the
    /// nearest value of that type.
    pub fn to_float<T: Floating>(self) -> T {
        T::from_scaled(self.raw.widen(), E::I32)
    }

    /// Converts to a native integer: the fractional bits are shifted out
    /// arithmetically and the result wraps into `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaled_fixed::FixedPoint;
    /// use scaled_fixed::typenum::N4;
    ///
    /// assert_eq!(FixedPoint::<i16, N4>::from_f64(7.75).to_int::<i32>(), 7);
    /// assert_eq!(FixedPoint::<i16, N4>::from_f64(-7.75).to_int::<i32>(), -8);
    /// ```
    pub fn to_int<T: Rep>(self) -> T {
        T::wrapping_narrow(rescale(self.raw.widen(), E::I32, 0))
    }
}

impl<R: Rep, E: Integer> Clone for FixedPoint<R, E> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Rep, E: Integer> Copy for FixedPoint<R, E> {}

impl<R: Rep, E: Integer> Default for FixedPoint<R, E> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<R: Rep, E: Integer> Hash for FixedPoint<R, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<R: Rep, E: Integer> fmt::Debug for FixedPoint<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedPoint")
            .field("raw", &self.raw)
            .field("exponent", &E::I32)
            .field("value", &self.to_f64())
            .finish()
    }
}

impl<R: Rep, E: Integer> fmt::Display for FixedPoint<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f64(), f)
    }
}

macro_rules! from_native {
    ($($int:ty),+) => {
        $(
            impl<R: Rep, E: Integer> From<$int> for FixedPoint<R, E> {
                fn from(value: $int) -> Self {
                    Self::from_int(value)
                }
            }
        )+
    };
}

from_native!(i8, u8, i16, u16, i32, u32, i64, u64);

impl<R: Rep, E: Integer> From<f32> for FixedPoint<R, E> {
    fn from(value: f32) -> Self {
        Self::from_f32(value)
    }
}

impl<R: Rep, E: Integer> From<f64> for FixedPoint<R, E> {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}
