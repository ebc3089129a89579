//! Scaling primitives shared by constructors, operators and comparisons.
//!
//! All raw values pass through `i128`, which holds any 64-bit representation
//! shifted left by up to 63 bits.

use core::cmp::Ordering;

/// Re-expresses `wide`, scaled by `2^from`, at scale `2^to`.
///
/// Moving to a finer exponent shifts left; moving to a coarser one is an
/// arithmetic right shift, so discarded bits round toward negative infinity
/// just like `>>` on the representation.
pub(crate) fn rescale(wide: i128, from: i32, to: i32) -> i128 {
    let shift = i64::from(from) - i64::from(to);
    if shift >= 0 {
        if shift >= 128 { 0 } else { wide << shift }
    } else if shift <= -128 {
        if wide < 0 { -1 } else { 0 }
    } else {
        wide >> -shift
    }
}

/// Like [`rescale`], but `None` if a left shift would push significant bits
/// past the working integer.
pub(crate) fn checked_rescale(wide: i128, from: i32, to: i32) -> Option<i128> {
    let shift = i64::from(from) - i64::from(to);
    if shift > 63 && wide != 0 {
        return None;
    }
    Some(rescale(wide, from, to))
}

/// Exact `2^n` as an `f64`, flushing to zero or infinity outside the
/// representable range.
pub(crate) fn pow2(n: i32) -> f64 {
    const MANTISSA_BITS: i32 = 52;
    const BIAS: i32 = 1023;

    if n > BIAS {
        f64::INFINITY
    } else if n >= 1 - BIAS {
        f64::from_bits(((n + BIAS) as u64) << MANTISSA_BITS)
    } else if n >= 1 - BIAS - MANTISSA_BITS {
        f64::from_bits(1u64 << (n - (1 - BIAS - MANTISSA_BITS)))
    } else {
        0.0
    }
}

/// Scales `value` by `2^-exponent` and truncates toward zero.
///
/// NaN becomes zero and infinities saturate to the `i128` range before the
/// caller narrows them.
pub(crate) fn scale_float(value: f64, exponent: i32) -> i128 {
    (value * pow2(exponent.saturating_neg())) as i128
}

/// `value * 2^exponent`, split so that no partial power of two leaves the
/// `f64` range while the product still fits.
fn scale_by_pow2(value: f64, exponent: i32) -> f64 {
    // |value| < 2^128 for any raw value, so anything past this saturates
    let exponent = exponent.clamp(-2200, 2200);
    let first = exponent / 3;
    let second = (exponent - first) / 2;
    let third = exponent - first - second;
    value * pow2(first) * pow2(second) * pow2(third)
}

/// Rounds `wide` to its `digits` most significant bits, ties to even.
///
/// Returns the rounded significand and the power of two it is scaled by.
fn round_significant(wide: i128, digits: u32) -> (i128, i32) {
    let magnitude = wide.unsigned_abs();
    let width = u128::BITS - magnitude.leading_zeros();
    if width <= digits {
        return (wide, 0);
    }
    let dropped = width - digits;
    let kept = magnitude >> dropped;
    let rest = magnitude & ((1u128 << dropped) - 1);
    let half = 1u128 << (dropped - 1);
    let kept = if rest > half || (rest == half && kept & 1 == 1) { kept + 1 } else { kept };
    let kept = kept as i128;
    (if wide < 0 { -kept } else { kept }, dropped as i32)
}

/// `wide * 2^exponent` rounded once to a float with `digits` significand
/// bits, returned as the `f64` holding that value exactly.
///
/// Narrowing the result to a float type with `digits` significand bits is
/// then exact unless the value is subnormal there.
pub(crate) fn unscale_rounded(wide: i128, exponent: i32, digits: u32) -> f64 {
    let (significand, shift) = round_significant(wide, digits);
    scale_by_pow2(significand as f64, exponent.saturating_add(shift))
}

/// Value of `wide * 2^exponent` as an `f64`.
pub(crate) fn unscale_float(wide: i128, exponent: i32) -> f64 {
    unscale_rounded(wide, exponent, f64::MANTISSA_DIGITS)
}

/// Truncated square root of `wide * 2^exponent`, as a raw value at the
/// same exponent.
///
/// `None` for negative input. A root of `2^64` or more fits no backing
/// integer; it is reported as exactly `2^64`, which narrows to zero.
pub(crate) fn sqrt_scaled(wide: i128, exponent: i32) -> Option<i128> {
    if wide <= 0 {
        return (wide == 0).then_some(0);
    }
    // root(wide * 2^e) / 2^e == root(wide * 2^-e), and the floor of the
    // radicand does not change the floor of the root.
    let magnitude = wide as u128;
    let radicand = if exponent >= 0 {
        magnitude.checked_shr(exponent.unsigned_abs()).unwrap_or(0)
    } else {
        let shift = exponent.unsigned_abs();
        if shift > magnitude.leading_zeros() {
            return Some(1 << 64);
        }
        magnitude << shift
    };
    Some(radicand.isqrt() as i128)
}

/// Orders `lhs * 2^lhs_exp` against `rhs * 2^rhs_exp`.
///
/// Both raw values must fit in 64 bits. The coarser operand is shifted to the
/// finer exponent; once that shift exceeds 63 bits any non-zero coarse value
/// outweighs the other operand, so only its sign matters.
pub(crate) fn cmp_scaled(lhs: i128, lhs_exp: i32, rhs: i128, rhs_exp: i32) -> Ordering {
    if lhs_exp >= rhs_exp {
        cmp_aligned(lhs, i64::from(lhs_exp) - i64::from(rhs_exp), rhs)
    } else {
        cmp_aligned(rhs, i64::from(rhs_exp) - i64::from(lhs_exp), lhs).reverse()
    }
}

fn cmp_aligned(coarse: i128, shift: i64, fine: i128) -> Ordering {
    if shift <= 63 {
        (coarse << shift).cmp(&fine)
    } else if coarse == 0 {
        0.cmp(&fine)
    } else {
        coarse.cmp(&0)
    }
}
