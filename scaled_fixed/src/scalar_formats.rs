//! Common fixed-point format type aliases.
//!
//! The naming convention is `FixedI_F` where I is the number of integer bits
//! (sign bit included) and F is the number of fractional bits. `UFixed`
//! formats are unsigned.

use typenum::{N6, N8, N12, N16};

use crate::FixedPoint;

/// 8.8 fixed-point format (8 integer bits, 8 fractional bits).
///
/// Range: [-128.0, 127.99609375]
/// Precision: ~0.00390625
pub type Fixed8_8 = FixedPoint<i16, N8>;

/// 16.16 fixed-point format (16 integer bits, 16 fractional bits).
///
/// Range: [-32768.0, 32767.999984741]
/// Precision: ~0.000015259
pub type Fixed16_16 = FixedPoint<i32, N16>;

/// 4.12 fixed-point format (4 integer bits, 12 fractional bits).
///
/// Range: [-8.0, 7.999755859]
/// Precision: ~0.000244141
pub type Fixed4_12 = FixedPoint<i16, N12>;

/// 10.6 fixed-point format (10 integer bits, 6 fractional bits).
///
/// Range: [-512.0, 511.984375]
pub type Fixed10_6 = FixedPoint<i16, N6>;

/// 24.8 fixed-point format (24 integer bits, 8 fractional bits).
pub type Fixed24_8 = FixedPoint<i32, N8>;

/// Unsigned 8.8 format.
///
/// Range: [0.0, 255.99609375]
pub type UFixed8_8 = FixedPoint<u16, N8>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        assert_eq!(Fixed8_8::min_value(), -128);
        assert_eq!(Fixed8_8::max_value(), 127.99609375);
        assert_eq!(Fixed4_12::min_value(), -8);
        assert_eq!(Fixed10_6::max_value(), 511.984375);
        assert_eq!(Fixed24_8::min_value(), -8388608);
        assert_eq!(UFixed8_8::max_value(), 255.99609375);
    }

    #[test]
    fn test_mixing_formats() {
        let a = Fixed8_8::from_f64(1.5);
        let b = Fixed16_16::from_f64(-0.25);
        let sum: Fixed16_16 = a + b;
        assert_eq!(sum, 1.25);

        let product: FixedPoint<i32, typenum::N20> = a * Fixed4_12::from_f64(2.0);
        assert_eq!(product, 3);
    }
}
