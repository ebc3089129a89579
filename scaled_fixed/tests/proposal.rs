//! Worked examples of the public API, including the compile-time checks on
//! representation selection and result types.

use scaled_fixed::promotion::{Format, Operation, promotes_to};
use scaled_fixed::rep::select;
use scaled_fixed::typenum::{N3, N4, N6, N29, N30, N62, P2, U0, U1, U2, U3, U4, U5, U6, U7, U8, U10, U12, U29, U30, U62, Z0};
use scaled_fixed::{FixedPoint, MakeFixed, MakeUfixed, RepKind};

const _: () = assert!(matches!(select(4, 4, false), Some(RepKind::U8)));
const _: () = assert!(matches!(select(2, 29, true), Some(RepKind::I32)));
const _: () = assert!(select(33, 32, false).is_none());
const _: () = assert!(MakeUfixed::<U4, U4>::EXPONENT == -4);
const _: () = assert!(promotes_to(
    Operation::Add,
    Format::new(8, -3, false),
    Format::new(8, -4, false),
    Format::new(16, -4, false),
));
const _: () = assert!(promotes_to(
    Operation::Add,
    Format::new(8, -3, false),
    Format::new(8, -4, true),
    Format::new(16, -4, true),
));

#[test]
fn exact_literals_round_trip() {
    let x = MakeUfixed::<U4, U4>::from_f64(15.9375);
    assert_eq!(x, 15.9375);

    let pi = MakeFixed::<U2, U29>::from_f64(3.141592653);
    let _: FixedPoint<i32, N29> = pi;
    assert_eq!(pi.to_f64(), 3.1415926516056061);
    assert_eq!(pi, 3.1415926516056061);
}

#[test]
fn small_values_truncate_to_zero() {
    assert_eq!(MakeUfixed::<U4, U4>::from_f64(0.006), MakeUfixed::<U4, U4>::from_f64(0.0));
    assert_eq!(MakeUfixed::<U4, U4>::from_f64(0.006), 0);
}

#[test]
fn addition_aligns_and_widens() {
    let sum = FixedPoint::<u8, N3>::from_int(8) + FixedPoint::<u8, N4>::from_int(3);
    let _: FixedPoint<u16, N4> = sum;
    assert_eq!(sum, 11);
}

#[test]
fn mixed_signedness_gives_signed_result() {
    let sum = FixedPoint::<u8, N3>::from_int(8) + FixedPoint::<i8, N4>::from_int(3);
    let _: FixedPoint<i16, N4> = sum;
    assert_eq!(sum, 11);

    let with_int = MakeUfixed::<U5, U3>::from_int(8) + 3;
    let _: FixedPoint<i64, N3> = with_int;
    assert_eq!(with_int, 11);
}

#[test]
fn float_operand_gives_float_result() {
    let sum = MakeUfixed::<U5, U3>::from_int(8) + 3.0f32;
    let _: f32 = sum;
    assert_eq!(sum, 11.0);
}

#[test]
fn overflow_wraps() {
    let sum = MakeUfixed::<U2, U30>::from_int(3) + MakeUfixed::<U2, U30>::from_int(1);
    let _: FixedPoint<u32, N30> = sum;
    assert_eq!(sum, 0);

    let sum = MakeUfixed::<U2, U62>::from_int(3) + MakeUfixed::<U2, U62>::from_int(1);
    let _: FixedPoint<u64, N62> = sum;
    assert_eq!(sum, 0);
}

#[test]
fn division_truncates() {
    let q = MakeFixed::<U7, U0>::from_int(15) / MakeFixed::<U7, U0>::from_int(2);
    let _: FixedPoint<i8, Z0> = q;
    assert_eq!(q, 7);
}

#[test]
fn identity_conversion_preserves_bits() {
    let x = FixedPoint::<i16, N6>::from_raw(-12345);
    let wide = FixedPoint::<i64, N30>::from_fixed(x);
    let back = FixedPoint::<i16, N6>::from_fixed(wide);
    assert_eq!(back.raw_value(), -12345);
    assert_eq!(FixedPoint::<i16, N6>::from_fixed(x).raw_value(), -12345);
}

#[test]
fn default_is_zero() {
    let zero: FixedPoint = FixedPoint::default();
    assert_eq!(zero, FixedPoint::<i32, Z0>::from_int(0));
    assert_eq!(FixedPoint::<u8, P2>::default(), 0);
}

#[test]
fn bounded_integers() {
    let three = MakeUfixed::<U2, U6>::from_int(3);
    let n = three.trunc_square().trunc_square();
    let _: MakeUfixed<U8, U0> = n;
    assert_eq!(n, 81);

    let eighty_one = MakeUfixed::<U7, U1>::from_int(81);
    assert_eq!(eighty_one, 81);
    assert_eq!(eighty_one, n);
}

/// Length of the vector `(x, y, z)`, kept in 16 bits throughout.
///
/// Each square needs eight integer digits and the sum of three needs two
/// more, so the squares are summed with six fractional digits.
fn magnitude_trunc(
    x: MakeUfixed<U4, U12>,
    y: MakeUfixed<U4, U12>,
    z: MakeUfixed<U4, U12>,
) -> MakeUfixed<U10, U6> {
    let square = |v: MakeUfixed<U4, U12>| MakeUfixed::<U10, U6>::from_fixed(v.trunc_square());
    let sum: MakeUfixed<U10, U6> = square(x) + square(y) + square(z);
    sum.sqrt()
}

#[test]
fn magnitude_of_vector() {
    let m = magnitude_trunc(
        MakeUfixed::<U4, U12>::from_int(1),
        MakeUfixed::<U4, U12>::from_int(4),
        MakeUfixed::<U4, U12>::from_int(9),
    );
    let _: FixedPoint<u16, N6> = m;
    assert_eq!(m, 9.890625);
}

#[test]
fn format_descriptors_display() {
    assert_eq!(MakeFixed::<U7, U0>::format().to_string(), "i8 x 2^0");
    assert_eq!(MakeUfixed::<U4, U4>::format().to_string(), "u8 x 2^-4");
    assert_eq!(RepKind::I32.to_string(), "i32");
}
