use scaled_fixed::scalar_formats::{Fixed8_8, Fixed16_16};
use scaled_fixed::typenum::{N3, N4, U0, U2, U4, U6, U7};
use scaled_fixed::{FixedPoint, FixedPointError, MakeFixed, MakeUfixed};

fn main() {
    println!("=== Scaled Fixed-Point Examples ===\n");

    // Example 1: Digit counts pick the representation
    example_construction();

    // Example 2: Mixed-format arithmetic
    example_promotion();

    // Example 3: Checked conversions
    if let Err(e) = example_checked() {
        println!("  Error: {}", e);
    }
}

fn example_construction() {
    println!("Example 1: Constructing from digit counts");

    let x = MakeUfixed::<U4, U4>::from_f64(15.9375);
    println!("  {} stored as raw {} in {}", x, x.raw_value(), MakeUfixed::<U4, U4>::format());

    let y = MakeFixed::<U7, U0>::from_int(-100);
    println!("  {} stored as raw {} in {}", y, y.raw_value(), MakeFixed::<U7, U0>::format());

    // Fractional digits below the resolution are truncated
    let tiny = MakeUfixed::<U4, U4>::from_f64(0.006);
    println!("  0.006 -> {}", tiny);
    println!();
}

fn example_promotion() {
    println!("Example 2: Result types follow the operands");

    let a = FixedPoint::<u8, N3>::from_int(8);
    let b = FixedPoint::<u8, N4>::from_int(3);
    let sum: FixedPoint<u16, N4> = a + b;
    println!("  {} + {} = {} ({:?})", a, b, sum, sum);

    let signed = a - FixedPoint::<i8, N4>::from_f64(-1.5);
    println!("  {} - (-1.5) = {} (signed result)", a, signed);

    let as_float = a + 0.1f32;
    println!("  {} + 0.1f32 = {} (f32)", a, as_float);

    let three = MakeUfixed::<U2, U6>::from_int(3);
    let n = three.trunc_square().trunc_square();
    println!("  3^4 through truncating squares = {}", n);

    let pos = Fixed8_8::from_f64(12.25) * Fixed16_16::from_f64(0.5);
    println!("  12.25 * 0.5 = {}", pos);
    println!();
}

fn example_checked() -> Result<(), FixedPointError> {
    println!("Example 3: Checked conversions");

    let ok = MakeUfixed::<U4, U4>::checked_from_f64(9.5)?;
    println!("  9.5 fits: {}", ok);

    match MakeUfixed::<U4, U4>::checked_from_f64(16.0) {
        Ok(v) => println!("  16.0 fits: {}", v),
        Err(e) => println!("  16.0 rejected: {}", e),
    }

    let q = ok.checked_div(MakeUfixed::<U4, U4>::zero());
    println!("  9.5 / 0 = {:?}", q);
    println!();

    Ok(())
}
