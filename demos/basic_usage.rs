// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with saturation events printed:
//   cargo run --example basic_usage --features logging

use deterministic_fixed::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Deterministic Fixed-Point Example ===\n");

    // Construction from native numbers and strings
    let a = Fixed::from(3);
    let b = Fixed::from(0.25);
    let c: Fixed = "-12.5".parse().unwrap_or(Fixed::ZERO);
    println!("a = {a}, b = {b}, c = {c}");
    println!("a as Debug: {a:?}\n");

    // Arithmetic, including mixed native operands
    println!("=== Arithmetic ===");
    println!("a * b     = {}", a * b);
    println!("a / 7     = {}", a / 7i32);
    println!("c % a     = {}", c % a);
    println!("2.5 + a   = {}", 2.5f64 + a);
    println!("1 / 3     = {:?}", Fixed::ONE / Fixed::from(3));

    // Elementary functions
    println!("\n=== Functions ===");
    println!("sqrt(2)   = {}", math::sqrt(Fixed::from(2)));
    println!("exp(1)    = {}", Fixed::ONE.exp());
    println!("log(10)   = {}", Fixed::from(10).log());
    let (sin, cos) = Fixed::from(1).sin_cos();
    println!("sin(1)    = {sin}, cos(1) = {cos}");
    println!("atan2(1, -1) = {}", Fixed::ONE.atan2(-Fixed::ONE));
    let (int, frac) = c.modf();
    println!("modf(c)   = ({int}, {frac}), floor(c) = {}", c.floor());

    // Polar round trip through the complex adapter
    println!("\n=== Complex ===");
    let z = FixedComplex::new(Fixed::from(3), Fixed::from(4));
    let (r, theta) = z.to_polar();
    println!("z = {z}, |z| = {r}, arg(z) = {theta}");
    println!("back = {}", FixedComplex::from_polar(r, theta));

    // Saturating sentinels versus checked variants
    println!("\n=== Saturation ===");
    println!("1 / 0     = {:?}", Fixed::ONE / Fixed::ZERO);
    println!("log(-1)   = {:?}", Fixed::from(-1).log());
    println!("exp(40)   = {:?}", Fixed::from(40).exp());
    match Fixed::ONE.checked_div(Fixed::ZERO) {
        Ok(value) => println!("checked 1 / 0 = {value}"),
        Err(e) => println!("checked 1 / 0 failed: {e}"),
    }
    match Fixed::from(1_000_000).checked_mul(Fixed::from(1_000_000)) {
        Ok(value) => println!("checked 1e6 * 1e6 = {value}"),
        Err(e) => println!("checked 1e6 * 1e6 failed: {e}"),
    }
}
