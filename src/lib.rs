// ============================================================================
// Deterministic Fixed-Point Library
// Q35.28 reals with integer-only transcendental functions
// ============================================================================

//! # Deterministic Fixed
//!
//! A fixed-point real number type whose every operation is bit-identical on
//! every platform, for simulations and game logic that must replay exactly.
//!
//! ## Features
//!
//! - **Q35.28 representation**: `i64` scaled by 2^28, range about ±3.4 × 10^10
//! - **Overflow-safe multiply/divide** without 128-bit hardware support
//! - **Table-driven `log`/`exp`** and an exactly rounded `sqrt`
//! - **CORDIC trigonometry**: `sin`, `cos`, `tan`, `atan`, `atan2`, polar
//!   conversion and a small complex-number adapter
//! - **Saturation instead of panics**: division by zero gives `MAX`, `log`
//!   of a non-positive value gives `-MAX`
//!
//! ## Example
//!
//! ```rust
//! use deterministic_fixed::prelude::*;
//!
//! let radius = Fixed::from(2);
//! let angle = Fixed::QUARTER_PI;
//!
//! // Polar to Cartesian and back
//! let z = FixedComplex::from_polar(radius, angle);
//! let (r, theta) = z.to_polar();
//! assert!((r - radius).abs() < Fixed::from(1e-6));
//! assert!((theta - angle).abs() < Fixed::from(1e-6));
//!
//! // Mixed-type arithmetic converts the native operand first
//! let area = Fixed::PI * radius * radius;
//! assert_eq!((area / 4i32).floor(), Fixed::from(3));
//!
//! // Checked variants report what the saturating operators hide
//! assert_eq!(Fixed::ONE.checked_div(Fixed::ZERO), Err(NumericError::DivisionByZero));
//! assert_eq!(Fixed::ONE / Fixed::ZERO, Fixed::MAX);
//! ```

pub mod arith;
pub mod math;
pub mod numeric;

pub use numeric::{Fixed, FixedComplex};

// Re-exports for convenience
pub mod prelude {
    pub use crate::math;
    pub use crate::numeric::{
        Fixed, FixedComplex, FromFixed, NumericError, NumericResult, ToFixed, FRACTIONAL_BITS,
    };
}
