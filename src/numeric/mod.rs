// ============================================================================
// Numeric Module
// Deterministic Q35.28 fixed-point representation
// ============================================================================
//
// This module provides:
// - Fixed: signed 64-bit scaled integer with 28 fractional bits
// - ToFixed / FromFixed: one conversion path per native numeric type
// - FixedComplex: complex numbers over Fixed with CORDIC polar conversion
// - NumericError: errors for the checked and parsing entry points
//
// Design principles:
// - No floating-point operations outside f32/f64 construction and extraction
// - The core saturates or wraps instead of panicking
// - Mixed-type operators convert to Fixed and delegate to the core

mod complex;
mod convert;
mod errors;
mod fixed;
mod ops;

pub use complex::FixedComplex;
pub use convert::{FromFixed, ToFixed};
pub use errors::{NumericError, NumericResult};
pub use fixed::{Fixed, FRACTIONAL_BITS};
