// ============================================================================
// Numeric Errors
// What the checked entry points report instead of saturating
// ============================================================================
//
// The operators and the math functions never fail: they wrap, or saturate to
// `Fixed::MAX` / `-Fixed::MAX`. Only `checked_*`, `from_integer`,
// `from_parts`, decimal conversion and `FromStr` return a `NumericError`.

use std::fmt;

/// Why a checked conversion or operation on [`Fixed`] has no Q35.28 result.
///
/// [`Fixed`]: super::Fixed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result is at or above 2^35
    Overflow,
    /// Result is below -2^35
    Underflow,
    /// `checked_div` with a zero divisor
    DivisionByZero,
    /// Exact decimal needs more than 28 fractional bits
    PrecisionLoss,
    /// Unparseable string, or a fraction field of one or more
    InvalidInput,
}

impl NumericError {
    fn message(self) -> &'static str {
        match self {
            NumericError::Overflow => "Q35.28 overflow: result is at or above 2^35 (34359738368)",
            NumericError::Underflow => "Q35.28 underflow: result is below -2^35 (-34359738368)",
            NumericError::DivisionByZero => "checked division by zero",
            NumericError::PrecisionLoss => "value needs more than 28 fractional bits",
            NumericError::InvalidInput => "input is not a Q35.28 number",
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for NumericError {}

/// Result of a checked fixed-point operation.
pub type NumericResult<T> = Result<T, NumericError>;
