use thiserror::Error;

use crate::promotion::Format;

/// Errors reported by the checked conversions, `checked_div` and
/// `checked_sqrt`.
///
/// The operators themselves never fail: they wrap on overflow.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FixedPointError {
    #[error("Value {value} out of range for fixed-point format {format}")]
    Overflow { value: f64, format: Format },

    #[error("Value {0} is not a finite number")]
    NotFinite(f64),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Square root of negative value {0}")]
    NegativeSquareRoot(f64),
}
