//! Error types for calculator operations.

use thiserror::Error;

/// Text shown on the primary display while an error is active.
pub const ERROR_MESSAGE: &str = "Error";

/// Errors raised by evaluation and scientific functions.
///
/// None of these are fatal: the engine records the error, the display shows
/// [`ERROR_MESSAGE`] and the session carries on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Overflow: {0}")]
    Overflow(String),

    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("Unknown input: {0:?}")]
    UnknownInput(String),
}

impl CalcError {
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::Overflow(msg.into())
    }

    pub fn invalid_number(text: impl Into<String>) -> Self {
        Self::InvalidNumber(text.into())
    }

    pub fn unknown_input(text: impl Into<String>) -> Self {
        Self::UnknownInput(text.into())
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

/// Reject NaN and infinite results so `current_input` always holds a finite number.
pub(crate) fn ensure_finite(value: f64, what: &str) -> Result<f64> {
    if value.is_nan() {
        Err(CalcError::domain(format!("{what} is not a real number")))
    } else if value.is_infinite() {
        Err(CalcError::overflow(format!("{what} is out of range")))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite(1.5, "x"), Ok(1.5));
        assert!(matches!(
            ensure_finite(f64::NAN, "x"),
            Err(CalcError::Domain(_))
        ));
        assert!(matches!(
            ensure_finite(f64::NEG_INFINITY, "x"),
            Err(CalcError::Overflow(_))
        ));
    }
}
