//! Binary operators and their evaluation.
//!
//! The calculator keeps a single pending operator, so evaluation is always
//! `left <op> right` over two plain `f64` operands.

use std::fmt;
use std::str::FromStr;

use super::error::{CalcError, Result, ensure_finite};

/// A binary operator that can be pending between two operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// The symbol used in the secondary display and history records.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "**",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            "**" | "^" => Ok(Self::Power),
            other => Err(CalcError::unknown_input(other)),
        }
    }
}

/// Evaluate `a <op> b`.
///
/// Division by zero and non-finite results are errors; the caller decides
/// what nominal value to continue with.
pub fn evaluate(a: f64, b: f64, op: Operator) -> Result<f64> {
    let value = match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a / b
        }
        Operator::Power => a.powf(b),
    };

    ensure_finite(value, &format!("{a} {op} {b}"))
}

/// Parse the text of an operand.
///
/// Anything that is not a finite decimal number is rejected rather than
/// silently turning into NaN.
pub fn parse_number(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::invalid_number(trimmed)),
    }
}
