//! Single-argument scientific functions and angle conversion.

use std::f64::consts::{E, PI};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{CalcError, Result, ensure_finite};

/// Largest n whose factorial still fits in an `f64`.
pub const MAX_FACTORIAL: u32 = 170;

/// Unit used for trigonometric arguments and results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    #[default]
    Deg,
    Rad,
}

impl AngleMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Deg => Self::Rad,
            Self::Rad => Self::Deg,
        }
    }

    /// Convert a value in this mode's unit to radians.
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            Self::Deg => value * (PI / 180.0),
            Self::Rad => value,
        }
    }

    /// Convert radians back to this mode's unit.
    pub fn to_degrees(self, radians: f64) -> f64 {
        match self {
            Self::Deg => radians * (180.0 / PI),
            Self::Rad => radians,
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deg => f.write_str("deg"),
            Self::Rad => f.write_str("rad"),
        }
    }
}

/// Functions applied to the value currently on the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScientificFunction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log,
    Ln,
    Exp,
    Pow10,
    Sqrt,
    Cbrt,
    Square,
    Cube,
    Factorial,
    Reciprocal,
    Abs,
    Pi,
    E,
    /// Not evaluated here: the engine turns it into a pending `**` operator.
    Power,
}

impl ScientificFunction {
    pub const ALL: [Self; 20] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Log,
        Self::Ln,
        Self::Exp,
        Self::Pow10,
        Self::Sqrt,
        Self::Cbrt,
        Self::Square,
        Self::Cube,
        Self::Factorial,
        Self::Reciprocal,
        Self::Abs,
        Self::Pi,
        Self::E,
        Self::Power,
    ];

    /// Name used in history records, e.g. `sqrt(16) = 4`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Exp => "exp",
            Self::Pow10 => "pow10",
            Self::Sqrt => "sqrt",
            Self::Cbrt => "cbrt",
            Self::Square => "square",
            Self::Cube => "cube",
            Self::Factorial => "factorial",
            Self::Reciprocal => "reciprocal",
            Self::Abs => "abs",
            Self::Pi => "pi",
            Self::E => "e",
            Self::Power => "power",
        }
    }

    /// Evaluate the function for `x`.
    ///
    /// [`ScientificFunction::Power`] has no unary meaning and returns `x`
    /// unchanged; callers route it to the operator chain instead.
    pub fn apply(self, x: f64, angle_mode: AngleMode) -> Result<f64> {
        let value = match self {
            Self::Sin => angle_mode.to_radians(x).sin(),
            Self::Cos => angle_mode.to_radians(x).cos(),
            Self::Tan => angle_mode.to_radians(x).tan(),
            Self::Asin => {
                require_unit_interval(self, x)?;
                angle_mode.to_degrees(x.asin())
            }
            Self::Acos => {
                require_unit_interval(self, x)?;
                angle_mode.to_degrees(x.acos())
            }
            Self::Atan => angle_mode.to_degrees(x.atan()),
            Self::Log => {
                require_positive(self, x)?;
                x.log10()
            }
            Self::Ln => {
                require_positive(self, x)?;
                x.ln()
            }
            Self::Exp => x.exp(),
            Self::Pow10 => 10f64.powf(x),
            Self::Sqrt => {
                if x < 0.0 {
                    return Err(CalcError::domain(format!("sqrt of negative value {x}")));
                }
                x.sqrt()
            }
            Self::Cbrt => x.cbrt(),
            Self::Square => x * x,
            Self::Cube => x * x * x,
            Self::Factorial => factorial(x)?,
            Self::Reciprocal => {
                if x == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                1.0 / x
            }
            Self::Abs => x.abs(),
            Self::Pi => PI,
            Self::E => E,
            Self::Power => x,
        };

        ensure_finite(value, self.name())
    }
}

impl fmt::Display for ScientificFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScientificFunction {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        let func = match s.to_ascii_lowercase().as_str() {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" => Self::Asin,
            "acos" => Self::Acos,
            "atan" => Self::Atan,
            "log" => Self::Log,
            "ln" => Self::Ln,
            "exp" => Self::Exp,
            "pow10" => Self::Pow10,
            "sqrt" => Self::Sqrt,
            "cbrt" => Self::Cbrt,
            "square" | "sq" => Self::Square,
            "cube" => Self::Cube,
            "factorial" | "fact" => Self::Factorial,
            "reciprocal" | "inv" => Self::Reciprocal,
            "abs" => Self::Abs,
            "pi" => Self::Pi,
            "e" => Self::E,
            "power" | "pow" => Self::Power,
            _ => return Err(CalcError::unknown_input(s)),
        };
        Ok(func)
    }
}

/// Iterative factorial over non-negative integers up to [`MAX_FACTORIAL`].
pub fn factorial(n: f64) -> Result<f64> {
    if n < 0.0 || n.fract() != 0.0 {
        return Err(CalcError::domain(format!(
            "factorial needs a non-negative integer, got {n}"
        )));
    }
    if n > f64::from(MAX_FACTORIAL) {
        return Err(CalcError::overflow(format!(
            "factorial of {n} exceeds {MAX_FACTORIAL}!"
        )));
    }

    // Bounded by MAX_FACTORIAL above.
    let n = n as u32;
    Ok((2..=n).fold(1.0, |acc, i| acc * f64::from(i)))
}

fn require_positive(func: ScientificFunction, x: f64) -> Result<()> {
    if x <= 0.0 {
        return Err(CalcError::domain(format!("{func} of non-positive value {x}")));
    }
    Ok(())
}

fn require_unit_interval(func: ScientificFunction, x: f64) -> Result<()> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(CalcError::domain(format!("{func} of {x} outside [-1, 1]")));
    }
    Ok(())
}
