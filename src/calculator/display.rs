//! Number formatting for the primary and secondary displays.

use super::evaluation::{Operator, parse_number};

/// Values above this magnitude are shown in exponential notation.
const EXPONENTIAL_ABOVE: f64 = 1e15;

/// Non-zero values below this magnitude are shown in exponential notation.
const EXPONENTIAL_BELOW: f64 = 1e-6;

/// Inputs longer than this are rounded to [`SIGNIFICANT_DIGITS`].
const MAX_RAW_LEN: usize = 12;

const SIGNIFICANT_DIGITS: usize = 12;

const EXPONENTIAL_DIGITS: usize = 6;

/// Format a number the way it is stored in `current_input` and history.
///
/// Shortest round-trip decimal. Values outside `[1e-6, 1e21)` switch to
/// exponent notation with an explicit sign (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Also folds -0 into "0".
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }

    let abs = value.abs();
    if !(1e-6..1e21).contains(&abs) {
        signed_exponent(format!("{value:e}"))
    } else {
        format!("{value}")
    }
}

/// Render `current_input` for the primary display.
///
/// Very large or very small magnitudes go exponential, long inputs are
/// rounded to 12 significant digits, everything else is shown verbatim.
pub fn format_display(current_input: &str) -> String {
    let Ok(num) = parse_number(current_input) else {
        return current_input.to_string();
    };

    let abs = num.abs();
    if abs > EXPONENTIAL_ABOVE || (num != 0.0 && abs < EXPONENTIAL_BELOW) {
        to_exponential(num, EXPONENTIAL_DIGITS)
    } else if current_input.len() > MAX_RAW_LEN {
        to_precision(num, SIGNIFICANT_DIGITS)
    } else {
        current_input.to_string()
    }
}

/// Secondary display line: the pending operand and operator, if any.
pub fn format_secondary(previous: Option<f64>, operator: Option<Operator>) -> String {
    match (previous, operator) {
        (Some(previous), Some(operator)) => format!("{} {}", format_number(previous), operator),
        _ => String::new(),
    }
}

/// Exponential notation with a fixed number of fractional digits.
pub fn to_exponential(value: f64, fraction_digits: usize) -> String {
    signed_exponent(format!("{value:.fraction_digits$e}"))
}

/// Round to `digits` significant digits.
///
/// Uses fixed notation unless the decimal exponent is below -6 or at least
/// `digits`; trailing zeros are kept.
pub fn to_precision(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    let scientific = format!("{:.*e}", digits - 1, value);

    let Some(exponent) = scientific
        .split_once('e')
        .and_then(|(_, exp)| exp.parse::<i32>().ok())
    else {
        return scientific;
    };

    let digits = digits as i32;
    if exponent < -6 || exponent >= digits {
        signed_exponent(scientific)
    } else {
        let decimals = (digits - 1 - exponent).max(0) as usize;
        format!("{value:.decimals$}")
    }
}

/// Rust prints `1e15`; the display wants `1e+15`.
fn signed_exponent(formatted: String) -> String {
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}
