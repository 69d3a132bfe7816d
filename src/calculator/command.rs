//! Discrete input events understood by the engine.

use std::str::FromStr;

use super::error::CalcError;
use super::evaluation::Operator;
use super::functions::{AngleMode, ScientificFunction};

/// Memory register actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryAction {
    /// `mc`: zero the register.
    Clear,
    /// `mr`: load the register into the display.
    Recall,
    /// `m+`
    Add,
    /// `m-`
    Subtract,
    /// `ms`: overwrite the register with the display value.
    Store,
}

impl FromStr for MemoryAction {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mc" => Ok(Self::Clear),
            "mr" => Ok(Self::Recall),
            "m+" | "mplus" => Ok(Self::Add),
            "m-" | "mminus" => Ok(Self::Subtract),
            "ms" => Ok(Self::Store),
            _ => Err(CalcError::unknown_input(s)),
        }
    }
}

/// One input event forwarded by a UI surface.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// A single decimal digit, 0 through 9.
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Function(ScientificFunction),
    Memory(MemoryAction),
    Clear,
    ClearEntry,
    Backspace,
    Negate,
    /// Load the result of a history record.
    SelectHistory(String),
    /// Load the result of the n-th newest history record.
    RecallHistory(usize),
    ClearHistory,
    SetAngleMode(AngleMode),
    ToggleAngleMode,
    ToggleMode,
}

impl Command {
    /// Map a keyboard key name to a command.
    ///
    /// Key names follow the browser `KeyboardEvent.key` convention
    /// (`"Enter"`, `"Backspace"`, `"Escape"`, `"Delete"`, or the character).
    pub fn from_key(key: &str) -> Option<Self> {
        let command = match key {
            "Enter" | "=" => Self::Equals,
            "Backspace" => Self::Backspace,
            "Escape" | "c" | "C" => Self::Clear,
            "Delete" => Self::ClearEntry,
            "." => Self::Decimal,
            "+" | "-" | "*" | "/" => Self::Operator(key.parse().ok()?),
            _ => {
                let mut chars = key.chars();
                let digit = chars.next()?.to_digit(10)?;
                if chars.next().is_some() {
                    return None;
                }
                Self::Digit(digit as u8)
            }
        };
        Some(command)
    }
}

impl FromStr for Command {
    type Err = CalcError;

    /// Parse a named action, e.g. `"sqrt"`, `"m+"`, `"ce"`, `"7"`, `"*"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let command = match s.to_ascii_lowercase().as_str() {
            "=" | "enter" | "equals" => Self::Equals,
            "." | "decimal" => Self::Decimal,
            "c" | "clear" | "escape" => Self::Clear,
            "ce" | "clearentry" | "delete" => Self::ClearEntry,
            "back" | "backspace" | "bs" => Self::Backspace,
            "neg" | "negate" | "+/-" => Self::Negate,
            "hc" | "clearhistory" => Self::ClearHistory,
            "deg" => Self::SetAngleMode(AngleMode::Deg),
            "rad" => Self::SetAngleMode(AngleMode::Rad),
            "angle" => Self::ToggleAngleMode,
            "mode" => Self::ToggleMode,
            "^" | "**" => Self::Function(ScientificFunction::Power),
            other => {
                if let Ok(op) = other.parse::<Operator>() {
                    Self::Operator(op)
                } else if let Ok(action) = other.parse::<MemoryAction>() {
                    Self::Memory(action)
                } else if let Ok(func) = other.parse::<ScientificFunction>() {
                    Self::Function(func)
                } else if let Some(index) = other.strip_prefix('#') {
                    let index = index
                        .parse::<usize>()
                        .map_err(|_| CalcError::unknown_input(s))?;
                    Self::RecallHistory(index)
                } else if let Some(Self::Digit(d)) = Self::from_key(other) {
                    Self::Digit(d)
                } else {
                    return Err(CalcError::unknown_input(s));
                }
            }
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_map() {
        assert_eq!(Command::from_key("7"), Some(Command::Digit(7)));
        assert_eq!(Command::from_key("0"), Some(Command::Digit(0)));
        assert_eq!(
            Command::from_key("*"),
            Some(Command::Operator(Operator::Multiply))
        );
        assert_eq!(Command::from_key("."), Some(Command::Decimal));
        assert_eq!(Command::from_key("Enter"), Some(Command::Equals));
        assert_eq!(Command::from_key("="), Some(Command::Equals));
        assert_eq!(Command::from_key("Backspace"), Some(Command::Backspace));
        assert_eq!(Command::from_key("Escape"), Some(Command::Clear));
        assert_eq!(Command::from_key("C"), Some(Command::Clear));
        assert_eq!(Command::from_key("Delete"), Some(Command::ClearEntry));
        assert_eq!(Command::from_key("12"), None);
        assert_eq!(Command::from_key("x"), None);
    }

    #[test]
    fn test_named_commands() {
        assert_eq!(
            "sqrt".parse::<Command>(),
            Ok(Command::Function(ScientificFunction::Sqrt))
        );
        assert_eq!(
            "M+".parse::<Command>(),
            Ok(Command::Memory(MemoryAction::Add))
        );
        assert_eq!("ce".parse::<Command>(), Ok(Command::ClearEntry));
        assert_eq!(
            "rad".parse::<Command>(),
            Ok(Command::SetAngleMode(AngleMode::Rad))
        );
        assert_eq!("#3".parse::<Command>(), Ok(Command::RecallHistory(3)));
        assert_eq!(
            "^".parse::<Command>(),
            Ok(Command::Function(ScientificFunction::Power))
        );
        assert_eq!("5".parse::<Command>(), Ok(Command::Digit(5)));
        assert_eq!(
            "-".parse::<Command>(),
            Ok(Command::Operator(Operator::Subtract))
        );
        assert!("#x".parse::<Command>().is_err());
        assert!("bogus".parse::<Command>().is_err());
    }
}
