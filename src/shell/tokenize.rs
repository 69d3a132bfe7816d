//! Splits a line of shell input into calculator commands.
//!
//! Digits and the decimal point stream as individual keypresses, so
//! `12.5+3=` behaves exactly like pressing those keys one at a time.

use lazy_static::lazy_static;
use regex::Regex;

use crate::calculator::Command;

lazy_static! {
    /// One token: history recall, memory add/subtract, `**`, `+/-`, a word,
    /// a single digit, or a single symbol.
    static ref TOKEN: Regex = Regex::new(
        r"#\d+|(?i:m[+\-])|\*\*|\+/-|[A-Za-z][A-Za-z0-9]*|\d|\.|[-+*/^=]|\S"
    ).unwrap();
}

/// A parsed piece of shell input.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    /// Forwarded to the engine.
    Engine(Command),
    /// Print the numbered history.
    ShowHistory,
    Help,
    Quit,
    /// Token that names nothing.
    Unknown(String),
}

/// Tokenize a line into inputs, in order.
pub fn parse_line(line: &str) -> Vec<Input> {
    TOKEN
        .find_iter(line)
        .map(|token| parse_token(token.as_str()))
        .collect()
}

fn parse_token(token: &str) -> Input {
    match token.to_ascii_lowercase().as_str() {
        "history" | "h" => Input::ShowHistory,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        _ => token
            .parse::<Command>()
            .map(Input::Engine)
            .unwrap_or_else(|_| Input::Unknown(token.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{MemoryAction, Operator, ScientificFunction};

    fn engine(command: Command) -> Input {
        Input::Engine(command)
    }

    #[test]
    fn test_digits_stream_individually() {
        assert_eq!(
            parse_line("12.5"),
            vec![
                engine(Command::Digit(1)),
                engine(Command::Digit(2)),
                engine(Command::Decimal),
                engine(Command::Digit(5)),
            ]
        );
    }

    #[test]
    fn test_compact_expression() {
        assert_eq!(
            parse_line("2+3*4="),
            vec![
                engine(Command::Digit(2)),
                engine(Command::Operator(Operator::Add)),
                engine(Command::Digit(3)),
                engine(Command::Operator(Operator::Multiply)),
                engine(Command::Digit(4)),
                engine(Command::Equals),
            ]
        );
    }

    #[test]
    fn test_words_and_symbols() {
        assert_eq!(
            parse_line("9 sqrt m+ #2 ** +/-"),
            vec![
                engine(Command::Digit(9)),
                engine(Command::Function(ScientificFunction::Sqrt)),
                engine(Command::Memory(MemoryAction::Add)),
                engine(Command::RecallHistory(2)),
                engine(Command::Function(ScientificFunction::Power)),
                engine(Command::Negate),
            ]
        );
    }

    #[test]
    fn test_memory_tokens_are_case_insensitive() {
        assert_eq!(
            parse_line("M- MR"),
            vec![
                engine(Command::Memory(MemoryAction::Subtract)),
                engine(Command::Memory(MemoryAction::Recall)),
            ]
        );
    }

    #[test]
    fn test_shell_keywords() {
        assert_eq!(
            parse_line("history help quit"),
            vec![Input::ShowHistory, Input::Help, Input::Quit]
        );
    }

    #[test]
    fn test_unknown_tokens_kept() {
        assert_eq!(
            parse_line("sinh 5"),
            vec![Input::Unknown("sinh".to_string()), engine(Command::Digit(5))]
        );
        assert_eq!(parse_line("%"), vec![Input::Unknown("%".to_string())]);
    }

    #[test]
    fn test_blank_line() {
        assert!(parse_line("   ").is_empty());
    }
}
