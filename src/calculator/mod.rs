//! Calculator engine.
//!
//! This module provides:
//! - The session state and the engine that applies input events to it
//! - Binary operators and single-argument scientific functions
//! - Display formatting and the bounded calculation history

mod command;
mod display;
mod engine;
mod error;
mod evaluation;
mod functions;
mod history;
mod state;
mod view;

pub use command::{Command, MemoryAction};
pub use display::{format_display, format_number, format_secondary, to_exponential, to_precision};
pub use engine::Calculator;
pub use error::{CalcError, ERROR_MESSAGE, Result};
pub use evaluation::{Operator, evaluate, parse_number};
pub use functions::{AngleMode, MAX_FACTORIAL, ScientificFunction, factorial};
pub use history::{DEFAULT_HISTORY_CAPACITY, History, RESULT_SEPARATOR, entry_result};
pub use state::CalculatorState;
pub use view::CalculatorView;
