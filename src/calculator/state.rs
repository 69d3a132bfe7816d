//! Session state shared by every calculator operation.

use super::error::CalcError;
use super::evaluation::Operator;
use super::functions::AngleMode;
use super::history::History;

/// Display text of a freshly cleared entry.
pub const ZERO: &str = "0";

/// The full state of one calculator session.
#[derive(Debug, Clone)]
pub struct CalculatorState {
    /// Text of the value being entered or shown. Always parses to a finite number.
    pub current_input: String,
    /// Left operand waiting for `operator`.
    pub previous_input: Option<f64>,
    pub operator: Option<Operator>,
    /// The next digit starts a new number instead of appending.
    pub waiting_for_operand: bool,
    /// Memory register; survives `clear`.
    pub memory: f64,
    pub angle_mode: AngleMode,
    /// Presentation flag: scientific keypad shown or basic only.
    pub scientific_mode: bool,
    pub history: History,
    /// Error raised by the most recent operation.
    pub error: Option<CalcError>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(AngleMode::default(), History::default())
    }
}

impl CalculatorState {
    pub fn new(angle_mode: AngleMode, history: History) -> Self {
        Self {
            current_input: ZERO.to_string(),
            previous_input: None,
            operator: None,
            waiting_for_operand: false,
            memory: 0.0,
            angle_mode,
            scientific_mode: true,
            history,
            error: None,
        }
    }

    /// Reset entry and pending operation. Memory and history are kept.
    pub fn clear(&mut self) {
        self.current_input = ZERO.to_string();
        self.previous_input = None;
        self.operator = None;
        self.waiting_for_operand = false;
    }

    /// Reset only the entry.
    pub fn clear_entry(&mut self) {
        self.current_input = ZERO.to_string();
        self.waiting_for_operand = false;
    }

    pub fn memory_active(&self) -> bool {
        self.memory != 0.0
    }
}
