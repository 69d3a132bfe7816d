//! The calculator engine: every input operation over one session's state.

use tracing::{debug, warn};

use super::command::{Command, MemoryAction};
use super::display::format_number;
use super::error::{CalcError, Result};
use super::evaluation::{Operator, evaluate, parse_number};
use super::functions::{AngleMode, ScientificFunction};
use super::history::{History, entry_result};
use super::state::{CalculatorState, ZERO};
use super::view::CalculatorView;

/// The calculator engine.
///
/// Owns one session's [`CalculatorState`] and applies input events to it.
/// Operations run to completion synchronously; errors are recorded on the
/// state and reported through the returned [`CalculatorView`].
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a starting angle mode and history size.
    pub fn with_options(angle_mode: AngleMode, history_capacity: usize) -> Self {
        Self {
            state: CalculatorState::new(angle_mode, History::with_capacity(history_capacity)),
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn view(&self) -> CalculatorView {
        CalculatorView::from_state(&self.state)
    }

    /// Apply one input event and return the updated view.
    ///
    /// Any error left over from the previous event is dismissed first, so a
    /// new explicit action always wins over a pending error display.
    pub fn dispatch(&mut self, command: Command) -> CalculatorView {
        debug!(?command, "dispatch");
        self.state.error = None;

        let outcome = match command {
            Command::Digit(digit) => {
                self.input_digit(digit);
                Ok(())
            }
            Command::Decimal => {
                self.input_decimal_point();
                Ok(())
            }
            Command::Operator(op) => self.apply_operator(op),
            Command::Equals => self.calculate(),
            Command::Function(func) => self.execute_function(func),
            Command::Memory(action) => self.handle_memory(action),
            Command::Clear => {
                self.clear();
                Ok(())
            }
            Command::ClearEntry => {
                self.clear_entry();
                Ok(())
            }
            Command::Backspace => {
                self.backspace();
                Ok(())
            }
            Command::Negate => {
                self.negate();
                Ok(())
            }
            Command::SelectHistory(entry) => self.select_history_entry(&entry),
            Command::RecallHistory(index) => self.recall_history(index),
            Command::ClearHistory => {
                self.clear_history();
                Ok(())
            }
            Command::SetAngleMode(mode) => {
                self.set_angle_mode(mode);
                Ok(())
            }
            Command::ToggleAngleMode => {
                self.toggle_angle_mode();
                Ok(())
            }
            Command::ToggleMode => {
                self.toggle_mode();
                Ok(())
            }
        };

        if let Err(err) = outcome {
            warn!(error = %err, "calculation failed");
            self.state.error = Some(err);
        }

        self.view()
    }

    /// Enter a digit. Out-of-range values are ignored.
    pub fn input_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            warn!(digit, "ignoring non-decimal digit");
            return;
        };

        let state = &mut self.state;
        if state.waiting_for_operand {
            state.current_input = ch.to_string();
            state.waiting_for_operand = false;
        } else if state.current_input == ZERO {
            state.current_input = ch.to_string();
        } else {
            self.append_to_entry(ch);
        }
    }

    pub fn input_decimal_point(&mut self) {
        let state = &mut self.state;
        if state.waiting_for_operand {
            state.current_input = "0.".to_string();
            state.waiting_for_operand = false;
        } else if !state.current_input.contains('.') {
            self.append_to_entry('.');
        }
    }

    /// Drop the last character.
    ///
    /// Trims further while the remainder is not a number (e.g. `"1e+"` left
    /// over from `"1e+21"`), falling back to `"0"`.
    pub fn backspace(&mut self) {
        let input = &mut self.state.current_input;
        input.pop();
        while !input.is_empty() && parse_number(input).is_err() {
            input.pop();
        }
        if input.is_empty() || input == "-" {
            *input = ZERO.to_string();
        }
    }

    /// Append to the entry unless the result would stop being a finite number.
    fn append_to_entry(&mut self, ch: char) {
        let mut candidate = self.state.current_input.clone();
        candidate.push(ch);
        if parse_number(&candidate).is_err() {
            debug!(%ch, "entry full, ignoring input");
            return;
        }
        self.state.current_input = candidate;
    }

    /// Toggle the sign of the entry. `"0"` stays unsigned.
    pub fn negate(&mut self) {
        let input = &mut self.state.current_input;
        if input == ZERO {
            return;
        }
        if let Some(rest) = input.strip_prefix('-') {
            *input = rest.to_string();
        } else {
            input.insert(0, '-');
        }
    }

    /// Queue a binary operator, resolving any operator already pending.
    ///
    /// Operators chain strictly left to right: `2 + 3 * 4` is `(2 + 3) * 4`.
    /// A failed intermediate result continues as 0 and the error is returned.
    pub fn apply_operator(&mut self, next: Operator) -> Result<()> {
        let input_value = self.current_value()?;
        let mut outcome = Ok(());

        match (self.state.previous_input, self.state.operator) {
            (None, _) => self.state.previous_input = Some(input_value),
            (Some(previous), Some(pending)) => {
                let (value, result) = nominal(evaluate(previous, input_value, pending));
                self.state.current_input = format_number(value);
                self.state.previous_input = Some(value);
                outcome = result;
            }
            (Some(_), None) => {}
        }

        self.state.operator = Some(next);
        self.state.waiting_for_operand = true;
        outcome
    }

    /// The `=` action. Does nothing unless an operation is pending.
    pub fn calculate(&mut self) -> Result<()> {
        let (Some(previous), Some(op)) = (self.state.previous_input, self.state.operator) else {
            return Ok(());
        };

        let input_value = self.current_value()?;
        let (value, outcome) = nominal(evaluate(previous, input_value, op));

        self.state.history.record(format!(
            "{} {} {} = {}",
            format_number(previous),
            op,
            format_number(input_value),
            format_number(value)
        ));

        self.state.current_input = format_number(value);
        self.state.previous_input = None;
        self.state.operator = None;
        self.state.waiting_for_operand = true;
        outcome
    }

    /// Apply a scientific function to the entry.
    ///
    /// On error the state is left untouched.
    pub fn execute_function(&mut self, func: ScientificFunction) -> Result<()> {
        if func == ScientificFunction::Power {
            return self.apply_operator(Operator::Power);
        }

        let input_value = self.current_value()?;
        let value = func.apply(input_value, self.state.angle_mode)?;

        self.state.history.record(format!(
            "{}({}) = {}",
            func,
            format_number(input_value),
            format_number(value)
        ));

        self.state.current_input = format_number(value);
        self.state.waiting_for_operand = true;
        Ok(())
    }

    pub fn handle_memory(&mut self, action: MemoryAction) -> Result<()> {
        match action {
            MemoryAction::Clear => self.state.memory = 0.0,
            MemoryAction::Recall => {
                self.state.current_input = format_number(self.state.memory);
                self.state.waiting_for_operand = true;
            }
            MemoryAction::Add => {
                let value = self.current_value()?;
                self.state.memory = evaluate(self.state.memory, value, Operator::Add)?;
            }
            MemoryAction::Subtract => {
                let value = self.current_value()?;
                self.state.memory = evaluate(self.state.memory, value, Operator::Subtract)?;
            }
            MemoryAction::Store => self.state.memory = self.current_value()?,
        }

        debug!(memory = self.state.memory, ?action, "memory updated");
        Ok(())
    }

    /// Reset the entry and any pending operation. Memory and history stay.
    pub fn clear(&mut self) {
        self.state.clear();
        self.state.error = None;
    }

    pub fn clear_entry(&mut self) {
        self.state.clear_entry();
    }

    /// Load the result of a history record into the display.
    pub fn select_history_entry(&mut self, entry: &str) -> Result<()> {
        let result = entry_result(entry)?;
        self.state.current_input = result.to_string();
        self.state.waiting_for_operand = true;
        Ok(())
    }

    /// Select the `index`-th newest history record.
    pub fn recall_history(&mut self, index: usize) -> Result<()> {
        let entry = self
            .state
            .history
            .get(index)
            .map(str::to_string)
            .ok_or_else(|| CalcError::unknown_input(format!("#{index}")))?;
        self.select_history_entry(&entry)
    }

    pub fn clear_history(&mut self) {
        self.state.history.clear();
    }

    pub fn set_angle_mode(&mut self, mode: AngleMode) {
        self.state.angle_mode = mode;
    }

    pub fn toggle_angle_mode(&mut self) {
        self.state.angle_mode = self.state.angle_mode.toggled();
        debug!(angle_mode = %self.state.angle_mode, "angle mode changed");
    }

    pub fn set_scientific_mode(&mut self, enabled: bool) {
        self.state.scientific_mode = enabled;
    }

    pub fn toggle_mode(&mut self) {
        self.state.scientific_mode = !self.state.scientific_mode;
    }

    fn current_value(&self) -> Result<f64> {
        parse_number(&self.state.current_input)
    }
}

/// Failed evaluations continue with 0 so the operator chain stays usable.
fn nominal(result: Result<f64>) -> (f64, Result<()>) {
    match result {
        Ok(value) => (value, Ok(())),
        Err(err) => (0.0, Err(err)),
    }
}
