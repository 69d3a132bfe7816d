//! Snapshot of everything a UI needs to render the calculator.

use serde::Serialize;

use super::display::{format_display, format_secondary};
use super::error::ERROR_MESSAGE;
use super::functions::AngleMode;
use super::state::CalculatorState;

/// Rendered output of the engine after an operation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculatorView {
    /// Main display line (the current value, or `"Error"`).
    pub primary: String,
    /// Pending operand and operator, e.g. `"12 +"`; empty when none.
    pub secondary: String,
    /// Whether the memory register holds a non-zero value.
    pub memory_active: bool,
    pub angle_mode: AngleMode,
    pub scientific_mode: bool,
    /// Calculation records, newest first.
    pub history: Vec<String>,
    /// Error message to flash, if the last operation failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CalculatorView {
    /// Build a view from the current engine state.
    pub fn from_state(state: &CalculatorState) -> Self {
        let error = state.error.as_ref().map(|_| ERROR_MESSAGE.to_string());
        let primary = match &error {
            Some(message) => message.clone(),
            None => format_display(&state.current_input),
        };

        Self {
            primary,
            secondary: format_secondary(state.previous_input, state.operator),
            memory_active: state.memory_active(),
            angle_mode: state.angle_mode,
            scientific_mode: state.scientific_mode,
            history: state.history.to_vec(),
            error,
        }
    }

    /// Check if this view reports an error.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::error::CalcError;
    use crate::calculator::evaluation::Operator;

    #[test]
    fn test_view_of_fresh_state() {
        let view = CalculatorView::from_state(&CalculatorState::default());
        assert_eq!(view.primary, "0");
        assert_eq!(view.secondary, "");
        assert!(!view.memory_active);
        assert!(view.history.is_empty());
        assert!(!view.is_error());
    }

    #[test]
    fn test_view_shows_pending_operation() {
        let mut state = CalculatorState::default();
        state.previous_input = Some(7.0);
        state.operator = Some(Operator::Multiply);
        state.memory = 3.0;
        let view = CalculatorView::from_state(&state);
        assert_eq!(view.secondary, "7 *");
        assert!(view.memory_active);
    }

    #[test]
    fn test_error_replaces_primary() {
        let mut state = CalculatorState::default();
        state.current_input = "5".to_string();
        state.error = Some(CalcError::DivisionByZero);
        let view = CalculatorView::from_state(&state);
        assert_eq!(view.primary, "Error");
        assert_eq!(view.error.as_deref(), Some("Error"));
    }

    #[test]
    fn test_json_shape() {
        let mut state = CalculatorState::default();
        state.history.record("1 + 1 = 2");
        let json = serde_json::to_value(CalculatorView::from_state(&state)).unwrap();
        assert_eq!(json["primary"], "0");
        assert_eq!(json["angle_mode"], "deg");
        assert_eq!(json["history"][0], "1 + 1 = 2");
        assert!(json.get("error").is_none());
    }
}
