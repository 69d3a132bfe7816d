//! Bounded, newest-first record of completed calculations.

use std::collections::VecDeque;

use super::error::{CalcError, Result};
use super::evaluation::parse_number;

/// Default number of records kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Separator between a calculation and its result, e.g. `2 + 3 = 5`.
pub const RESULT_SEPARATOR: &str = " = ";

/// Calculation history.
///
/// Entries are stored most-recent-first; once `capacity` is reached the
/// oldest record is evicted.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    /// Create a history holding at most `capacity` records (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Prepend a record, dropping the oldest when over capacity.
    pub fn record(&mut self, entry: impl Into<String>) {
        self.entries.push_front(entry.into());
        self.entries.truncate(self.capacity);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

/// Extract the result part of a record (`"2 + 3 = 5"` → `"5"`).
///
/// The result must parse as a finite number so it can be loaded back into
/// the display.
pub fn entry_result(entry: &str) -> Result<&str> {
    let (_, result) = entry
        .split_once(RESULT_SEPARATOR)
        .ok_or_else(|| CalcError::invalid_number(entry))?;
    let result = result.trim();
    parse_number(result)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut history = History::default();
        history.record("1 + 1 = 2");
        history.record("2 + 2 = 4");
        assert_eq!(history.get(0), Some("2 + 2 = 4"));
        assert_eq!(history.get(1), Some("1 + 1 = 2"));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_evicts_oldest_past_capacity() {
        let mut history = History::default();
        for i in 0..11 {
            history.record(format!("{i} + 0 = {i}"));
        }
        assert_eq!(history.len(), 10);
        assert_eq!(history.get(0), Some("10 + 0 = 10"));
        assert!(history.iter().all(|entry| entry != "0 + 0 = 0"));
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut history = History::with_capacity(0);
        history.record("a = 1");
        history.record("b = 2");
        assert_eq!(history.capacity(), 1);
        assert_eq!(history.to_vec(), vec!["b = 2".to_string()]);
    }

    #[test]
    fn test_large_capacity_allocates_lazily() {
        let mut history = History::with_capacity(usize::MAX);
        history.record("1 + 1 = 2");
        assert_eq!(history.capacity(), usize::MAX);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut history = History::default();
        history.record("pi(0) = 3.141592653589793");
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_entry_result() {
        assert_eq!(entry_result("2 + 3 = 5"), Ok("5"));
        assert_eq!(entry_result("sqrt(2) = 1.4142135623730951"), Ok("1.4142135623730951"));
        assert!(entry_result("no separator").is_err());
        assert!(entry_result("x = NaN").is_err());
    }
}
