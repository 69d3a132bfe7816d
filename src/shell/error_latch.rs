//! Timed revert to a cleared calculator after an error.

use std::time::{Duration, Instant};

/// Tracks when an error shown on the display should be cleared.
///
/// Armed when an operation fails, disarmed by the next user input. Only an
/// armed latch whose deadline has passed asks for a clear.
#[derive(Debug, Clone)]
pub struct ErrorLatch {
    delay: Duration,
    deadline: Option<Instant>,
}

impl ErrorLatch {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Start (or restart) the countdown from `now`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when the deadline has passed.
    pub fn take_expired(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_after_delay() {
        let start = Instant::now();
        let mut latch = ErrorLatch::new(Duration::from_secs(2));
        latch.arm(start);

        assert!(!latch.take_expired(start + Duration::from_millis(1999)));
        assert!(latch.take_expired(start + Duration::from_secs(2)));
        assert!(!latch.take_expired(start + Duration::from_secs(3)));
        assert!(!latch.is_armed());
    }

    #[test]
    fn test_disarm_cancels() {
        let start = Instant::now();
        let mut latch = ErrorLatch::new(Duration::from_secs(2));
        latch.arm(start);
        latch.disarm();
        assert_eq!(latch.deadline(), None);
        assert!(!latch.take_expired(start + Duration::from_secs(5)));
    }

    #[test]
    fn test_rearm_moves_deadline() {
        let start = Instant::now();
        let mut latch = ErrorLatch::new(Duration::from_secs(2));
        latch.arm(start);
        latch.arm(start + Duration::from_secs(1));
        assert_eq!(latch.deadline(), Some(start + Duration::from_secs(3)));
    }
}
