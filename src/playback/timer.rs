//! Single-shot deadline timer
//!
//! Holds at most one pending deadline. Arming replaces any previous deadline
//! and firing consumes it, so a tick can never be delivered twice.

use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the tick `interval` after `now`, dropping any pending one
    pub fn arm(&mut self, now: Instant, interval: Duration) {
        self.deadline = Some(now + interval);
    }

    /// Drop the pending tick. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the pending tick if its deadline has passed
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before the pending tick, zero if overdue
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_consumes_deadline() {
        let now = Instant::now();
        let mut timer = Timer::new();
        timer.arm(now, Duration::from_millis(10));

        assert!(!timer.fire(now));
        assert!(timer.fire(now + Duration::from_millis(10)));
        assert!(!timer.fire(now + Duration::from_millis(20)));
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_rearm_replaces_pending() {
        let now = Instant::now();
        let mut timer = Timer::new();
        timer.arm(now, Duration::from_millis(100));
        timer.arm(now, Duration::from_millis(5));

        assert_eq!(timer.remaining(now), Some(Duration::from_millis(5)));
        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert_eq!(timer.remaining(now), None);
    }
}
