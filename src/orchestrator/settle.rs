//! One-shot settle timer for the transition gate.
//!
//! Frame-driven: nothing fires on its own. The owner polls [`SettleTimer::poll`]
//! with the current time; a cancelled timer can never fire.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct SettleTimer {
    deadline: Option<Instant>,
}

impl SettleTimer {
    /// Arm for `after` from `now`. Any previous deadline is replaced.
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.deadline = Some(now + after);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// True exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
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
    fn test_fires_once_at_deadline() {
        let t0 = Instant::now();
        let mut timer = SettleTimer::default();
        timer.arm(t0, Duration::from_millis(1500));
        assert!(!timer.poll(t0 + Duration::from_millis(1499)));
        assert!(timer.poll(t0 + Duration::from_millis(1500)));
        assert!(!timer.poll(t0 + Duration::from_millis(3000)));
    }

    #[test]
    fn test_cancelled_never_fires() {
        let t0 = Instant::now();
        let mut timer = SettleTimer::default();
        timer.arm(t0, Duration::from_millis(10));
        timer.cancel();
        assert!(!timer.poll(t0 + Duration::from_secs(1)));
        assert!(!timer.is_armed());
    }
}
