//! Timed reveal pulse.
//!
//! Reset and reveal both start a pulse during which the view staggers cell
//! changes. Only one pulse is pending per puzzle: starting a new one replaces
//! the old deadline. The pulse is polled, never scheduled on a thread.

use std::time::{Duration, Instant};

/// Extra time the pulse stays active after the last staggered cell.
pub const REVEAL_SETTLE: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealPulse {
    deadline: Option<Instant>,
}

impl RevealPulse {
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Start (or restart) the pulse at `now`.
    pub fn start(&mut self, now: Instant, reveal_duration: Duration) {
        self.deadline = Some(now + reveal_duration + REVEAL_SETTLE);
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    /// End the pulse if its deadline has passed. Returns true when it ended
    /// on this call.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Stagger delay for cell `index` of `cell_count` while a pulse runs.
#[must_use]
pub fn change_delay(reveal_duration: Duration, cell_count: usize, index: usize) -> Duration {
    if cell_count == 0 {
        return Duration::ZERO;
    }
    let nanos = reveal_duration.as_nanos() * index as u128 / cell_count as u128;
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_expires() {
        let now = Instant::now();
        let mut pulse = RevealPulse::new();
        assert!(!pulse.poll(now));

        pulse.start(now, Duration::from_millis(1000));
        assert!(pulse.is_active());
        assert!(!pulse.poll(now + Duration::from_millis(1299)));
        assert!(pulse.poll(now + Duration::from_millis(1300)));
        assert!(!pulse.is_active());
        assert!(!pulse.poll(now + Duration::from_millis(5000)));
    }

    #[test]
    fn test_restart_replaces_deadline() {
        let now = Instant::now();
        let mut pulse = RevealPulse::new();
        pulse.start(now, Duration::from_millis(100));
        pulse.start(now + Duration::from_millis(350), Duration::from_millis(100));
        assert!(!pulse.poll(now + Duration::from_millis(400)));
        assert!(pulse.poll(now + Duration::from_millis(750)));
    }

    #[test]
    fn test_change_delay() {
        let d = Duration::from_millis(1000);
        assert_eq!(change_delay(d, 4, 0), Duration::ZERO);
        assert_eq!(change_delay(d, 4, 2).as_millis(), 500);
        assert_eq!(change_delay(d, 0, 3), Duration::ZERO);
        assert_eq!(change_delay(Duration::from_millis(300), 3, 1).as_millis(), 100);
    }
}
