//! Debounced search input.
//!
//! Collapses a burst of raw keystroke values into a single settled emission
//! after a quiet period. Time is passed in by the caller, so the controller
//! never touches an ambient clock and stays deterministic in tests. There is
//! no timer thread: the event loop polls with [`Debouncer::poll`] and can use
//! [`Debouncer::next_deadline`] to pick a wake-up timeout.

use std::time::{Duration, Instant};

/// Default quiet period before a submitted value becomes effective.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

#[derive(Clone, Debug)]
struct Pending {
    value: String,
    deadline: Instant,
}

/// Single-slot debounce controller.
///
/// At most one emission is pending at any time; submitting a new value
/// replaces the previous one before its own deadline is scheduled, so a burst
/// of N submissions spaced closer than the delay yields exactly one emission
/// carrying the last value.
#[derive(Clone, Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<Pending>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `value` for emission `delay` after `now`, cancelling any
    /// previously pending value.
    pub fn submit(&mut self, value: impl Into<String>, now: Instant) {
        self.pending = Some(Pending {
            value: value.into(),
            deadline: now + self.delay,
        });
    }

    /// Drop any pending emission. Also what happens implicitly when the
    /// owning view state is dropped: nothing can fire into a discarded view.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending emission, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Emit the pending value once its quiet period has elapsed.
    ///
    /// Each submitted value is emitted at most once.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Emit the pending value immediately, skipping the remaining delay.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.value)
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn burst_collapses_to_last_value() {
        let start = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(300));
        d.submit("a", start);
        d.submit("ab", start + 50 * MS);
        d.submit("abc", start + 100 * MS);

        // Nothing settles while keystrokes keep arriving.
        assert_eq!(d.poll(start + 150 * MS), None);
        // One emission, carrying the last value of the burst.
        assert_eq!(d.poll(start + 400 * MS), Some("abc".to_string()));
        // And only one.
        assert_eq!(d.poll(start + 800 * MS), None);
        assert!(!d.is_pending());
    }

    #[test]
    fn poll_before_deadline_keeps_value() {
        let start = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(300));
        d.submit("alice", start);
        assert_eq!(d.poll(start + 299 * MS), None);
        assert!(d.is_pending());
        assert_eq!(d.poll(start + 300 * MS), Some("alice".to_string()));
    }

    #[test]
    fn cancel_discards_pending() {
        let start = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(300));
        d.submit("alice", start);
        d.cancel();
        assert!(!d.is_pending());
        assert_eq!(d.poll(start + 400 * MS), None);
    }

    #[test]
    fn flush_emits_immediately() {
        let start = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(300));
        d.submit("alice", start);
        assert_eq!(d.flush(), Some("alice".to_string()));
        // Flushing consumed the slot; the deadline fires nothing later.
        assert_eq!(d.poll(start + 400 * MS), None);
    }

    #[test]
    fn next_deadline_tracks_latest_submit() {
        let start = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(300));
        assert_eq!(d.next_deadline(), None);
        d.submit("a", start);
        d.submit("ab", start + 200 * MS);
        assert_eq!(d.next_deadline(), Some(start + 500 * MS));
    }
}
