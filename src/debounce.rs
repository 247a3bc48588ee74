//! Debounced recomputation for interactive inputs
//!
//! The EMI, mutual fund and SWP screens recompute about 300 ms after the
//! last edit instead of on every keystroke. `Debounced` holds the latest
//! raw value, the last committed value, and at most one pending deadline;
//! a new edit always replaces the pending one, so the newest value wins
//! and a single recomputation fires per burst of edits.
//!
//! Time is passed in by the caller, which keeps the contract deterministic
//! and testable without sleeping.

use std::time::{Duration, Instant};

/// Default commit window for debounced calculator inputs.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct Debounced<T> {
    raw: T,
    committed: T,
    window: Duration,
    deadline: Option<Instant>,
}

impl<T: Clone> Debounced<T> {
    pub fn new(initial: T, window: Duration) -> Self {
        Self {
            raw: initial.clone(),
            committed: initial,
            window,
            deadline: None,
        }
    }

    /// Record an edit at `now`. Any pending deadline is replaced, so the
    /// window restarts from the newest edit.
    pub fn update(&mut self, value: T, now: Instant) {
        self.raw = value;
        self.deadline = Some(now + self.window);
    }

    /// Commit the raw value if the window has elapsed. Returns the newly
    /// committed value exactly once per commit; later polls return `None`
    /// until the next edit.
    pub fn poll(&mut self, now: Instant) -> Option<&T> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.committed = self.raw.clone();
                self.deadline = None;
                Some(&self.committed)
            }
            _ => None,
        }
    }

    /// Commit immediately, discarding any pending deadline.
    pub fn flush(&mut self) -> &T {
        self.committed = self.raw.clone();
        self.deadline = None;
        &self.committed
    }

    /// The last committed value, the one recomputation should use.
    pub fn committed(&self) -> &T {
        &self.committed
    }

    /// The latest raw value, committed or not.
    pub fn raw(&self) -> &T {
        &self.raw
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_commits_after_window() {
        let start = Instant::now();
        let mut d = Debounced::new(0u32, ms(300));

        d.update(5, start);
        assert!(d.is_pending());
        assert_eq!(d.poll(start + ms(100)), None);
        assert_eq!(*d.committed(), 0);

        assert_eq!(d.poll(start + ms(300)), Some(&5));
        assert_eq!(*d.committed(), 5);
        assert!(!d.is_pending());

        // Commit fires once; nothing more without a new edit
        assert_eq!(d.poll(start + ms(600)), None);
    }

    #[test]
    fn test_newest_edit_wins() {
        let start = Instant::now();
        let mut d = Debounced::new(0u32, ms(300));

        d.update(1, start);
        d.update(2, start + ms(200));
        d.update(3, start + ms(400));

        // 300ms after the first edit, but the deadline moved with edit 3
        assert_eq!(d.poll(start + ms(450)), None);

        // Only the newest value ever commits
        assert_eq!(d.poll(start + ms(700)), Some(&3));
        assert_eq!(*d.committed(), 3);
    }

    #[test]
    fn test_flush_commits_immediately() {
        let start = Instant::now();
        let mut d = Debounced::new(0u32, ms(300));

        d.update(9, start);
        assert_eq!(*d.flush(), 9);
        assert!(!d.is_pending());
        assert_eq!(d.poll(start + ms(1000)), None);
    }

    #[test]
    fn test_raw_and_committed_diverge_while_pending() {
        let start = Instant::now();
        let mut d = Debounced::new(10u32, ms(300));

        d.update(20, start);
        assert_eq!(*d.raw(), 20);
        assert_eq!(*d.committed(), 10);
    }
}
