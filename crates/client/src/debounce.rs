//! Input debouncing.
//!
//! [`Debouncer`] coalesces rapid submissions into one value released after
//! a quiet period. It is driven by explicit instants rather than its own
//! timer, so the UI event loop decides when time advances and tests never
//! sleep.

use std::time::{Duration, Instant};

/// Holds the latest submitted value until a quiet period elapses.
///
/// Each submission replaces the pending value and restarts the quiet
/// period, so a burst of keystrokes yields exactly one released value:
/// the last one.
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet_period: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug)]
struct Pending<T> {
    value: T,
    due_at: Instant,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given quiet period.
    #[must_use]
    pub const fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// Submit a new value at `now`, replacing any pending one and
    /// restarting the quiet period.
    pub fn submit(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            due_at: now + self.quiet_period,
        });
    }

    /// Release the pending value if its quiet period has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| now >= p.due_at) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Whether a value is waiting for its quiet period to elapse.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due, if any.
    ///
    /// Lets an event loop schedule its next wakeup instead of polling
    /// blindly.
    #[must_use]
    pub fn due_at(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due_at)
    }
}
