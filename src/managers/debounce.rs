//! Single-slot debouncer with classic reset-timer semantics.

use std::time::{Duration, Instant};

/// Owns at most one pending `(deadline, value)` entry.
///
/// Every [`schedule`](Debouncer::schedule) cancels the previous pending entry
/// and starts a fresh quiescence window, so a burst of N schedules inside the
/// window yields at most one fire, after the last schedule, carrying the last
/// value.
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug)]
struct Pending<T> {
    deadline: Instant,
    value: T,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Cancels any pending entry and schedules `value` to fire one window
    /// after `now`.
    pub fn schedule(&mut self, now: Instant, value: T) {
        self.pending = Some(Pending {
            deadline: now + self.window,
            value,
        });
    }

    /// Drops the pending entry, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending entry, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Takes the pending value if its deadline has elapsed at `now`.
    pub fn fire_due(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(p) if p.deadline <= now => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }
}
