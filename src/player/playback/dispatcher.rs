//! Clock-driven action dispatcher.
//!
//! Holds `(offset, action)` pairs sorted by offset. The caller owns the
//! clock and asks for everything due at a given time; nothing here sleeps or
//! spawns timers, so ordering and cancellation are fully deterministic.

use std::collections::VecDeque;

/// An action due at a point on the session clock.
#[derive(Debug, Clone, PartialEq)]
pub struct Scheduled<A> {
    /// Session clock time in milliseconds
    pub at_ms: f64,
    pub action: A,
}

/// Sorted queue of pending actions.
///
/// Actions with equal offsets fire in the order they were scheduled.
#[derive(Debug, Clone)]
pub struct Dispatcher<A> {
    queue: VecDeque<Scheduled<A>>,
}

impl<A> Default for Dispatcher<A> {
    fn default() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<A> Dispatcher<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` at `at_ms`, after any action already due at that time.
    pub fn schedule(&mut self, at_ms: f64, action: A) {
        let index = self.queue.partition_point(|entry| entry.at_ms <= at_ms);
        self.queue.insert(index, Scheduled { at_ms, action });
    }

    /// Schedule a batch, shifting every offset by `origin_ms`.
    pub fn schedule_all(&mut self, origin_ms: f64, entries: impl IntoIterator<Item = Scheduled<A>>) {
        for entry in entries {
            self.schedule(origin_ms + entry.at_ms, entry.action);
        }
    }

    /// Remove and return every action due at or before `now_ms`, in order.
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<Scheduled<A>> {
        let count = self.queue.partition_point(|entry| entry.at_ms <= now_ms);
        self.queue.drain(..count).collect()
    }

    /// Drop every pending action. Returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.queue.len();
        self.queue.clear();
        cancelled
    }

    /// Remove and return every pending action regardless of time.
    pub fn drain_all(&mut self) -> Vec<Scheduled<A>> {
        self.queue.drain(..).collect()
    }

    /// Time of the next pending action.
    pub fn next_due(&self) -> Option<f64> {
        self.queue.front().map(|entry| entry.at_ms)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
