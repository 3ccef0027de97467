#![forbid(unsafe_code)]

//! Deferred tasks on a logical clock.
//!
//! [`DeferredQueue`] holds tasks due at a logical instant. The queue never
//! reads the wall clock: callers move time forward with
//! [`DeferredQueue::advance`], which returns every task that came due. This
//! keeps overlay behavior deterministic under test. [`FrameClock`] bridges to
//! real time by measuring the wall-clock gap between frames.
//!
//! # Invariants
//!
//! 1. Tasks come due in `(due, insertion)` order; equal deadlines keep FIFO
//!    order.
//! 2. The logical clock is monotonic.
//! 3. A task scheduled with a zero delay is due on the next `advance`, even
//!    an `advance(Duration::ZERO)`.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use web_time::Instant;

struct Entry<T> {
    due: Duration,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due
            .cmp(&other.due)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-ordered queue of tasks keyed by logical due time.
pub struct DeferredQueue<T> {
    now: Duration,
    next_seq: u64,
    pending: BinaryHeap<Reverse<Entry<T>>>,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for DeferredQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredQueue")
            .field("now", &self.now)
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl<T> DeferredQueue<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            pending: BinaryHeap::new(),
        }
    }

    /// Current logical time.
    #[inline]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `task` to come due `delay` after the current logical time.
    pub fn schedule(&mut self, delay: Duration, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Reverse(Entry {
            due: self.now.saturating_add(delay),
            seq,
            task,
        }));
    }

    /// Move the clock forward and drain every task that is now due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<T> {
        self.now = self.now.saturating_add(elapsed);
        let mut due = Vec::new();
        while self
            .pending
            .peek()
            .is_some_and(|Reverse(entry)| entry.due <= self.now)
        {
            if let Some(Reverse(entry)) = self.pending.pop() {
                due.push(entry.task);
            }
        }
        if !due.is_empty() {
            tracing::trace!(count = due.len(), now = ?self.now, "deferred tasks due");
        }
        due
    }

    /// Time from now until the earliest pending task, if any.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending
            .peek()
            .map(|Reverse(entry)| entry.due.saturating_sub(self.now))
    }

    /// Drop pending tasks for which `keep` returns `false`.
    ///
    /// Tasks that belong to something already torn down are removed here
    /// rather than filtered when they come due.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.pending.retain(|Reverse(entry)| keep(&entry.task));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Measures wall-clock time between frames.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Elapsed time since the previous tick (or construction).
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed
    }
}
