// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::Millis;

/// Identity of a task pushed onto a [`TimerQueue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Clone, Debug)]
struct Entry<T> {
    deadline: Millis,
    id: TimerId,
    value: T,
}

/// Fixed‑duration deferred tasks, released in deadline order.
///
/// Tasks with equal deadlines are released in the order they were pushed.
/// Individual tasks cannot be cancelled; hosts whose tasks must be safe to
/// repeat should make them idempotent.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Queues `value` to be released `delay` after `now`.
    pub fn push(&mut self, now: Millis, delay: Millis, value: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let deadline = now.saturating_add(delay);
        // Entries stay sorted by (deadline, id); ids only grow, so inserting
        // after every entry with deadline <= ours preserves push order.
        let at = self.entries.partition_point(|e| e.deadline <= deadline);
        self.entries.insert(
            at,
            Entry {
                deadline,
                id,
                value,
            },
        );
        id
    }

    /// Releases the earliest task whose deadline has been reached.
    pub fn pop_due(&mut self, now: Millis) -> Option<(TimerId, T)> {
        match self.entries.first() {
            Some(e) if e.deadline <= now => {
                let e = self.entries.remove(0);
                Some((e.id, e.value))
            }
            _ => None,
        }
    }

    /// Releases every task whose deadline has been reached, earliest first.
    pub fn drain_due(&mut self, now: Millis) -> Vec<T> {
        let due = self.entries.partition_point(|e| e.deadline <= now);
        self.entries.drain(..due).map(|e| e.value).collect()
    }

    /// Earliest pending deadline, for hosts that arm a single platform timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.entries.first().map(|e| e.deadline)
    }

    /// Returns `true` if `id` has not been released yet.
    #[must_use]
    pub fn contains(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no task is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
