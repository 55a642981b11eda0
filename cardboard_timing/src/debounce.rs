// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Millis;

/// Trailing‑edge debouncer holding at most one pending value.
///
/// Each [`Debouncer::schedule`] call cancels whatever was pending and restarts
/// the delay. [`Debouncer::poll`] hands the value back once the delay has
/// elapsed without another schedule.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    delay: Millis,
    pending: Option<(Millis, T)>,
}

impl<T> Debouncer<T> {
    /// Creates an idle debouncer with the given delay.
    #[must_use]
    pub const fn new(delay: Millis) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Configured delay.
    #[must_use]
    pub const fn delay(&self) -> Millis {
        self.delay
    }

    /// Schedules `value` to fire `delay` after `now`, replacing any pending value.
    ///
    /// Returns the replaced value, if there was one.
    pub fn schedule(&mut self, now: Millis, value: T) -> Option<T> {
        let deadline = now.saturating_add(self.delay);
        self.pending
            .replace((deadline, value))
            .map(|(_, replaced)| replaced)
    }

    /// Cancels the pending value and returns it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, value)| value)
    }

    /// Returns the pending value once its deadline has been reached.
    pub fn poll(&mut self, now: Millis) -> Option<T> {
        match self.pending {
            Some((deadline, _)) if now >= deadline => self.cancel(),
            _ => None,
        }
    }

    /// Deadline of the pending value.
    #[must_use]
    pub fn deadline(&self) -> Option<Millis> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Returns `true` while a value is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
