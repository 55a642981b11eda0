// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cardboard_timing --heading-base-level=0

//! Cardboard Timing: host‑agnostic scheduled tasks.
//!
//! UI code tends to reach for ad hoc platform timers: "recompute the layout
//! 250 ms after the last resize", "drop the transition styles once the
//! animation is over". This crate models those as plain data, driven by a
//! monotonic millisecond clock supplied by the host:
//!
//! - [`Debouncer`]: at most one pending value; scheduling again cancels
//!   and replaces it (trailing edge).
//! - [`TimerQueue`]: any number of fixed‑duration tasks released in
//!   deadline order.
//!
//! The host decides how time advances. A browser adapter polls from
//! `requestAnimationFrame` or arms a single `setTimeout` for
//! [`TimerQueue::next_deadline`]; tests simply pass increasing timestamps.
//!
//! ```rust
//! use cardboard_timing::{Debouncer, TimerQueue};
//!
//! let mut resize = Debouncer::new(250);
//! resize.schedule(0, 1024.0);
//! resize.schedule(100, 700.0);
//! assert_eq!(resize.poll(300), None);
//! assert_eq!(resize.poll(350), Some(700.0));
//!
//! let mut cleanup = TimerQueue::new();
//! cleanup.push(0, 300, "transition");
//! assert!(cleanup.drain_due(299).is_empty());
//! assert_eq!(cleanup.drain_due(300), ["transition"]);
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod debounce;
mod queue;

pub use debounce::Debouncer;
pub use queue::{TimerId, TimerQueue};

/// Monotonic timestamp or duration in milliseconds.
pub type Millis = u64;
