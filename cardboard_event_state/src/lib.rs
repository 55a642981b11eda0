// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cardboard_event_state --heading-base-level=0

//! Cardboard Event State: session state for canvas pointer gestures.
//!
//! This crate provides small state holders that a gesture recognizer
//! composes. Each module covers one piece of state that has to survive
//! across events:
//!
//! - [`pointer`]: the ordered set of contacts currently down
//! - [`pinch`]: the reference distance of a two‑contact gesture
//! - [`drag`]: the anchor of a single‑pointer pan
//!
//! None of these decide what a gesture *means*. That depends on the layout
//! mode the listing is in and lives in `cardboard_canvas`. Keeping the state
//! separate lets hosts build other recognizers on the same pieces.
//!
//! ## Usage Patterns
//!
//! ### Pinch measurement
//!
//! ```rust
//! use kurbo::Point;
//! use cardboard_event_state::pinch::PinchState;
//! use cardboard_event_state::pointer::{PointerId, PointerSet};
//!
//! let mut pointers = PointerSet::new();
//! let mut pinch = PinchState::default();
//!
//! pointers.down(PointerId(0), Point::new(0.0, 0.0));
//! pointers.down(PointerId(1), Point::new(100.0, 0.0));
//! if let Some((a, b)) = pointers.pair() {
//!     pinch.start(a, b);
//! }
//!
//! pointers.moved(PointerId(1), Point::new(70.0, 0.0));
//! let (a, b) = pointers.pair().unwrap();
//! let sample = pinch.sample(a, b).unwrap();
//! assert!(sample.ratio < 0.8);
//! ```
//!
//! ### Panning
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use cardboard_event_state::drag::PanState;
//!
//! let mut pan = PanState::default();
//! pan.start(Point::new(10.0, 10.0), Vec2::ZERO);
//! let t = pan.translation_at(Point::new(15.0, 12.0), 1.0).unwrap();
//! assert_eq!(t, Vec2::new(5.0, 2.0));
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod drag;
pub mod pinch;
pub mod pointer;
