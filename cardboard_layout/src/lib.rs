// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cardboard_layout --heading-base-level=0

//! Cardboard Layout: layout modes of a card listing.
//!
//! A listing shows its cards in one of three [`LayoutMode`]s: two grid
//! densities and a freeform canvas. This crate is the headless model of
//! that choice:
//!
//! - [`LayoutMode`] and [`ModeStep`]: the modes and the one‑step ladder
//!   between them.
//! - [`ModeController`]: the single owner of the current mode, reporting
//!   each change as a [`ModeTransition`] and queueing post‑animation
//!   [`Cleanup`]s.
//! - [`compute_placements`]: the radial arrangement of cards in canvas mode.
//! - [`responsive`]: mode selection from the viewport width, debounced.
//! - Configuration structs with the default tweakables, optionally
//!   deserializable with the `serde` feature.
//!
//! It does not touch any DOM or scene. A rendering adapter maps
//! transitions, column counts and [`ItemPlacement`]s to visual output.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Size;
//! use cardboard_layout::{LayoutConfig, LayoutMode, ModeController, ModeStep};
//!
//! let mut modes = ModeController::new(LayoutConfig::default());
//! assert_eq!(modes.columns(), Some(4));
//!
//! let transition = modes.step(0, ModeStep::TowardCanvas).unwrap();
//! assert!(transition.enters_canvas());
//!
//! let sizes = [Size::new(200.0, 120.0); 6];
//! let placements = modes
//!     .config()
//!     .placement
//!     .place(&sizes, Size::new(1280.0, 720.0), None);
//! assert_eq!(placements.len(), 6);
//! assert_eq!(modes.mode(), LayoutMode::Canvas);
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod mode;
mod placement;
pub mod responsive;

pub use config::{
    Breakpoints, ConfigError, GridConfig, LayoutConfig, PlacementConfig, TransitionConfig,
    non_negative,
};
pub use controller::{Cleanup, ModeController, ModeTransition};
pub use mode::{LayoutMode, ModeStep, ParseLayoutModeError};
pub use placement::{ItemPlacement, PlacementCache, compute_placements};
pub use responsive::{ResizeDecision, ResponsiveMonitor};
