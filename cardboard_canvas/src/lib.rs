// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cardboard_canvas --heading-base-level=0

//! Cardboard Canvas: pinch, pan and wheel gestures for a card listing.
//!
//! A [`CanvasEngine`] sits between the platform's input events and the
//! listing. It interprets each event against the current [`LayoutMode`]:
//!
//! - In the grid modes, a pinch past one of the [`GestureConfig`]
//!   thresholds asks the host to step to the neighbouring mode. Pinching in
//!   steps toward [`LayoutMode::Compact`], pinching out toward
//!   [`LayoutMode::Canvas`]. Keeping the fingers down and continuing the
//!   pinch steps again.
//! - In canvas mode, pinches and the wheel zoom the canvas within its
//!   [`ZoomLimits`], and dragging empty canvas pans it.
//!
//! Every event yields an [`Effect`]. Zoom and pan effects have already been
//! applied to the engine's [`ViewTransform`] when they are returned; mode
//! switch requests are handed to a [`ModeHost`] and never applied by the
//! engine itself. [`ControllerHost`] applies them to a
//! [`cardboard_layout::ModeController`]. Each time the host's mode turns
//! into canvas mode the engine starts from the default transform.
//!
//! ## Example
//!
//! ```rust
//! use cardboard_canvas::{CanvasEngine, Effect, LayoutMode, PointerEvent, WheelEvent};
//!
//! let mut engine = CanvasEngine::default();
//! let mut mode = LayoutMode::Standard;
//!
//! // Two fingers 100px apart spread to 130px: step from the grid to the canvas.
//! engine.on_pointer_event(&mut mode, &PointerEvent::down(0, (100.0, 300.0)));
//! engine.on_pointer_event(&mut mode, &PointerEvent::down(1, (200.0, 300.0)));
//! let effect = engine.on_pointer_event(&mut mode, &PointerEvent::moved(1, (230.0, 300.0)));
//! assert!(matches!(effect, Effect::ModeSwitchRequest(_)));
//! assert_eq!(mode, LayoutMode::Canvas);
//!
//! // Now the same motion zooms.
//! let effect = engine.on_pointer_event(&mut mode, &PointerEvent::moved(1, (295.0, 300.0)));
//! assert_eq!(effect, Effect::Zoom { factor: 1.5 });
//! assert_eq!(engine.transform().scale, 1.5);
//!
//! // Scrolling up zooms in a little more.
//! engine.on_wheel_event(&mode, &WheelEvent::new(-100.0));
//! assert!((engine.transform().scale - 1.6).abs() < 1e-12);
//! ```
//!
//! Time never enters the engine; it only looks at event order.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod engine;
mod event;
mod recognizer;

pub use config::{EngineConfig, GestureConfig};
pub use engine::{CanvasEngine, ControllerHost, ModeHost};
pub use event::{Effect, ModeRequest, PointerEvent, PointerPhase, WheelEvent};
pub use recognizer::{GesturePhase, GestureRecognizer};

pub use cardboard_event_state::pointer::PointerId;
pub use cardboard_layout::{ItemPlacement, LayoutMode, ModeStep, compute_placements};
pub use cardboard_view2d::{CanvasView, ViewTransform, ZoomLimits};
