// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cardboard_view2d --heading-base-level=0

//! Cardboard View 2D: the view transform of a pannable, zoomable card canvas.
//!
//! This crate provides a small, headless model of the transform a canvas
//! container applies to its positioned cards:
//! - [`ViewTransform`]: a uniform scale plus a translation.
//! - [`ZoomLimits`]: the scale range and reset value.
//! - [`CanvasView`]: owns one transform and applies clamped mutations.
//!
//! It does **not** interpret input. Gesture recognition lives in
//! `cardboard_canvas`, which feeds zoom factors and pan deltas into a
//! [`CanvasView`] and hands the resulting transform to the renderer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use cardboard_view2d::{CanvasView, ZoomLimits};
//!
//! let mut view = CanvasView::new(ZoomLimits::default());
//!
//! // Pinch-out by 30%.
//! let t = view.zoom_by(1.3);
//! assert!((t.scale - 1.3).abs() < 1e-12);
//!
//! // Zooming is clamped, panning is not.
//! view.zoom_by(10.0);
//! view.translate_by(Vec2::new(5_000.0, 0.0));
//! assert_eq!(view.scale(), 2.0);
//! assert_eq!(view.translation().x, 5_000.0);
//!
//! // Entering canvas mode starts from a clean slate.
//! let t = view.reset();
//! assert_eq!(t.scale, 1.0);
//! assert_eq!(t.translation, Vec2::ZERO);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and never rotates.
//! - Translation is expressed in content units, before scaling.
//! - There are no world bounds: the canvas is infinite in every direction.
//!
//! This crate is `no_std`.

#![no_std]

mod canvas_view;
mod transform;

pub use canvas_view::CanvasView;
pub use transform::{ViewTransform, ZoomLimits};
