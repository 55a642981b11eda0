// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan session: derive a canvas translation from single‑pointer drags.
//!
//! ## Usage
//!
//! 1) Start a pan by calling [`PanState::start`] with the pointer position and
//!    the canvas translation at that moment.
//! 2) On each move event, call [`PanState::translation_at`] with the pointer
//!    position and the current scale to get the new translation.
//! 3) End the pan with [`PanState::end`].
//!
//! The translation is `(pointer - anchor) / scale`, where
//! `anchor = start_pointer - start_translation`. Dividing by the scale keeps
//! the content moving with the pointer at any zoom level.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use cardboard_event_state::drag::PanState;
//!
//! let mut pan = PanState::default();
//! pan.start(Point::new(100.0, 100.0), Vec2::ZERO);
//! assert!(pan.is_panning());
//!
//! let t = pan.translation_at(Point::new(140.0, 90.0), 2.0).unwrap();
//! assert_eq!(t, Vec2::new(20.0, -5.0));
//! ```

use kurbo::{Point, Vec2};

/// Tracks a single‑pointer pan of the canvas.
#[derive(Debug, Clone, Default, Copy)]
pub struct PanState {
    /// Pointer position when the pan started.
    pub anchor_pointer: Option<Point>,
    /// Canvas translation when the pan started.
    pub anchor_translation: Vec2,
}

impl PanState {
    /// Start a pan at `pointer` over a canvas currently translated by `translation`.
    pub fn start(&mut self, pointer: Point, translation: Vec2) {
        self.anchor_pointer = Some(pointer);
        self.anchor_translation = translation;
    }

    /// Pointer position minus the starting translation.
    pub fn anchor(&self) -> Option<Point> {
        self.anchor_pointer.map(|p| p - self.anchor_translation)
    }

    /// Translation the canvas should have with the pointer at `pointer`.
    ///
    /// Returns `None` when no pan is active or `scale` is not a usable divisor.
    pub fn translation_at(&self, pointer: Point, scale: f64) -> Option<Vec2> {
        if !(scale > 0.0 && scale.is_finite()) {
            return None;
        }
        self.anchor().map(|anchor| (pointer - anchor) / scale)
    }

    /// End the current pan and reset state.
    pub fn end(&mut self) {
        self.anchor_pointer = None;
        self.anchor_translation = Vec2::ZERO;
    }

    /// Returns `true` while a pan is active
    pub fn is_panning(&self) -> bool {
        self.anchor_pointer.is_some()
    }
}
