// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport‑width driven mode selection.

use cardboard_timing::{Debouncer, Millis};

use crate::config::Breakpoints;
use crate::mode::LayoutMode;

/// Mode the listing must switch to at viewport `width`, if any.
///
/// Narrow viewports force [`LayoutMode::Compact`]; wider ones never force a
/// mode, so a user's choice survives growing the window.
#[must_use]
pub fn responsive_mode(
    width: f64,
    current: LayoutMode,
    breakpoints: &Breakpoints,
) -> Option<LayoutMode> {
    (width < breakpoints.compact_below && current != LayoutMode::Compact)
        .then_some(LayoutMode::Compact)
}

/// Whether the layout mode buttons should be shown at viewport `width`.
#[must_use]
pub fn controls_visible(width: f64, breakpoints: &Breakpoints) -> bool {
    width >= breakpoints.controls_hidden_below
}

/// Outcome of a settled resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeDecision {
    /// Viewport width the decision was made for.
    pub width: f64,
    /// Mode to switch to, applied without animation.
    pub mode: Option<LayoutMode>,
    /// Whether the layout controls should be visible.
    pub controls_visible: bool,
}

/// Debounces resize events and turns the last one into a [`ResizeDecision`].
#[derive(Clone, Debug)]
pub struct ResponsiveMonitor {
    breakpoints: Breakpoints,
    pending: Debouncer<f64>,
}

impl ResponsiveMonitor {
    /// Creates a monitor that waits `debounce` after the last resize.
    #[must_use]
    pub fn new(breakpoints: Breakpoints, debounce: Millis) -> Self {
        Self {
            breakpoints,
            pending: Debouncer::new(debounce),
        }
    }

    /// Decision for the initial viewport, made immediately.
    #[must_use]
    pub fn initial(&self, width: f64, current: LayoutMode) -> ResizeDecision {
        self.decide(width, current)
    }

    /// Records a resize to `width`, cancelling any unsettled one.
    pub fn on_resize(&mut self, now: Millis, width: f64) {
        self.pending.schedule(now, width);
    }

    /// Returns a decision once resizing has been quiet for the debounce delay.
    pub fn poll(&mut self, now: Millis, current: LayoutMode) -> Option<ResizeDecision> {
        let width = self.pending.poll(now)?;
        let decision = self.decide(width, current);
        tracing::debug!(
            width,
            mode = ?decision.mode,
            controls_visible = decision.controls_visible,
            "resize settled"
        );
        Some(decision)
    }

    /// Deadline of the unsettled resize, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Millis> {
        self.pending.deadline()
    }

    fn decide(&self, width: f64, current: LayoutMode) -> ResizeDecision {
        ResizeDecision {
            width,
            mode: responsive_mode(width, current, &self.breakpoints),
            controls_visible: controls_visible(width, &self.breakpoints),
        }
    }
}
