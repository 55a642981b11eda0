// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use cardboard_event_state::drag::PanState;
use cardboard_event_state::pinch::PinchState;
use cardboard_event_state::pointer::PointerSet;
use cardboard_layout::{LayoutMode, ModeStep};
use cardboard_view2d::ViewTransform;

use crate::config::GestureConfig;
use crate::event::{Effect, ModeRequest, PointerEvent, PointerPhase, WheelEvent};

/// What the recognizer is currently tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// No gesture in progress.
    Idle,
    /// Two or more contacts are down.
    Pinching,
    /// One contact is dragging the canvas.
    Panning,
}

/// Turns pointer and wheel input into [`Effect`]s.
///
/// The recognizer is pure interpretation: it reads the layout mode and the
/// current transform but changes neither. [`crate::CanvasEngine`] applies
/// the effects.
///
/// Pinches mean different things per mode. In canvas mode the distance ratio
/// between frames is a zoom factor. In grid modes a ratio beyond one of the
/// thresholds requests a one‑step mode change; the reference distance is then
/// re‑armed, so a long pinch can step through several modes.
#[derive(Clone, Debug, Default)]
pub struct GestureRecognizer {
    config: GestureConfig,
    pointers: PointerSet,
    pinch: PinchState,
    pan: PanState,
}

impl GestureRecognizer {
    /// Creates an idle recognizer.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        if self.pinch.is_active() {
            GesturePhase::Pinching
        } else if self.pan.is_panning() {
            GesturePhase::Panning
        } else {
            GesturePhase::Idle
        }
    }

    /// Reference distance of the pinch in progress.
    #[must_use]
    pub fn reference_distance(&self) -> Option<f64> {
        self.pinch.reference_distance()
    }

    /// Number of contacts currently down.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Drops every contact and session.
    pub fn reset(&mut self) {
        self.pointers.clear();
        self.pinch.end();
        self.pan.end();
    }

    /// Ends a pan in progress without touching pinch state.
    pub fn cancel_pan(&mut self) {
        self.pan.end();
    }

    /// Interprets one pointer event.
    pub fn on_pointer(
        &mut self,
        event: &PointerEvent,
        mode: LayoutMode,
        transform: ViewTransform,
    ) -> Effect {
        match event.phase {
            PointerPhase::Down => self.pointer_down(event, mode, transform),
            PointerPhase::Move => self.pointer_move(event, mode, transform),
            PointerPhase::Up | PointerPhase::Cancel => self.pointer_up(event),
        }
    }

    /// Scale delta of a wheel event; `None` outside canvas mode.
    #[must_use]
    pub fn wheel_delta(&self, event: &WheelEvent, mode: LayoutMode) -> Option<f64> {
        if mode != LayoutMode::Canvas || !event.delta_y.is_finite() {
            return None;
        }
        Some(-event.delta_y * self.config.wheel_sensitivity)
    }

    fn pointer_down(
        &mut self,
        event: &PointerEvent,
        mode: LayoutMode,
        transform: ViewTransform,
    ) -> Effect {
        let count = self.pointers.down(event.pointer, event.position);
        if count >= 2 {
            if !self.pinch.is_active() {
                if let Some((a, b)) = self.pointers.pair() {
                    self.pinch.start(a, b);
                    self.pan.end();
                    tracing::debug!(distance = a.distance(b), %mode, "pinch started");
                }
            }
        } else if mode == LayoutMode::Canvas && !event.over_item {
            self.pan.start(event.position, transform.translation);
            tracing::debug!(x = event.position.x, y = event.position.y, "pan started");
        }
        Effect::NoOp
    }

    fn pointer_move(
        &mut self,
        event: &PointerEvent,
        mode: LayoutMode,
        transform: ViewTransform,
    ) -> Effect {
        if !self.pointers.moved(event.pointer, event.position) {
            return Effect::NoOp;
        }
        if self.pinch.is_active() {
            return match self.pointers.pair() {
                Some((a, b)) => self.pinch_move(a, b, mode),
                None => {
                    self.pinch.end();
                    Effect::NoOp
                }
            };
        }
        if self.pan.is_panning() {
            if mode != LayoutMode::Canvas {
                self.pan.end();
                return Effect::NoOp;
            }
            if let Some(translation) = self.pan.translation_at(event.position, transform.scale) {
                let delta = translation - transform.translation;
                tracing::trace!(dx = delta.x, dy = delta.y, "pan");
                return Effect::Pan { delta };
            }
        }
        Effect::NoOp
    }

    fn pinch_move(&mut self, a: Point, b: Point, mode: LayoutMode) -> Effect {
        let Some(sample) = self.pinch.sample(a, b) else {
            // Coincident reference: no ratio this frame, measure from here on.
            self.pinch.rearm(a.distance(b));
            return Effect::NoOp;
        };

        if mode == LayoutMode::Canvas {
            if sample.ratio <= 0.0 {
                self.pinch.rearm(sample.distance);
                return Effect::NoOp;
            }
            if (sample.ratio - 1.0).abs() <= self.config.pinch_dead_zone {
                return Effect::NoOp;
            }
            self.pinch.rearm(sample.distance);
            tracing::trace!(factor = sample.ratio, "pinch zoom");
            return Effect::Zoom {
                factor: sample.ratio,
            };
        }

        let step = if sample.ratio < self.config.zoom_out_threshold {
            ModeStep::TowardCompact
        } else if sample.ratio > self.config.zoom_in_threshold {
            ModeStep::TowardCanvas
        } else {
            return Effect::NoOp;
        };
        self.pinch.rearm(sample.distance);

        match mode.step(step) {
            Some(to) => {
                tracing::debug!(from = %mode, %to, ratio = sample.ratio, "mode switch requested");
                Effect::ModeSwitchRequest(ModeRequest {
                    from: mode,
                    to,
                    step,
                })
            }
            None => Effect::NoOp,
        }
    }

    fn pointer_up(&mut self, event: &PointerEvent) -> Effect {
        if !self.pointers.up(event.pointer) {
            return Effect::NoOp;
        }
        // Any lift ends the session; the remaining contacts may be a
        // different pair than the one the reference was measured on.
        if self.pinch.is_active() {
            self.pinch.end();
            tracing::debug!(phase = ?event.phase, "pinch ended");
        }
        if self.pan.is_panning() {
            self.pan.end();
            tracing::debug!(phase = ?event.phase, "pan ended");
        }
        Effect::NoOp
    }
}
