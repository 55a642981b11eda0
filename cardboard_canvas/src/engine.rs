// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Size};

use cardboard_layout::{
    ItemPlacement, LayoutMode, ModeController, ModeStep, ModeTransition, PlacementConfig,
};
use cardboard_timing::Millis;
use cardboard_view2d::{CanvasView, ViewTransform};

use crate::config::EngineConfig;
use crate::event::{Effect, PointerEvent, WheelEvent};
use crate::recognizer::GestureRecognizer;

/// The engine's view of whoever owns the layout mode.
///
/// The engine reads the mode before interpreting each event and passes
/// mode switch requests back out. Whether a request is honoured is up to the
/// host.
pub trait ModeHost {
    /// Current layout mode.
    fn layout_mode(&self) -> LayoutMode;

    /// A gesture asks to move one step in `step`'s direction, to `mode`.
    fn request_mode(&mut self, mode: LayoutMode, step: ModeStep);
}

impl ModeHost for LayoutMode {
    fn layout_mode(&self) -> LayoutMode {
        *self
    }

    fn request_mode(&mut self, mode: LayoutMode, _step: ModeStep) {
        *self = mode;
    }
}

/// Wires an engine straight to a [`ModeController`].
///
/// Requests become animated mode changes at `now`. The transitions they
/// produce are collected for the host to render, for example through
/// [`CanvasEngine::on_transition`].
#[derive(Debug)]
pub struct ControllerHost<'a> {
    controller: &'a mut ModeController,
    now: Millis,
    transitions: Vec<ModeTransition>,
}

impl<'a> ControllerHost<'a> {
    /// Borrows `controller` for events delivered at `now`.
    pub fn new(controller: &'a mut ModeController, now: Millis) -> Self {
        Self {
            controller,
            now,
            transitions: Vec::new(),
        }
    }

    /// Transitions applied so far.
    #[must_use]
    pub fn transitions(&self) -> &[ModeTransition] {
        &self.transitions
    }

    /// Releases the controller, returning the applied transitions.
    #[must_use]
    pub fn into_transitions(self) -> Vec<ModeTransition> {
        self.transitions
    }
}

impl ModeHost for ControllerHost<'_> {
    fn layout_mode(&self) -> LayoutMode {
        self.controller.mode()
    }

    fn request_mode(&mut self, mode: LayoutMode, _step: ModeStep) {
        if let Some(transition) = self.controller.set_mode(self.now, mode, true) {
            self.transitions.push(transition);
        }
    }
}

/// Gesture recognition plus the canvas transform it drives.
///
/// Feed every pointer and wheel event of the canvas container through
/// [`CanvasEngine::on_pointer_event`] and [`CanvasEngine::on_wheel_event`].
/// Zoom and pan effects are applied to the engine's [`CanvasView`] before
/// they are returned; mode switch requests go to the [`ModeHost`].
///
/// The engine remembers the last mode its host reported. Whenever that mode
/// becomes [`LayoutMode::Canvas`], before an event or after a request, the
/// view is reset as by [`CanvasEngine::enter_canvas`].
#[derive(Clone, Debug)]
pub struct CanvasEngine {
    recognizer: GestureRecognizer,
    view: CanvasView,
    placement: PlacementConfig,
    last_mode: Option<LayoutMode>,
}

impl CanvasEngine {
    /// Creates an engine at the default scale.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            recognizer: GestureRecognizer::new(config.gesture),
            view: CanvasView::new(config.zoom),
            placement: config.placement,
            last_mode: None,
        }
    }

    /// Current canvas transform.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.view.transform()
    }

    /// The transform owner.
    #[must_use]
    pub fn view(&self) -> &CanvasView {
        &self.view
    }

    /// Mutable access to the transform owner, for programmatic zoom.
    pub fn view_mut(&mut self) -> &mut CanvasView {
        &mut self.view
    }

    /// The gesture recognizer.
    #[must_use]
    pub fn recognizer(&self) -> &GestureRecognizer {
        &self.recognizer
    }

    /// Interprets a pointer event and applies its effect.
    pub fn on_pointer_event<H: ModeHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: &PointerEvent,
    ) -> Effect {
        let mode = host.layout_mode();
        self.observe_mode(mode);
        let effect = self.recognizer.on_pointer(event, mode, self.view.transform());
        match effect {
            Effect::Zoom { factor } => {
                self.view.zoom_by(factor);
            }
            Effect::Pan { delta } => {
                self.view.translate_by(delta);
            }
            Effect::ModeSwitchRequest(request) => {
                host.request_mode(request.to, request.step);
                self.observe_mode(host.layout_mode());
            }
            Effect::NoOp => {}
        }
        effect
    }

    /// Interprets a wheel event.
    ///
    /// The returned zoom factor is the ratio actually applied, so a wheel
    /// against a zoom limit yields [`Effect::NoOp`].
    pub fn on_wheel_event<H: ModeHost + ?Sized>(&mut self, host: &H, event: &WheelEvent) -> Effect {
        let mode = host.layout_mode();
        self.observe_mode(mode);
        let Some(delta) = self.recognizer.wheel_delta(event, mode) else {
            return Effect::NoOp;
        };
        let before = self.view.scale();
        let after = self.view.zoom_by_delta(delta).scale;
        if after == before {
            return Effect::NoOp;
        }
        tracing::trace!(before, after, "wheel zoom");
        Effect::Zoom {
            factor: after / before,
        }
    }

    /// Resets the transform for a fresh canvas session.
    ///
    /// A pinch in progress survives, so a pinch that stepped into canvas
    /// mode goes on zooming.
    pub fn enter_canvas(&mut self) -> ViewTransform {
        self.recognizer.cancel_pan();
        tracing::debug!("canvas entered");
        self.view.reset()
    }

    /// Reacts to a layout mode change.
    ///
    /// Returns the new transform when the change enters canvas mode.
    pub fn on_transition(&mut self, transition: &ModeTransition) -> Option<ViewTransform> {
        self.last_mode = Some(transition.to);
        if transition.enters_canvas() {
            return Some(self.enter_canvas());
        }
        if transition.leaves_canvas() {
            self.recognizer.cancel_pan();
        }
        None
    }

    /// Tracks the host's mode; the first report is taken as is.
    fn observe_mode(&mut self, mode: LayoutMode) {
        let Some(previous) = self.last_mode.replace(mode) else {
            return;
        };
        if previous == mode {
            return;
        }
        if mode == LayoutMode::Canvas {
            self.enter_canvas();
        } else if previous == LayoutMode::Canvas {
            self.recognizer.cancel_pan();
        }
    }

    /// Drops every gesture session and resets the transform.
    pub fn reset(&mut self) -> ViewTransform {
        self.recognizer.reset();
        self.view.reset()
    }

    /// Places `item_sizes` radially in `container` with the configured ratio.
    #[must_use]
    pub fn compute_placements(
        &self,
        item_sizes: &[Size],
        container: Size,
        anchor: Option<usize>,
    ) -> Vec<ItemPlacement> {
        self.placement.place(item_sizes, container, anchor)
    }

    /// Topmost item under `view_point`, a point in container coordinates.
    ///
    /// The point is mapped through the inverse transform before it is tested
    /// against each `placements[i].rect(item_sizes[i])`. Higher layers win;
    /// within a layer the later item wins, as it draws on top.
    #[must_use]
    pub fn item_at(
        &self,
        view_point: Point,
        placements: &[ItemPlacement],
        item_sizes: &[Size],
    ) -> Option<usize> {
        let point = self.view.transform().view_to_content_point(view_point);
        placements
            .iter()
            .zip(item_sizes)
            .enumerate()
            .filter(|(_, (placement, size))| placement.rect(**size).contains(point))
            .max_by_key(|(i, (placement, _))| (placement.layer, *i))
            .map(|(i, _)| i)
    }
}

impl Default for CanvasEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
