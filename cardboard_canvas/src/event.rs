// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use cardboard_event_state::pointer::PointerId;
use cardboard_layout::{LayoutMode, ModeStep};

/// Phase of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// A contact went down (touch start, mouse button press).
    Down,
    /// A contact moved. Moves of pointers that are not down are ignored.
    Move,
    /// A contact lifted.
    Up,
    /// The platform aborted the contact.
    Cancel,
}

/// One pointer or touch event, in container coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Contact the event is about.
    pub pointer: PointerId,
    /// Event phase.
    pub phase: PointerPhase,
    /// Contact position.
    pub position: Point,
    /// Whether a `Down` landed on a card. Cards take clicks, not pans.
    pub over_item: bool,
}

impl PointerEvent {
    /// A `Down` event over empty canvas.
    #[must_use]
    pub fn down(pointer: u64, position: impl Into<Point>) -> Self {
        Self::new(pointer, PointerPhase::Down, position.into())
    }

    /// A `Move` event.
    #[must_use]
    pub fn moved(pointer: u64, position: impl Into<Point>) -> Self {
        Self::new(pointer, PointerPhase::Move, position.into())
    }

    /// An `Up` event.
    #[must_use]
    pub fn up(pointer: u64, position: impl Into<Point>) -> Self {
        Self::new(pointer, PointerPhase::Up, position.into())
    }

    /// A `Cancel` event.
    #[must_use]
    pub fn cancel(pointer: u64) -> Self {
        Self::new(pointer, PointerPhase::Cancel, Point::ZERO)
    }

    /// Marks the event as landing on a card.
    #[must_use]
    pub fn over_item(mut self, over_item: bool) -> Self {
        self.over_item = over_item;
        self
    }

    fn new(pointer: u64, phase: PointerPhase, position: Point) -> Self {
        Self {
            pointer: PointerId(pointer),
            phase,
            position,
            over_item: false,
        }
    }
}

/// A wheel or trackpad scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Vertical scroll amount in pixels; negative scrolls up and zooms in.
    pub delta_y: f64,
}

impl WheelEvent {
    /// Creates a wheel event.
    #[must_use]
    pub const fn new(delta_y: f64) -> Self {
        Self { delta_y }
    }
}

/// A discrete layout mode change a gesture asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ModeRequest {
    /// Mode the gesture was interpreted in.
    pub from: LayoutMode,
    /// Neighbouring mode in the gesture's direction.
    pub to: LayoutMode,
    /// Gesture direction.
    pub step: ModeStep,
}

/// What an input event amounts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    /// The canvas scale changes by `factor`.
    ///
    /// Pinches report their distance ratio; wheel input reports the ratio
    /// actually applied after clamping.
    Zoom {
        /// Multiplicative scale change.
        factor: f64,
    },
    /// The canvas translation changes by `delta`, in content units.
    Pan {
        /// Translation change.
        delta: Vec2,
    },
    /// The listing should change layout mode. Advisory only.
    ModeSwitchRequest(ModeRequest),
    /// Nothing to do.
    NoOp,
}

impl Effect {
    /// Returns `true` for [`Effect::NoOp`].
    #[must_use]
    pub fn is_no_op(&self) -> bool {
        matches!(self, Self::NoOp)
    }
}
