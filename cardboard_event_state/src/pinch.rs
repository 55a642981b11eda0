// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch session: compare the live distance of two contacts against a reference.
//!
//! ## Usage
//!
//! 1) Call [`PinchState::start`] when the second contact goes down.
//! 2) On each move, call [`PinchState::sample`] to get the distance ratio
//!    relative to the reference.
//! 3) Call [`PinchState::rearm`] with the sampled distance once the ratio has
//!    been acted upon, so the next sample is measured from there.
//! 4) Call [`PinchState::end`] when fewer than two contacts remain.
//!
//! ```
//! use kurbo::Point;
//! use cardboard_event_state::pinch::PinchState;
//!
//! let mut pinch = PinchState::default();
//! pinch.start(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
//!
//! let sample = pinch.sample(Point::new(0.0, 0.0), Point::new(130.0, 0.0)).unwrap();
//! assert!((sample.ratio - 1.3).abs() < 1e-12);
//!
//! pinch.rearm(sample.distance);
//! assert_eq!(pinch.reference_distance(), Some(130.0));
//! ```

use kurbo::Point;

/// Distance ratio measured by [`PinchState::sample`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSample {
    /// Current contact distance divided by the reference distance.
    pub ratio: f64,
    /// Current contact distance.
    pub distance: f64,
}

/// Reference distance of an in‑progress two‑contact gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchState {
    reference_distance: Option<f64>,
}

impl PinchState {
    /// Starts a session using the distance between `a` and `b` as reference.
    pub fn start(&mut self, a: Point, b: Point) {
        self.reference_distance = Some(a.distance(b));
    }

    /// Measures the contacts against the reference distance.
    ///
    /// Returns `None` when no session is active, or when the reference
    /// distance is zero (coincident contacts) and no ratio exists.
    #[must_use]
    pub fn sample(&self, a: Point, b: Point) -> Option<PinchSample> {
        let reference = self.reference_distance?;
        if !(reference > 0.0 && reference.is_finite()) {
            return None;
        }
        let distance = a.distance(b);
        Some(PinchSample {
            ratio: distance / reference,
            distance,
        })
    }

    /// Replaces the reference distance of the active session.
    ///
    /// Does nothing when no session is active.
    pub fn rearm(&mut self, distance: f64) {
        if self.reference_distance.is_some() {
            self.reference_distance = Some(distance);
        }
    }

    /// Discards the session.
    pub fn end(&mut self) {
        self.reference_distance = None;
    }

    /// Returns `true` while a session is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.reference_distance.is_some()
    }

    /// Current reference distance, if a session is active.
    #[must_use]
    pub fn reference_distance(&self) -> Option<f64> {
        self.reference_distance
    }
}
