// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::transform::{ViewTransform, ZoomLimits};

/// Owns the [`ViewTransform`] of one canvas container.
///
/// Every mutation returns the resulting transform so callers can hand it
/// straight to a renderer. Scale is always clamped into the configured
/// [`ZoomLimits`]; translation is never clamped, so content may be panned
/// arbitrarily far off screen.
#[derive(Clone, Debug)]
pub struct CanvasView {
    transform: ViewTransform,
    limits: ZoomLimits,
}

impl CanvasView {
    /// Creates a view at the default scale with zero translation.
    #[must_use]
    pub fn new(limits: ZoomLimits) -> Self {
        let limits = limits.normalized();
        Self {
            transform: ViewTransform::new(limits.default, Vec2::ZERO),
            limits,
        }
    }

    /// Returns a snapshot of the current transform.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// Returns the current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    /// Returns the current translation.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.transform.translation
    }

    /// Returns the active zoom limits.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Replaces the zoom limits and re‑clamps the current scale.
    pub fn set_limits(&mut self, limits: ZoomLimits) {
        self.limits = limits.normalized();
        self.transform.scale = self.limits.clamp(self.transform.scale);
    }

    /// Sets the scale, clamped into the zoom limits.
    ///
    /// Non‑finite input leaves the transform unchanged.
    pub fn set_scale(&mut self, scale: f64) -> ViewTransform {
        if scale.is_finite() {
            self.transform.scale = self.limits.clamp(scale);
        }
        self.transform
    }

    /// Multiplies the scale by `factor`.
    ///
    /// Factors that are not strictly positive and finite are ignored.
    pub fn zoom_by(&mut self, factor: f64) -> ViewTransform {
        if factor > 0.0 && factor.is_finite() {
            self.set_scale(self.transform.scale * factor)
        } else {
            self.transform
        }
    }

    /// Adds `delta` to the scale.
    pub fn zoom_by_delta(&mut self, delta: f64) -> ViewTransform {
        self.set_scale(self.transform.scale + delta)
    }

    /// Adds `delta` to the translation.
    ///
    /// The delta is in content units; callers divide pointer motion by the
    /// scale before calling this.
    pub fn translate_by(&mut self, delta: Vec2) -> ViewTransform {
        if delta.is_finite() {
            self.transform.translation += delta;
        }
        self.transform
    }

    /// Replaces the translation.
    pub fn set_translation(&mut self, translation: Vec2) -> ViewTransform {
        if translation.is_finite() {
            self.transform.translation = translation;
        }
        self.transform
    }

    /// Restores the default scale and zero translation.
    pub fn reset(&mut self) -> ViewTransform {
        self.transform = ViewTransform::new(self.limits.default, Vec2::ZERO);
        self.transform
    }
}

impl Default for CanvasView {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}
