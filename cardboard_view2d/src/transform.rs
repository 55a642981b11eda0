// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Uniform scale plus translation applied to a canvas container.
///
/// A content point `p` maps into view space as `scale * (p + translation)`.
/// This is the order of a CSS `scale(s) translate(x, y)` chain, so a renderer
/// can emit the two values as-is.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewTransform {
    /// Uniform zoom factor.
    pub scale: f64,
    /// Translation in content (pre‑scale) units.
    pub translation: Vec2,
}

impl ViewTransform {
    /// Unit scale, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
    };

    /// Creates a transform from its parts.
    #[must_use]
    pub const fn new(scale: f64, translation: Vec2) -> Self {
        Self { scale, translation }
    }

    /// Returns the content → view affine.
    #[must_use]
    pub fn to_affine(self) -> Affine {
        Affine::scale(self.scale) * Affine::translate(self.translation)
    }

    /// Maps a content‑space point into view space.
    #[must_use]
    pub fn content_to_view_point(self, pt: Point) -> Point {
        self.to_affine() * pt
    }

    /// Maps a view‑space point back into content space.
    ///
    /// Used for hit testing pointer positions against item placements.
    #[must_use]
    pub fn view_to_content_point(self, pt: Point) -> Point {
        self.to_affine().inverse() * pt
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Scale range and reset value for a [`crate::CanvasView`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomLimits {
    /// Smallest allowed scale.
    pub min: f64,
    /// Largest allowed scale.
    pub max: f64,
    /// Scale restored by [`crate::CanvasView::reset`].
    pub default: f64,
}

impl ZoomLimits {
    /// Lower bound applied to `min` so that the transform stays invertible.
    pub const MIN_FLOOR: f64 = 1e-3;

    /// Creates normalized limits.
    ///
    /// See [`ZoomLimits::normalized`].
    #[must_use]
    pub fn new(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }.normalized()
    }

    /// Returns a copy with `MIN_FLOOR <= min <= default <= max`.
    ///
    /// Swapped bounds are reordered. Non‑finite values fall back to the
    /// nearest sensible bound.
    #[must_use]
    pub fn normalized(self) -> Self {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        let min = finite_or(lo, Self::MIN_FLOOR).max(Self::MIN_FLOOR);
        let max = finite_or(hi, min).max(min);
        let default = finite_or(self.default, 1.0).clamp(min, max);
        Self { min, max, default }
    }

    /// Clamps `scale` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }

    /// Returns `true` if `scale` lies within `[min, max]`.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        self.min <= scale && scale <= self.max
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 0.5,
            max: 2.0,
            default: 1.0,
        }
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}
