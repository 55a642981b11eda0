// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cardboard_layout::{ConfigError, PlacementConfig, non_negative};
use cardboard_view2d::ZoomLimits;

/// Thresholds and sensitivities of gesture interpretation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// In grid modes, a pinch ratio below this steps toward compact.
    pub zoom_out_threshold: f64,
    /// In grid modes, a pinch ratio above this steps toward canvas.
    pub zoom_in_threshold: f64,
    /// Scale change per unit of wheel `delta_y` in canvas mode.
    pub wheel_sensitivity: f64,
    /// In canvas mode, pinch ratios within this distance of `1.0` are held
    /// back and accumulate until they leave it.
    pub pinch_dead_zone: f64,
}

impl GestureConfig {
    /// Checks `0 < zoom_out < 1 < zoom_in` and non‑negative sensitivities.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (zoom_out, zoom_in) = (self.zoom_out_threshold, self.zoom_in_threshold);
        if !(zoom_out > 0.0 && zoom_out < 1.0 && zoom_in > 1.0 && zoom_in.is_finite()) {
            return Err(ConfigError::ThresholdOrder { zoom_out, zoom_in });
        }
        non_negative("wheel_sensitivity", self.wheel_sensitivity)?;
        non_negative("pinch_dead_zone", self.pinch_dead_zone)
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            zoom_out_threshold: 0.8,
            zoom_in_threshold: 1.2,
            wheel_sensitivity: 0.001,
            pinch_dead_zone: 0.01,
        }
    }
}

/// Configuration of a [`crate::CanvasEngine`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Gesture thresholds.
    pub gesture: GestureConfig,
    /// Canvas scale range.
    pub zoom: ZoomLimits,
    /// Radial arrangement.
    pub placement: PlacementConfig,
}

impl EngineConfig {
    /// Validates every section.
    ///
    /// Zoom limits are normalized rather than rejected, so they always pass.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gesture.validate()?;
        self.placement.validate()
    }
}
