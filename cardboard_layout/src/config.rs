// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use cardboard_timing::Millis;

use crate::mode::LayoutMode;

/// Grid densities of the two grid modes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Columns in [`LayoutMode::Compact`].
    pub compact_columns: u32,
    /// Columns in [`LayoutMode::Standard`].
    pub standard_columns: u32,
    /// Gap between cards, in pixels.
    pub card_gap: f64,
    /// Margin below the grid, in pixels.
    pub bottom_margin: f64,
}

impl GridConfig {
    /// Column count for `mode`; `None` in canvas mode.
    #[must_use]
    pub fn columns(&self, mode: LayoutMode) -> Option<u32> {
        match mode {
            LayoutMode::Compact => Some(self.compact_columns),
            LayoutMode::Standard => Some(self.standard_columns),
            LayoutMode::Canvas => None,
        }
    }

    /// Checks that column counts are positive and spacing is non‑negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, columns) in [
            ("compact_columns", self.compact_columns),
            ("standard_columns", self.standard_columns),
        ] {
            if columns == 0 {
                return Err(ConfigError::InvalidValue { field, value: 0.0 });
            }
        }
        non_negative("card_gap", self.card_gap)?;
        non_negative("bottom_margin", self.bottom_margin)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            compact_columns: 2,
            standard_columns: 4,
            card_gap: 12.0,
            bottom_margin: 24.0,
        }
    }
}

/// Viewport widths at which the listing changes behaviour.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Breakpoints {
    /// Viewports narrower than this are forced into compact mode.
    pub compact_below: f64,
    /// Layout controls are hidden on viewports narrower than this.
    pub controls_hidden_below: f64,
}

impl Breakpoints {
    /// Checks that both widths are finite and non‑negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("compact_below", self.compact_below)?;
        non_negative("controls_hidden_below", self.controls_hidden_below)
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            compact_below: 768.0,
            controls_hidden_below: 768.0,
        }
    }
}

/// Durations of layout transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransitionConfig {
    /// Length of the animated switch between modes.
    pub layout_change_ms: Millis,
    /// Length of the card move animation when entering canvas mode.
    pub canvas_card_animation_ms: Millis,
    /// Quiet period after the last resize before modes are re‑evaluated.
    pub resize_debounce_ms: Millis,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            layout_change_ms: 300,
            canvas_card_animation_ms: 500,
            resize_debounce_ms: 250,
        }
    }
}

/// Parameters of the radial canvas arrangement.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlacementConfig {
    /// Circle radius as a fraction of the smaller half‑dimension of the container.
    pub radius_ratio: f64,
}

impl PlacementConfig {
    /// Checks that the radius ratio is finite and non‑negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("radius_ratio", self.radius_ratio)
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self { radius_ratio: 0.8 }
    }
}

/// Everything the layout layer can be tuned with.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Grid densities.
    pub grid: GridConfig,
    /// Responsive breakpoints.
    pub breakpoints: Breakpoints,
    /// Transition durations.
    pub transitions: TransitionConfig,
    /// Canvas arrangement.
    pub placement: PlacementConfig,
}

impl LayoutConfig {
    /// Validates every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;
        self.breakpoints.validate()?;
        self.placement.validate()
    }
}

/// Error returned by the `validate` methods of configuration structs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A field that must be finite and non‑negative (or a positive count) was not.
    InvalidValue {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Pinch thresholds do not satisfy `0 < zoom_out < 1 < zoom_in`.
    ThresholdOrder {
        /// Ratio below which a pinch steps toward compact.
        zoom_out: f64,
        /// Ratio above which a pinch steps toward canvas.
        zoom_in: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { field, value } => {
                write!(f, "invalid value {value} for `{field}`")
            }
            Self::ThresholdOrder { zoom_out, zoom_in } => write!(
                f,
                "pinch thresholds must satisfy 0 < zoom_out < 1 < zoom_in, got {zoom_out} and {zoom_in}"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Rejects negative and non‑finite values.
pub fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { field, value })
    }
}
