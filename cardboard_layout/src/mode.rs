// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

/// How the card listing is laid out.
///
/// Modes are ordered from densest to freest: `Compact < Standard < Canvas`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LayoutMode {
    /// Narrow grid with few columns.
    Compact,
    /// Regular grid.
    #[default]
    Standard,
    /// Freeform pannable, zoomable surface with cards on a circle.
    Canvas,
}

impl LayoutMode {
    /// Every mode, densest first.
    pub const ALL: [Self; 3] = [Self::Compact, Self::Standard, Self::Canvas];

    /// Lowercase name, as used in class names and configuration.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Standard => "standard",
            Self::Canvas => "canvas",
        }
    }

    /// Returns `true` for the two grid modes.
    #[must_use]
    pub const fn is_grid(self) -> bool {
        !matches!(self, Self::Canvas)
    }

    /// The neighbouring mode in the direction of `step`, if there is one.
    ///
    /// ```
    /// use cardboard_layout::{LayoutMode, ModeStep};
    ///
    /// assert_eq!(LayoutMode::Standard.step(ModeStep::TowardCompact), Some(LayoutMode::Compact));
    /// assert_eq!(LayoutMode::Standard.step(ModeStep::TowardCanvas), Some(LayoutMode::Canvas));
    /// assert_eq!(LayoutMode::Compact.step(ModeStep::TowardCompact), None);
    /// ```
    #[must_use]
    pub const fn step(self, step: ModeStep) -> Option<Self> {
        match (self, step) {
            (Self::Standard, ModeStep::TowardCompact) => Some(Self::Compact),
            (Self::Canvas, ModeStep::TowardCompact) => Some(Self::Standard),
            (Self::Compact, ModeStep::TowardCanvas) => Some(Self::Standard),
            (Self::Standard, ModeStep::TowardCanvas) => Some(Self::Canvas),
            (Self::Compact, ModeStep::TowardCompact) | (Self::Canvas, ModeStep::TowardCanvas) => {
                None
            }
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutMode {
    type Err = ParseLayoutModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(ParseLayoutModeError)
    }
}

/// Direction of a one‑step layout mode change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModeStep {
    /// Toward denser layouts: Canvas → Standard → Compact.
    TowardCompact,
    /// Toward freer layouts: Compact → Standard → Canvas.
    TowardCanvas,
}

/// Error returned when a string names no [`LayoutMode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseLayoutModeError;

impl fmt::Display for ParseLayoutModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid layout mode, expected one of: compact, standard, canvas")
    }
}

impl core::error::Error for ParseLayoutModeError {}
