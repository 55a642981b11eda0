// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use cardboard_timing::{Millis, TimerQueue};

use crate::config::LayoutConfig;
use crate::mode::{LayoutMode, ModeStep};
use crate::responsive::ResizeDecision;

/// A layout mode change that the host must render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeTransition {
    /// Mode before the change.
    pub from: LayoutMode,
    /// Mode after the change.
    pub to: LayoutMode,
    /// Whether the change should be animated.
    pub animate: bool,
}

impl ModeTransition {
    /// Entering canvas mode: reset the view transform and place the cards.
    #[must_use]
    pub fn enters_canvas(&self) -> bool {
        self.to == LayoutMode::Canvas
    }

    /// Leaving canvas mode: drop the canvas transform and card positions.
    #[must_use]
    pub fn leaves_canvas(&self) -> bool {
        self.from == LayoutMode::Canvas
    }
}

/// Deferred work released by [`ModeController::poll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cleanup {
    /// The animated switch into `mode` is over; transition styles can go.
    ///
    /// Safe to apply more than once, and after further mode changes.
    TransitionStyles {
        /// Mode whose switch animation finished.
        mode: LayoutMode,
    },
    /// Cards have moved to their canvas positions; their per‑card
    /// transitions can go.
    CardTransitions,
}

/// Owns the current [`LayoutMode`].
///
/// This is the only place the mode changes. Gestures, layout buttons and
/// resize handling all go through [`ModeController::set_mode`] or
/// [`ModeController::step`].
#[derive(Clone, Debug)]
pub struct ModeController {
    mode: LayoutMode,
    config: LayoutConfig,
    cleanups: TimerQueue<Cleanup>,
    revision: u64,
}

impl ModeController {
    /// Creates a controller in the default mode.
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self::with_mode(config, LayoutMode::default())
    }

    /// Creates a controller in `mode`.
    #[must_use]
    pub fn with_mode(config: LayoutConfig, mode: LayoutMode) -> Self {
        Self {
            mode,
            config,
            cleanups: TimerQueue::new(),
            revision: 0,
        }
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Grid columns of the current mode; `None` in canvas mode.
    #[must_use]
    pub fn columns(&self) -> Option<u32> {
        self.config.grid.columns(self.mode)
    }

    /// Number of mode changes applied so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Switches to `mode`.
    ///
    /// Returns `None` if the listing is already in `mode`. An animated switch
    /// queues a [`Cleanup::TransitionStyles`] for when the animation ends, and
    /// an animated entry into canvas mode also queues
    /// [`Cleanup::CardTransitions`] after the card move animation.
    pub fn set_mode(
        &mut self,
        now: Millis,
        mode: LayoutMode,
        animate: bool,
    ) -> Option<ModeTransition> {
        if self.mode == mode {
            return None;
        }
        let transition = ModeTransition {
            from: self.mode,
            to: mode,
            animate,
        };
        self.mode = mode;
        self.revision += 1;
        if animate {
            self.cleanups.push(
                now,
                self.config.transitions.layout_change_ms,
                Cleanup::TransitionStyles { mode },
            );
            if transition.enters_canvas() {
                self.cleanups.push(
                    now,
                    self.config.transitions.canvas_card_animation_ms,
                    Cleanup::CardTransitions,
                );
            }
        }
        tracing::debug!(from = %transition.from, to = %transition.to, animate, "layout mode changed");
        Some(transition)
    }

    /// Moves one mode in the direction of `step`, animated.
    ///
    /// Returns `None` at either end of the mode ladder.
    pub fn step(&mut self, now: Millis, step: ModeStep) -> Option<ModeTransition> {
        let target = self.mode.step(step)?;
        self.set_mode(now, target, true)
    }

    /// Applies the mode part of a settled resize, without animation.
    pub fn apply_resize(
        &mut self,
        now: Millis,
        decision: &ResizeDecision,
    ) -> Option<ModeTransition> {
        decision
            .mode
            .and_then(|mode| self.set_mode(now, mode, false))
    }

    /// Releases the cleanups that are due at `now`.
    pub fn poll(&mut self, now: Millis) -> Vec<Cleanup> {
        self.cleanups.drain_due(now)
    }

    /// Earliest pending cleanup deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.cleanups.next_deadline()
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
