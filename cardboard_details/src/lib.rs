// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cardboard_details --heading-base-level=0

//! Cardboard Details: which card currently shows its details panel.
//!
//! Clicking a card opens its details; clicking it again closes them. While a
//! panel animates in or out, further clicks are ignored so two panels never
//! overlap. An open panel closes by itself after a quiet period.
//!
//! [`DetailsState`] tracks this for any card key type `K` (an index, an
//! event id, a scene node handle) and reports each change as a
//! [`DetailsChange`]. It owns no panel content; the host renders title and
//! copy text for the card it is told to show.
//!
//! ## Example
//!
//! ```rust
//! use cardboard_details::{DetailsChange, DetailsConfig, DetailsSide, DetailsState, HideReason};
//!
//! let mut details = DetailsState::new(DetailsConfig::default());
//!
//! assert_eq!(
//!     details.click(0, "concert", 0),
//!     DetailsChange::Shown { card: "concert", side: DetailsSide::After }
//! );
//!
//! // Clicks during the appear animation are dropped.
//! assert_eq!(details.click(100, "concert", 0), DetailsChange::Ignored);
//!
//! // Clicking the open card again closes it.
//! assert_eq!(
//!     details.click(400, "concert", 0),
//!     DetailsChange::Hidden { card: "concert", reason: HideReason::Toggled }
//! );
//! ```
//!
//! ## Switching cards
//!
//! With [`DetailsConfig::require_two_clicks_to_switch`] set (the default),
//! clicking a second card while one is open only closes the open one; the
//! next click opens the new card. Without it, the panel switches in one
//! click and reports [`DetailsChange::Switched`].
//!
//! This crate is `no_std`.

#![no_std]

use cardboard_timing::{Debouncer, Millis};

/// Which neighbour hosts the details panel of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DetailsSide {
    /// The following card (even positions).
    After,
    /// The preceding card (odd positions).
    Before,
}

impl DetailsSide {
    /// Side used for the card at `index` in listing order.
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        if index % 2 == 0 { Self::After } else { Self::Before }
    }
}

/// Why a panel closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HideReason {
    /// The open card was clicked again.
    Toggled,
    /// Another card was clicked in two‑click mode.
    Switching,
    /// The host dismissed it (close button, click outside).
    Dismissed,
    /// The auto‑hide delay elapsed.
    AutoHide,
}

/// Change to render after an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailsChange<K> {
    /// Nothing changed; the click arrived during a transition.
    Ignored,
    /// `card` opened its details on `side`.
    Shown {
        /// Card that opened.
        card: K,
        /// Neighbour hosting the panel.
        side: DetailsSide,
    },
    /// `card` closed its details.
    Hidden {
        /// Card that closed.
        card: K,
        /// Why it closed.
        reason: HideReason,
    },
    /// The panel moved from `from` to `to` in a single click.
    Switched {
        /// Card that closed.
        from: K,
        /// Card that opened.
        to: K,
        /// Neighbour hosting the new panel.
        side: DetailsSide,
    },
}

/// Timing and switching behaviour of details panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DetailsConfig {
    /// Minimum pause between closing one card and opening another.
    pub toggle_delay_ms: Millis,
    /// Length of the appear animation.
    pub appear_ms: Millis,
    /// Length of the disappear animation.
    pub hide_ms: Millis,
    /// Whether switching cards takes a close click and an open click.
    pub require_two_clicks_to_switch: bool,
    /// Quiet period after which an open panel closes by itself.
    pub auto_hide_ms: Millis,
}

impl Default for DetailsConfig {
    fn default() -> Self {
        Self {
            toggle_delay_ms: 300,
            appear_ms: 300,
            hide_ms: 300,
            require_two_clicks_to_switch: true,
            auto_hide_ms: 60_000,
        }
    }
}

/// The card whose details are open, plus transition and auto‑hide timers.
#[derive(Clone, Debug)]
pub struct DetailsState<K> {
    config: DetailsConfig,
    active: Option<K>,
    locked_until: Option<Millis>,
    auto_hide: Debouncer<()>,
}

impl<K: Clone + PartialEq> DetailsState<K> {
    /// Creates a state with no open panel.
    #[must_use]
    pub fn new(config: DetailsConfig) -> Self {
        Self {
            config,
            active: None,
            locked_until: None,
            auto_hide: Debouncer::new(config.auto_hide_ms),
        }
    }

    /// Card whose details are open.
    #[must_use]
    pub fn active(&self) -> Option<&K> {
        self.active.as_ref()
    }

    /// Returns `true` while a panel animation blocks clicks.
    #[must_use]
    pub fn is_transitioning(&self, now: Millis) -> bool {
        self.locked_until.is_some_and(|until| now < until)
    }

    /// Handles a click on `card`, which sits at `index` in listing order.
    pub fn click(&mut self, now: Millis, card: K, index: usize) -> DetailsChange<K> {
        if self.is_transitioning(now) {
            return DetailsChange::Ignored;
        }
        self.auto_hide.cancel();

        let side = DetailsSide::for_index(index);
        let change = match self.active.take() {
            Some(open) if open == card => {
                self.lock(now, self.config.hide_ms);
                DetailsChange::Hidden {
                    card: open,
                    reason: HideReason::Toggled,
                }
            }
            Some(open) if self.config.require_two_clicks_to_switch => {
                self.lock(now, self.config.hide_ms.max(self.config.toggle_delay_ms));
                DetailsChange::Hidden {
                    card: open,
                    reason: HideReason::Switching,
                }
            }
            Some(open) => {
                self.show(now, card.clone());
                DetailsChange::Switched {
                    from: open,
                    to: card,
                    side,
                }
            }
            None => {
                self.show(now, card.clone());
                DetailsChange::Shown { card, side }
            }
        };
        tracing::debug!(index, ?side, "card clicked");
        change
    }

    /// Closes the open panel, if any.
    pub fn hide(&mut self, now: Millis) -> Option<DetailsChange<K>> {
        self.close(now, HideReason::Dismissed)
    }

    /// Releases finished transitions and fires the auto‑hide.
    pub fn poll(&mut self, now: Millis) -> Option<DetailsChange<K>> {
        if self.locked_until.is_some_and(|until| now >= until) {
            self.locked_until = None;
        }
        self.auto_hide.poll(now)?;
        self.close(now, HideReason::AutoHide)
    }

    /// Earliest time at which [`DetailsState::poll`] has something to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        match (self.locked_until, self.auto_hide.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn show(&mut self, now: Millis, card: K) {
        self.active = Some(card);
        self.lock(now, self.config.appear_ms);
        self.auto_hide.schedule(now, ());
    }

    fn close(&mut self, now: Millis, reason: HideReason) -> Option<DetailsChange<K>> {
        let card = self.active.take()?;
        self.auto_hide.cancel();
        self.lock(now, self.config.hide_ms);
        tracing::debug!(?reason, "details hidden");
        Some(DetailsChange::Hidden { card, reason })
    }

    fn lock(&mut self, now: Millis, duration: Millis) {
        self.locked_until = Some(now.saturating_add(duration));
    }
}

impl<K: Clone + PartialEq> Default for DetailsState<K> {
    fn default() -> Self {
        Self::new(DetailsConfig::default())
    }
}
