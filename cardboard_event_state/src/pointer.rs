// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active pointer tracking: the ordered set of contacts currently down.
//!
//! Touch and pointer APIs report contacts individually. Gesture recognizers
//! instead reason about the whole set ("are two fingers down, and how far
//! apart are they?"). [`PointerSet`] bridges the two by keeping every active
//! contact in the order it went down.
//!
//! ```
//! use kurbo::Point;
//! use cardboard_event_state::pointer::{PointerId, PointerSet};
//!
//! let mut set = PointerSet::new();
//! set.down(PointerId(1), Point::new(0.0, 0.0));
//! set.down(PointerId(2), Point::new(30.0, 40.0));
//! assert_eq!(set.pair_distance(), Some(50.0));
//!
//! set.up(PointerId(1));
//! assert_eq!(set.len(), 1);
//! assert_eq!(set.pair_distance(), None);
//! ```

use kurbo::Point;
use smallvec::SmallVec;

/// Opaque identifier of one pointer contact, as assigned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// Insertion‑ordered set of active pointer contacts.
#[derive(Clone, Debug, Default)]
pub struct PointerSet {
    pointers: SmallVec<[(PointerId, Point); 4]>,
}

impl PointerSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a contact going down and returns the new contact count.
    ///
    /// A repeated `down` for a tracked id only updates its position.
    pub fn down(&mut self, id: PointerId, pos: Point) -> usize {
        match self.slot_mut(id) {
            Some(slot) => *slot = pos,
            None => self.pointers.push((id, pos)),
        }
        self.pointers.len()
    }

    /// Updates the position of a tracked contact.
    ///
    /// Returns `false` if `id` is not down.
    pub fn moved(&mut self, id: PointerId, pos: Point) -> bool {
        if let Some(slot) = self.slot_mut(id) {
            *slot = pos;
            true
        } else {
            false
        }
    }

    /// Removes a contact. Returns `false` if `id` was not down.
    pub fn up(&mut self, id: PointerId) -> bool {
        let before = self.pointers.len();
        self.pointers.retain(|(pid, _)| *pid != id);
        self.pointers.len() != before
    }

    /// Drops every contact.
    pub fn clear(&mut self) {
        self.pointers.clear();
    }

    /// Number of active contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    /// Returns `true` if no contact is down.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }

    /// Position of a tracked contact.
    #[must_use]
    pub fn position(&self, id: PointerId) -> Option<Point> {
        self.pointers
            .iter()
            .find(|(pid, _)| *pid == id)
            .map(|(_, pos)| *pos)
    }

    /// Position of the oldest active contact.
    #[must_use]
    pub fn first(&self) -> Option<Point> {
        self.pointers.first().map(|(_, pos)| *pos)
    }

    /// Positions of the two oldest active contacts.
    #[must_use]
    pub fn pair(&self) -> Option<(Point, Point)> {
        match self.pointers.as_slice() {
            [(_, a), (_, b), ..] => Some((*a, *b)),
            _ => None,
        }
    }

    /// Euclidean distance between the two oldest active contacts.
    #[must_use]
    pub fn pair_distance(&self) -> Option<f64> {
        self.pair().map(|(a, b)| a.distance(b))
    }

    /// Iterates over active contacts in the order they went down.
    pub fn iter(&self) -> impl Iterator<Item = (PointerId, Point)> + '_ {
        self.pointers.iter().copied()
    }

    fn slot_mut(&mut self, id: PointerId) -> Option<&mut Point> {
        self.pointers
            .iter_mut()
            .find(|(pid, _)| *pid == id)
            .map(|(_, pos)| pos)
    }
}
