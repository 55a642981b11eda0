// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radial arrangement of cards in canvas mode.
//!
//! Cards are spread evenly around a circle centered in the container. One
//! optional *anchor* card (the "load more" tile in a paginated listing) sits
//! at the exact center, above the ring.
//!
//! ```
//! use kurbo::{Point, Size};
//! use cardboard_layout::compute_placements;
//!
//! let sizes = [Size::new(100.0, 60.0); 4];
//! let placed = compute_placements(&sizes, Size::new(1000.0, 800.0), 0.8, None);
//!
//! // First card: angle 0, to the right of the center.
//! assert_eq!(placed[0].origin, Point::new(500.0 + 320.0 - 50.0, 400.0 - 30.0));
//! ```

use alloc::vec::Vec;
use core::f64::consts::TAU;

use kurbo::{Point, Rect, Size, Vec2};

use crate::config::PlacementConfig;

/// Where one card goes on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemPlacement {
    /// Top‑left corner of the card, in container coordinates.
    pub origin: Point,
    /// Angle on the circle, in radians. Zero for the anchor.
    pub angle: f64,
    /// Stacking layer; higher layers draw above lower ones.
    pub layer: u32,
}

impl ItemPlacement {
    /// Layer of cards on the ring.
    pub const RING_LAYER: u32 = 1;
    /// Layer of the anchor card.
    pub const ANCHOR_LAYER: u32 = 2;

    /// Bounding rectangle of a card of `size` at this placement.
    #[must_use]
    pub fn rect(&self, size: Size) -> Rect {
        Rect::from_origin_size(self.origin, size)
    }
}

/// Computes the canvas position of every item.
///
/// `item_sizes[i]` is the rendered size of item `i`; the result has one entry
/// per item, in the same order. With `N` ring items (every item except the
/// anchor), ring item `k` sits at angle `2π·k/N` on a circle of radius
/// `min(width, height) / 2 * radius_ratio`. An `anchor` index outside
/// `item_sizes` is ignored.
///
/// Negative or non‑finite dimensions are treated as zero, so a degenerate
/// container stacks every item on its center.
#[must_use]
pub fn compute_placements(
    item_sizes: &[Size],
    container: Size,
    radius_ratio: f64,
    anchor: Option<usize>,
) -> Vec<ItemPlacement> {
    let center = Point::new(
        non_negative_or_zero(container.width) / 2.0,
        non_negative_or_zero(container.height) / 2.0,
    );
    let radius = center.x.min(center.y) * non_negative_or_zero(radius_ratio);

    let anchor = anchor.filter(|&a| a < item_sizes.len());
    let ring_count = item_sizes.len() - usize::from(anchor.is_some());

    let mut ring_index = 0_usize;
    item_sizes
        .iter()
        .enumerate()
        .map(|(i, size)| {
            let half = Vec2::new(
                non_negative_or_zero(size.width) / 2.0,
                non_negative_or_zero(size.height) / 2.0,
            );
            if anchor == Some(i) {
                return ItemPlacement {
                    origin: center - half,
                    angle: 0.0,
                    layer: ItemPlacement::ANCHOR_LAYER,
                };
            }
            let angle = ring_index as f64 / ring_count as f64 * TAU;
            ring_index += 1;
            ItemPlacement {
                origin: center + Vec2::from_angle(angle) * radius - half,
                angle,
                layer: ItemPlacement::RING_LAYER,
            }
        })
        .collect()
}

impl PlacementConfig {
    /// [`compute_placements`] with this configuration's radius ratio.
    #[must_use]
    pub fn place(
        &self,
        item_sizes: &[Size],
        container: Size,
        anchor: Option<usize>,
    ) -> Vec<ItemPlacement> {
        compute_placements(item_sizes, container, self.radius_ratio, anchor)
    }
}

/// Last computed placements, recomputed only when their inputs change.
///
/// Hosts call [`PlacementCache::invalidate`] on every entry into canvas mode
/// and [`PlacementCache::update`] whenever items or the container may have
/// changed.
#[derive(Clone, Debug, Default)]
pub struct PlacementCache {
    inputs: Option<(Vec<Size>, Size, Option<usize>)>,
    placements: Vec<ItemPlacement>,
}

impl PlacementCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces the next [`PlacementCache::update`] to recompute.
    pub fn invalidate(&mut self) {
        self.inputs = None;
    }

    /// Recomputes if any input differs from the last call.
    ///
    /// Returns `true` if the placements were recomputed.
    pub fn update(
        &mut self,
        config: &PlacementConfig,
        item_sizes: &[Size],
        container: Size,
        anchor: Option<usize>,
    ) -> bool {
        let unchanged = self.inputs.as_ref().is_some_and(|(sizes, c, a)| {
            sizes.as_slice() == item_sizes && *c == container && *a == anchor
        });
        if unchanged {
            return false;
        }
        self.placements = config.place(item_sizes, container, anchor);
        self.inputs = Some((item_sizes.to_vec(), container, anchor));
        true
    }

    /// Placements from the last recompute.
    #[must_use]
    pub fn placements(&self) -> &[ItemPlacement] {
        &self.placements
    }
}

fn non_negative_or_zero(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use core::f64::consts::TAU;

    use kurbo::{Point, Size};

    use super::*;

    const CARD: Size = Size::new(200.0, 120.0);

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn first_item_sits_at_angle_zero() {
        let sizes = [CARD; 5];
        let placed = compute_placements(&sizes, Size::new(1000.0, 800.0), 0.8, None);
        assert_eq!(placed.len(), 5);

        let p0 = placed[0];
        assert_eq!(p0.angle, 0.0);
        // radius = min(500, 400) * 0.8 = 320
        assert!(close(p0.origin.x, 500.0 + 320.0 - 100.0));
        assert!(close(p0.origin.y, 400.0 - 60.0));
        assert_eq!(p0.layer, ItemPlacement::RING_LAYER);
    }

    #[test]
    fn adjacent_items_differ_by_equal_angle() {
        let sizes = vec![CARD; 7];
        let placed = compute_placements(&sizes, Size::new(900.0, 900.0), 0.8, None);
        for pair in placed.windows(2) {
            assert!(close(pair[1].angle - pair[0].angle, TAU / 7.0));
        }
    }

    #[test]
    fn items_lie_on_the_circle() {
        let sizes = [Size::new(40.0, 20.0); 6];
        let container = Size::new(600.0, 400.0);
        let placed = compute_placements(&sizes, container, 0.5, None);
        let center = Point::new(300.0, 200.0);
        for p in placed {
            let card_center = p.rect(Size::new(40.0, 20.0)).center();
            assert!(close(card_center.distance(center), 100.0));
        }
    }

    #[test]
    fn anchor_is_centered_above_the_ring() {
        let mut sizes = vec![CARD; 4];
        sizes.push(Size::new(80.0, 80.0));
        let placed = compute_placements(&sizes, Size::new(1000.0, 800.0), 0.8, Some(4));

        let anchor = placed[4];
        assert_eq!(anchor.origin, Point::new(460.0, 360.0));
        assert_eq!(anchor.layer, ItemPlacement::ANCHOR_LAYER);

        // The ring is spread over the remaining four items only.
        assert!(close(placed[1].angle, TAU / 4.0));
        assert!(close(placed[3].angle, 3.0 * TAU / 4.0));
    }

    #[test]
    fn anchor_in_the_middle_of_the_list_keeps_ring_order() {
        let sizes = [CARD; 4];
        let placed = compute_placements(&sizes, Size::new(800.0, 800.0), 0.8, Some(1));
        assert_eq!(placed[1].layer, ItemPlacement::ANCHOR_LAYER);
        assert_eq!(placed[0].angle, 0.0);
        assert!(close(placed[2].angle, TAU / 3.0));
        assert!(close(placed[3].angle, 2.0 * TAU / 3.0));
    }

    #[test]
    fn out_of_range_anchor_is_ignored() {
        let sizes = [CARD; 3];
        let placed = compute_placements(&sizes, Size::new(800.0, 800.0), 0.8, Some(3));
        assert!(placed.iter().all(|p| p.layer == ItemPlacement::RING_LAYER));
    }

    #[test]
    fn zero_sized_container_stacks_items_on_center() {
        let sizes = [CARD; 3];
        for container in [Size::ZERO, Size::new(-50.0, f64::NAN)] {
            let placed = compute_placements(&sizes, container, 0.8, None);
            for p in placed {
                assert!(close(p.origin.x, -100.0));
                assert!(close(p.origin.y, -60.0));
            }
        }
    }

    #[test]
    fn empty_input_and_lone_anchor() {
        assert!(compute_placements(&[], Size::new(100.0, 100.0), 0.8, None).is_empty());

        let placed = compute_placements(&[CARD], Size::new(1000.0, 800.0), 0.8, Some(0));
        assert_eq!(placed[0].origin, Point::new(400.0, 340.0));
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let sizes = [CARD, Size::new(50.0, 70.0), CARD];
        let a = compute_placements(&sizes, Size::new(1280.0, 720.0), 0.8, Some(2));
        let b = compute_placements(&sizes, Size::new(1280.0, 720.0), 0.8, Some(2));
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.origin.x.to_bits(), y.origin.x.to_bits());
            assert_eq!(x.origin.y.to_bits(), y.origin.y.to_bits());
            assert_eq!(x.angle.to_bits(), y.angle.to_bits());
        }
    }

    #[test]
    fn cache_recomputes_only_on_change() {
        let config = PlacementConfig::default();
        let mut cache = PlacementCache::new();
        let container = Size::new(1000.0, 800.0);

        assert!(cache.update(&config, &[CARD; 3], container, None));
        assert!(!cache.update(&config, &[CARD; 3], container, None));
        assert_eq!(cache.placements().len(), 3);

        assert!(cache.update(&config, &[CARD; 4], container, None));
        assert_eq!(cache.placements().len(), 4);

        cache.invalidate();
        assert!(cache.update(&config, &[CARD; 4], container, None));
    }
}
