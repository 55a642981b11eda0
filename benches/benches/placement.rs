// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cardboard_layout::{PlacementCache, PlacementConfig, compute_placements};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn card_sizes(n: usize, seed: u64) -> Vec<Size> {
    let mut rng = Lcg(seed);
    (0..n)
        .map(|_| Size::new(120.0 + 120.0 * rng.next_f64(), 80.0 + 80.0 * rng.next_f64()))
        .collect()
}

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("cardboard_layout");
    let container = Size::new(1920.0, 1080.0);

    for &n in &[12_usize, 60, 600] {
        let sizes = card_sizes(n, 0xCA2D_0000_0000_0001);
        group.bench_function(format!("compute_placements(n={n})"), |b| {
            b.iter(|| {
                black_box(compute_placements(
                    black_box(&sizes),
                    container,
                    0.8,
                    Some(n - 1),
                ))
            });
        });
    }

    // Unchanged inputs hit the cache.
    let sizes = card_sizes(60, 0xCA2D_0000_0000_0002);
    let config = PlacementConfig::default();
    let mut cache = PlacementCache::new();
    cache.update(&config, &sizes, container, None);
    group.bench_function("placement_cache_hit(n=60)", |b| {
        b.iter(|| black_box(cache.update(&config, black_box(&sizes), container, None)));
    });

    group.finish();
}

criterion_group!(benches, bench_placement);
criterion_main!(benches);
