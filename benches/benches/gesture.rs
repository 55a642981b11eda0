// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cardboard_canvas::{CanvasEngine, LayoutMode, PointerEvent, WheelEvent};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

/// A two‑finger pinch breathing in and out over `frames` move events.
fn pinch_frames(frames: usize) -> Vec<PointerEvent> {
    let mut events = vec![
        PointerEvent::down(0, (400.0, 300.0)),
        PointerEvent::down(1, (500.0, 300.0)),
    ];
    for i in 0..frames {
        let offset = 100.0 + 60.0 * ((i % 40) as f64 / 40.0);
        events.push(PointerEvent::moved(1, (400.0 + offset, 300.0)));
    }
    events.push(PointerEvent::up(1, (500.0, 300.0)));
    events.push(PointerEvent::up(0, (400.0, 300.0)));
    events
}

fn pan_frames(frames: usize) -> Vec<PointerEvent> {
    let mut events = vec![PointerEvent::down(0, (0.0, 0.0))];
    for i in 0..frames {
        let t = i as f64;
        events.push(PointerEvent::moved(0, (t * 3.0, t * 2.0)));
    }
    events.push(PointerEvent::up(0, (0.0, 0.0)));
    events
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("cardboard_canvas");

    for (name, mode) in [("canvas", LayoutMode::Canvas), ("standard", LayoutMode::Standard)] {
        let events = pinch_frames(1_000);
        group.bench_function(format!("pinch_1000_frames({name})"), |b| {
            b.iter_batched(
                CanvasEngine::default,
                |mut engine| {
                    let mut mode = mode;
                    for event in &events {
                        black_box(engine.on_pointer_event(&mut mode, event));
                    }
                    engine
                },
                BatchSize::SmallInput,
            );
        });
    }

    let events = pan_frames(1_000);
    group.bench_function("pan_1000_frames", |b| {
        b.iter_batched(
            CanvasEngine::default,
            |mut engine| {
                let mut mode = LayoutMode::Canvas;
                for event in &events {
                    black_box(engine.on_pointer_event(&mut mode, event));
                }
                engine
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("wheel_1000_ticks", |b| {
        b.iter_batched(
            CanvasEngine::default,
            |mut engine| {
                for i in 0..1_000 {
                    let delta = if i % 2 == 0 { -120.0 } else { 100.0 };
                    black_box(engine.on_wheel_event(&LayoutMode::Canvas, &WheelEvent::new(delta)));
                }
                engine
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_gestures);
criterion_main!(benches);
