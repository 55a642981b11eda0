// Copyright 2025 the Cardboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `cardboard_canvas` crate.
//!
//! These drive a [`CanvasEngine`] the way a host does: through a
//! [`ModeHost`], one event at a time.

use kurbo::{Point, Size, Vec2};

use cardboard_canvas::{
    CanvasEngine, ControllerHost, Effect, EngineConfig, GestureConfig, GesturePhase, ItemPlacement,
    LayoutMode, ModeHost, ModeRequest, ModeStep, PointerEvent, WheelEvent, ZoomLimits,
};
use cardboard_layout::{LayoutConfig, ModeController};

/// Records requests without applying them.
#[derive(Debug)]
struct RecordingHost {
    mode: LayoutMode,
    requests: Vec<(LayoutMode, ModeStep)>,
}

impl RecordingHost {
    fn new(mode: LayoutMode) -> Self {
        Self {
            mode,
            requests: Vec::new(),
        }
    }
}

impl ModeHost for RecordingHost {
    fn layout_mode(&self) -> LayoutMode {
        self.mode
    }

    fn request_mode(&mut self, mode: LayoutMode, step: ModeStep) {
        self.requests.push((mode, step));
    }
}

/// Puts two fingers down `distance` apart on a horizontal line.
fn two_fingers(engine: &mut CanvasEngine, host: &mut impl ModeHost, distance: f64) {
    engine.on_pointer_event(host, &PointerEvent::down(0, (200.0, 300.0)));
    engine.on_pointer_event(host, &PointerEvent::down(1, (200.0 + distance, 300.0)));
}

fn spread_to(engine: &mut CanvasEngine, host: &mut impl ModeHost, distance: f64) -> Effect {
    engine.on_pointer_event(host, &PointerEvent::moved(1, (200.0 + distance, 300.0)))
}

#[test]
fn pinch_in_on_standard_requests_compact() {
    let mut engine = CanvasEngine::default();
    let mut host = RecordingHost::new(LayoutMode::Standard);
    two_fingers(&mut engine, &mut host, 100.0);

    let effect = spread_to(&mut engine, &mut host, 70.0);
    assert_eq!(
        effect,
        Effect::ModeSwitchRequest(ModeRequest {
            from: LayoutMode::Standard,
            to: LayoutMode::Compact,
            step: ModeStep::TowardCompact,
        })
    );
    assert_eq!(
        host.requests,
        [(LayoutMode::Compact, ModeStep::TowardCompact)]
    );
    // Requests are advisory: the host kept its mode.
    assert_eq!(host.mode, LayoutMode::Standard);
}

#[test]
fn pinch_out_on_canvas_zooms() {
    let mut engine = CanvasEngine::default();
    let mut host = RecordingHost::new(LayoutMode::Canvas);
    two_fingers(&mut engine, &mut host, 100.0);

    assert_eq!(
        spread_to(&mut engine, &mut host, 130.0),
        Effect::Zoom { factor: 1.3 }
    );
    assert!((engine.transform().scale - 1.3).abs() < 1e-12);
    assert!(host.requests.is_empty());
}

#[test]
fn wheel_at_max_scale_stays_put() {
    let mut engine = CanvasEngine::default();
    engine.view_mut().set_scale(2.0);

    let effect = engine.on_wheel_event(&LayoutMode::Canvas, &WheelEvent::new(-100.0));
    assert_eq!(effect, Effect::NoOp);
    assert_eq!(engine.transform().scale, 2.0);
}

#[test]
fn wheel_reports_the_applied_ratio() {
    let mut engine = CanvasEngine::default();
    engine.view_mut().set_scale(1.95);

    let Effect::Zoom { factor } =
        engine.on_wheel_event(&LayoutMode::Canvas, &WheelEvent::new(-100.0))
    else {
        panic!("expected a zoom");
    };
    assert_eq!(engine.transform().scale, 2.0);
    assert!((factor - 2.0 / 1.95).abs() < 1e-12);

    let effect = engine.on_wheel_event(&LayoutMode::Canvas, &WheelEvent::new(300.0));
    assert!(matches!(effect, Effect::Zoom { factor } if factor < 1.0));
    assert!((engine.transform().scale - 1.7).abs() < 1e-12);
}

#[test]
fn wheel_outside_canvas_is_ignored() {
    let mut engine = CanvasEngine::default();
    for mode in [LayoutMode::Compact, LayoutMode::Standard] {
        assert_eq!(
            engine.on_wheel_event(&mode, &WheelEvent::new(-500.0)),
            Effect::NoOp
        );
    }
    assert_eq!(engine.transform().scale, 1.0);
}

#[test]
fn placements_match_the_ring_formula() {
    let engine = CanvasEngine::default();
    let size = Size::new(120.0, 80.0);
    let placements = engine.compute_placements(&[size; 5], Size::new(1000.0, 800.0), None);

    // radius = min(500, 400) * 0.8
    assert_eq!(
        placements[0].origin,
        Point::new(500.0 + 320.0 - 60.0, 400.0 - 40.0)
    );
    for pair in placements.windows(2) {
        let step = pair[1].angle - pair[0].angle;
        assert!((step - core::f64::consts::TAU / 5.0).abs() < 1e-12);
    }
    assert!(
        placements
            .iter()
            .all(|p| p.layer == ItemPlacement::RING_LAYER)
    );
}

#[test]
fn coincident_fingers_do_not_panic() {
    let mut engine = CanvasEngine::default();
    let mut host = RecordingHost::new(LayoutMode::Canvas);
    two_fingers(&mut engine, &mut host, 0.0);

    assert_eq!(spread_to(&mut engine, &mut host, 0.0), Effect::NoOp);
    assert_eq!(spread_to(&mut engine, &mut host, 50.0), Effect::NoOp);
    assert_eq!(engine.transform().scale, 1.0);

    // The pinch measures from the first non‑degenerate frame.
    assert_eq!(
        spread_to(&mut engine, &mut host, 75.0),
        Effect::Zoom { factor: 1.5 }
    );
}

#[test]
fn incremental_pinch_equals_one_step() {
    let mut stepped = CanvasEngine::default();
    let mut host = RecordingHost::new(LayoutMode::Canvas);
    two_fingers(&mut stepped, &mut host, 100.0);
    spread_to(&mut stepped, &mut host, 120.0);
    spread_to(&mut stepped, &mut host, 150.0);

    let mut direct = CanvasEngine::default();
    two_fingers(&mut direct, &mut host, 100.0);
    spread_to(&mut direct, &mut host, 150.0);

    assert!((stepped.transform().scale - direct.transform().scale).abs() < 1e-12);
    assert!((direct.transform().scale - 1.5).abs() < 1e-12);
}

#[test]
fn pan_follows_the_pointer_in_content_units() {
    let config = EngineConfig {
        zoom: ZoomLimits::new(0.25, 4.0, 2.0),
        ..EngineConfig::default()
    };
    let mut engine = CanvasEngine::new(config);
    let mut mode = LayoutMode::Canvas;

    engine.on_pointer_event(&mut mode, &PointerEvent::down(0, (100.0, 100.0)));
    let effect = engine.on_pointer_event(&mut mode, &PointerEvent::moved(0, (140.0, 60.0)));
    assert_eq!(
        effect,
        Effect::Pan {
            delta: Vec2::new(20.0, -20.0)
        }
    );

    engine.on_pointer_event(&mut mode, &PointerEvent::moved(0, (180.0, 100.0)));
    assert_eq!(engine.transform().translation, Vec2::new(40.0, 0.0));

    engine.on_pointer_event(&mut mode, &PointerEvent::up(0, (180.0, 100.0)));
    assert_eq!(engine.recognizer().phase(), GesturePhase::Idle);
    assert_eq!(
        engine.on_pointer_event(&mut mode, &PointerEvent::moved(0, (500.0, 500.0))),
        Effect::NoOp
    );
}

#[test]
fn pan_is_unbounded() {
    let mut engine = CanvasEngine::default();
    let mut mode = LayoutMode::Canvas;
    engine.on_pointer_event(&mut mode, &PointerEvent::down(0, (0.0, 0.0)));
    engine.on_pointer_event(&mut mode, &PointerEvent::moved(0, (-1.0e6, 3.0e6)));
    assert_eq!(
        engine.transform().translation,
        Vec2::new(-1.0e6, 3.0e6)
    );
}

#[test]
fn pressing_a_card_does_not_pan() {
    let mut engine = CanvasEngine::default();
    let mut mode = LayoutMode::Canvas;
    engine.on_pointer_event(
        &mut mode,
        &PointerEvent::down(0, (10.0, 10.0)).over_item(true),
    );
    assert_eq!(
        engine.on_pointer_event(&mut mode, &PointerEvent::moved(0, (90.0, 10.0))),
        Effect::NoOp
    );
    assert_eq!(engine.transform().translation, Vec2::ZERO);
}

#[test]
fn cancel_keeps_the_last_transform() {
    let mut engine = CanvasEngine::default();
    let mut host = RecordingHost::new(LayoutMode::Canvas);
    two_fingers(&mut engine, &mut host, 100.0);
    spread_to(&mut engine, &mut host, 125.0);

    engine.on_pointer_event(&mut host, &PointerEvent::cancel(0));
    engine.on_pointer_event(&mut host, &PointerEvent::cancel(1));
    assert_eq!(engine.recognizer().phase(), GesturePhase::Idle);
    assert!((engine.transform().scale - 1.25).abs() < 1e-12);
}

#[test]
fn continued_pinch_cascades_through_modes() {
    let mut controller = ModeController::with_mode(LayoutConfig::default(), LayoutMode::Compact);
    let mut engine = CanvasEngine::default();

    let mut host = ControllerHost::new(&mut controller, 0);
    two_fingers(&mut engine, &mut host, 100.0);
    spread_to(&mut engine, &mut host, 130.0);
    spread_to(&mut engine, &mut host, 170.0);
    let transitions = host.into_transitions();

    assert_eq!(controller.mode(), LayoutMode::Canvas);
    assert_eq!(transitions.len(), 2);
    assert_eq!(transitions[0].to, LayoutMode::Standard);
    assert!(transitions[1].enters_canvas());
    assert!(transitions.iter().all(|t| t.animate));

    // Still pinching: the next spread zooms the fresh canvas.
    for transition in &transitions {
        engine.on_transition(transition);
    }
    let mut host = ControllerHost::new(&mut controller, 16);
    assert_eq!(
        spread_to(&mut engine, &mut host, 255.0),
        Effect::Zoom { factor: 1.5 }
    );
    assert!(host.transitions().is_empty());
}

#[test]
fn custom_thresholds_change_sensitivity() {
    let config = EngineConfig {
        gesture: GestureConfig {
            zoom_out_threshold: 0.5,
            ..GestureConfig::default()
        },
        ..EngineConfig::default()
    };
    assert_eq!(config.validate(), Ok(()));

    let mut engine = CanvasEngine::new(config);
    let mut host = RecordingHost::new(LayoutMode::Standard);
    two_fingers(&mut engine, &mut host, 100.0);
    assert_eq!(spread_to(&mut engine, &mut host, 60.0), Effect::NoOp);
    assert!(matches!(
        spread_to(&mut engine, &mut host, 40.0),
        Effect::ModeSwitchRequest(ModeRequest {
            to: LayoutMode::Compact,
            ..
        })
    ));
}

#[test]
fn tapping_a_card_after_panning_hits_the_moved_card() {
    let mut engine = CanvasEngine::default();
    let sizes = [Size::new(100.0, 100.0); 4];
    let placements = engine.compute_placements(&sizes, Size::new(800.0, 800.0), Some(3));

    // The anchor sits in the middle.
    assert_eq!(engine.item_at(Point::new(400.0, 400.0), &placements, &sizes), Some(3));

    let mut mode = LayoutMode::Canvas;
    engine.on_pointer_event(&mut mode, &PointerEvent::down(0, (0.0, 0.0)));
    engine.on_pointer_event(&mut mode, &PointerEvent::moved(0, (100.0, 0.0)));
    engine.on_pointer_event(&mut mode, &PointerEvent::up(0, (100.0, 0.0)));

    assert_eq!(engine.item_at(Point::new(400.0, 400.0), &placements, &sizes), None);
    assert_eq!(engine.item_at(Point::new(500.0, 400.0), &placements, &sizes), Some(3));
}

#[cfg(feature = "serde")]
#[test]
fn engine_config_deserializes_with_defaults() {
    let config: EngineConfig = serde_json::from_str(
        r#"{ "gesture": { "zoom_in_threshold": 1.5 }, "zoom": { "min": 0.25, "max": 3.0, "default": 1.0 } }"#,
    )
    .unwrap();
    assert_eq!(config.gesture.zoom_in_threshold, 1.5);
    assert_eq!(config.gesture.zoom_out_threshold, 0.8);
    assert_eq!(config.zoom.max, 3.0);
    assert_eq!(config.placement.radius_ratio, 0.8);
}
