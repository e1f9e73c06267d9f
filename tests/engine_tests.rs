// Host-side tests for the engine lifecycle, tick ordering and resize handling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod tier {
        include!("../src/core/tier.rs");
    }
    pub mod particle {
        include!("../src/core/particle.rs");
    }
    pub mod input {
        include!("../src/core/input.rs");
    }
    pub mod surface {
        include!("../src/core/surface.rs");
    }
    pub mod connections {
        include!("../src/core/connections.rs");
    }
    pub mod engine {
        include!("../src/core/engine.rs");
    }
}
mod support {
    include!("support/recording.rs");
}

use crate::core::engine::*;
use crate::core::input::{InputSlots, PointerState};
use crate::core::particle;
use crate::core::tier::{Tier, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use support::{Call, RecordingSurface};

fn desktop() -> Viewport {
    Viewport::new(1280.0, 800.0)
}

fn make_engine(viewport: Viewport) -> FieldEngine<StdRng> {
    FieldEngine::new(viewport, StdRng::seed_from_u64(42))
}

#[test]
fn population_matches_tier_after_init() {
    let engine = make_engine(desktop());
    assert_eq!(engine.tier(), Tier::Standard);
    assert_eq!(engine.particles().len(), 90);
    assert_eq!(engine.state(), LoopState::Running);

    let engine = make_engine(Viewport::new(375.0, 812.0));
    assert_eq!(engine.tier(), Tier::Compact);
    assert_eq!(engine.particles().len(), 30);
}

#[test]
fn mount_sizes_surface_before_populating() {
    let mut surface = RecordingSurface::default();
    let engine = FieldEngine::mount(desktop(), StdRng::seed_from_u64(1), &mut surface);
    assert_eq!(surface.calls, vec![Call::Resize(1280.0, 800.0)]);
    assert_eq!(engine.particles().len(), 90);
    assert!(engine.is_running());
}

#[test]
fn resize_to_compact_repopulates_within_new_bounds() {
    let mut engine = make_engine(desktop());
    assert_eq!(engine.particles().len(), 90);

    let small = Viewport::new(600.0, 900.0);
    engine.resize(small);
    assert_eq!(engine.tier(), Tier::Compact);
    assert_eq!(engine.config().particle_count, 30);
    assert_eq!(engine.config().connection_distance, 100.0);
    assert_eq!(engine.config().pointer_influence_distance, 120.0);
    assert_eq!(engine.particles().len(), 30);
    for p in engine.particles() {
        assert!(p.pos.x >= 0.0 && p.pos.x < small.width);
        assert!(p.pos.y >= 0.0 && p.pos.y < small.height);
    }

    engine.resize(desktop());
    assert_eq!(engine.tier(), Tier::Standard);
    assert_eq!(engine.particles().len(), 90);
}

#[test]
fn resize_within_tier_still_replaces_particles() {
    let mut engine = make_engine(desktop());
    let before = engine.particles().to_vec();
    engine.resize(Viewport::new(1300.0, 820.0));
    assert_eq!(engine.particles().len(), 90);
    assert_ne!(engine.particles(), &before[..]);
}

#[test]
fn tick_clears_then_draws_edges_then_particles() {
    let mut engine = make_engine(desktop());
    let mut surface = RecordingSurface::default();
    engine.tick(PointerState::default(), &mut surface);

    assert_eq!(surface.calls.first(), Some(&Call::Clear(1280.0, 800.0)));
    assert_eq!(surface.circles(), 90);

    let first_circle = surface
        .calls
        .iter()
        .position(|c| matches!(c, Call::Circle { .. }))
        .unwrap_or(0);
    assert!(surface.calls[first_circle..]
        .iter()
        .all(|c| matches!(c, Call::Circle { alpha, .. } if *alpha == 0.8)));
    assert!(surface.calls[1..first_circle]
        .iter()
        .all(|c| matches!(c, Call::Line { .. })));
    assert_eq!(engine.frame_count(), 1);
}

#[test]
fn sentinel_pointer_leaves_only_plain_integration() {
    for viewport in [desktop(), Viewport::new(400.0, 700.0)] {
        let mut engine = make_engine(viewport);
        let before = engine.particles().to_vec();
        let mut surface = RecordingSurface::default();
        engine.tick(PointerState::default(), &mut surface);

        assert_eq!(surface.lines_with_width(1.5), 0);
        for (after, prev) in engine.particles().iter().zip(&before) {
            assert_eq!(*after, particle::update(*prev, viewport));
        }
    }
}

#[test]
fn frame_applies_pointer_from_slots() {
    let mut engine = make_engine(desktop());
    let mut slots = InputSlots::default();
    let target = engine.particles()[0].pos;
    slots.pointer.set_from_client(target.x, target.y, 0.0, 0.0);

    let mut surface = RecordingSurface::default();
    assert!(engine.frame(&mut slots, &mut surface));
    assert!(surface.lines_with_width(1.5) >= 1);
}

#[test]
fn frame_drains_latest_resize_once() {
    let mut engine = make_engine(desktop());
    let mut slots = InputSlots::default();
    slots.request_resize(Viewport::new(1024.0, 768.0));
    slots.request_resize(Viewport::new(500.0, 500.0));

    let mut surface = RecordingSurface::default();
    assert!(engine.frame(&mut slots, &mut surface));
    assert_eq!(surface.resizes(), vec![(500.0, 500.0)]);
    assert!(slots.pending_viewport.is_none());
    assert_eq!(engine.viewport(), Viewport::new(500.0, 500.0));
    assert_eq!(engine.particles().len(), 30);
    assert_eq!(surface.circles(), 30);

    // Nothing pending: no further resize.
    let mut surface = RecordingSurface::default();
    engine.frame(&mut slots, &mut surface);
    assert!(surface.resizes().is_empty());
}

#[test]
fn stopped_engine_ignores_frames() {
    let mut engine = make_engine(desktop());
    let mut slots = InputSlots::default();
    let mut surface = RecordingSurface::default();
    assert!(engine.frame(&mut slots, &mut surface));
    let frames = engine.frame_count();

    engine.stop();
    assert_eq!(engine.state(), LoopState::Stopped);
    let snapshot = engine.particles().to_vec();
    slots.request_resize(Viewport::new(300.0, 300.0));

    let mut surface = RecordingSurface::default();
    for _ in 0..10 {
        assert!(!engine.frame(&mut slots, &mut surface));
    }
    assert!(surface.calls.is_empty());
    assert_eq!(engine.particles(), &snapshot[..]);
    assert_eq!(engine.frame_count(), frames);
    // Pending input is left alone once stopped.
    assert!(slots.pending_viewport.is_some());
}

#[test]
fn stop_is_idempotent() {
    let mut engine = make_engine(desktop());
    engine.stop();
    engine.stop();
    assert!(!engine.is_running());
}

#[test]
fn degenerate_viewport_runs_without_error() {
    let mut engine = make_engine(Viewport::new(0.0, 0.0));
    assert_eq!(engine.particles().len(), 30);
    let mut slots = InputSlots::default();
    let mut surface = RecordingSurface::default();
    for _ in 0..5 {
        assert!(engine.frame(&mut slots, &mut surface));
    }
    assert_eq!(engine.frame_count(), 5);
}
