// Integration tests for the particle field engine.

use folio_core::constants::{
    AMBIENT_COUNT, AMBIENT_GLOW_MIN, AMBIENT_RADIUS_MIN, AMBIENT_RADIUS_SPAN, WAVE_MAX_LIFE,
    WAVE_PALETTE, WAVE_SEGMENTS, WAVE_SPAWN_PER_MOVE,
};
use folio_core::draw::DrawCommand;
use folio_core::particles::ParticleField;
use glam::Vec2;

fn make_field() -> ParticleField {
    ParticleField::new(AMBIENT_COUNT, 800.0, 600.0, 42)
}

#[test]
fn ambient_population_is_invariant_across_frames() {
    let mut field = make_field();
    assert_eq!(field.particles.len(), AMBIENT_COUNT);

    for frame in 0..240 {
        // Keep the pointer busy so spawning and repulsion are both active.
        if frame % 3 == 0 {
            field.pointer_moved(100.0 + frame as f32, 100.0);
        }
        field.step();
        assert_eq!(
            field.particles.len(),
            AMBIENT_COUNT,
            "population changed at frame {frame}"
        );
    }
}

#[test]
fn particles_wrap_toroidally_at_the_far_edge() {
    let mut field = ParticleField::new(1, 100.0, 100.0, 7);
    field.particles[0].pos = Vec2::new(99.99, 50.0);
    field.particles[0].vel = Vec2::new(1.0, 0.0);

    field.step();

    let x = field.particles[0].pos.x;
    assert!(
        (x - 0.99).abs() < 1e-3,
        "expected wrap to ~0.99, got {x}"
    );
    assert!(x >= 0.0 && x < 100.0);
}

#[test]
fn particles_wrap_toroidally_at_the_near_edge() {
    let mut field = ParticleField::new(1, 100.0, 100.0, 7);
    field.particles[0].pos = Vec2::new(0.005, 50.0);
    field.particles[0].vel = Vec2::new(-1.0, 0.0);

    field.step();

    let x = field.particles[0].pos.x;
    assert!(
        (x - 99.005).abs() < 1e-3,
        "expected wrap to ~99.005, got {x}"
    );
}

#[test]
fn particles_stay_in_bounds_over_long_runs() {
    let mut field = make_field();
    for frame in 0..600 {
        field.pointer_moved((frame % 800) as f32, (frame % 600) as f32);
        field.step();
        for (i, p) in field.particles.iter().enumerate() {
            assert!(
                p.pos.x >= 0.0 && p.pos.x < 800.0 && p.pos.y >= 0.0 && p.pos.y < 600.0,
                "particle {i} out of bounds at frame {frame}: {:?}",
                p.pos
            );
        }
    }
}

#[test]
fn pointer_move_spawns_a_batch_along_the_delta() {
    let mut field = ParticleField::new(0, 800.0, 600.0, 1);

    // First move only records the position.
    field.pointer_moved(100.0, 100.0);
    assert!(field.waves.is_empty());

    field.pointer_moved(130.0, 140.0);
    assert_eq!(field.waves.len(), WAVE_SPAWN_PER_MOVE);

    // Interpolated along the segment from the previous position.
    let expected = [
        Vec2::new(100.0, 100.0),
        Vec2::new(110.0, 100.0 + 40.0 / 3.0),
        Vec2::new(120.0, 100.0 + 80.0 / 3.0),
    ];
    for (w, want) in field.waves.iter().zip(expected) {
        assert!((w.pos - want).length() < 1e-3, "{:?} != {want:?}", w.pos);
        // Unit direction of (30, 40) scaled by the launch speed.
        assert!((w.vel - Vec2::new(0.3, 0.4)).length() < 1e-5);
        assert_eq!(w.life, 0);
        assert_eq!(w.max_life, WAVE_MAX_LIFE);
        assert!(WAVE_PALETTE.contains(&w.color));
        assert!(w.phase >= 0.0 && w.phase < std::f32::consts::TAU);
    }
}

#[test]
fn zero_delta_move_spawns_nothing() {
    let mut field = ParticleField::new(0, 800.0, 600.0, 1);
    field.pointer_moved(50.0, 50.0);
    field.pointer_moved(50.0, 50.0);
    assert!(field.waves.is_empty());
}

#[test]
fn wave_particles_expire_just_past_max_life() {
    let mut field = ParticleField::new(0, 800.0, 600.0, 1);
    field.pointer_moved(100.0, 100.0);
    field.pointer_moved(130.0, 140.0);

    for _ in 0..29 {
        field.step();
    }
    assert_eq!(field.waves.len(), 3, "alive at age 29");

    field.step();
    assert_eq!(field.waves.len(), 3, "age == max_life is still alive");

    field.step();
    assert!(field.waves.is_empty(), "removed once age exceeds max_life");
}

#[test]
fn repulsion_pushes_directly_away_from_the_pointer() {
    let mut field = ParticleField::new(1, 500.0, 500.0, 3);
    field.particles[0].pos = Vec2::new(300.0, 250.0);
    field.particles[0].vel = Vec2::ZERO;

    // Distance 50, well inside the repulsion radius.
    field.pointer_moved(250.0, 250.0);
    field.step();

    let v = field.particles[0].vel;
    assert!(v.x > 0.0, "velocity should point away (+x), got {v:?}");
    assert!(v.y.abs() < 1e-6, "no lateral component expected, got {v:?}");
    let away = field.particles[0].pos - Vec2::new(250.0, 250.0);
    assert!(away.dot(v) > 0.0);
}

#[test]
fn pointer_leave_suppresses_repulsion_and_spawning() {
    let mut field = ParticleField::new(1, 500.0, 500.0, 3);
    field.particles[0].pos = Vec2::new(300.0, 250.0);
    field.particles[0].vel = Vec2::ZERO;

    field.pointer_moved(250.0, 250.0);
    field.pointer_left();
    assert_eq!(field.pointer(), None);

    field.step();
    assert_eq!(field.particles[0].vel, Vec2::ZERO);

    // The next move is treated as a first move again.
    field.pointer_moved(400.0, 400.0);
    assert!(field.waves.is_empty());
}

#[test]
fn identical_seeds_reproduce_identical_fields() {
    let a = make_field();
    let b = make_field();
    for (pa, pb) in a.particles.iter().zip(&b.particles) {
        assert_eq!(pa.pos, pb.pos);
        assert_eq!(pa.vel, pb.vel);
        assert_eq!(pa.radius, pb.radius);
        assert_eq!(pa.glow, pb.glow);
    }
}

#[test]
fn initialization_ranges_hold_for_every_particle() {
    let field = make_field();
    for p in &field.particles {
        assert!(p.pos.x >= 0.0 && p.pos.x < 800.0);
        assert!(p.pos.y >= 0.0 && p.pos.y < 600.0);
        assert!(p.vel.x.abs() <= 0.1 && p.vel.y.abs() <= 0.1);
        assert!(p.radius >= AMBIENT_RADIUS_MIN);
        assert!(p.radius <= AMBIENT_RADIUS_MIN + AMBIENT_RADIUS_SPAN);
        assert!(p.glow >= AMBIENT_GLOW_MIN && p.glow <= 1.0);
    }
}

#[test]
fn draw_list_matches_population_and_fades_ribbons() {
    let mut field = ParticleField::new(2, 800.0, 600.0, 5);
    field.pointer_moved(100.0, 100.0);
    field.pointer_moved(160.0, 100.0);

    let commands = field.draw_list();
    let glows = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Glow { .. }))
        .count();
    assert_eq!(glows, 2);

    let mut ribbons = 0;
    for c in &commands {
        if let DrawCommand::Ribbon { points, alpha, .. } = c {
            ribbons += 1;
            assert_eq!(points.len(), WAVE_SEGMENTS + 1);
            assert!((alpha - 1.0).abs() < 1e-6, "fresh ribbon is opaque");
        }
    }
    assert_eq!(ribbons, 3);

    // Half-life in, alpha has fallen to one half.
    for _ in 0..15 {
        field.step();
    }
    for c in field.draw_list() {
        if let DrawCommand::Ribbon { alpha, .. } = c {
            assert!((alpha - 0.5).abs() < 1e-6, "expected 0.5, got {alpha}");
        }
    }
}

#[test]
fn zero_area_resize_is_ignored() {
    let mut field = make_field();
    field.resize(0.0, 600.0);
    assert_eq!(field.width(), 800.0);
    field.resize(800.0, -1.0);
    assert_eq!(field.height(), 600.0);
}

#[test]
fn resize_rewraps_particles_into_the_new_bounds() {
    let mut field = ParticleField::new(4, 100.0, 100.0, 9);
    field.particles[0].pos = Vec2::new(90.0, 95.0);

    field.resize(50.0, 50.0);

    assert_eq!(field.width(), 50.0);
    for p in &field.particles {
        assert!(p.pos.x >= 0.0 && p.pos.x < 50.0);
        assert!(p.pos.y >= 0.0 && p.pos.y < 50.0);
    }
}

#[test]
fn empty_field_steps_without_effect() {
    let mut field = ParticleField::new(0, 800.0, 600.0, 11);
    field.step();
    assert!(field.particles.is_empty());
    assert!(field.draw_list().is_empty());
}
