//! Property tests for the simulation core
//!
//! Checks the invariants the engine promises regardless of input: balls stay
//! in the arena, health only goes down, resolution separates overlaps, and
//! the outcome does not depend on how frame time is chunked.

use glam::Vec2;
use proptest::prelude::*;

use arena_brawl::sim::{Arena, Ball, resolve_pair};
use arena_brawl::{PhysicsTuning, Simulator};

fn arena() -> Arena {
    Arena::new(800.0, 600.0, 18.0, 8.0)
}

fn ball(x: f32, y: f32, radius: f32, vx: f32, vy: f32) -> Ball {
    let mut b = Ball::new(Vec2::new(x, y), radius, 1.5, 120.0, 15.0, 1.0, 0);
    b.vel = Vec2::new(vx, vy);
    b
}

proptest! {
    /// A lone ball ends every frame inside its legal center range, no
    /// matter where it started or how fast it was going.
    #[test]
    fn prop_single_ball_containment(
        x in -200.0f32..1000.0,
        y in -200.0f32..800.0,
        radius in 8.0f32..16.0,
        vx in -400.0f32..400.0,
        vy in -400.0f32..400.0,
    ) {
        let arena = arena();
        let mut sim = Simulator::with_defaults();
        let mut balls = vec![ball(x, y, radius, vx, vy)];

        for _ in 0..30 {
            sim.advance(&arena, &mut balls, 0.016);

            let (left, right, top, bottom) = arena.bounds_for_circle(radius);
            let p = balls[0].pos;
            prop_assert!(p.x >= left && p.x <= right, "x out of bounds: {}", p.x);
            prop_assert!(p.y >= top && p.y <= bottom, "y out of bounds: {}", p.y);
        }
    }

    /// With several balls, pair de-penetration may nudge a ball past a wall
    /// between substeps, but never by more than one contact's correction.
    #[test]
    fn prop_multi_ball_containment(
        positions in prop::collection::vec((80.0f32..720.0, 80.0f32..520.0), 3),
        velocities in prop::collection::vec((-350.0f32..350.0, -350.0f32..350.0), 3),
    ) {
        let arena = arena();
        let mut sim = Simulator::with_defaults();
        let radius = 12.0;
        let mut balls: Vec<Ball> = positions
            .iter()
            .zip(&velocities)
            .map(|(&(x, y), &(vx, vy))| ball(x, y, radius, vx, vy))
            .collect();

        for _ in 0..60 {
            sim.advance(&arena, &mut balls, 0.016);
        }

        let slack = 2.0 * radius; // max single-contact correction
        let (left, right, top, bottom) = arena.bounds_for_circle(radius);
        for b in &balls {
            prop_assert!(b.pos.x >= left - slack && b.pos.x <= right + slack);
            prop_assert!(b.pos.y >= top - slack && b.pos.y <= bottom + slack);
        }
    }

    /// Health never increases and never leaves [0, hp_max].
    #[test]
    fn prop_health_monotonic_and_clamped(
        positions in prop::collection::vec((80.0f32..720.0, 80.0f32..520.0), 3),
        velocities in prop::collection::vec((-400.0f32..400.0, -400.0f32..400.0), 3),
    ) {
        let arena = arena();
        let mut sim = Simulator::with_defaults();
        let mut balls: Vec<Ball> = positions
            .iter()
            .zip(&velocities)
            .map(|(&(x, y), &(vx, vy))| ball(x, y, 12.0, vx, vy))
            .collect();

        let mut prev_hp: Vec<f32> = balls.iter().map(|b| b.hp).collect();

        for _ in 0..120 {
            sim.advance(&arena, &mut balls, 0.016);
            for (b, prev) in balls.iter().zip(&mut prev_hp) {
                prop_assert!(b.hp <= *prev, "health went up: {} -> {}", prev, b.hp);
                prop_assert!(b.hp >= 0.0 && b.hp <= b.hp_max);
                *prev = b.hp;
            }
        }
    }

    /// Overlapping, approaching circles are strictly farther apart after
    /// resolution when both masses are finite.
    #[test]
    fn prop_resolution_separates_overlap(
        gap in 2.0f32..18.0,
        angle in 0.0f32..std::f32::consts::TAU,
        closing_speed in 10.0f32..300.0,
        mass_b in 0.5f32..5.0,
    ) {
        let dir = Vec2::new(angle.cos(), angle.sin());
        let mut a = ball(400.0, 300.0, 10.0, 0.0, 0.0);
        let mut b = Ball::new(Vec2::new(400.0, 300.0) + dir * gap, 10.0, mass_b, 120.0, 15.0, 1.0, 0);
        // b approaches a head-on
        b.vel = -dir * closing_speed;

        let before = (b.pos - a.pos).length();
        let contact = resolve_pair(&mut a, &mut b, 0.92);
        prop_assert!(contact.is_some());
        let after = (b.pos - a.pos).length();
        prop_assert!(after > before - 1e-4, "overlap grew: {} -> {}", before, after);
        // Positional correction removes the penetration outright
        prop_assert!(after >= 20.0 - 1e-3);
    }

    /// The same total elapsed time produces bit-identical state whether it
    /// arrives in one call or several (below the step cap).
    #[test]
    fn prop_determinism_under_chunking(
        vx in -300.0f32..300.0,
        vy in -300.0f32..300.0,
        wx in -300.0f32..300.0,
        wy in -300.0f32..300.0,
    ) {
        let arena = arena();
        let make_balls = || vec![
            ball(300.0, 300.0, 12.0, vx, vy),
            ball(330.0, 306.0, 12.0, wx, wy),
        ];

        let mut sim_one = Simulator::with_defaults();
        let mut one = make_balls();
        for _ in 0..4 {
            sim_one.advance(&arena, &mut one, 0.009);
        }

        let mut sim_many = Simulator::with_defaults();
        let mut many = make_balls();
        for _ in 0..8 {
            sim_many.advance(&arena, &mut many, 0.0045);
        }

        for (a, b) in one.iter().zip(&many) {
            prop_assert_eq!(a.pos, b.pos);
            prop_assert_eq!(a.vel, b.vel);
            prop_assert_eq!(a.hp, b.hp);
        }
    }
}

/// Down balls with no incoming contacts settle to a stop.
#[test]
fn down_ball_comes_to_rest() {
    let arena = arena();
    let mut sim = Simulator::new(PhysicsTuning::default());
    let mut b = ball(400.0, 300.0, 12.0, 250.0, -120.0);
    b.hp = 0.0;
    let mut balls = vec![b];

    for _ in 0..600 {
        sim.advance(&arena, &mut balls, 1.0 / 60.0);
    }

    assert_eq!(balls[0].vel, Vec2::ZERO);
}
