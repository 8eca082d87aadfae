//! Slingshot launch: aim-drag vectors become physics impulses
//!
//! The host owns pointer polling; this module owns the physics side of a
//! drag-release launch. The ball is flung opposite the drag direction with
//! an impulse scaled by its launch stat and mass.

use glam::Vec2;

use super::ball::Ball;
use crate::limit_vector;

/// Drags shorter than this are treated as accidental clicks
const DRAG_DEAD_ZONE: f32 = 4.0;

/// Clamp an aim drag to a maximum length
///
/// Near-degenerate drags collapse to zero so later normalization is safe.
#[inline]
pub fn clamp_drag(drag: Vec2, max_len: f32) -> Vec2 {
    limit_vector(drag, max_len)
}

/// Launch a ball from a drag-release gesture
///
/// The drag is clamped to the ball's [`Ball::max_drag_distance`]; the
/// resulting impulse points opposite the drag (slingshot style) with
/// magnitude [`Ball::launch_strength`] of the clamped length. Returns
/// whether a launch happened: dead-zone drags and down balls are ignored.
pub fn drag_launch(ball: &mut Ball, drag: Vec2) -> bool {
    let drag = clamp_drag(drag, ball.max_drag_distance());
    let drag_len = drag.length();

    if drag_len <= DRAG_DEAD_ZONE || !ball.alive() {
        return false;
    }

    let dir = -drag / drag_len;
    ball.apply_impulse(dir * ball.launch_strength(drag_len));
    true
}
