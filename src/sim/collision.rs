//! Collision detection and response
//!
//! Pairwise circle-circle contacts with positional de-penetration and
//! impulse response, plus axis-aligned wall contacts against the arena's
//! inner rectangle. Damage is derived from the reported impulse magnitude
//! by the step driver, not here.

use glam::Vec2;

use super::arena::Arena;
use super::ball::Ball;

/// Which ball of an unordered pair a role refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairRole {
    First,
    Second,
}

impl PairRole {
    /// The opposite member of the pair
    #[inline]
    pub fn other(self) -> Self {
        match self {
            PairRole::First => PairRole::Second,
            PairRole::Second => PairRole::First,
        }
    }
}

/// Outcome of a resolved ball-ball contact
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// Magnitude of the exchanged impulse
    pub impulse: f32,
    /// Which ball was pushing harder along the contact normal, if either
    ///
    /// `None` on an exact tie: neither ball is attacking, no damage is
    /// attributed for this contact.
    pub aggressor: Option<PairRole>,
}

/// Resolve one unordered ball pair: de-penetrate, then exchange impulse
///
/// Returns `None` when the circles are not in contact, when both balls are
/// immovable, or when the pair is already separating (separating pairs get
/// no velocity change and no damage, even while overlapping).
pub fn resolve_pair(a: &mut Ball, b: &mut Ball, restitution: f32) -> Option<Contact> {
    let mut d = b.pos - a.pos;
    let mut dist = d.length();
    let min_dist = a.radius + b.radius;

    // Coincident centers: pick a nominal separation axis instead of
    // dividing by zero.
    if dist <= 1e-9 {
        dist = 1e-6;
        d = Vec2::X;
    }

    // Touching counts as contact so resting pairs still exchange impulse.
    if dist > min_dist {
        return None;
    }

    let n = d / dist;

    // Positional correction split proportionally to inverse mass; two
    // immovable balls cannot be separated.
    let penetration = min_dist - dist;
    let inv_mass_sum = a.inv_mass + b.inv_mass;
    if inv_mass_sum > 0.0 {
        let corr = penetration / inv_mass_sum;
        a.pos -= n * corr * a.inv_mass;
        b.pos += n * corr * b.inv_mass;
    }

    // Relative velocity along the normal
    let vn = (b.vel - a.vel).dot(n);

    // Already separating: no impulse, no damage
    if vn > 0.0 {
        return None;
    }

    if inv_mass_sum <= 0.0 {
        return None;
    }

    let j = -(1.0 + restitution) * vn / inv_mass_sum;

    let impulse = j * n;
    a.vel -= impulse * a.inv_mass;
    b.vel += impulse * b.inv_mass;

    // Aggressor attribution: whoever is pushing harder along the normal
    // toward the other ball, measured after the impulse. An exact tie has
    // no clear attacker.
    let a_to_b = a.vel.dot(n);
    let b_to_a = -b.vel.dot(n);

    let aggressor = if a_to_b > b_to_a {
        Some(PairRole::First)
    } else if b_to_a > a_to_b {
        Some(PairRole::Second)
    } else {
        None
    };

    Some(Contact {
        impulse: j.abs(),
        aggressor,
    })
}

/// Clamp a ball against the arena walls, reflecting velocity per axis
///
/// Each axis is handled independently; a corner hit reflects both
/// components. Wall contacts never deal damage.
pub fn resolve_wall(arena: &Arena, ball: &mut Ball, wall_restitution: f32) {
    let (left, right, top, bottom) = arena.bounds_for_circle(ball.radius);

    if ball.pos.x < left {
        ball.pos.x = left;
        ball.vel.x = -ball.vel.x * wall_restitution;
    } else if ball.pos.x > right {
        ball.pos.x = right;
        ball.vel.x = -ball.vel.x * wall_restitution;
    }

    if ball.pos.y < top {
        ball.pos.y = top;
        ball.vel.y = -ball.vel.y * wall_restitution;
    } else if ball.pos.y > bottom {
        ball.pos.y = bottom;
        ball.vel.y = -ball.vel.y * wall_restitution;
    }
}
