//! Fixed timestep simulation driver
//!
//! Converts variable wall-clock frame time into whole fixed substeps so the
//! physics outcome is independent of rendering frame rate. Within a substep
//! the order is strict: integrate every ball, resolve walls, resolve pairs
//! in ascending (i, j) index order, then decay hit flashes.

use glam::Vec2;

use super::arena::Arena;
use super::ball::Ball;
use super::collision::{PairRole, resolve_pair, resolve_wall};
use crate::tuning::PhysicsTuning;

/// Something the host may want to react to (sound, particles, scoring)
///
/// Indices refer to the `balls` slice passed to [`Simulator::advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    /// A contact dealt damage
    Damage {
        aggressor: usize,
        victim: usize,
        impulse: f32,
        damage: f32,
    },
    /// A damage application brought this ball from alive to down
    Down { ball: usize },
}

/// Damage dealt by a contact of the given impulse magnitude
///
/// The threshold is exclusive: an impulse exactly at `min_damage_impulse`
/// is still a soft touch and deals nothing.
pub fn impact_damage(tuning: &PhysicsTuning, impulse_mag: f32, base_damage: f32) -> f32 {
    if impulse_mag <= tuning.min_damage_impulse {
        0.0
    } else {
        impulse_mag * tuning.damage_scale * base_damage
    }
}

/// Fixed-step physics driver
///
/// Owns nothing but its tuning and time accumulator; arena and balls are
/// passed in per call, so independent arena instances can each keep their
/// own `Simulator` without cross-contamination.
#[derive(Debug, Clone)]
pub struct Simulator {
    tuning: PhysicsTuning,
    accumulator: f32,
}

impl Simulator {
    pub fn new(tuning: PhysicsTuning) -> Self {
        Self {
            tuning: tuning.sanitized(),
            accumulator: 0.0,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(PhysicsTuning::default())
    }

    pub fn tuning(&self) -> &PhysicsTuning {
        &self.tuning
    }

    /// Unspent frame time, always in [0, fixed_dt] between calls
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Advance the simulation by one frame's worth of wall-clock time
    ///
    /// Runs zero or more fixed substeps depending on the accumulated time,
    /// capped at `max_steps_per_call`; any backlog beyond one step is
    /// discarded, so a stalled host slows the simulation down instead of
    /// spiraling into catch-up work. Returns the damage events produced,
    /// in the order they occurred.
    pub fn advance(&mut self, arena: &Arena, balls: &mut [Ball], elapsed: f32) -> Vec<SimEvent> {
        // A single bad frame must not corrupt the accumulator.
        let elapsed = if elapsed.is_finite() && elapsed > 0.0 {
            elapsed
        } else {
            if !elapsed.is_finite() {
                log::warn!("non-finite frame time {elapsed}, treating as 0");
            }
            0.0
        };

        self.accumulator += elapsed;

        let mut events = Vec::new();
        let mut steps = 0;
        while self.accumulator >= self.tuning.fixed_dt && steps < self.tuning.max_steps_per_call {
            self.accumulator -= self.tuning.fixed_dt;
            self.step_fixed(arena, balls, self.tuning.fixed_dt, &mut events);
            steps += 1;
        }

        self.accumulator = self.accumulator.min(self.tuning.fixed_dt);

        events
    }

    /// One fixed substep over the whole world
    fn step_fixed(&self, arena: &Arena, balls: &mut [Ball], dt: f32, events: &mut Vec<SimEvent>) {
        for ball in balls.iter_mut() {
            self.integrate(ball, dt);
            resolve_wall(arena, ball, self.tuning.wall_restitution);
        }

        // Ascending (i, j) order keeps multi-contact resolution reproducible.
        let n = balls.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (head, tail) = balls.split_at_mut(j);
                let Some(contact) = resolve_pair(&mut head[i], &mut tail[0], self.tuning.restitution)
                else {
                    continue;
                };
                let Some(role) = contact.aggressor else {
                    continue;
                };

                let (aggressor, victim) = match role {
                    PairRole::First => (i, j),
                    PairRole::Second => (j, i),
                };
                self.apply_damage(balls, aggressor, victim, contact.impulse, events);
            }
        }

        for ball in balls.iter_mut() {
            if ball.hit_flash > 0.0 {
                ball.hit_flash = (ball.hit_flash - dt).max(0.0);
            }
        }
    }

    fn apply_damage(
        &self,
        balls: &mut [Ball],
        aggressor: usize,
        victim: usize,
        impulse: f32,
        events: &mut Vec<SimEvent>,
    ) {
        let damage = impact_damage(&self.tuning, impulse, balls[aggressor].base_damage);
        if damage <= 0.0 {
            return;
        }

        let was_alive = balls[victim].alive();
        balls[victim].take_damage(damage, self.tuning.hit_flash_duration);
        events.push(SimEvent::Damage {
            aggressor,
            victim,
            impulse,
            damage,
        });

        if was_alive && !balls[victim].alive() {
            log::debug!("ball {victim} is down (impulse {impulse:.1})");
            events.push(SimEvent::Down { ball: victim });
        }
    }

    /// Semi-implicit Euler with per-substep damping and a sleep threshold
    fn integrate(&self, ball: &mut Ball, dt: f32) {
        // Defeated balls settle instead of coasting forever.
        if !ball.alive() {
            ball.vel *= self.tuning.down_damping;
        }

        ball.pos += ball.vel * dt;
        ball.vel *= self.tuning.linear_damping;

        if ball.speed() < self.tuning.min_sleep_speed {
            ball.vel = Vec2::ZERO;
        }
    }
}
