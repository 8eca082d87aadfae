//! Ball entity - the only dynamic body in the arena
//!
//! A ball is a circle with mass, health and a damage stat. Defeated balls
//! stay in the world and keep colliding; `reset` is the only way back to
//! full health.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A circular dynamic body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Mass in arbitrary units; <= 0 means immovable (infinite mass)
    pub mass: f32,
    /// Cached 1/mass, 0 for immovable balls
    pub inv_mass: f32,
    /// Current health, clamped to [0, hp_max]
    pub hp: f32,
    pub hp_max: f32,
    /// Damage stat applied when this ball is the aggressor in a contact
    pub base_damage: f32,
    /// Slingshot launch strength stat
    pub launch_power: f32,
    /// Opaque presentation tag (packed color); never read by physics
    pub color: u32,
    /// Seconds of hit glow remaining, decays linearly to 0
    pub hit_flash: f32,
}

impl Ball {
    pub fn new(
        pos: Vec2,
        radius: f32,
        mass: f32,
        hp: f32,
        base_damage: f32,
        launch_power: f32,
        color: u32,
    ) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            mass,
            inv_mass: if mass <= 0.0 { 0.0 } else { 1.0 / mass },
            hp,
            hp_max: hp,
            base_damage,
            launch_power,
            color,
            hit_flash: 0.0,
        }
    }

    /// A ball is alive while it has health; at 0 it is down but still solid
    #[inline]
    pub fn alive(&self) -> bool {
        self.hp > 0.0
    }

    /// Current speed (computed, not stored)
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Zero the velocity without touching anything else
    pub fn reset_motion(&mut self) {
        self.vel = Vec2::ZERO;
    }

    /// Respawn at a position with full health, zero velocity and no flash
    ///
    /// Stats (radius, mass, damage, color) are identity and survive reset.
    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.reset_motion();
        self.hp = self.hp_max;
        self.hit_flash = 0.0;
    }

    /// Apply an external impulse: velocity changes by impulse / mass
    ///
    /// Immovable balls (inv_mass 0) ignore impulses entirely.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.vel += impulse * self.inv_mass;
    }

    /// Reduce health, clamping at zero; non-positive damage is ignored
    pub fn take_damage(&mut self, dmg: f32, flash_duration: f32) {
        if dmg <= 0.0 {
            return;
        }
        self.hp = (self.hp - dmg).max(0.0);
        self.hit_flash = flash_duration;
    }

    /// Hit glow intensity in [0, 1] for rendering
    pub fn flash_level(&self, flash_duration: f32) -> f32 {
        if flash_duration <= 0.0 {
            0.0
        } else {
            (self.hit_flash / flash_duration).clamp(0.0, 1.0)
        }
    }

    /// Impulse magnitude produced by a slingshot drag of the given length
    pub fn launch_strength(&self, drag_len: f32) -> f32 {
        drag_len * self.launch_power * self.mass
    }

    /// How far the aim drag may be pulled for this ball
    pub fn max_drag_distance(&self) -> f32 {
        80.0 + self.launch_power * 45.0
    }
}
