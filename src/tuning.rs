//! Physics tuning and balance knobs
//!
//! Every constant the simulation recognizes lives here so hosts can rebalance
//! without recompiling. A `PhysicsTuning` is immutable once handed to a
//! [`crate::sim::Simulator`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics configuration, fixed at Simulator construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Fixed substep duration in seconds (must be > 0)
    pub fixed_dt: f32,
    /// Cap on substeps per `advance` call (overload protection)
    pub max_steps_per_call: u32,

    // === Integration ===
    /// Per-substep velocity multiplier (< 1), models surface drag
    pub linear_damping: f32,
    /// Speeds below this are snapped to zero
    pub min_sleep_speed: f32,
    /// Extra per-substep damping on defeated balls
    pub down_damping: f32,

    // === Collision response ===
    /// Ball-ball restitution
    pub restitution: f32,
    /// Wall restitution
    pub wall_restitution: f32,

    // === Damage ===
    /// Impulse magnitude to damage conversion factor
    pub damage_scale: f32,
    /// Impulses must strictly exceed this to deal damage
    pub min_damage_impulse: f32,
    /// Peak hit-flash timer set on damaged balls, in seconds
    pub hit_flash_duration: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            fixed_dt: SIM_DT,
            max_steps_per_call: MAX_SUBSTEPS,

            linear_damping: LINEAR_DAMPING,
            min_sleep_speed: MIN_SLEEP_SPEED,
            down_damping: DOWN_DAMPING,

            restitution: RESTITUTION,
            wall_restitution: WALL_RESTITUTION,

            damage_scale: DAMAGE_SCALE,
            min_damage_impulse: MIN_DAMAGE_IMPULSE,
            hit_flash_duration: HIT_FLASH_DURATION,
        }
    }
}

impl PhysicsTuning {
    /// Parse tuning from JSON (host-provided balance files)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Self = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Serialize tuning to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Fold non-finite or out-of-range knobs back to their defaults
    ///
    /// A bad balance file must not corrupt the simulation; each knob degrades
    /// independently so the rest of the file still applies.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.fixed_dt.is_finite() && self.fixed_dt > 0.0) {
            log::warn!("invalid fixed_dt {}, using default", self.fixed_dt);
            self.fixed_dt = defaults.fixed_dt;
        }
        if self.max_steps_per_call == 0 {
            self.max_steps_per_call = defaults.max_steps_per_call;
        }
        if !(self.linear_damping.is_finite() && (0.0..=1.0).contains(&self.linear_damping)) {
            self.linear_damping = defaults.linear_damping;
        }
        if !(self.min_sleep_speed.is_finite() && self.min_sleep_speed >= 0.0) {
            self.min_sleep_speed = defaults.min_sleep_speed;
        }
        if !(self.down_damping.is_finite() && (0.0..=1.0).contains(&self.down_damping)) {
            self.down_damping = defaults.down_damping;
        }
        if !(self.restitution.is_finite() && self.restitution >= 0.0) {
            self.restitution = defaults.restitution;
        }
        if !(self.wall_restitution.is_finite() && self.wall_restitution >= 0.0) {
            self.wall_restitution = defaults.wall_restitution;
        }
        if !(self.damage_scale.is_finite() && self.damage_scale >= 0.0) {
            self.damage_scale = defaults.damage_scale;
        }
        if !(self.min_damage_impulse.is_finite() && self.min_damage_impulse >= 0.0) {
            self.min_damage_impulse = defaults.min_damage_impulse;
        }
        if !(self.hit_flash_duration.is_finite() && self.hit_flash_duration > 0.0) {
            self.hit_flash_duration = defaults.hit_flash_duration;
        }

        self
    }
}
