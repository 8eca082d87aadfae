//! Arena Brawl - deterministic 2D ball-combat physics
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, damage)
//! - `tuning`: Data-driven physics balance
//!
//! The crate is a headless physics core: the host owns the window, input
//! mapping and rendering, and calls [`sim::Simulator::advance`] once per
//! frame with the elapsed wall-clock time.

pub mod sim;
pub mod tuning;

pub use sim::{Arena, Ball, Contact, PairRole, Rect, SimEvent, Simulator};
pub use tuning::PhysicsTuning;

use glam::Vec2;

/// Physics configuration defaults
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per advance call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 6;

    /// Per-substep velocity multiplier modeling surface drag (not dt-scaled)
    pub const LINEAR_DAMPING: f32 = 0.985;
    /// Speeds below this are zeroed to stop sub-threshold jitter
    pub const MIN_SLEEP_SPEED: f32 = 6.0;
    /// Extra per-substep damping applied to defeated balls so they settle
    pub const DOWN_DAMPING: f32 = 0.92;

    /// Ball-ball bounciness
    pub const RESTITUTION: f32 = 0.92;
    /// Wall bounciness
    pub const WALL_RESTITUTION: f32 = 0.90;

    /// Impulse-to-damage conversion factor
    pub const DAMAGE_SCALE: f32 = 0.010;
    /// Impulses at or below this magnitude deal no damage
    pub const MIN_DAMAGE_IMPULSE: f32 = 80.0;
    /// Seconds a ball glows after taking damage
    pub const HIT_FLASH_DURATION: f32 = 0.10;

    /// Arena defaults
    pub const ARENA_MARGIN: f32 = 18.0;
    pub const ARENA_WALL_THICKNESS: f32 = 8.0;
}

/// Clamp a vector to a maximum length, zeroing near-degenerate inputs
#[inline]
pub fn limit_vector(v: Vec2, max_len: f32) -> Vec2 {
    let len = v.length();
    if len <= 1e-9 {
        return Vec2::ZERO;
    }
    if len <= max_len {
        v
    } else {
        v * (max_len / len)
    }
}
