//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (ascending ball index)
//! - No rendering or platform dependencies

pub mod arena;
pub mod ball;
pub mod collision;
pub mod launch;
pub mod step;

pub use arena::{Arena, Rect};
pub use ball::Ball;
pub use collision::{Contact, PairRole, resolve_pair, resolve_wall};
pub use launch::{clamp_drag, drag_launch};
pub use step::{SimEvent, Simulator};
