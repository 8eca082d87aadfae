//! Arena boundary geometry
//!
//! The playable region is a rectangle inset twice: first by a cosmetic
//! margin, then by the wall thickness. Balls live inside the inner
//! rectangle; all queries are pure geometry.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Shrink (negative amount) or grow the rect about its center
    pub fn inflate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x - dx / 2.0,
            y: self.y - dy / 2.0,
            w: self.w + dx,
            h: self.h + dy,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }
}

/// The bounded play area
///
/// Constructed once per session; `resize` is the only mutation. The inner
/// rectangle must stay non-degenerate for a valid configuration, i.e.
/// `width > 2 * (margin + wall_thickness)` and likewise for height.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub wall_thickness: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32, margin: f32, wall_thickness: f32) -> Self {
        Self {
            width,
            height,
            margin,
            wall_thickness,
        }
    }

    /// Arena with the default margin and wall thickness
    pub fn with_defaults(width: f32, height: f32) -> Self {
        Self::new(
            width,
            height,
            crate::consts::ARENA_MARGIN,
            crate::consts::ARENA_WALL_THICKNESS,
        )
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Full bounds inset by the margin (the wall band's outer edge)
    pub fn outer_rect(&self) -> Rect {
        Rect::new(
            self.margin,
            self.margin,
            self.width - 2.0 * self.margin,
            self.height - 2.0 * self.margin,
        )
    }

    /// The region balls may occupy (outer rect shrunk by wall thickness)
    pub fn inner_rect(&self) -> Rect {
        self.outer_rect()
            .inflate(-2.0 * self.wall_thickness, -2.0 * self.wall_thickness)
    }

    /// Legal range for the center of a circle of the given radius
    ///
    /// Returns `(left, right, top, bottom)`. If the circle is too large for
    /// the inner rect, left may exceed right (same for top/bottom); callers
    /// clamp each axis directly instead of assuming an ordered interval.
    pub fn bounds_for_circle(&self, radius: f32) -> (f32, f32, f32, f32) {
        let inner = self.inner_rect();
        (
            inner.left() + radius,
            inner.right() - radius,
            inner.top() + radius,
            inner.bottom() - radius,
        )
    }

    /// Whether a point lies inside the playable inner rectangle
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        self.inner_rect().contains(x, y)
    }

    /// Clamp a candidate circle center into its legal range
    ///
    /// For placement and recovery only; velocity response is the wall
    /// resolver's job.
    pub fn clamp_position(&self, x: f32, y: f32, radius: f32) -> Vec2 {
        let (left, right, top, bottom) = self.bounds_for_circle(radius);
        Vec2::new(x.max(left).min(right), y.max(top).min(bottom))
    }
}
