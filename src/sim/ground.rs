//! Static ground segments
//!
//! A ground is an infinitely rigid line segment. Its orientation angle and
//! length are a pure function of the endpoints, computed once at
//! construction and stored; grounds never change after creation.

use glam::Vec2;

use super::geometry::distance;
use crate::consts::DEGENERATE_SEGMENT_EPS;

/// A static line segment balls collide against.
#[derive(Debug, Clone, PartialEq)]
pub struct Ground {
    pub p1: Vec2,
    pub p2: Vec2,
    angle: f32,
    length: f32,
}

impl Ground {
    /// Build a ground from its endpoints, precomputing angle and length.
    ///
    /// Coincident endpoints produce a degenerate-but-valid ground (length
    /// ~0, angle 0); the collision pass skips those instead of crashing.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let p1 = Vec2::new(x1, y1);
        let p2 = Vec2::new(x2, y2);
        Self {
            p1,
            p2,
            angle: (y2 - y1).atan2(x2 - x1),
            length: distance(p1, p2),
        }
    }

    /// Orientation angle in radians, as computed at construction.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Segment length, as computed at construction.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Squared segment length, used by degeneracy and editor checks.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        (self.p2 - self.p1).length_squared()
    }

    /// True when the endpoints (nearly) coincide. Collision resolution
    /// silently skips degenerate grounds.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.length_squared() < DEGENERATE_SEGMENT_EPS
    }

    /// Unit perpendicular to the segment, from the precomputed angle.
    ///
    /// Used as the fallback contact normal when a ball center sits exactly
    /// on the line.
    #[inline]
    pub fn perpendicular(&self) -> Vec2 {
        Vec2::new(-self.angle.sin(), self.angle.cos())
    }
}
