//! Ball entity
//!
//! One simulated disc. The engine mutates velocity and position every tick;
//! the scene driver destroys balls that leave the viewport.

use glam::Vec2;

use super::SimError;

/// Mass assigned when a ball is created without an explicit one.
pub const DEFAULT_MASS: f32 = 1.0;

/// A simulated disc.
///
/// Radius and mass stay strictly positive for the ball's lifetime; both are
/// validated at construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub mass: f32,
}

impl Ball {
    /// Create a ball at rest with the default mass.
    pub fn new(x: f32, y: f32, radius: f32) -> Result<Self, SimError> {
        Self::with_mass(x, y, radius, DEFAULT_MASS)
    }

    /// Create a ball at rest.
    ///
    /// Rejects non-positive or non-finite radius and mass up front so NaN
    /// never reaches the impulse division in the engine.
    pub fn with_mass(x: f32, y: f32, radius: f32, mass: f32) -> Result<Self, SimError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(SimError::InvalidParameter("position must be finite"));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SimError::InvalidParameter(
                "radius must be positive and finite",
            ));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SimError::InvalidParameter(
                "mass must be positive and finite",
            ));
        }

        Ok(Self {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            radius,
            mass,
        })
    }

    /// Kinematic update: apply the current velocity over `dt`.
    ///
    /// Called once per ball per tick, before collision resolution.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Current speed (velocity magnitude).
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}
