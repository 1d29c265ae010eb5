//! Scene state: live entity collections plus the per-tick driver
//!
//! The scene owns the balls, grounds, and one engine instance, and applies
//! out-of-bounds culling after each step. Front-ends (renderer, editor,
//! settings dialog) talk to the simulation exclusively through this type.

use glam::Vec2;

use super::ball::Ball;
use super::engine::{Engine, EngineConfig};
use super::ground::Ground;
use super::SimError;
use crate::consts::{CULL_MARGIN, MIN_GROUND_LENGTH_SQ, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

/// Rectangular bounds used for out-of-bounds culling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Extra room below the bottom edge before a ball is culled, so balls
    /// can dip off-screen and bounce back
    pub cull_margin: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
            cull_margin: CULL_MARGIN,
        }
    }
}

impl Viewport {
    /// True when a ball centered at `pos` should be removed.
    #[inline]
    fn is_out_of_bounds(&self, pos: Vec2) -> bool {
        pos.x <= 0.0 || pos.x >= self.width || pos.y >= self.height + self.cull_margin
    }
}

/// Owns the live entity collections and drives the engine once per tick.
#[derive(Debug, Default)]
pub struct Scene {
    engine: Engine,
    balls: Vec<Ball>,
    grounds: Vec<Ground>,
    viewport: Viewport,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.engine.config
    }

    /// Mutable access for the settings collaborator; safe between ticks.
    pub fn config_mut(&mut self) -> &mut EngineConfig {
        &mut self.engine.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Read-only view for renderers; nothing outside the scene mutates
    /// entities directly.
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn grounds(&self) -> &[Ground] {
        &self.grounds
    }

    /// Place a ball at rest with the default mass.
    pub fn add_ball(&mut self, x: f32, y: f32, radius: f32) -> Result<(), SimError> {
        self.balls.push(Ball::new(x, y, radius)?);
        log::debug!("ball added at ({x}, {y}) r={radius}");
        Ok(())
    }

    /// Place a ball at rest with an explicit mass.
    pub fn add_ball_with_mass(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        mass: f32,
    ) -> Result<(), SimError> {
        self.balls.push(Ball::with_mass(x, y, radius, mass)?);
        log::debug!("ball added at ({x}, {y}) r={radius} m={mass}");
        Ok(())
    }

    /// Add a ground from a drag-release gesture.
    ///
    /// Segments with squared length at or under the minimum are rejected as
    /// misclicks; the scene is left unchanged.
    pub fn add_ground(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), SimError> {
        let length_sq = (x2 - x1) * (x2 - x1) + (y2 - y1) * (y2 - y1);
        if length_sq <= MIN_GROUND_LENGTH_SQ {
            return Err(SimError::GroundTooShort {
                length_sq,
                min: MIN_GROUND_LENGTH_SQ,
            });
        }
        self.grounds.push(Ground::new(x1, y1, x2, y2));
        log::debug!("ground added ({x1}, {y1}) -> ({x2}, {y2})");
        Ok(())
    }

    /// Insert a prebuilt ground, bypassing the editor drag-length threshold.
    ///
    /// Level files may carry short segments; the collision pass skips the
    /// degenerate ones.
    pub fn insert_ground(&mut self, ground: Ground) {
        self.grounds.push(ground);
    }

    /// Drop all balls and grounds.
    pub fn clear(&mut self) {
        log::info!(
            "scene cleared ({} balls, {} grounds)",
            self.balls.len(),
            self.grounds.len()
        );
        self.balls.clear();
        self.grounds.clear();
    }

    /// Advance the simulation by one fixed timestep, then cull balls that
    /// left the viewport. Culling runs strictly after the step so removal
    /// never disturbs the engine's iteration. Returns the number culled.
    pub fn tick(&mut self, dt: f32) -> usize {
        self.engine.step(&mut self.balls, &self.grounds, dt);

        let before = self.balls.len();
        let viewport = self.viewport;
        self.balls.retain(|ball| !viewport.is_out_of_bounds(ball.pos));
        let culled = before - self.balls.len();
        if culled > 0 {
            log::debug!("culled {culled} out-of-bounds ball(s)");
        }
        culled
    }
}
