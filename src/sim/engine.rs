//! Physics engine: integration and collision resolution
//!
//! One [`Engine::step`] advances every ball by a fixed timestep in three
//! passes, in this exact order:
//!
//! 1. Per-ball fused integration: gravity, speed clamp / air drag, then the
//!    kinematic position update.
//! 2. Ball-ball collisions, all unordered pairs in ascending index order.
//! 3. Ball-ground collisions, ball-major.
//!
//! A single pass with no iterative solver or sub-stepping; dense clusters
//! may keep residual overlap for a tick. Per-tick cost is O(n² + n·m).

use glam::Vec2;

use super::ball::Ball;
use super::geometry::{closest_point_on_segment, distance, tangent};
use super::ground::Ground;

/// Tunable physical constants, read by the engine every tick.
///
/// Out-of-range values (elasticity above 1, negative friction, ...) are
/// accepted without validation: the sandbox treats them as house rules for
/// free experimentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Downward acceleration, units/s²
    pub gravity: f32,
    /// Coefficient of restitution, [0, 1]
    pub elasticity: f32,
    /// Tangential damping on ground contact, [0, 1]
    pub friction: f32,
    /// Velocity-proportional drag coefficient
    pub air_resistance: f32,
    /// Hard speed cap, units/s
    pub max_speed: f32,
    /// Speeds under this snap to zero after drag (numerical sleep threshold)
    pub min_speed: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gravity: 981.0,
            elasticity: 0.7,
            friction: 0.15,
            air_resistance: 0.002,
            max_speed: 1000.0,
            min_speed: 0.1,
        }
    }
}

/// The integration and collision engine.
///
/// Holds no entity state; callers wanting independent simulations create
/// independent `Engine` instances with their own configs.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Advance all balls by `dt` and resolve collisions, mutating `balls` in
    /// place. Grounds are never mutated.
    ///
    /// `dt <= 0` or non-finite is a caller contract violation; the tick is
    /// skipped with a warning rather than running integration backward.
    pub fn step(&self, balls: &mut [Ball], grounds: &[Ground], dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            log::warn!("step called with invalid dt {dt}; skipping tick");
            return;
        }

        self.integrate(balls, dt);
        self.resolve_ball_collisions(balls);
        self.resolve_ground_collisions(balls, grounds);
    }

    /// Fused per-ball pass: gravity, speed clamp or drag, position update.
    ///
    /// The speed used for both the clamp and the sleep check is measured
    /// once, after gravity and before drag.
    fn integrate(&self, balls: &mut [Ball], dt: f32) {
        for ball in balls.iter_mut() {
            ball.vel.y += self.config.gravity * dt;

            let speed = ball.vel.length();
            if speed > self.config.max_speed {
                // Rescale to the cap, direction preserved
                ball.vel *= self.config.max_speed / speed;
            } else if speed > 0.0 {
                ball.vel *= 1.0 - self.config.air_resistance * dt;
                if speed < self.config.min_speed {
                    ball.vel = Vec2::ZERO;
                }
            }

            ball.advance(dt);
        }
    }

    /// All-pairs ball collision pass in ascending `(i, j)` order.
    ///
    /// Later pairs see positions and velocities already corrected by earlier
    /// pairs within the same tick.
    fn resolve_ball_collisions(&self, balls: &mut [Ball]) {
        for i in 0..balls.len() {
            for j in (i + 1)..balls.len() {
                let (head, tail) = balls.split_at_mut(j);
                self.resolve_ball_pair(&mut head[i], &mut tail[0]);
            }
        }
    }

    fn resolve_ball_pair(&self, a: &mut Ball, b: &mut Ball) {
        let dist = distance(a.pos, b.pos);
        if dist >= a.radius + b.radius {
            return;
        }
        // Coincident centers give no usable normal; skip the pair this tick
        // instead of propagating NaN.
        if dist == 0.0 {
            return;
        }

        let normal = (b.pos - a.pos) / dist;
        let rel_vel = a.vel - b.vel;
        let impulse = 2.0 * rel_vel.dot(normal) / (a.mass + b.mass);

        // Elasticity scales the impulse itself; an approximation, not exact
        // restitution, kept for scene compatibility.
        a.vel -= impulse * b.mass * self.config.elasticity * normal;
        b.vel += impulse * a.mass * self.config.elasticity * normal;

        // Push each ball out by half the overlap
        let overlap = (a.radius + b.radius - dist) / 2.0;
        a.pos -= overlap * normal;
        b.pos += overlap * normal;
    }

    /// Ball-ground pass, ball-major, ground-minor.
    fn resolve_ground_collisions(&self, balls: &mut [Ball], grounds: &[Ground]) {
        for ball in balls.iter_mut() {
            for ground in grounds {
                self.resolve_ground_contact(ball, ground);
            }
        }
    }

    fn resolve_ground_contact(&self, ball: &mut Ball, ground: &Ground) {
        // Degenerate segments have no projection and are skipped
        let Some((closest, _)) = closest_point_on_segment(ball.pos, ground.p1, ground.p2) else {
            return;
        };

        let offset = ball.pos - closest;
        let dist = offset.length();
        if dist >= ball.radius {
            return;
        }

        // Center exactly on the line: fall back to the precomputed
        // perpendicular since the offset gives no direction.
        let normal = if dist > 0.0 {
            offset / dist
        } else {
            ground.perpendicular()
        };

        // Only resolve balls moving into the ground. Balls separating or
        // sliding tangentially are left untouched even while overlapping.
        let vn = ball.vel.dot(normal);
        if vn >= 0.0 {
            return;
        }

        let tang = tangent(normal);
        let vt = ball.vel.dot(tang);
        let bounced = -vn * self.config.elasticity;
        let damped = vt * (1.0 - self.config.friction);
        ball.vel = bounced * normal + damped * tang;

        // Full de-penetration, unlike the half correction for ball pairs
        ball.pos += normal * (ball.radius - dist);
    }
}
