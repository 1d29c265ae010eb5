//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (scene insertion order)
//! - No rendering or platform dependencies

pub mod ball;
pub mod engine;
pub mod geometry;
pub mod ground;
pub mod scene;

pub use ball::{Ball, DEFAULT_MASS};
pub use engine::{Engine, EngineConfig};
pub use geometry::{closest_point_on_segment, distance, tangent};
pub use ground::Ground;
pub use scene::{Scene, Viewport};

use thiserror::Error;

/// Errors from entity construction and scene editing.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SimError {
    /// A constructor argument was out of range (non-positive or non-finite).
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
    /// The dragged ground segment was too short to keep.
    #[error("ground segment too short: squared length {length_sq} is at or under the minimum {min}")]
    GroundTooShort { length_sq: f32, min: f32 },
}
