//! Tumble - a headless 2D ball physics sandbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, scene state)
//! - `persistence`: Versioned JSON scene save/load
//!
//! Rendering, windowing, and input live in external front-ends; they call
//! [`sim::Scene::tick`] once per fixed timestep and read positions back.

pub mod persistence;
pub mod sim;

pub use persistence::{PersistenceError, SceneFile};
pub use sim::{Ball, Engine, EngineConfig, Ground, Scene, SimError, Viewport};

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Default viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;
    /// Extra room below the viewport before a falling ball is culled
    pub const CULL_MARGIN: f32 = 100.0;

    /// Grounds with squared length at or below this are rejected by the
    /// editor path (a drag-release shorter than 10 units is a misclick)
    pub const MIN_GROUND_LENGTH_SQ: f32 = 100.0;
    /// Segments below this squared length have no usable direction and are
    /// skipped by collision resolution
    pub const DEGENERATE_SEGMENT_EPS: f32 = 1e-4;
}
