//! Scene save/load
//!
//! Versioned JSON documents holding the minimal state needed to rebuild a
//! scene: ball positions and radii, ground endpoints, and the three headline
//! engine constants. Velocity and mass are deliberately not persisted;
//! reload puts every ball back at rest with the default mass. Ground angle
//! and length are recomputed at construction rather than stored.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::{Ground, Scene, SimError, Viewport};

/// Current on-disk format version.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read or write scene file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scene file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported scene format version {0} (expected {FORMAT_VERSION})")]
    UnsupportedVersion(u32),
    #[error("scene file contains invalid data: {0}")]
    Invalid(#[from] SimError),
}

/// One persisted ball: placement only, no velocity or mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallRecord {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// One persisted ground: endpoints only, derived attributes recomputed on load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundRecord {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// A complete scene snapshot as written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneFile {
    pub version: u32,
    pub gravity: f32,
    pub elasticity: f32,
    pub friction: f32,
    pub balls: Vec<BallRecord>,
    pub grounds: Vec<GroundRecord>,
}

impl SceneFile {
    /// Snapshot the live scene.
    pub fn capture(scene: &Scene) -> Self {
        let config = scene.config();
        Self {
            version: FORMAT_VERSION,
            gravity: config.gravity,
            elasticity: config.elasticity,
            friction: config.friction,
            balls: scene
                .balls()
                .iter()
                .map(|ball| BallRecord {
                    x: ball.pos.x,
                    y: ball.pos.y,
                    radius: ball.radius,
                })
                .collect(),
            grounds: scene
                .grounds()
                .iter()
                .map(|ground| GroundRecord {
                    x1: ground.p1.x,
                    y1: ground.p1.y,
                    x2: ground.p2.x,
                    y2: ground.p2.y,
                })
                .collect(),
        }
    }

    /// Rebuild a scene with the default viewport.
    pub fn restore(&self) -> Result<Scene, PersistenceError> {
        self.restore_with_viewport(Viewport::default())
    }

    /// Rebuild a scene. Balls come back at rest with the default mass;
    /// engine constants not present in the file keep their defaults.
    pub fn restore_with_viewport(&self, viewport: Viewport) -> Result<Scene, PersistenceError> {
        if self.version != FORMAT_VERSION {
            return Err(PersistenceError::UnsupportedVersion(self.version));
        }

        let mut scene = Scene::with_viewport(viewport);
        {
            let config = scene.config_mut();
            config.gravity = self.gravity;
            config.elasticity = self.elasticity;
            config.friction = self.friction;
        }
        for ball in &self.balls {
            scene.add_ball(ball.x, ball.y, ball.radius)?;
        }
        for ground in &self.grounds {
            scene.insert_ground(Ground::new(ground.x1, ground.y1, ground.x2, ground.y2));
        }
        Ok(scene)
    }

    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the snapshot to disk as JSON.
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistenceError> {
        fs::write(path.as_ref(), self.to_json()?)?;
        log::info!(
            "saved scene ({} balls, {} grounds) to {}",
            self.balls.len(),
            self.grounds.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Read a snapshot back from disk.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let json = fs::read_to_string(path.as_ref())?;
        let file = Self::from_json(&json)?;
        log::info!(
            "loaded scene ({} balls, {} grounds) from {}",
            file.balls.len(),
            file.grounds.len(),
            path.as_ref().display()
        );
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn sample_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add_ball(200.0, 100.0, 20.0).unwrap();
        scene.add_ball(400.0, 200.0, 30.0).unwrap();
        scene.add_ground(100.0, 500.0, 700.0, 500.0).unwrap();
        scene.add_ground(200.0, 400.0, 500.0, 200.0).unwrap();
        scene.config_mut().gravity = 500.0;
        scene.config_mut().elasticity = 0.9;
        scene.config_mut().friction = 0.05;
        scene
    }

    #[test]
    fn test_round_trip_preserves_placement() {
        let mut scene = sample_scene();
        // Run a few ticks so balls pick up velocity before the save
        for _ in 0..10 {
            scene.tick(crate::consts::SIM_DT);
        }

        let file = SceneFile::capture(&scene);
        let json = file.to_json().unwrap();
        let restored = SceneFile::from_json(&json).unwrap().restore().unwrap();

        assert_eq!(restored.balls().len(), scene.balls().len());
        for (restored_ball, ball) in restored.balls().iter().zip(scene.balls()) {
            assert_eq!(restored_ball.pos, ball.pos);
            assert_eq!(restored_ball.radius, ball.radius);
            // Velocity resets, mass returns to the construction default
            assert_eq!(restored_ball.vel, Vec2::ZERO);
            assert_eq!(restored_ball.mass, crate::sim::DEFAULT_MASS);
        }

        assert_eq!(restored.grounds().len(), scene.grounds().len());
        for (restored_ground, ground) in restored.grounds().iter().zip(scene.grounds()) {
            assert_eq!(restored_ground.p1, ground.p1);
            assert_eq!(restored_ground.p2, ground.p2);
            // Derived attributes recomputed, not stored
            assert!((restored_ground.angle() - ground.angle()).abs() < 1e-6);
            assert!((restored_ground.length() - ground.length()).abs() < 1e-4);
        }

        assert_eq!(restored.config().gravity, 500.0);
        assert_eq!(restored.config().elasticity, 0.9);
        assert_eq!(restored.config().friction, 0.05);
        // Constants outside the on-disk format keep their defaults
        assert_eq!(
            restored.config().air_resistance,
            crate::sim::EngineConfig::default().air_resistance
        );
    }

    #[test]
    fn test_unknown_version_rejected() {
        let mut file = SceneFile::capture(&Scene::new());
        file.version = 99;
        assert!(matches!(
            file.restore(),
            Err(PersistenceError::UnsupportedVersion(99))
        ));
    }

    #[test]
    fn test_invalid_ball_record_rejected() {
        let file = SceneFile {
            version: FORMAT_VERSION,
            gravity: 981.0,
            elasticity: 0.7,
            friction: 0.15,
            balls: vec![BallRecord {
                x: 100.0,
                y: 100.0,
                radius: -5.0,
            }],
            grounds: vec![],
        };
        assert!(matches!(file.restore(), Err(PersistenceError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            SceneFile::from_json("{ not json"),
            Err(PersistenceError::Json(_))
        ));
    }

    #[test]
    fn test_file_round_trip() {
        let file = SceneFile::capture(&sample_scene());
        let path = std::env::temp_dir().join("tumble_scene_roundtrip.json");

        file.save_to_path(&path).unwrap();
        let loaded = SceneFile::load_from_path(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded.balls, file.balls);
        assert_eq!(loaded.grounds, file.grounds);
        assert_eq!(loaded.gravity, file.gravity);
    }
}
