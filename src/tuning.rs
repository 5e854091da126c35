//! Data-driven physics constants
//!
//! [`Tuning`] mirrors the defaults in [`crate::consts`]. The two world
//! variants share one simulation core and differ only in the values here.
//! Any subset can be overridden from JSON; missing keys keep the defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::WorldVariant;

/// How the camera follows the ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CameraMode {
    /// Exponential smoothing toward a target that keeps the ship at
    /// `anchor` (fraction of the viewport), clamped above the ground
    Follow { lerp: f32, anchor: Vec2 },
    /// Horizontal offset locked to `ship.x - inset`, no vertical motion
    Locked { inset: f32 },
}

/// Physics and presentation constants for one world variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // ── Viewport ──────────────────────────────────────────────────────────────
    pub viewport: Vec2,
    pub ground_level: f32,

    // ── Ship ──────────────────────────────────────────────────────────────────
    pub ship_size: Vec2,
    pub launch_x: f32,
    pub launch_angle_deg: f32,
    pub launch_scale: f32,

    // ── Physics ───────────────────────────────────────────────────────────────
    pub gravity: f32,
    pub bounciness: f32,
    pub friction: f32,
    pub spark_threshold: f32,
    pub bounce_snap: f32,
    pub rest_speed: f32,

    // ── Power meter ───────────────────────────────────────────────────────────
    pub power_speed: f32,

    // ── Presentation ──────────────────────────────────────────────────────────
    pub camera: CameraMode,
    pub altitude_sky: bool,
    pub parallax: bool,
    pub altitude_space_start: f32,
    pub regenerate_world_on_reset: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::for_variant(WorldVariant::default())
    }
}

impl Tuning {
    /// Constants for a world variant
    pub fn for_variant(variant: WorldVariant) -> Self {
        let sideral = variant.altitude_effects();
        Self {
            viewport: Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
            ground_level: GROUND_LEVEL,
            ship_size: Vec2::new(SHIP_WIDTH, SHIP_HEIGHT),
            launch_x: LAUNCH_X,
            launch_angle_deg: LAUNCH_ANGLE_DEG,
            // Space flights need more punch to reach the stars
            launch_scale: if sideral { 45.0 } else { 35.0 },
            gravity: GRAVITY,
            bounciness: BOUNCINESS,
            friction: FRICTION,
            spark_threshold: SPARK_THRESHOLD,
            bounce_snap: BOUNCE_SNAP,
            rest_speed: REST_SPEED,
            power_speed: POWER_SPEED,
            camera: if sideral {
                CameraMode::Follow {
                    lerp: CAMERA_LERP,
                    anchor: Vec2::new(0.4, 0.6),
                }
            } else {
                CameraMode::Locked { inset: 200.0 }
            },
            altitude_sky: sideral,
            parallax: sideral,
            altitude_space_start: ALTITUDE_SPACE_START,
            regenerate_world_on_reset: !sideral,
        }
    }

    /// Launch pad rest position of the ship
    pub fn launch_pad(&self) -> Vec2 {
        Vec2::new(self.launch_x, self.ground_level)
    }

    /// Lowest camera Y that still keeps the ground in view
    pub fn max_camera_y(&self) -> f32 {
        self.ground_level - self.viewport.y
    }

    /// Apply a JSON override on top of these values
    pub fn with_overrides(&self, json: &str) -> Result<Self, serde_json::Error> {
        let mut base = serde_json::to_value(self)?;
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        if let (Some(base), serde_json::Value::Object(overrides)) = (base.as_object_mut(), overrides)
        {
            base.extend(overrides);
        }
        serde_json::from_value(base)
    }
}
