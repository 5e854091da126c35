//! Camera follow
//!
//! A single-pole low-pass filter toward a target derived from the ship, so
//! the camera converges without overshoot.

use glam::Vec2;

use crate::tuning::{CameraMode, Tuning};

/// World-space offset of the top-left corner of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    pub pos: Vec2,
}

impl Camera {
    /// Where the camera wants to be for a ship position
    pub fn target(ship_pos: Vec2, tuning: &Tuning) -> Vec2 {
        match tuning.camera {
            CameraMode::Follow { anchor, .. } => ship_pos - tuning.viewport * anchor,
            CameraMode::Locked { inset } => Vec2::new(ship_pos.x - inset, 0.0),
        }
    }

    /// Move one tick toward the ship
    pub fn follow(&mut self, ship_pos: Vec2, tuning: &Tuning) {
        let target = Self::target(ship_pos, tuning);
        match tuning.camera {
            CameraMode::Follow { lerp, .. } => {
                self.pos += (target - self.pos) * lerp;
                // Never scroll the ground out of view
                self.pos.y = self.pos.y.min(tuning.max_camera_y());
            }
            CameraMode::Locked { .. } => self.pos = target,
        }
    }

    pub fn reset(&mut self) {
        self.pos = Vec2::ZERO;
    }
}
