//! Ship kinematics and ground contact
//!
//! Explicit Euler integration with per-tick constants: gravity is added to
//! the vertical velocity first, then the position advances by the new
//! velocity. Ground contacts bounce with restitution and friction until the
//! ship settles.

use glam::Vec2;

use super::state::GamePhase;
use crate::tuning::Tuning;

/// The player's ship
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ship {
    /// Keel position (world pixels; y grows downward)
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Launch pad tilt (degrees, negative is nose-up)
    pub angle_deg: f32,
}

/// Outcome of a ground contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundContact {
    /// Contact point on the ground
    pub point: Vec2,
    /// Vertical speed just before the bounce
    pub impact_speed: f32,
    /// Ship has come to rest; the flight is over
    pub settled: bool,
}

impl Ship {
    /// A ship sitting on the launch pad
    pub fn on_pad(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.launch_pad(),
            vel: Vec2::ZERO,
            size: tuning.ship_size,
            angle_deg: tuning.launch_angle_deg,
        }
    }

    /// Return to the pad with zero velocity
    pub fn reset(&mut self, tuning: &Tuning) {
        self.pos = tuning.launch_pad();
        self.vel = Vec2::ZERO;
    }

    /// Launch velocity for a power fraction in [0, 1]
    pub fn launch_velocity(&self, power_fraction: f32, launch_scale: f32) -> Vec2 {
        let force = power_fraction * launch_scale;
        let angle = self.angle_deg.to_radians().abs();
        Vec2::new(angle.cos() * force, -angle.sin() * force)
    }

    /// Leave the pad
    pub fn launch(&mut self, power_fraction: f32, launch_scale: f32) {
        self.vel = self.launch_velocity(power_fraction, launch_scale);
    }

    /// Apply gravity, then move by the updated velocity
    pub fn integrate(&mut self, gravity: f32) {
        self.vel.y += gravity;
        self.pos += self.vel;
    }

    /// Magnitude of the velocity
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Resolve contact with the ground, if the keel has reached it
    ///
    /// Order matters: the vertical snap runs before the rest test, otherwise
    /// the ship never satisfies both thresholds in the same tick.
    pub fn resolve_ground(&mut self, tuning: &Tuning) -> Option<GroundContact> {
        if self.pos.y < tuning.ground_level {
            return None;
        }

        self.pos.y = tuning.ground_level;
        let impact_speed = self.vel.y.abs();

        self.vel.y = -self.vel.y * tuning.bounciness;
        self.vel.x *= tuning.friction;
        if self.vel.y.abs() < tuning.bounce_snap {
            self.vel.y = 0.0;
        }

        let settled = self.vel.x.abs() < tuning.rest_speed && self.vel.y == 0.0;
        if settled {
            self.vel = Vec2::ZERO;
        }

        Some(GroundContact {
            point: self.pos,
            impact_speed,
            settled,
        })
    }

    /// Whether the ship is above the ground
    pub fn airborne(&self, ground_level: f32) -> bool {
        self.pos.y < ground_level
    }

    /// Orientation to draw the ship with (radians)
    pub fn render_angle(&self, phase: GamePhase) -> f32 {
        match phase {
            GamePhase::InFlight if self.vel != Vec2::ZERO => self.vel.y.atan2(self.vel.x),
            GamePhase::InFlight | GamePhase::GameOver => 0.0,
            GamePhase::Ready | GamePhase::Charging => self.angle_deg.to_radians(),
        }
    }

    /// Whether the engine flame is lit
    pub fn flame_lit(&self, phase: GamePhase, ground_level: f32) -> bool {
        match phase {
            GamePhase::Charging => true,
            GamePhase::InFlight => self.airborne(ground_level),
            _ => false,
        }
    }
}
