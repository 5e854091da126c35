//! Visual particles: landing sparks and speed streaks
//!
//! Purely cosmetic. Neither collection feeds back into the ship physics,
//! and neither cares about element order.

use glam::Vec2;
use rand::Rng;

use super::ship::Ship;
use super::state::GamePhase;
use crate::consts::{SPARK_BURST, SPARK_FULL_LIFE, WIND_MIN_SHIP_SPEED, WIND_SPAWN_CHANCE};
use crate::tuning::Tuning;

/// Spark palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparkColor {
    Orange,
    Gold,
}

impl SparkColor {
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            SparkColor::Orange => (0xFF, 0xA5, 0x00),
            SparkColor::Gold => (0xFF, 0xD7, 0x00),
        }
    }
}

/// A spark thrown off by a hard landing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spark {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Ticks left to live
    pub life: u32,
    pub color: SparkColor,
}

impl Spark {
    /// Opacity from remaining life
    pub fn alpha(&self) -> f32 {
        (self.life as f32 / SPARK_FULL_LIFE).min(1.0)
    }
}

/// Emit a burst of sparks at a contact point
pub fn spawn_sparks<R: Rng + ?Sized>(sparks: &mut Vec<Spark>, rng: &mut R, at: Vec2) {
    sparks.reserve(SPARK_BURST);
    for _ in 0..SPARK_BURST {
        // Mostly orange, some gold
        let color = if rng.random::<f32>() > 0.3 {
            SparkColor::Orange
        } else {
            SparkColor::Gold
        };
        sparks.push(Spark {
            pos: at,
            vel: Vec2::new(
                (rng.random::<f32>() - 0.5) * 8.0,
                -rng.random::<f32>() * 10.0,
            ),
            size: rng.random::<f32>() * 3.0 + 1.0,
            life: rng.random_range(30..90),
            color,
        });
    }
}

/// Advance sparks one tick under half gravity and drop the dead ones
pub fn update_sparks(sparks: &mut Vec<Spark>, gravity: f32) {
    for spark in sparks.iter_mut() {
        spark.vel.y += gravity * 0.5;
        spark.pos += spark.vel;
        spark.life = spark.life.saturating_sub(1);
    }
    sparks.retain(|s| s.life > 0);
}

/// A screen-space speed streak
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindLine {
    /// Left end (screen pixels)
    pub pos: Vec2,
    pub length: f32,
    /// Leftward scroll per tick
    pub speed: f32,
    pub alpha: f32,
    /// Fade-in target
    pub max_alpha: f32,
    /// Shimmer phase (radians)
    pub pulse_offset: f32,
}

/// Whether the ship is fast and high enough to streak
pub fn wind_conditions(ship: &Ship, phase: GamePhase, ground_level: f32) -> bool {
    phase == GamePhase::InFlight && ship.vel.x > WIND_MIN_SHIP_SPEED && ship.airborne(ground_level)
}

/// Maybe spawn one streak just past the right edge of the viewport
pub fn maybe_spawn_wind_line<R: Rng + ?Sized>(
    lines: &mut Vec<WindLine>,
    rng: &mut R,
    ship: &Ship,
    phase: GamePhase,
    tuning: &Tuning,
) -> bool {
    if !wind_conditions(ship, phase, tuning.ground_level) || !rng.random_bool(WIND_SPAWN_CHANCE) {
        return false;
    }
    lines.push(WindLine {
        pos: Vec2::new(
            tuning.viewport.x + rng.random::<f32>() * 100.0,
            rng.random::<f32>() * tuning.viewport.y,
        ),
        length: rng.random::<f32>() * 40.0 + 20.0,
        speed: ship.vel.x * 0.4 + 3.0,
        alpha: 0.0,
        max_alpha: rng.random::<f32>() * 0.4 + 0.2,
        pulse_offset: rng.random::<f32>() * std::f32::consts::TAU,
    });
    true
}

/// Scroll, fade and cull streaks
pub fn update_wind_lines(lines: &mut Vec<WindLine>, viewport_width: f32, time_secs: f64) {
    let fade_out_x = viewport_width * 0.2;
    for line in lines.iter_mut() {
        line.pos.x -= line.speed;
        if line.alpha < line.max_alpha {
            line.alpha += 0.02;
        } else if line.pos.x < fade_out_x {
            line.alpha -= 0.03;
        }
        let pulse = ((time_secs * 10.0) as f32 + line.pulse_offset).sin();
        line.alpha *= 1.0 + pulse * 0.1;
    }
    lines.retain(|l| l.pos.x + l.length >= 0.0 && l.alpha > 0.0);
}
