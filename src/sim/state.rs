//! Game state and core simulation types
//!
//! Everything one session mutates lives in [`GameState`]; the tick is the
//! only writer.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::camera::Camera;
use super::particles::{Spark, WindLine};
use super::ship::Ship;
use super::world::World;
use crate::coins::CoinBank;
use crate::consts::POWER_MAX;
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ship on the pad, waiting for the player to press
    Ready,
    /// Player holding; the power meter oscillates
    Charging,
    /// Ship airborne or bouncing
    InFlight,
    /// Ship settled; summary shown until restart
    GameOver,
}

/// Oscillating launch power gauge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerMeter {
    /// Current power in [0, 100]
    pub value: f32,
    /// Change per tick
    pub speed: f32,
    /// +1 rising, -1 falling
    pub direction: f32,
}

impl PowerMeter {
    pub fn new(speed: f32) -> Self {
        Self {
            value: 0.0,
            speed,
            direction: 1.0,
        }
    }

    /// Advance one tick, bouncing off both ends of the range
    pub fn advance(&mut self) {
        self.value += self.speed * self.direction;
        if self.value >= POWER_MAX {
            self.value = POWER_MAX;
            self.direction = -1.0;
        }
        if self.value <= 0.0 {
            self.value = 0.0;
            self.direction = 1.0;
        }
    }

    /// Power as a fraction of maximum
    pub fn fraction(&self) -> f32 {
        self.value / POWER_MAX
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
        self.direction = 1.0;
    }
}

/// Final numbers for a completed flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightReport {
    /// Furthest horizontal distance (meters)
    pub distance: u64,
    pub coins_earned: u64,
    /// Bank total after this flight's deposit
    pub total_coins: u64,
    pub max_altitude: f32,
    pub max_speed: f32,
    /// Seconds from launch to rest
    pub duration_secs: f64,
}

/// Things that happened during a tick, for the host to react to
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Player pressed; meter started charging
    ChargeStarted,
    /// Player released; ship left the pad
    Launched { power: f32 },
    /// Ship hit the ground with this vertical speed
    Bounced { impact_speed: f32, sparks: bool },
    /// Ship came to rest; coins have been deposited
    Landed(FlightReport),
    /// Session returned to Ready
    Reset,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Physics constants for this session
    pub tuning: Tuning,
    /// Spark bursts enabled
    pub sparks_enabled: bool,
    /// Wind streaks enabled
    pub wind_lines_enabled: bool,
    /// Random source for world and particle generation
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    pub ship: Ship,
    pub power: PowerMeter,
    pub camera: Camera,
    /// Scenery, clouds and stars
    pub world: World,
    /// Visual particles (not gameplay-affecting)
    pub sparks: Vec<Spark>,
    pub wind_lines: Vec<WindLine>,
    /// Furthest distance this flight (meters)
    pub score: u64,
    pub max_altitude: f32,
    pub max_speed: f32,
    /// Simulation time at launch
    pub flight_start_secs: f64,
    /// Simulation clock (sum of tick deltas)
    pub time_secs: f64,
    /// Coins across all sessions
    pub coins: CoinBank,
    /// Summary of the last completed flight (until reset)
    pub report: Option<FlightReport>,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session from settings
    pub fn new(seed: u64, settings: &Settings) -> Self {
        Self::configured(seed, settings, settings.tuning())
    }

    /// Create a new session from settings with replaced constants
    pub fn configured(seed: u64, settings: &Settings, tuning: Tuning) -> Self {
        let mut state = Self::with_tuning(seed, tuning);
        state.sparks_enabled = settings.sparks;
        state.wind_lines_enabled = settings.effective_wind_lines();
        state
    }

    /// Create a new session with explicit constants
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let world = World::generate(&mut rng, &tuning);
        Self {
            rng,
            phase: GamePhase::Ready,
            ship: Ship::on_pad(&tuning),
            power: PowerMeter::new(tuning.power_speed),
            camera: Camera::default(),
            world,
            sparks: Vec::new(),
            wind_lines: Vec::new(),
            score: 0,
            max_altitude: 0.0,
            max_speed: 0.0,
            flight_start_secs: 0.0,
            time_secs: 0.0,
            coins: CoinBank::default(),
            report: None,
            events: Vec::new(),
            sparks_enabled: true,
            wind_lines_enabled: true,
            tuning,
        }
    }

    /// Whether the "press to launch" instructions should be visible
    pub fn instructions_visible(&self) -> bool {
        self.phase == GamePhase::Ready
    }

    /// Whether the game-over summary should be visible
    pub fn game_over_visible(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Ship altitude above the ground (never negative)
    pub fn altitude(&self) -> f32 {
        (self.tuning.ground_level - self.ship.pos.y).max(0.0)
    }

    /// Altitude as a fraction of the height where space begins
    pub fn altitude_ratio(&self) -> f32 {
        (self.altitude() / self.tuning.altitude_space_start).min(1.0)
    }

    /// Seconds elapsed since launch (0 before launch)
    pub fn flight_secs(&self) -> f64 {
        match self.phase {
            GamePhase::InFlight => self.time_secs - self.flight_start_secs,
            GamePhase::GameOver => self.report.map(|r| r.duration_secs).unwrap_or(0.0),
            _ => 0.0,
        }
    }
}
