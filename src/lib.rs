//! Sideral Launch - A 2D arcade launch game
//!
//! Core modules:
//! - `sim`: Fixed-step simulation (ship physics, particles, camera, game state)
//! - `renderer`: Frame drawing against an abstract 2D surface
//! - `session`: Explicit game session tying simulation, persistence and stats together
//! - `platform`: Input latching and fixed-step frame clock
//! - `persistence`: Key-value storage boundary (LocalStorage on web)
//! - `tuning`: Data-driven physics constants per world variant
//! - `coins`, `stats`: Persistent coin bank and HUD formatting

pub mod coins;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod stats;
pub mod tuning;

pub use coins::CoinBank;
pub use session::Session;
pub use settings::{Settings, WorldVariant};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (the physics constants are per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Viewport dimensions (canvas pixels)
    pub const VIEWPORT_WIDTH: f32 = 1200.0;
    pub const VIEWPORT_HEIGHT: f32 = 700.0;
    /// Ground sits this far above the bottom of the viewport
    pub const GROUND_OFFSET: f32 = 100.0;
    pub const GROUND_LEVEL: f32 = VIEWPORT_HEIGHT - GROUND_OFFSET;

    /// Ship defaults
    pub const SHIP_WIDTH: f32 = 60.0;
    pub const SHIP_HEIGHT: f32 = 25.0;
    pub const LAUNCH_X: f32 = 150.0;
    pub const LAUNCH_ANGLE_DEG: f32 = -30.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.2;
    /// Vertical restitution on ground contact
    pub const BOUNCINESS: f32 = 0.6;
    /// Horizontal damping on ground contact
    pub const FRICTION: f32 = 0.95;
    /// Impact speed above which a contact throws sparks
    pub const SPARK_THRESHOLD: f32 = 2.0;
    /// Vertical speed below which a bounce is snapped to zero
    pub const BOUNCE_SNAP: f32 = 1.0;
    /// Horizontal speed below which a grounded ship is at rest
    pub const REST_SPEED: f32 = 0.1;

    /// Power meter
    pub const POWER_MAX: f32 = 100.0;
    pub const POWER_SPEED: f32 = 2.5;

    /// Camera smoothing factor (smaller = smoother)
    pub const CAMERA_LERP: f32 = 0.08;
    /// Altitude (meters) at which the sky is fully space-colored
    pub const ALTITUDE_SPACE_START: f32 = 5000.0;

    /// Particle system
    pub const SPARK_BURST: usize = 20;
    pub const SPARK_FULL_LIFE: f32 = 60.0;
    pub const WIND_SPAWN_CHANCE: f64 = 0.3;
    pub const WIND_MIN_SHIP_SPEED: f32 = 5.0;

    /// Coins awarded per this many meters of distance
    pub const METERS_PER_COIN: u64 = 10;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Group an integer's digits in thousands (`1234567` -> `"1,234,567"`)
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
