//! Fixed-step simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Fixed timestep only; physics constants are per tick
//! - Seeded RNG only (injectable via `rand::Rng`)
//! - One writer: `tick`

pub mod camera;
pub mod particles;
pub mod ship;
pub mod state;
pub mod tick;
pub mod world;


pub use camera::Camera;
pub use particles::{Spark, SparkColor, WindLine};
pub use ship::{GroundContact, Ship};
pub use state::{FlightReport, GameEvent, GamePhase, GameState, PowerMeter};
pub use tick::{TickInput, reset_game, tick};
pub use world::{Cloud, Scenery, Star, World};
