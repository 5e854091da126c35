//! Game settings and preferences
//!
//! Persisted separately from the coin bank through the same key-value store.

use serde::{Deserialize, Serialize};

use crate::persistence::{KeyValueStore, load_json, save_json};
use crate::tuning::Tuning;

/// Which flavor of the world to simulate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WorldVariant {
    /// Flat sky, horizontal-only camera, world regenerated on every reset
    Classic,
    /// Altitude-tinted sky, parallax clouds and stars, smoothed 2D camera
    #[default]
    Sideral,
}

impl WorldVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorldVariant::Classic => "Classic",
            WorldVariant::Sideral => "Sideral",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" | "flat" => Some(WorldVariant::Classic),
            "sideral" | "space" => Some(WorldVariant::Sideral),
            _ => None,
        }
    }

    /// Whether the sky darkens with altitude and cloud/star layers are drawn
    pub fn altitude_effects(&self) -> bool {
        matches!(self, WorldVariant::Sideral)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// World flavor
    pub variant: WorldVariant,

    // === Visual Effects ===
    /// Spark bursts on hard landings
    pub sparks: bool,
    /// Speed streaks during fast flight
    pub wind_lines: bool,

    // === Accessibility ===
    /// Reduced motion (suppresses wind streaks)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: WorldVariant::Sideral,
            sparks: true,
            wind_lines: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Storage key
    const STORAGE_KEY: &'static str = "lancamento_sideral_settings";

    /// Create settings for a world variant
    pub fn for_variant(variant: WorldVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Physics constants for the selected variant
    pub fn tuning(&self) -> Tuning {
        Tuning::for_variant(self.variant)
    }

    /// Effective wind streaks (respects reduced_motion)
    pub fn effective_wind_lines(&self) -> bool {
        self.wind_lines && !self.reduced_motion
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match load_json(store, Self::STORAGE_KEY) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings");
                settings
            }
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable settings: {}", e);
                Self::default()
            }
        }
    }

    /// Save settings; failures are logged and otherwise ignored
    pub fn save(&self, store: &mut dyn KeyValueStore) {
        match save_json(store, Self::STORAGE_KEY, self) {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Settings not saved: {}", e),
        }
    }
}
