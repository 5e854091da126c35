//! Persistent coin bank
//!
//! Persisted to the key-value store as `{ "totalCoins": n }`, loaded once at
//! startup and written after every completed flight.

use serde::{Deserialize, Serialize};

use crate::consts::METERS_PER_COIN;
use crate::persistence::{KeyValueStore, load_json, save_json};

/// Total coins collected across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CoinBank {
    #[serde(rename = "totalCoins", default)]
    pub total_coins: u64,
}

impl CoinBank {
    /// Storage key for the saved record
    pub const STORAGE_KEY: &'static str = "lancamento_sideral_data";

    pub fn new(total_coins: u64) -> Self {
        Self { total_coins }
    }

    /// Coins awarded for a flight of `distance` meters
    pub fn coins_for_distance(distance: u64) -> u64 {
        distance / METERS_PER_COIN
    }

    /// Add coins to the bank, returning the new total
    pub fn deposit(&mut self, coins: u64) -> u64 {
        self.total_coins = self.total_coins.saturating_add(coins);
        self.total_coins
    }

    /// Load the bank, falling back to an empty one on any failure
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match load_json::<CoinBank>(store, Self::STORAGE_KEY) {
            Ok(Some(bank)) => {
                log::info!("Loaded coin bank ({} coins)", bank.total_coins);
                bank
            }
            Ok(None) => {
                log::info!("No saved coins found, starting fresh");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable coin bank: {}", e);
                Self::default()
            }
        }
    }

    /// Save the bank; failures are logged and otherwise ignored
    pub fn save(&self, store: &mut dyn KeyValueStore) {
        match save_json(store, Self::STORAGE_KEY, self) {
            Ok(()) => log::info!("Coin bank saved ({} coins)", self.total_coins),
            Err(e) => log::warn!("Coin bank not saved: {}", e),
        }
    }
}
