//! Game session
//!
//! Owns the simulation state and the persistence store. The host calls
//! [`Session::tick`] once per fixed step and [`Session::render`] once per
//! frame; everything the HUD shows is pushed through a [`StatsSink`].

use crate::coins::CoinBank;
use crate::group_thousands;
use crate::persistence::KeyValueStore;
use crate::renderer::{DrawSurface, render_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::stats::{FormattedReport, StatsSink, distance_label};
use crate::tuning::Tuning;

pub struct Session {
    state: GameState,
    store: Box<dyn KeyValueStore>,
}

impl Session {
    /// Start a session, loading the saved coin bank from `store`
    pub fn new(store: Box<dyn KeyValueStore>, settings: &Settings, seed: u64) -> Self {
        Self::with_tuning(store, settings, settings.tuning(), seed)
    }

    /// Like [`Session::new`] but with explicit physics constants
    pub fn with_tuning(
        store: Box<dyn KeyValueStore>,
        settings: &Settings,
        tuning: Tuning,
        seed: u64,
    ) -> Self {
        let mut state = GameState::configured(seed, settings, tuning);
        state.coins = CoinBank::load(store.as_ref());
        log::info!(
            "Session started: {} world, seed {}, {} coins",
            settings.variant.as_str(),
            seed,
            state.coins.total_coins
        );
        Self { state, store }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Push the full HUD state (call once after construction)
    pub fn sync(&self, sink: &mut dyn StatsSink) {
        sink.total_coins(&group_thousands(self.state.coins.total_coins));
        sink.instructions_visible(self.state.instructions_visible());
        sink.game_over_visible(self.state.game_over_visible());
        sink.distance(&distance_label(self.state.score));
    }

    /// Run one fixed simulation step and react to what it produced
    pub fn tick(&mut self, input: &TickInput, dt: f32, sink: &mut dyn StatsSink) {
        tick(&mut self.state, input, dt);

        for event in &self.state.events {
            match event {
                GameEvent::ChargeStarted => sink.instructions_visible(false),
                GameEvent::Landed(report) => {
                    // The in-memory total stays authoritative if this fails
                    self.state.coins.save(self.store.as_mut());
                    sink.total_coins(&group_thousands(report.total_coins));
                    sink.flight_report(&FormattedReport::new(report));
                    sink.game_over_visible(true);
                }
                GameEvent::Reset => {
                    sink.game_over_visible(false);
                    sink.instructions_visible(true);
                }
                GameEvent::Launched { .. } | GameEvent::Bounced { .. } => {}
            }
        }

        sink.distance(&distance_label(self.state.score));
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        render_frame(surface, &self.state);
    }
}
