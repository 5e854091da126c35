//! Fixed timestep simulation tick
//!
//! Core game loop step: input transitions, then the phase update (power meter
//! or ship physics), then camera and particles. Rendering reads the result.

use super::particles::{maybe_spawn_wind_line, spawn_sparks, update_sparks, update_wind_lines};
use super::state::{FlightReport, GameEvent, GamePhase, GameState};
use super::world::World;
use crate::coins::CoinBank;

/// Input signals latched since the previous tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Pointer/touch pressed
    pub press: bool,
    /// Pointer/touch released
    pub release: bool,
    /// Restart command
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    state.time_secs += dt as f64;

    // Inputs outside their phase are ignored
    if input.restart && state.phase == GamePhase::GameOver {
        reset_game(state);
    }
    if input.press && state.phase == GamePhase::Ready {
        state.phase = GamePhase::Charging;
        state.events.push(GameEvent::ChargeStarted);
    }
    if input.release && state.phase == GamePhase::Charging {
        launch(state);
    }

    match state.phase {
        GamePhase::Charging => state.power.advance(),
        GamePhase::InFlight => update_flight(state),
        GamePhase::Ready | GamePhase::GameOver => {}
    }

    state.camera.follow(state.ship.pos, &state.tuning);

    if state.wind_lines_enabled {
        maybe_spawn_wind_line(
            &mut state.wind_lines,
            &mut state.rng,
            &state.ship,
            state.phase,
            &state.tuning,
        );
    }
    update_sparks(&mut state.sparks, state.tuning.gravity);
    update_wind_lines(&mut state.wind_lines, state.tuning.viewport.x, state.time_secs);
}

/// Return to Ready with all per-flight state cleared
///
/// Coins and (in the altitude variant) the world survive a reset.
pub fn reset_game(state: &mut GameState) {
    state.phase = GamePhase::Ready;
    state.score = 0;
    state.max_altitude = 0.0;
    state.max_speed = 0.0;
    state.flight_start_secs = 0.0;
    state.ship.reset(&state.tuning);
    state.camera.reset();
    state.power.reset();
    state.sparks.clear();
    state.wind_lines.clear();
    state.report = None;

    if state.tuning.regenerate_world_on_reset {
        state.world = World::generate(&mut state.rng, &state.tuning);
    }

    state.events.push(GameEvent::Reset);
    log::info!("Game reset");
}

fn launch(state: &mut GameState) {
    let power = state.power.value;
    state
        .ship
        .launch(state.power.fraction(), state.tuning.launch_scale);
    state.phase = GamePhase::InFlight;
    state.flight_start_secs = state.time_secs;
    state.events.push(GameEvent::Launched { power });
    log::info!(
        "Launched at {:.1}% power, velocity ({:.2}, {:.2})",
        power,
        state.ship.vel.x,
        state.ship.vel.y
    );
}

fn update_flight(state: &mut GameState) {
    state.ship.integrate(state.tuning.gravity);
    record_high_water_marks(state);

    let Some(contact) = state.ship.resolve_ground(&state.tuning) else {
        return;
    };

    let sparks = state.sparks_enabled && contact.impact_speed > state.tuning.spark_threshold;
    if sparks {
        spawn_sparks(&mut state.sparks, &mut state.rng, contact.point);
    }
    state.events.push(GameEvent::Bounced {
        impact_speed: contact.impact_speed,
        sparks,
    });
    log::debug!(
        "Bounce at x={:.0}, impact {:.2}",
        contact.point.x,
        contact.impact_speed
    );

    if contact.settled {
        land(state);
    }
}

fn record_high_water_marks(state: &mut GameState) {
    let distance = (state.ship.pos.x - state.tuning.launch_x).floor();
    if distance > state.score as f32 {
        state.score = distance as u64;
    }

    let altitude = state.tuning.ground_level - state.ship.pos.y;
    if altitude > state.max_altitude {
        state.max_altitude = altitude;
    }

    let speed = state.ship.speed();
    if speed > state.max_speed {
        state.max_speed = speed;
    }
}

fn land(state: &mut GameState) {
    let duration_secs = state.flight_secs();
    state.phase = GamePhase::GameOver;

    let coins_earned = CoinBank::coins_for_distance(state.score);
    let total_coins = state.coins.deposit(coins_earned);
    let report = FlightReport {
        distance: state.score,
        coins_earned,
        total_coins,
        max_altitude: state.max_altitude,
        max_speed: state.max_speed,
        duration_secs,
    };
    state.report = Some(report);
    state.events.push(GameEvent::Landed(report));

    log::info!(
        "Landed: {} m, +{} coins (total {}), {:.1} s",
        report.distance,
        coins_earned,
        total_coins,
        report.duration_secs
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::settings::{Settings, WorldVariant};
    use glam::Vec2;

    const PRESS: TickInput = TickInput {
        press: true,
        release: false,
        restart: false,
    };
    const RELEASE: TickInput = TickInput {
        press: false,
        release: true,
        restart: false,
    };
    const RESTART: TickInput = TickInput {
        press: false,
        release: false,
        restart: true,
    };
    const IDLE: TickInput = TickInput {
        press: false,
        release: false,
        restart: false,
    };

    fn new_state() -> GameState {
        GameState::new(12345, &Settings::default())
    }

    /// Charge for `ticks` ticks, release, and fly until settled
    fn fly(state: &mut GameState, ticks: u32) -> u32 {
        tick(state, &PRESS, SIM_DT);
        for _ in 1..ticks {
            tick(state, &IDLE, SIM_DT);
        }
        tick(state, &RELEASE, SIM_DT);
        let mut flight_ticks = 0;
        while state.phase == GamePhase::InFlight {
            tick(state, &IDLE, SIM_DT);
            flight_ticks += 1;
            assert!(flight_ticks < 100_000, "flight never settled");
        }
        flight_ticks
    }

    #[test]
    fn test_ready_to_charging() {
        let mut state = new_state();
        tick(&mut state, &IDLE, SIM_DT);
        assert_eq!(state.phase, GamePhase::Ready);

        tick(&mut state, &PRESS, SIM_DT);
        assert_eq!(state.phase, GamePhase::Charging);
        assert!(!state.instructions_visible());
        assert_eq!(state.events, vec![GameEvent::ChargeStarted]);
        // Charging advanced the meter this same tick
        assert_eq!(state.power.value, 2.5);
    }

    #[test]
    fn test_out_of_phase_inputs_are_ignored() {
        let mut state = new_state();
        tick(&mut state, &RELEASE, SIM_DT);
        assert_eq!(state.phase, GamePhase::Ready);

        tick(&mut state, &PRESS, SIM_DT);
        tick(&mut state, &PRESS, SIM_DT);
        assert_eq!(state.phase, GamePhase::Charging);

        tick(&mut state, &RELEASE, SIM_DT);
        assert_eq!(state.phase, GamePhase::InFlight);
        let vel_x = state.ship.vel.x;
        tick(&mut state, &PRESS, SIM_DT);
        tick(&mut state, &RELEASE, SIM_DT);
        assert_eq!(state.phase, GamePhase::InFlight);
        // No relaunch: horizontal speed only changes on ground contact
        assert_eq!(state.ship.vel.x, vel_x);
    }

    #[test]
    fn test_launch_at_full_power_first_step() {
        let mut state = new_state();
        tick(&mut state, &PRESS, SIM_DT);
        state.power.value = 100.0;
        tick(&mut state, &RELEASE, SIM_DT);

        let force = state.tuning.launch_scale;
        let angle = 30.0_f32.to_radians();
        let launch_vel = Vec2::new(angle.cos() * force, -angle.sin() * force);
        let pad = state.tuning.launch_pad();

        // The launch tick already integrates once
        let expected_vel = Vec2::new(launch_vel.x, launch_vel.y + state.tuning.gravity);
        assert!(state.ship.vel.abs_diff_eq(expected_vel, 1e-4));
        assert!(state.ship.pos.abs_diff_eq(pad + expected_vel, 1e-3));
        assert_eq!(state.events, vec![GameEvent::Launched { power: 100.0 }]);
    }

    #[test]
    fn test_flight_lands_and_awards_coins() {
        let mut state = new_state();
        state.coins.deposit(100);
        fly(&mut state, 40);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.game_over_visible());
        assert_eq!(state.ship.vel, Vec2::ZERO);
        assert!(state.score > 0);

        let report = state.report.expect("report after landing");
        assert_eq!(report.distance, state.score);
        assert_eq!(report.coins_earned, state.score / 10);
        assert_eq!(report.total_coins, 100 + state.score / 10);
        assert_eq!(state.coins.total_coins, report.total_coins);
        assert!(report.duration_secs > 0.0);
        assert!(report.max_altitude > 0.0);
        assert!(matches!(state.events.last(), Some(GameEvent::Landed(_))));
    }

    #[test]
    fn test_flight_timer_runs_in_flight_and_freezes_on_landing() {
        let mut state = new_state();
        assert_eq!(state.flight_secs(), 0.0);
        tick(&mut state, &PRESS, SIM_DT);
        for _ in 0..40 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.flight_secs(), 0.0);
        tick(&mut state, &RELEASE, SIM_DT);

        let mut last = state.flight_secs();
        let mut ticks = 0;
        while state.phase == GamePhase::InFlight {
            tick(&mut state, &TickInput::default(), SIM_DT);
            if state.phase == GamePhase::InFlight {
                assert!(state.flight_secs() > last);
                last = state.flight_secs();
            }
            ticks += 1;
            assert!(ticks < 10_000);
        }

        let report = state.report.expect("report after landing");
        assert!(report.duration_secs >= last);
        assert!(report.duration_secs > 0.0);
        assert_eq!(state.flight_secs(), report.duration_secs);

        reset_game(&mut state);
        assert_eq!(state.flight_secs(), 0.0);
    }

    #[test]
    fn test_zero_power_launch_ends_immediately() {
        let mut state = new_state();
        tick(&mut state, &PRESS, SIM_DT);
        state.power.value = 0.0;
        tick(&mut state, &RELEASE, SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, 0);
        assert_eq!(state.report.map(|r| r.coins_earned), Some(0));
    }

    #[test]
    fn test_game_over_is_frozen_until_restart() {
        let mut state = new_state();
        fly(&mut state, 20);
        let ship = state.ship;
        let score = state.score;
        for _ in 0..10 {
            tick(&mut state, &PRESS, SIM_DT);
            tick(&mut state, &RELEASE, SIM_DT);
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.ship, ship);
        assert_eq!(state.score, score);

        tick(&mut state, &RESTART, SIM_DT);
        assert_eq!(state.phase, GamePhase::Ready);
        assert!(state.instructions_visible());
        assert!(state.report.is_none());
    }

    #[test]
    fn test_restart_ignored_mid_charge_and_mid_flight() {
        let mut state = new_state();
        tick(&mut state, &PRESS, SIM_DT);
        let power = state.power.value;
        tick(&mut state, &RESTART, SIM_DT);
        assert_eq!(state.phase, GamePhase::Charging);
        assert!(state.power.value > power);
        assert!(!state.events.contains(&GameEvent::Reset));

        state.power.value = 60.0;
        tick(&mut state, &RELEASE, SIM_DT);
        for _ in 0..20 {
            tick(&mut state, &IDLE, SIM_DT);
        }
        let score = state.score;
        assert!(score > 0);
        tick(&mut state, &RESTART, SIM_DT);
        assert_eq!(state.phase, GamePhase::InFlight);
        assert!(state.score >= score);
        assert!(!state.events.contains(&GameEvent::Reset));

        // The flight still ends normally and pays out
        while state.phase == GamePhase::InFlight {
            tick(&mut state, &IDLE, SIM_DT);
        }
        let report = state.report.expect("report after landing");
        assert_eq!(report.coins_earned, report.distance / 10);
    }

    #[test]
    fn test_restart_ignored_when_ready() {
        let mut state = new_state();
        tick(&mut state, &RESTART, SIM_DT);
        assert_eq!(state.phase, GamePhase::Ready);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_restart_then_press_same_tick() {
        let mut state = new_state();
        fly(&mut state, 10);
        let input = TickInput {
            restart: true,
            press: true,
            release: false,
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.phase, GamePhase::Charging);
        assert_eq!(
            state.events,
            vec![GameEvent::Reset, GameEvent::ChargeStarted]
        );
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = new_state();
        fly(&mut state, 40);
        reset_game(&mut state);
        let once = (
            state.phase,
            state.score,
            state.max_altitude,
            state.max_speed,
            state.ship,
            state.power,
            state.camera,
            state.sparks.clone(),
            state.wind_lines.clone(),
            state.world.clone(),
            state.coins,
        );
        reset_game(&mut state);
        let twice = (
            state.phase,
            state.score,
            state.max_altitude,
            state.max_speed,
            state.ship,
            state.power,
            state.camera,
            state.sparks.clone(),
            state.wind_lines.clone(),
            state.world.clone(),
            state.coins,
        );
        assert_eq!(once, twice);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.score, 0);
        assert!(state.sparks.is_empty());
        assert!(state.wind_lines.is_empty());
    }

    #[test]
    fn test_classic_reset_regenerates_world() {
        let mut state = GameState::new(9, &Settings::for_variant(WorldVariant::Classic));
        let before = state.world.clone();
        reset_game(&mut state);
        assert_ne!(state.world, before);
        assert!(state.world.stars.is_empty());
    }

    #[test]
    fn test_hard_landing_throws_sparks() {
        let mut state = new_state();
        fly_until_first_bounce(&mut state);
        let bounced = state
            .events
            .iter()
            .find_map(|e| match e {
                GameEvent::Bounced { sparks, .. } => Some(*sparks),
                _ => None,
            })
            .expect("bounce event");
        assert!(bounced);
        assert!(!state.sparks.is_empty() && state.sparks.len() <= 20);
    }

    #[test]
    fn test_sparks_disabled() {
        let settings = Settings {
            sparks: false,
            ..Settings::default()
        };
        let mut state = GameState::new(1, &settings);
        fly_until_first_bounce(&mut state);
        assert!(state.sparks.is_empty());
    }

    fn fly_until_first_bounce(state: &mut GameState) {
        tick(state, &PRESS, SIM_DT);
        state.power.value = 60.0;
        tick(state, &RELEASE, SIM_DT);
        for _ in 0..10_000 {
            tick(state, &IDLE, SIM_DT);
            if state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::Bounced { .. }))
            {
                return;
            }
        }
        panic!("ship never touched the ground");
    }

    #[test]
    fn test_wind_lines_during_fast_flight() {
        let mut state = new_state();
        tick(&mut state, &PRESS, SIM_DT);
        state.power.value = 100.0;
        tick(&mut state, &RELEASE, SIM_DT);
        let mut seen = false;
        for _ in 0..60 {
            tick(&mut state, &IDLE, SIM_DT);
            seen |= !state.wind_lines.is_empty();
        }
        assert!(seen);
    }

    #[test]
    fn test_determinism() {
        let mut a = new_state();
        let mut b = new_state();
        fly(&mut a, 33);
        fly(&mut b, 33);
        assert_eq!(a.score, b.score);
        assert_eq!(a.ship, b.ship);
        assert_eq!(a.sparks, b.sparks);
    }
}
