//! Fixed-step frame clock

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame delta honored (longer gaps, e.g. a hidden tab, are clipped)
const MAX_FRAME_DT: f32 = 0.1;

/// Turns variable frame deltas into a bounded number of fixed ticks
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f32,
    last_time_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous frame (one tick's worth on the first frame)
    pub fn frame_dt(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_time_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => SIM_DT,
        };
        self.last_time_ms = Some(now_ms);
        dt
    }

    /// Number of fixed ticks to run for a frame of `dt` seconds
    pub fn ticks_for(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut ticks = 0;
        while self.accumulator >= SIM_DT && ticks < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            ticks += 1;
        }
        if ticks == MAX_SUBSTEPS {
            // Drop the backlog rather than spiral
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_tick_per_sim_frame() {
        let mut clock = FrameClock::new();
        let total: u32 = (0..60).map(|_| clock.ticks_for(SIM_DT + 1e-6)).sum();
        assert_eq!(total, 60);
    }

    #[test]
    fn test_long_frames_are_capped() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.ticks_for(5.0), MAX_SUBSTEPS);
        assert!(clock.ticks_for(0.0) <= 1);
    }

    #[test]
    fn test_frame_dt() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.frame_dt(1000.0), SIM_DT);
        assert!((clock.frame_dt(1050.0) - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_short_frames_accumulate() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.ticks_for(SIM_DT * 0.6), 0);
        assert_eq!(clock.ticks_for(SIM_DT * 0.6), 1);
    }
}
