//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (mouse and touch collapse to press/release)
//! - Time (variable frame deltas to fixed ticks)
//! - Storage lives in `crate::persistence`

pub mod input;
pub mod time;

pub use input::{InputLatch, InputSignal};
pub use time::FrameClock;
