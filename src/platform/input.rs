//! Input signal latching
//!
//! Event handlers fire between frames; the simulation consumes input once per
//! tick. Signals are latched here and cleared after the first tick that sees
//! them, so a quick tap still registers exactly once.

use crate::sim::TickInput;

/// Abstract input, independent of the device that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSignal {
    /// mousedown / touchstart
    Press,
    /// mouseup / touchend
    Release,
    /// Restart button
    Restart,
}

impl InputSignal {
    /// Map a DOM event type to a signal
    pub fn from_event_type(event_type: &str) -> Option<Self> {
        match event_type {
            "mousedown" | "touchstart" | "pointerdown" => Some(InputSignal::Press),
            "mouseup" | "touchend" | "pointerup" => Some(InputSignal::Release),
            _ => None,
        }
    }
}

/// One-shot inputs waiting for the next tick
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    pending: TickInput,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal(&mut self, signal: InputSignal) {
        match signal {
            InputSignal::Press => self.pending.press = true,
            InputSignal::Release => self.pending.release = true,
            InputSignal::Restart => self.pending.restart = true,
        }
    }

    /// Input for the next tick (latched signals are consumed)
    pub fn take(&mut self) -> TickInput {
        std::mem::take(&mut self.pending)
    }
}
