//! Fixed-rate simulation clock
//!
//! Accumulates wall-clock time reported by the shell and converts it into a
//! whole number of 50 Hz simulation ticks. The clock never reads real timers
//! itself, so tests can drive it with any dt sequence they like.

use crate::consts::{MAX_TICKS_PER_FRAME, TICK_DT};

/// Longest frame gap honored before time is dropped (tab switches etc.)
const MAX_FRAME_DT: f32 = 0.1;

/// Accumulator turning variable frame time into fixed simulation ticks
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    accumulator: f32,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed elapsed seconds; returns how many fixed ticks are now due
    ///
    /// Ticks per call are capped at [`MAX_TICKS_PER_FRAME`], dropping the
    /// remainder so a long stall cannot trigger a catch-up spiral.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut ticks = 0;
        while self.accumulator >= TICK_DT && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= TICK_DT;
            ticks += 1;
        }
        if ticks == MAX_TICKS_PER_FRAME {
            // Drop whatever backlog remains
            self.accumulator = 0.0;
        }
        ticks
    }
}
