//! Fixed-rate gates for the game loop.
//!
//! Two independent intervals are measured against the same monotonic clock:
//! the frame gate (redraw cadence) and the tick gate (gravity cadence). The
//! tick gate is only evaluated on iterations where the frame gate is open,
//! so gravity never advances without a redraw following it.

use std::time::{Duration, Instant};

/// What the loop should do this iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PacerStep {
    pub tick: bool,
    pub render: bool,
}

#[derive(Debug, Clone)]
pub struct LoopPacer {
    frame_interval: Duration,
    tick_interval: Duration,
    last_frame: Instant,
    last_tick: Instant,
    force_redraw: bool,
}

impl LoopPacer {
    /// Gates for `tick_rate` ticks and `frame_rate` frames per second,
    /// both starting at `now`. Rates below 1 are treated as 1.
    pub fn new(tick_rate: u32, frame_rate: u32, now: Instant) -> Self {
        Self {
            frame_interval: interval_for(frame_rate),
            tick_interval: interval_for(tick_rate),
            last_frame: now,
            last_tick: now,
            force_redraw: false,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Open the frame gate on the next poll regardless of elapsed time
    pub fn force_redraw(&mut self) {
        self.force_redraw = true;
    }

    pub fn redraw_forced(&self) -> bool {
        self.force_redraw
    }

    /// Evaluate both gates at `now`, consuming any forced redraw.
    pub fn poll(&mut self, now: Instant) -> PacerStep {
        let frame_due = now.saturating_duration_since(self.last_frame) >= self.frame_interval;
        if !frame_due && !self.force_redraw {
            return PacerStep::default();
        }
        self.force_redraw = false;
        self.last_frame = now;

        let tick = now.saturating_duration_since(self.last_tick) >= self.tick_interval;
        if tick {
            self.last_tick = now;
        }

        PacerStep { tick, render: true }
    }
}

/// Whole milliseconds per event at `rate` events per second
fn interval_for(rate: u32) -> Duration {
    Duration::from_millis(1000 / u64::from(rate.max(1)))
}
