//! Session: one game driven by a fixed-rate loop.
//!
//! The session owns the engine and the loop pacer. The binary feeds it one
//! optional input event per iteration via [`Session::step`] and redraws when
//! the returned [`StepOutcome`] says so. Nothing here touches the terminal,
//! so the whole loop can be driven from tests with synthetic clocks.

use std::time::Instant;

use tracing::{info, trace};

use crate::config::{GameConfig, TopOutPolicy};
use crate::core::{Engine, LockEvent};
use crate::input::InputEvent;
use crate::term::LoopPacer;

/// Result of one loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// Gravity advanced this iteration
    pub ticked: bool,
    /// A frame should be drawn
    pub render: bool,
    /// The most recent lock produced by this iteration, if any
    pub lock: Option<LockEvent>,
}

pub struct Session {
    engine: Engine,
    pacer: LoopPacer,
    config: GameConfig,
}

impl Session {
    pub fn new(engine: Engine, config: GameConfig, now: Instant) -> Self {
        Self {
            engine,
            pacer: LoopPacer::new(config.tick_rate, config.frame_rate, now),
            config,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn running(&self) -> bool {
        self.engine.running()
    }

    /// Spawn the first piece, run one immediate tick and request a frame.
    ///
    /// Both gates are re-armed from `now`.
    pub fn start(&mut self, now: Instant) -> StepOutcome {
        info!(
            tick_rate = self.config.tick_rate,
            frame_rate = self.config.frame_rate,
            "session started"
        );
        self.engine.start();
        let lock = self.engine.tick();
        self.pacer = LoopPacer::new(self.config.tick_rate, self.config.frame_rate, now);
        self.apply_top_out();

        StepOutcome {
            ticked: true,
            render: true,
            lock,
        }
    }

    /// Run one loop iteration at `now` with at most one input event.
    pub fn step(&mut self, event: Option<InputEvent>, now: Instant) -> StepOutcome {
        let mut lock = None;
        match event {
            Some(InputEvent::Action(action)) => {
                trace!(action = action.as_str(), "input");
                lock = self.engine.handle_input(Some(action));
            }
            Some(InputEvent::Resize) => self.pacer.force_redraw(),
            Some(InputEvent::Quit) => self.stop(),
            None => {}
        }

        if self.engine.take_held_shape_changed() {
            self.pacer.force_redraw();
        }

        let gate = self.pacer.poll(now);
        if gate.tick {
            if let Some(event) = self.engine.tick() {
                lock = Some(event);
            }
        }
        self.apply_top_out();

        StepOutcome {
            ticked: gate.tick,
            render: gate.render,
            lock,
        }
    }

    /// End the loop after the current iteration
    pub fn stop(&mut self) {
        if self.engine.running() {
            info!("session stopped");
        }
        self.engine.stop();
    }

    fn apply_top_out(&mut self) {
        if self.config.top_out == TopOutPolicy::EndSession
            && self.engine.is_board_full()
            && self.engine.running()
        {
            info!("board full, ending session");
            self.engine.stop();
        }
    }
}
