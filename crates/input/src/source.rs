//! Non-blocking input polling.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::{handle_key_event, should_quit};
use crate::types::GameAction;

/// One logical event delivered to the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Action(GameAction),
    /// The terminal was resized
    Resize,
    Quit,
}

/// Delivers at most one event per poll without blocking.
pub trait InputSource {
    /// Returns `Ok(None)` immediately when nothing is pending.
    fn poll_event(&mut self) -> Result<Option<InputEvent>>;
}

/// Reads events from the controlling terminal via crossterm.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll_event(&mut self) -> Result<Option<InputEvent>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        Ok(translate_event(event::read()?))
    }
}

/// Map a raw terminal event to a game-loop event.
///
/// Unbound keys, key repeats/releases, mouse and focus events map to `None`.
pub fn translate_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if should_quit(key) {
                Some(InputEvent::Quit)
            } else {
                handle_key_event(key).map(InputEvent::Action)
            }
        }
        Event::Resize(_, _) => Some(InputEvent::Resize),
        _ => None,
    }
}
