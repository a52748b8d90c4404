//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` events into [`InputEvent`]s and exposes the non-blocking
//! [`InputSource`] the game loop polls once per iteration. Only key presses
//! are acted on; repeats and releases are ignored.

pub mod map;
pub mod source;

pub use tui_blocks_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::{translate_event, InputEvent, InputSource, TerminalInput};
