//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! engine state into a framebuffer that is diffed and flushed to the
//! terminal by [`TerminalRenderer`], and paces the loop with [`LoopPacer`].
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep all terminal state in one explicit renderer value
//! - Allow precise control over aspect ratio (2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod pacer;
pub mod renderer;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_for, GameView, Layout, Viewport, OUT_OF_BOUNDS_TEXT};
pub use pacer::{LoopPacer, PacerStep};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
