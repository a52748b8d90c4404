//! TUI Blocks (workspace facade crate).
//!
//! Re-exports the workspace crates under `tui_blocks::{core,input,term,types}`
//! and adds the start-time [`config`] and the loop-driving [`session`].

pub mod config;
pub mod session;

pub use tui_blocks_core as core;
pub use tui_blocks_input as input;
pub use tui_blocks_term as term;
pub use tui_blocks_types as types;

pub use config::{Cli, GameConfig, TopOutPolicy};
pub use session::{Session, StepOutcome};
