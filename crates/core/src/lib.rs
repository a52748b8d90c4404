//! Core game logic - pure, deterministic given a seed, and testable
//!
//! This crate contains the game rules and state management. It has **no
//! dependencies** on terminal I/O, so the same engine can be driven by the
//! interactive loop, by tests, or by benches.
//!
//! # Module Structure
//!
//! - [`grid`]: generic dense 2D array used for the board and for piece masks
//! - [`shape`]: the seven shape templates and the movable [`Shape`]
//! - [`rng`]: seeded [`Randomizer`] and the 7-bag [`PieceBag`]
//! - [`engine`]: the [`Engine`] state machine (gravity, input, lock, clear, hold)
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: every shape appears exactly once per bag of seven
//! - **Rotation**: clockwise only, with a single one-row-up kick
//! - **Landing preview**: lowest legal row for the active piece, kept current
//!   after every move, rotation and spawn
//! - **Hold**: one swap per piece until it locks
//! - **Gravity**: one row per tick; a blocked piece locks and the next spawns
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::{Engine, Randomizer};
//! use tui_blocks_types::GameAction;
//!
//! let mut engine = Engine::new(Randomizer::with_seed(12345));
//! engine.start();
//!
//! engine.handle_input(Some(GameAction::MoveRight));
//! engine.handle_input(Some(GameAction::RotateCw));
//! let lock = engine.handle_input(Some(GameAction::HardDrop));
//!
//! assert!(lock.is_some());
//! assert!(engine.board().cells().iter().any(|&c| c != 0));
//! ```

pub mod engine;
pub mod grid;
pub mod rng;
pub mod shape;

pub use tui_blocks_types as types;

// Re-export commonly used types for convenience
pub use engine::{Engine, LockEvent};
pub use grid::Grid;
pub use rng::{PieceBag, Randomizer};
pub use shape::{Shape, ShapeError};
