//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no external dependencies, so they can be
//! shared by the engine, the input layer and the terminal view.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: horizontally centered, row 0
//!
//! # Loop Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_RATE` | 1 | Gravity ticks per second |
//! | `FRAME_RATE` | 24 | Target redraws per second |
//! | `LOOP_SLEEP_MS` | 1 | Sleep at the end of every loop iteration |
//!
//! # Examples
//!
//! ```
//! use tui_blocks_types::{ShapeKind, GameAction, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let kind = ShapeKind::from_index(3).unwrap();
//! assert_eq!(kind, ShapeKind::O);
//! assert_eq!(kind.color_id(), 4);
//!
//! assert_eq!(GameAction::HardDrop.as_str(), "hardDrop");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

pub mod geometry;

pub use geometry::{Rect, Vec2};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Gravity ticks per second
pub const TICK_RATE: u32 = 1;

/// Target redraws per second
pub const FRAME_RATE: u32 = 24;

/// Width of the held-piece panel in board cells
pub const HELD_WIDTH: usize = 4;

/// Height of the held-piece panel in board cells
pub const HELD_HEIGHT: usize = 4;

/// Sleep at the end of each loop iteration (milliseconds)
pub const LOOP_SLEEP_MS: u64 = 1;

/// Number of distinct shapes (and bag size)
pub const SHAPE_COUNT: usize = 7;

/// A cell on the board or in a shape mask.
///
/// `0` is empty, `1..=7` is the color id of a settled or moving block.
pub type Cell = u8;

/// The empty cell value
pub const EMPTY_CELL: Cell = 0;

/// The seven shape kinds, in shape-table order
///
/// Each kind's color id is its table index plus one:
/// - **I**: 1, straight bar
/// - **J**: 2
/// - **L**: 3
/// - **O**: 4, 2x2 square
/// - **S**: 5
/// - **T**: 6
/// - **Z**: 7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeKind {
    /// All kinds in table order
    pub const ALL: [ShapeKind; SHAPE_COUNT] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    /// Position in the shape table (0..7)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a kind by table index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The nonzero value written into masks and the board for this kind
    pub fn color_id(self) -> Cell {
        self as Cell + 1
    }

    /// Single-letter lowercase name
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::I.as_str(), "i");
    /// assert_eq!(ShapeKind::Z.as_str(), "z");
    /// ```
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
            ShapeKind::O => "o",
            ShapeKind::S => "s",
            ShapeKind::T => "t",
            ShapeKind::Z => "z",
        }
    }
}

/// Discrete player actions
///
/// At most one is delivered to the engine per loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    MoveDown,
    /// Rotate piece 90° clockwise (with a single one-row-up kick)
    RotateCw,
    /// Snap piece to its landing position and lock it
    HardDrop,
    /// Swap the active piece with the held piece
    Hold,
}

impl GameAction {
    /// camelCase name, used in log output
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::RotateCw => "rotateCw",
            GameAction::HardDrop => "hardDrop",
            GameAction::Hold => "hold",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_configuration_defaults() {
        assert_eq!(BOARD_WIDTH, 10);
        assert_eq!(BOARD_HEIGHT, 20);
        assert_eq!(TICK_RATE, 1);
        assert_eq!(FRAME_RATE, 24);
        assert_eq!(HELD_WIDTH, 4);
        assert_eq!(HELD_HEIGHT, 4);
    }

    #[test]
    fn shape_kind_index_roundtrip() {
        for (i, kind) in ShapeKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(ShapeKind::from_index(i), Some(*kind));
            assert_eq!(kind.color_id() as usize, i + 1);
        }
        assert_eq!(ShapeKind::from_index(SHAPE_COUNT), None);
    }

    #[test]
    fn game_action_log_names() {
        assert_eq!(GameAction::MoveLeft.as_str(), "moveLeft");
        assert_eq!(GameAction::RotateCw.as_str(), "rotateCw");
        assert_eq!(GameAction::Hold.as_str(), "hold");
    }
}
