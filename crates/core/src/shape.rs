//! Shape module - the seven block masks and the movable piece built from them
//!
//! Each template is a small row-major mask; `0` is empty and the nonzero value
//! is the kind's color id, which is also what gets written into the board when
//! the piece locks. Rotation works on the mask itself (see [`Grid::rotate_clockwise`]).

use thiserror::Error;

use crate::grid::Grid;
use crate::types::{Cell, ShapeKind, Vec2};

/// Errors raised when building a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("shape index {index} is out of range (expected 0..7)")]
    OutOfRange { index: usize },
}

const I_ROWS: &[&[Cell]] = &[&[1, 1, 1, 1]];
const J_ROWS: &[&[Cell]] = &[&[2, 2, 2], &[0, 0, 2]];
const L_ROWS: &[&[Cell]] = &[&[3, 3, 3], &[3, 0, 0]];
const O_ROWS: &[&[Cell]] = &[&[4, 4], &[4, 4]];
const S_ROWS: &[&[Cell]] = &[&[5, 5, 0], &[0, 5, 5]];
const T_ROWS: &[&[Cell]] = &[&[6, 6, 6], &[0, 6, 0]];
const Z_ROWS: &[&[Cell]] = &[&[0, 7, 7], &[7, 7, 0]];

/// Template rows for a shape kind
pub fn template(kind: ShapeKind) -> &'static [&'static [Cell]] {
    match kind {
        ShapeKind::I => I_ROWS,
        ShapeKind::J => J_ROWS,
        ShapeKind::L => L_ROWS,
        ShapeKind::O => O_ROWS,
        ShapeKind::S => S_ROWS,
        ShapeKind::T => T_ROWS,
        ShapeKind::Z => Z_ROWS,
    }
}

/// A piece: block mask plus the board position of the mask's top-left cell.
///
/// The default value is the "invalid" shape (empty mask, no kind), used as
/// the marker for "nothing held yet".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Shape {
    pub position: Vec2,
    pub blocks: Grid<Cell>,
    kind: Option<ShapeKind>,
}

impl Shape {
    /// Instantiate shape-table entry `index` at the origin
    pub fn new(index: usize) -> Result<Self, ShapeError> {
        ShapeKind::from_index(index)
            .map(Self::from_kind)
            .ok_or(ShapeError::OutOfRange { index })
    }

    /// Instantiate a kind at the origin
    pub fn from_kind(kind: ShapeKind) -> Self {
        Self {
            position: Vec2::ZERO,
            blocks: Grid::from_rows(template(kind)),
            kind: Some(kind),
        }
    }

    pub fn kind(&self) -> Option<ShapeKind> {
        self.kind
    }

    /// Mask extent (width, height)
    pub fn size(&self) -> Vec2 {
        self.blocks.size()
    }

    /// False only for the default (empty) shape
    pub fn is_valid(&self) -> bool {
        !self.blocks.is_empty()
    }

    /// Board coordinates of every nonzero block at the current position
    pub fn block_positions(&self) -> impl Iterator<Item = (Vec2, Cell)> + '_ {
        let origin = self.position;
        self.blocks
            .enumerate()
            .filter(|&(_, _, v)| v != 0)
            .map(move |(x, y, v)| (origin + Vec2::new(x as i32, y as i32), v))
    }
}
