//! Engine module - the falling-block state machine
//!
//! Owns the board, the active piece, the held piece and the 7-bag, and
//! implements gravity ticks, player actions, locking and line clears.
//!
//! Every movement and rotation funnels through [`Engine::move_to`], which only
//! commits a position that is in bounds and collision-free, and recomputes the
//! landing preview on success.

use tracing::{debug, warn};

use crate::grid::Grid;
use crate::rng::{PieceBag, Randomizer};
use crate::shape::Shape;
use crate::types::*;

/// Reported whenever the active piece locks into the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// Kind of the piece that locked
    pub kind: Option<ShapeKind>,
    /// Number of filled rows removed by this lock
    pub lines_cleared: usize,
    /// Whether the next piece spawned at a legal position
    pub spawned: bool,
}

/// Complete engine state for one game session
#[derive(Debug, Clone)]
pub struct Engine {
    board: Grid<Cell>,
    current: Shape,
    held: Shape,
    bag: PieceBag,
    rng: Randomizer,
    /// Where `current` would come to rest if dropped from its position
    landing_position: Vec2,
    /// One hold swap is allowed per piece until it locks
    can_swap: bool,
    /// Redraw hint for the held-piece panel
    held_shape_changed: bool,
    running: bool,
    started: bool,
    /// Set when a piece had to be shown at an illegal spawn position
    board_full: bool,
}

impl Engine {
    /// Create an engine with the reference 10x20 board
    pub fn new(rng: Randomizer) -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT, rng)
    }

    /// Create an engine with a custom board size
    pub fn with_size(width: usize, height: usize, rng: Randomizer) -> Self {
        Self {
            board: Grid::new(width, height),
            current: Shape::default(),
            held: Shape::default(),
            bag: PieceBag::new(),
            rng,
            landing_position: Vec2::ZERO,
            can_swap: true,
            held_shape_changed: false,
            running: true,
            started: false,
            board_full: false,
        }
    }

    /// Spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn running(&self) -> bool {
        self.running
    }

    /// Ask the surrounding loop to exit after its current iteration
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn board(&self) -> &Grid<Cell> {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Grid<Cell> {
        &mut self.board
    }

    pub fn current_shape(&self) -> &Shape {
        &self.current
    }

    /// The held piece; invalid (empty) until the first swap
    pub fn held_shape(&self) -> &Shape {
        &self.held
    }

    pub fn landing_position(&self) -> Vec2 {
        self.landing_position
    }

    pub fn can_swap(&self) -> bool {
        self.can_swap
    }

    pub fn held_shape_changed(&self) -> bool {
        self.held_shape_changed
    }

    /// Read and clear the held-panel redraw hint
    pub fn take_held_shape_changed(&mut self) -> bool {
        std::mem::take(&mut self.held_shape_changed)
    }

    /// True once any spawn landed on occupied cells
    pub fn is_board_full(&self) -> bool {
        self.board_full
    }

    /// Whether the mask at `pos` lies entirely inside the board
    pub fn is_in_bounds(&self, blocks: &Grid<Cell>, pos: Vec2) -> bool {
        let size = blocks.size();
        let (Some(right), Some(bottom)) = (pos.x.checked_add(size.x), pos.y.checked_add(size.y))
        else {
            return false;
        };
        pos.x >= 0
            && pos.y >= 0
            && right <= self.board.width() as i32
            && bottom <= self.board.height() as i32
    }

    /// Whether any nonzero mask cell overlaps a settled board cell.
    ///
    /// Mask cells that fall outside the board are not counted; pair this with
    /// [`Engine::is_in_bounds`].
    pub fn is_intersecting(&self, blocks: &Grid<Cell>, pos: Vec2) -> bool {
        blocks.enumerate().any(|(x, y, v)| {
            if v == EMPTY_CELL {
                return false;
            }
            match (pos.x.checked_add(x as i32), pos.y.checked_add(y as i32)) {
                (Some(bx), Some(by)) => {
                    self.board.contains(bx, by)
                        && self.board.get(bx as usize, by as usize) != EMPTY_CELL
                }
                _ => false,
            }
        })
    }

    /// Legal placement: in bounds and not intersecting
    pub fn fits(&self, blocks: &Grid<Cell>, pos: Vec2) -> bool {
        self.is_in_bounds(blocks, pos) && !self.is_intersecting(blocks, pos)
    }

    /// Move the active piece to `position` if legal.
    ///
    /// On success the landing preview is recomputed; on failure nothing changes.
    pub fn move_to(&mut self, position: Vec2) -> bool {
        if !self.fits(&self.current.blocks, position) {
            return false;
        }
        self.current.position = position;
        self.update_landing_position();
        true
    }

    /// Move the active piece by `delta` if legal
    pub fn translate(&mut self, delta: Vec2) -> bool {
        self.move_to(self.current.position + delta)
    }

    /// Recompute where the active piece would rest under gravity
    pub fn update_landing_position(&mut self) {
        self.landing_position = self.current.position;
        let mut next = self.current.position + Vec2::DOWN;
        while self.fits(&self.current.blocks, next) {
            self.landing_position = next;
            next += Vec2::DOWN;
        }
    }

    /// Rotate the active piece 90° clockwise.
    ///
    /// Tries the current position, then one row up. Returns false (and leaves
    /// the piece unchanged) if neither fits.
    pub fn rotate_clockwise(&mut self) -> bool {
        let rotated = self.current.blocks.rotate_clockwise();
        let position = self.current.position;

        if self.fits(&rotated, position) {
            self.current.blocks = rotated;
            self.update_landing_position();
            return true;
        }

        let kicked = position + Vec2::UP;
        if self.fits(&rotated, kicked) {
            self.current.blocks = rotated;
            return self.move_to(kicked);
        }

        false
    }

    /// Gravity step: move down one row, or lock and spawn if blocked
    pub fn tick(&mut self) -> Option<LockEvent> {
        if !self.current.is_valid() {
            return None;
        }
        if self.translate(Vec2::DOWN) {
            return None;
        }
        Some(self.lock_and_spawn())
    }

    /// Apply at most one player action; `None` is a no-op.
    ///
    /// Rejected moves and rotations are silently ignored.
    pub fn handle_input(&mut self, action: Option<GameAction>) -> Option<LockEvent> {
        let action = action?;
        if !self.current.is_valid() {
            return None;
        }

        match action {
            GameAction::MoveLeft => {
                self.translate(Vec2::LEFT);
            }
            GameAction::MoveRight => {
                self.translate(Vec2::RIGHT);
            }
            GameAction::MoveDown => {
                self.translate(Vec2::DOWN);
            }
            GameAction::RotateCw => {
                self.rotate_clockwise();
            }
            GameAction::HardDrop => return Some(self.hard_drop()),
            GameAction::Hold => {
                self.swap_held();
            }
        }
        None
    }

    /// Snap the active piece to its landing position, lock it and spawn the next
    pub fn hard_drop(&mut self) -> LockEvent {
        self.move_to(self.landing_position);
        self.lock_and_spawn()
    }

    fn lock_and_spawn(&mut self) -> LockEvent {
        let kind = self.current.kind();
        let lines_cleared = self.place();
        let spawned = self.spawn();

        debug!(
            kind = kind.map(ShapeKind::as_str),
            lines_cleared, spawned, "piece locked"
        );

        LockEvent {
            kind,
            lines_cleared,
            spawned,
        }
    }

    /// Write the active piece into the board, re-enable hold and clear lines.
    ///
    /// Returns the number of rows removed.
    pub fn place(&mut self) -> usize {
        for (pos, value) in self.current.block_positions() {
            if self.board.contains(pos.x, pos.y) {
                self.board.set(pos.x as usize, pos.y as usize, value);
            }
        }

        self.can_swap = true;
        self.clear_filled_lines()
    }

    /// Remove every completely filled row, top to bottom.
    ///
    /// Each filled row is removed as soon as it is found: rows above it shift
    /// down by one and row 0 is emptied. Returns the number of rows removed.
    pub fn clear_filled_lines(&mut self) -> usize {
        let mut cleared = 0;

        for y in 0..self.board.height() {
            if !self.board.row(y).iter().all(|&c| c != EMPTY_CELL) {
                continue;
            }

            for shift_y in (1..=y).rev() {
                self.board.copy_row(shift_y - 1, shift_y);
            }
            self.board.fill_row(0, EMPTY_CELL);
            cleared += 1;
        }

        if cleared > 0 {
            debug!(cleared, "lines cleared");
        }
        cleared
    }

    /// Draw the next kind from the bag and spawn it.
    ///
    /// Returns whether the spawn position is legal.
    pub fn spawn(&mut self) -> bool {
        let kind = self.bag.draw(&mut self.rng);
        self.spawn_kind(kind)
    }

    /// Spawn a specific kind, centered horizontally on row 0.
    ///
    /// If the spawn position is blocked the piece is still placed there (so it
    /// can be drawn), the board is flagged full and false is returned.
    pub fn spawn_kind(&mut self, kind: ShapeKind) -> bool {
        self.current = Shape::from_kind(kind);
        let target = self.spawn_position();
        if self.move_to(target) {
            return true;
        }

        self.current.position = target;
        self.landing_position = target;
        self.board_full = true;
        warn!(kind = kind.as_str(), "spawn position blocked, board is full");
        false
    }

    /// Swap the active piece with the held one (once per piece).
    ///
    /// With nothing held yet, the active piece goes to hold and a new piece
    /// spawns. An exchange only happens if the held piece fits at the spawn
    /// position; otherwise nothing changes. Returns false when the swap is
    /// disallowed or blocked.
    pub fn swap_held(&mut self) -> bool {
        if !self.can_swap {
            return false;
        }

        if self.held.is_valid() {
            std::mem::swap(&mut self.current, &mut self.held);
            let target = self.spawn_position();
            if !self.move_to(target) {
                std::mem::swap(&mut self.current, &mut self.held);
                debug!("held piece blocked at spawn position, swap rejected");
                return false;
            }
        } else {
            self.held = std::mem::take(&mut self.current);
            self.spawn();
        }

        debug!(
            held = self.held.kind().map(ShapeKind::as_str),
            "held piece swapped"
        );

        self.held_shape_changed = true;
        self.can_swap = false;
        true
    }

    /// Spawn position for the active piece: centered, row 0
    fn spawn_position(&self) -> Vec2 {
        let half_board = (self.board.width() / 2) as i32;
        Vec2::new(half_board - self.current.size().x / 2, 0)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Randomizer::from_entropy())
    }
}
