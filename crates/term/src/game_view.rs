//! GameView: maps engine state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, left to right: the held-piece panel, a one-column gap, then the
//! board frame. Each board cell is `cell_w` columns by `cell_h` rows.

use crate::core::{Engine, Grid, Shape};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, Rect, Vec2, EMPTY_CELL, HELD_HEIGHT, HELD_WIDTH};

/// Shown instead of the game when the viewport cannot hold the layout.
pub const OUT_OF_BOUNDS_TEXT: &str = "Out of bounds!";

const BLOCK_CHAR: char = '█';
const GHOST_CHAR: char = '░';

const PLAYFIELD_BG: Rgb = Rgb::new(20, 20, 28);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_xywh(0, 0, self.width as i32, self.height as i32)
    }
}

/// Frame rectangles (borders included) for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub held: Rect,
    pub board: Rect,
}

impl Layout {
    /// Smallest rectangle covering both panels
    pub fn bounds(&self) -> Rect {
        let right_bottom = Vec2::new(
            self.board.right_bottom().x,
            self.held.right_bottom().y.max(self.board.right_bottom().y),
        );
        Rect::from_points(self.held.left_top(), right_bottom)
    }
}

/// Renders the board, landing preview, active piece and held panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Centered layout for a board of `board_size` cells, or `None` when it
    /// does not fit the viewport.
    pub fn layout(&self, board_size: Vec2, viewport: Viewport) -> Option<Layout> {
        let cell = Vec2::new(self.cell_w as i32, self.cell_h as i32);
        let border = Vec2::new(2, 2);

        let board_size = board_size * cell + border;
        let held_size = Vec2::new(HELD_WIDTH as i32, HELD_HEIGHT as i32) * cell + border;
        let total = Vec2::new(held_size.x + 1 + board_size.x, held_size.y.max(board_size.y));

        let screen = viewport.rect();
        let origin = (screen.size - total) / 2;
        let bounds = Rect::new(origin, total);
        if !screen.contains(bounds.left_top()) || !screen.contains(bounds.right_bottom() - Vec2::ONE)
        {
            return None;
        }

        Some(Layout {
            held: Rect::new(origin, held_size),
            board: Rect::new(origin + Vec2::new(held_size.x + 1, 0), board_size),
        })
    }

    /// Render the current engine state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, engine: &Engine, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board = engine.board();
        let Some(layout) = self.layout(board.size(), viewport) else {
            self.draw_out_of_bounds(fb, viewport);
            return;
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let label = CellStyle {
            bold: true,
            ..border
        };

        // Held panel.
        draw_border(fb, layout.held, border);
        fb.put_str(
            (layout.held.position.x + 2) as u16,
            layout.held.position.y as u16,
            "HELD",
            label,
        );
        self.fill_interior(fb, layout.held);
        self.draw_held(fb, layout.held, engine.held_shape());

        // Board.
        draw_border(fb, layout.board, border);
        self.fill_interior(fb, layout.board);
        self.draw_settled(fb, layout.board, board);

        let current = engine.current_shape();
        if current.is_valid() {
            let landing = engine.landing_position();
            for (pos, value) in current.block_positions() {
                let ghost = pos - current.position + landing;
                if board.contains(ghost.x, ghost.y) {
                    self.fill_cell(fb, layout.board, ghost, GHOST_CHAR, piece_style(value));
                }
            }
            for (pos, value) in current.block_positions() {
                if board.contains(pos.x, pos.y) {
                    self.fill_cell(fb, layout.board, pos, BLOCK_CHAR, piece_style(value));
                }
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, engine: &Engine, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(engine, viewport, &mut fb);
        fb
    }

    fn draw_settled(&self, fb: &mut FrameBuffer, frame: Rect, board: &Grid<Cell>) {
        for (x, y, value) in board.enumerate() {
            if value != EMPTY_CELL {
                let pos = Vec2::new(x as i32, y as i32);
                self.fill_cell(fb, frame, pos, BLOCK_CHAR, piece_style(value));
            }
        }
    }

    fn draw_held(&self, fb: &mut FrameBuffer, frame: Rect, held: &Shape) {
        if !held.is_valid() {
            return;
        }
        let panel = Vec2::new(HELD_WIDTH as i32, HELD_HEIGHT as i32);
        let offset = (panel - held.size()) / 2;
        let offset = Vec2::new(offset.x.max(0), offset.y.max(0));

        for (x, y, value) in held.blocks.enumerate() {
            let pos = offset + Vec2::new(x as i32, y as i32);
            if value != EMPTY_CELL && pos.x < panel.x && pos.y < panel.y {
                self.fill_cell(fb, frame, pos, BLOCK_CHAR, piece_style(value));
            }
        }
    }

    fn fill_interior(&self, fb: &mut FrameBuffer, frame: Rect) {
        let style = CellStyle::new(PLAYFIELD_BG, PLAYFIELD_BG);
        fb.fill_rect(
            (frame.position.x + 1) as u16,
            (frame.position.y + 1) as u16,
            (frame.size.x - 2) as u16,
            (frame.size.y - 2) as u16,
            ' ',
            style,
        );
    }

    /// Fill the terminal cells covering board cell `cell` inside `frame`.
    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Rect, cell: Vec2, ch: char, style: CellStyle) {
        let px = frame.position.x + 1 + cell.x * self.cell_w as i32;
        let py = frame.position.y + 1 + cell.y * self.cell_h as i32;
        if px < 0 || py < 0 {
            return;
        }
        fb.fill_rect(px as u16, py as u16, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_out_of_bounds(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let text_w = OUT_OF_BOUNDS_TEXT.chars().count() as u16;
        let x = viewport.width.saturating_sub(text_w) / 2;
        let y = viewport.height / 2;
        let style = CellStyle {
            bold: true,
            ..CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
        };
        fb.put_str(x, y, OUT_OF_BOUNDS_TEXT, style);
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Rect, style: CellStyle) {
    let (x, y) = (frame.position.x as u16, frame.position.y as u16);
    let (w, h) = (frame.size.x as u16, frame.size.y as u16);
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Foreground color for a piece color id (1..=7).
pub fn color_for(value: Cell) -> Rgb {
    match value {
        1 => Rgb::new(220, 60, 60),   // red
        2 => Rgb::new(80, 200, 100),  // green
        3 => Rgb::new(70, 110, 230),  // blue
        4 => Rgb::new(235, 210, 70),  // yellow
        5 => Rgb::new(70, 210, 220),  // cyan
        6 => Rgb::new(200, 90, 210),  // magenta
        _ => Rgb::new(235, 235, 235), // white
    }
}

fn piece_style(value: Cell) -> CellStyle {
    CellStyle {
        bold: true,
        ..CellStyle::new(color_for(value), PLAYFIELD_BG)
    }
}
