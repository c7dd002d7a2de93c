//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceColor, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, HAZARD_ROW};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const HAZARD_FG: Rgb = Rgb::new(220, 40, 40);

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
}

/// A lightweight terminal renderer for the game.
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
    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        if snap.game_over() {
            self.draw_game_over(fb, snap, viewport);
            return;
        }

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, origin_x, origin_y, frame_w, frame_h, border);

        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                match PieceKind::from_code(snap.board[y as usize][x as usize]) {
                    Some(kind) => self.draw_block(fb, origin_x, origin_y, x, y, kind.color()),
                    None => self.draw_empty(fb, origin_x, origin_y, x, y),
                }
            }
        }

        if let Some(active) = snap.active {
            for &(x, y) in active.cells.iter() {
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_block(fb, origin_x, origin_y, x as u16, y as u16, active.kind.color());
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin_x + frame_w + 2, origin_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    /// Empty cells are dotted; on the hazard row the dots are red.
    fn draw_empty(&self, fb: &mut FrameBuffer, origin_x: u16, origin_y: u16, x: u16, y: u16) {
        let (fg, ch) = if y == HAZARD_ROW as u16 {
            (HAZARD_FG, '─')
        } else {
            (Rgb::new(90, 90, 100), '·')
        };
        let style = CellStyle::new(fg, BOARD_BG).dim();
        self.fill_cell(fb, origin_x, origin_y, x, y, ch, style);
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: u16,
        y: u16,
        color: PieceColor,
    ) {
        let fg = Rgb::from(color);
        let style = CellStyle::new(fg, fg.darker()).bold();
        self.fill_cell(fb, origin_x, origin_y, x, y, '█', style);
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin_x + 1 + cell_x * self.cell_w;
        let py = origin_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        for (title, n) in [
            ("SCORE", snap.score),
            ("SHAPES", snap.pieces_spawned),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, title, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        let help = value.dim();
        for line in ["A/D  move", "S    drop", "Q/E  rotate", "Esc  quit"] {
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let red = CellStyle::new(Rgb::new(255, 0, 0), Rgb::new(0, 0, 0)).bold();
        let text = "GAME OVER";
        let mid_y = viewport.height / 3;
        let x = viewport.width.saturating_sub(text.len() as u16) / 2;
        fb.put_str(x, mid_y, text, red);

        let value = CellStyle::default();
        let score_x = viewport.width.saturating_sub(16) / 2;
        fb.put_str(score_x, mid_y.saturating_add(2), "SCORE ", value);
        fb.put_u32(score_x + 6, mid_y.saturating_add(2), snap.score, value);
    }
}
