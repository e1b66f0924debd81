//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

const WIN_MESSAGE: &str = "You won!";
const WIN_HINT: &str = "r: new board  q: quit";

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const CURSOR_BG: Rgb = Rgb::new(70, 70, 110);

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

/// Screen rectangle occupied by the bordered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardFrame {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Terminal renderer for the Lights Out board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square in most terminal fonts.
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

    /// Where the bordered board lands inside `viewport` (centered).
    pub fn board_frame(&self, snap: &GameSnapshot, viewport: Viewport) -> BoardFrame {
        let width = (snap.cols as u16).saturating_mul(self.cell_w).saturating_add(2);
        let height = (snap.rows as u16).saturating_mul(self.cell_h).saturating_add(2);
        BoardFrame {
            x: viewport.width.saturating_sub(width) / 2,
            y: viewport.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }

    /// Map a terminal position back to a board cell, e.g. for mouse clicks.
    pub fn cell_at(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<(usize, usize)> {
        let frame = self.board_frame(snap, viewport);
        let dx = x.checked_sub(frame.x.saturating_add(1))?;
        let dy = y.checked_sub(frame.y.saturating_add(1))?;
        let (row, col) = ((dy / self.cell_h) as usize, (dx / self.cell_w) as usize);
        (row < snap.rows && col < snap.cols).then_some((row, col))
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        // A won game shows only the message, not the board.
        if snap.won {
            self.draw_win_screen(fb, viewport);
            return;
        }

        let frame = self.board_frame(snap, viewport);
        let border = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, frame, border);

        for row in 0..snap.rows {
            for col in 0..snap.cols {
                let cursor = snap.cursor == (row, col);
                self.draw_light(fb, frame, row, col, snap.is_lit(row, col), cursor);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: BoardFrame, style: CellStyle) {
        let BoardFrame {
            x,
            y,
            width: w,
            height: h,
        } = frame;
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

    fn draw_light(
        &self,
        fb: &mut FrameBuffer,
        frame: BoardFrame,
        row: usize,
        col: usize,
        lit: bool,
        cursor: bool,
    ) {
        let bg = if cursor { CURSOR_BG } else { BOARD_BG };
        let (ch, style) = if lit {
            ('█', CellStyle::plain(Rgb::new(250, 220, 90), bg).bold())
        } else {
            ('·', CellStyle::plain(Rgb::new(90, 90, 100), bg).dim())
        };
        let col = u16::try_from(col).unwrap_or(u16::MAX);
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        let px = frame.x.saturating_add(1).saturating_add(col.saturating_mul(self.cell_w));
        let py = frame.y.saturating_add(1).saturating_add(row.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: BoardFrame,
    ) {
        let panel_x = frame.x.saturating_add(frame.width).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = frame.y;
        fb.put_str(panel_x, y, "MOVES", label);
        fb.put_u32(panel_x, y + 1, snap.moves, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "LIT", label);
        fb.put_u32(panel_x, y + 1, snap.lit as u32, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "SIZE", label);
        let w = fb.put_u32(panel_x, y + 1, snap.rows as u32, value);
        fb.put_char(panel_x + w, y + 1, 'x', value);
        fb.put_u32(panel_x + w + 1, y + 1, snap.cols as u32, value);
        y = y.saturating_add(3);

        if y.saturating_add(1) < viewport.height {
            fb.put_str(panel_x, y, "SEED", label);
            fb.put_str(panel_x, y + 1, &snap.seed.to_string(), value.dim());
        }
    }

    fn draw_win_screen(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let style = CellStyle::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let mid_y = viewport.height / 2;
        let centered = |text: &str| viewport.width.saturating_sub(text.chars().count() as u16) / 2;

        fb.put_str(centered(WIN_MESSAGE), mid_y, WIN_MESSAGE, style);
        if mid_y.saturating_add(2) < viewport.height {
            fb.put_str(
                centered(WIN_HINT),
                mid_y + 2,
                WIN_HINT,
                CellStyle::default().dim(),
            );
        }
    }
}
