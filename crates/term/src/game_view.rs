//! GameView: maps a [`GameSnapshot`] into a framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. The playfield uses the classic
//! two-characters-per-cell ASCII look:
//!
//! ```text
//! <! . . .[][] . .!>
//! <!====================!>
//!   \/\/\/\/\/\/\/\/\/\/
//! ```

use crate::core::{GameSnapshot, PieceInstance};
use crate::fb::{FrameBuffer, Ink};
use crate::types::{CellState, GamePhase};

/// Terminal columns per board cell.
pub const CELL_W: u16 = 2;

const FILLED: &str = "[]";
const EMPTY: &str = " .";
const GHOST: &str = "::";
const FLASH: &str = "##";

const WALL_L: &str = "<!";
const WALL_R: &str = "!>";

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

/// Where the playfield frame lands inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl FrameRect {
    /// Frame for a board of `cols` x `rows`, centered in the viewport.
    ///
    /// Walls take two columns each; the floor takes two rows.
    pub fn centered(cols: usize, rows: usize, viewport: Viewport) -> Self {
        let w = (cols as u16) * CELL_W + 4;
        let h = rows as u16 + 2;
        Self {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    /// Terminal position of board cell (x, y).
    pub fn cell_origin(&self, x: usize, y: usize) -> (u16, u16) {
        (self.x + 2 + (x as u16) * CELL_W, self.y + y as u16)
    }
}

/// Terminal renderer for the game.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    show_ghost: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self { show_ghost: true }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ghost(mut self, show_ghost: bool) -> Self {
        self.show_ghost = show_ghost;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);
        let frame = FrameRect::centered(snap.width, snap.height, viewport);

        self.draw_walls(fb, snap, frame);
        self.draw_cells(fb, snap, frame);

        if snap.shows_current() {
            if self.show_ghost {
                self.draw_piece(fb, frame, &snap.ghost, GHOST, Ink::Faint);
            }
            self.draw_piece(fb, frame, &snap.current, FILLED, Ink::Bright);
        }

        self.draw_side_panel(fb, snap, frame);

        match snap.phase {
            GamePhase::Paused => self.draw_overlay(fb, frame, &["PAUSED", "P TO RESUME"]),
            GamePhase::GameOver => {
                let countdown = format!("RESTART IN {}", snap.restart_countdown.unwrap_or(0));
                self.draw_overlay(fb, frame, &["GAME OVER", countdown.as_str()]);
            }
            GamePhase::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_walls(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: FrameRect) {
        let right = frame.x + frame.w - 2;
        for row in 0..snap.height as u16 {
            fb.put_str(frame.x, frame.y + row, WALL_L, Ink::Normal);
            fb.put_str(right, frame.y + row, WALL_R, Ink::Normal);
        }

        let floor_y = frame.y + snap.height as u16;
        fb.put_str(frame.x, floor_y, WALL_L, Ink::Normal);
        for col in 0..(snap.width as u16) * CELL_W {
            fb.put(frame.x + 2 + col, floor_y, '=', Ink::Normal);
        }
        fb.put_str(right, floor_y, WALL_R, Ink::Normal);

        for col in 0..snap.width as u16 {
            fb.put_str(frame.x + 2 + col * CELL_W, floor_y + 1, "\\/", Ink::Normal);
        }
    }

    fn draw_cells(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: FrameRect) {
        for y in 0..snap.height {
            for x in 0..snap.width {
                let (text, ink) = match snap.cell(x, y).unwrap_or_default() {
                    CellState::Filled => (FILLED, Ink::Bright),
                    CellState::Flashing => (FLASH, Ink::Alert),
                    CellState::Empty => (EMPTY, Ink::Faint),
                };
                let (px, py) = frame.cell_origin(x, y);
                fb.put_str(px, py, text, ink);
            }
        }
    }

    fn draw_piece(
        &self,
        fb: &mut FrameBuffer,
        frame: FrameRect,
        piece: &PieceInstance,
        text: &str,
        ink: Ink,
    ) {
        for (x, y) in piece.board_cells() {
            if x < 0 || y < 0 {
                continue;
            }
            let (px, py) = frame.cell_origin(x as usize, y as usize);
            if px < frame.x + frame.w - 2 {
                fb.put_str(px, py, text, ink);
            }
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: FrameRect) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if fb.width().saturating_sub(panel_x) < 12 {
            return;
        }

        let stats = [
            ("SCORE", snap.score.to_string()),
            ("HIGH", snap.high_score.to_string()),
            ("LINES", snap.lines.to_string()),
            ("LEVEL", snap.level.to_string()),
            ("COMBO", snap.combo.to_string()),
            ("PIECES", snap.pieces_placed.to_string()),
            ("TIME", format_clock(snap.game_time_secs)),
        ];

        let mut y = frame.y;
        for (label, value) in &stats {
            let x = fb.put_str(panel_x, y, label, Ink::Bright);
            fb.put_str(x + 1, y, value, Ink::Normal);
            y += 1;
        }

        y += 1;
        fb.put_str(panel_x, y, "NEXT", Ink::Bright);
        y += 1;
        y += draw_preview(fb, panel_x, y, Some(&snap.next));

        y += 1;
        let hold_ink = if snap.can_hold { Ink::Bright } else { Ink::Faint };
        fb.put_str(panel_x, y, "HOLD", hold_ink);
        y += 1;
        draw_preview(fb, panel_x, y, snap.held.as_ref());
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: FrameRect, lines: &[&str]) {
        let inner_x = frame.x + 2;
        let inner_w = frame.w.saturating_sub(4);
        let top = frame.y + frame.h.saturating_sub(2) / 2;
        for (i, line) in lines.iter().enumerate() {
            fb.put_centered(inner_x, inner_w, top + i as u16, line, Ink::Alert);
        }
    }
}

/// Draw a piece's matrix at (x, y); returns the rows used.
fn draw_preview(fb: &mut FrameBuffer, x: u16, y: u16, piece: Option<&PieceInstance>) -> u16 {
    let Some(piece) = piece else {
        fb.put_str(x, y, "-", Ink::Faint);
        return 1;
    };

    for (dx, dy) in piece.shape.cells() {
        fb.put_str(x + dx as u16 * CELL_W, y + dy as u16, FILLED, Ink::Bright);
    }
    piece.shape.rows() as u16
}

/// `m:ss` play clock.
fn format_clock(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
