//! Snapshot module - owned, read-only view of a game for renderers
//!
//! A snapshot never borrows the engine, so the UI loop can take one, release
//! the engine, and draw at its own pace. `snapshot_into` reuses the cell
//! buffer between frames.

use crate::engine::GameEngine;
use crate::hooks::{PersistenceStore, SoundHooks};
use crate::pieces::PieceInstance;
use crate::types::{CellState, GamePhase};

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Board cells, row-major from the top
    pub cells: Vec<CellState>,
    pub current: PieceInstance,
    pub ghost: PieceInstance,
    pub next: PieceInstance,
    pub held: Option<PieceInstance>,
    pub score: u32,
    pub high_score: u32,
    pub lines: u32,
    pub level: u32,
    pub combo: u32,
    pub phase: GamePhase,
    pub can_hold: bool,
    /// Whole seconds before the automatic restart (game over only)
    pub restart_countdown: Option<u32>,
    pub pieces_placed: u32,
    pub game_time_secs: u64,
    pub pending_rows: Vec<usize>,
}

impl GameSnapshot {
    pub fn cell(&self, x: usize, y: usize) -> Option<CellState> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }

    /// Whether the falling piece should be drawn this frame
    pub fn shows_current(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}

impl<S: SoundHooks, P: PersistenceStore> GameEngine<S, P> {
    /// Take an owned snapshot of the current game
    pub fn snapshot(&self) -> GameSnapshot {
        let state = self.state();
        GameSnapshot {
            width: state.board().width(),
            height: state.board().height(),
            cells: state.board().cells().to_vec(),
            current: *state.current(),
            ghost: *state.ghost(),
            next: *state.next(),
            held: state.held().copied(),
            score: state.score(),
            high_score: state.high_score(),
            lines: state.lines(),
            level: state.level(),
            combo: state.combo(),
            phase: state.phase(),
            can_hold: state.can_hold(),
            restart_countdown: self.restart_countdown_secs(),
            pieces_placed: state.pieces_placed(),
            game_time_secs: self.game_time_secs(),
            pending_rows: state.pending_rows().to_vec(),
        }
    }

    /// Refresh an existing snapshot, reusing its buffers
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let state = self.state();
        out.width = state.board().width();
        out.height = state.board().height();
        out.cells.clear();
        out.cells.extend_from_slice(state.board().cells());
        out.current = *state.current();
        out.ghost = *state.ghost();
        out.next = *state.next();
        out.held = state.held().copied();
        out.score = state.score();
        out.high_score = state.high_score();
        out.lines = state.lines();
        out.level = state.level();
        out.combo = state.combo();
        out.phase = state.phase();
        out.can_hold = state.can_hold();
        out.restart_countdown = self.restart_countdown_secs();
        out.pieces_placed = state.pieces_placed();
        out.game_time_secs = self.game_time_secs();
        out.pending_rows.clear();
        out.pending_rows.extend_from_slice(state.pending_rows());
    }
}
