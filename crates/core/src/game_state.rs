//! Game state module - the aggregate the engine owns
//!
//! `GameState` is plain data: the engine mutates it through commands and
//! ticks, and replaces it wholesale on reset. Renderers read it through the
//! getters below or through a [`crate::GameSnapshot`].

use crate::board::Board;
use crate::pieces::PieceInstance;
use crate::scoring::{calculate_level, get_drop_interval_ms};
use crate::types::GamePhase;

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current: PieceInstance,
    pub(crate) next: PieceInstance,
    pub(crate) held: Option<PieceInstance>,
    /// Landing position of `current`, refreshed every tick and command.
    pub(crate) ghost: PieceInstance,
    pub(crate) can_hold: bool,
    pub(crate) score: u32,
    pub(crate) high_score: u32,
    pub(crate) lines: u32,
    pub(crate) level: u32,
    pub(crate) combo: u32,
    pub(crate) last_clear_was_tetris: bool,
    pub(crate) phase: GamePhase,
    /// Rows waiting for removal, bottom-most first.
    pub(crate) pending_rows: Vec<usize>,
    pub(crate) flash_count: u32,
    pub(crate) flash_timer_ms: u32,
    pub(crate) drop_accumulator_ms: u32,
    pub(crate) drop_interval_ms: u32,
    pub(crate) game_over_elapsed_ms: u32,
    pub(crate) pieces_placed: u32,
    /// Time spent playing, pauses excluded.
    pub(crate) play_time_ms: u64,
    pub(crate) paused_time_ms: u64,
}

impl GameState {
    /// Fresh game on `board` with the given first two pieces
    ///
    /// The caller decides the phase: spawn collision is checked by the engine.
    pub(crate) fn new(
        board: Board,
        current: PieceInstance,
        next: PieceInstance,
        high_score: u32,
    ) -> Self {
        let level = calculate_level(0);
        Self {
            board,
            current,
            next,
            held: None,
            ghost: current,
            can_hold: true,
            score: 0,
            high_score,
            lines: 0,
            level,
            combo: 0,
            last_clear_was_tetris: false,
            phase: GamePhase::Playing,
            pending_rows: Vec::new(),
            flash_count: 0,
            flash_timer_ms: 0,
            drop_accumulator_ms: 0,
            drop_interval_ms: get_drop_interval_ms(level),
            game_over_elapsed_ms: 0,
            pieces_placed: 0,
            play_time_ms: 0,
            paused_time_ms: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> &PieceInstance {
        &self.current
    }

    pub fn next(&self) -> &PieceInstance {
        &self.next
    }

    pub fn held(&self) -> Option<&PieceInstance> {
        self.held.as_ref()
    }

    pub fn ghost(&self) -> &PieceInstance {
        &self.ghost
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn last_clear_was_tetris(&self) -> bool {
        self.last_clear_was_tetris
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn pending_rows(&self) -> &[usize] {
        &self.pending_rows
    }

    pub fn flash_count(&self) -> u32 {
        self.flash_count
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn game_over_elapsed_ms(&self) -> u32 {
        self.game_over_elapsed_ms
    }

    pub fn pieces_placed(&self) -> u32 {
        self.pieces_placed
    }

    pub fn play_time_ms(&self) -> u64 {
        self.play_time_ms
    }

    pub fn paused_time_ms(&self) -> u64 {
        self.paused_time_ms
    }

    /// Whether a line-clear animation is running
    pub fn is_clearing(&self) -> bool {
        !self.pending_rows.is_empty()
    }

    /// Check a cell for piece placement
    ///
    /// Rows waiting for removal stay solid while they blink.
    pub(crate) fn is_free(&self, x: i32, y: i32) -> bool {
        self.board.is_valid(x, y) && !self.pending_rows.contains(&(y as usize))
    }

    pub(crate) fn fits(&self, piece: &PieceInstance) -> bool {
        piece.fits(|x, y| self.is_free(x, y))
    }

    /// Lowest position `piece` can fall to
    pub(crate) fn project_down(&self, piece: &PieceInstance) -> PieceInstance {
        let mut landed = *piece;
        loop {
            let below = landed.translated(0, 1);
            if !self.fits(&below) {
                return landed;
            }
            landed = below;
        }
    }
}
