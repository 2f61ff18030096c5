//! Game engine module - the single authoritative state machine
//!
//! The engine owns a [`GameState`] plus the collaborators it talks to
//! (randomizer, sound hooks, high score store). It is driven by command
//! calls and by `tick(delta_ms)`; it never reads a clock, so a given seed and
//! input sequence always produce the same game.

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::config::EngineConfig;
use crate::error::{ConfigError, Result};
use crate::game_state::GameState;
use crate::hooks::{MemoryStore, NullSound, PersistenceStore, SoundHooks};
use crate::pieces::{try_rotate, PieceInstance};
use crate::rng::PieceRandomizer;
use crate::scoring::{calculate_drop_score, calculate_level, calculate_score, get_drop_interval_ms};
use crate::types::{CellState, GameAction, GamePhase, SoundEvent};

/// Tetris game engine
#[derive(Debug)]
pub struct GameEngine<S = NullSound, P = MemoryStore> {
    config: EngineConfig,
    state: GameState,
    randomizer: PieceRandomizer,
    sound: S,
    store: P,
}

impl GameEngine<NullSound, MemoryStore> {
    /// Headless engine with classic rules and a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::build(
            EngineConfig::default().with_seed(seed),
            NullSound,
            MemoryStore::default(),
        )
    }
}

impl<S: SoundHooks, P: PersistenceStore> GameEngine<S, P> {
    /// Create an engine, failing fast on an invalid configuration
    pub fn new(config: EngineConfig, sound: S, store: P) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, sound, store))
    }

    fn build(config: EngineConfig, sound: S, store: P) -> Self {
        let mut randomizer = match config.seed {
            Some(seed) => PieceRandomizer::new(seed),
            None => PieceRandomizer::from_entropy(),
        };
        let board = Board::new(config.board_width, config.board_height);
        let high_score = store.load_high_score();
        let state = Self::fresh_state(&config, &mut randomizer, board, high_score);

        let mut engine = Self {
            config,
            state,
            randomizer,
            sound,
            store,
        };
        engine.check_spawn();
        debug!(seed = ?engine.randomizer.seed(), high_score, "engine created");
        engine
    }

    fn fresh_state(
        config: &EngineConfig,
        randomizer: &mut PieceRandomizer,
        board: Board,
        high_score: u32,
    ) -> GameState {
        let current = PieceInstance::spawn(randomizer.draw(), config.board_width);
        let next = PieceInstance::spawn(randomizer.draw(), config.board_width);
        GameState::new(board, current, next, high_score)
    }

    // ----- queries -----

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn current(&self) -> &PieceInstance {
        self.state.current()
    }

    pub fn next(&self) -> &PieceInstance {
        self.state.next()
    }

    pub fn held(&self) -> Option<&PieceInstance> {
        self.state.held()
    }

    pub fn ghost(&self) -> &PieceInstance {
        self.state.ghost()
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    pub fn score(&self) -> u32 {
        self.state.score()
    }

    pub fn high_score(&self) -> u32 {
        self.state.high_score()
    }

    pub fn lines(&self) -> u32 {
        self.state.lines()
    }

    pub fn level(&self) -> u32 {
        self.state.level()
    }

    pub fn combo(&self) -> u32 {
        self.state.combo()
    }

    pub fn can_hold(&self) -> bool {
        self.state.can_hold()
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.state.drop_interval_ms()
    }

    /// Rows blinking before removal, bottom-most first
    pub fn pending_rows(&self) -> &[usize] {
        self.state.pending_rows()
    }

    pub fn pieces_placed(&self) -> u32 {
        self.state.pieces_placed()
    }

    /// Whole seconds left before the automatic restart, during game over
    pub fn restart_countdown_secs(&self) -> Option<u32> {
        if self.state.phase != GamePhase::GameOver {
            return None;
        }
        let remaining = self
            .config
            .restart_delay_ms
            .saturating_sub(self.state.game_over_elapsed_ms);
        Some(remaining.div_ceil(1000))
    }

    /// Play time in whole seconds, pauses excluded
    pub fn game_time_secs(&self) -> u64 {
        self.state.play_time_ms / 1000
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    pub fn sound_mut(&mut self) -> &mut S {
        &mut self.sound
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    // ----- commands -----

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Hold => self.hold(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    /// Move down one row (+2 points), or lock if the piece is resting
    pub fn soft_drop(&mut self) -> bool {
        if !self.accepts_piece_input() {
            return false;
        }

        if self.step_down() {
            self.add_score(calculate_drop_score(1));
            self.emit(SoundEvent::Move);
        } else {
            self.emit(SoundEvent::Drop);
            self.lock_piece();
        }
        true
    }

    /// Drop to the landing row (+2 points per row) and lock
    pub fn hard_drop(&mut self) -> bool {
        if !self.accepts_piece_input() {
            return false;
        }

        let mut rows = 0;
        while self.step_down() {
            rows += 1;
        }
        self.add_score(calculate_drop_score(rows));
        self.emit(SoundEvent::Drop);
        self.lock_piece();
        true
    }

    /// Rotate clockwise, trying the fallback offsets on collision
    pub fn rotate(&mut self) -> bool {
        if !self.accepts_piece_input() {
            return false;
        }

        let Some(rotated) = try_rotate(&self.state.current, |x, y| self.state.is_free(x, y)) else {
            return false;
        };
        self.state.current = rotated;
        self.refresh_ghost();
        self.emit(SoundEvent::Rotate);
        true
    }

    /// Swap the current piece with the held one (once per lock)
    pub fn hold(&mut self) -> bool {
        if !self.accepts_piece_input() || !self.state.can_hold {
            return false;
        }

        let width = self.config.board_width;
        let outgoing = self.state.current.respawned(width);
        let incoming = match self.state.held.replace(outgoing) {
            Some(held) => held,
            None => {
                let next = self.state.next;
                self.state.next = self.draw_piece();
                next
            }
        };

        self.state.current = incoming.respawned(width);
        self.state.can_hold = false;
        self.emit(SoundEvent::Hold);
        self.check_spawn();
        true
    }

    /// Toggle between playing and paused; ignored after game over
    pub fn toggle_pause(&mut self) -> bool {
        self.state.phase = match self.state.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            GamePhase::GameOver => return false,
        };
        debug!(phase = self.state.phase.as_str(), "pause toggled");
        self.emit(SoundEvent::Pause);
        true
    }

    /// Start a new game on an empty board, keeping the high score
    pub fn reset(&mut self) {
        let board = Board::new(self.config.board_width, self.config.board_height);
        self.restart(board);
    }

    /// Start a new game on a prepared board, keeping the high score
    ///
    /// The board must match the configured size. Spawn collision is checked
    /// right away, so a blocked spawn area ends the game immediately.
    pub fn reset_with_board(&mut self, board: Board) -> Result<()> {
        if board.width() != self.config.board_width || board.height() != self.config.board_height {
            return Err(ConfigError::BoardSizeMismatch {
                width: board.width(),
                height: board.height(),
                expected_width: self.config.board_width,
                expected_height: self.config.board_height,
            });
        }
        self.restart(board);
        Ok(())
    }

    fn restart(&mut self, board: Board) {
        let high_score = self
            .state
            .high_score
            .max(self.store.load_high_score());
        self.state = Self::fresh_state(&self.config, &mut self.randomizer, board, high_score);
        debug!(high_score, "game reset");
        self.check_spawn();
    }

    /// Advance timers by `delta_ms`
    ///
    /// Returns true if a gravity step ran.
    pub fn tick(&mut self, delta_ms: u32) -> bool {
        match self.state.phase {
            GamePhase::Paused => {
                self.state.paused_time_ms += u64::from(delta_ms);
                false
            }
            GamePhase::GameOver => {
                self.state.game_over_elapsed_ms =
                    self.state.game_over_elapsed_ms.saturating_add(delta_ms);
                if self.state.game_over_elapsed_ms >= self.config.restart_delay_ms {
                    info!("restart countdown elapsed");
                    self.reset();
                }
                false
            }
            GamePhase::Playing => {
                self.state.play_time_ms += u64::from(delta_ms);
                self.refresh_ghost();

                let mut stepped = false;
                self.state.drop_accumulator_ms =
                    self.state.drop_accumulator_ms.saturating_add(delta_ms);
                if self.state.drop_accumulator_ms >= self.state.drop_interval_ms {
                    self.state.drop_accumulator_ms -= self.state.drop_interval_ms;
                    self.gravity_step();
                    stepped = true;
                }

                if self.state.phase == GamePhase::Playing && self.state.is_clearing() {
                    self.advance_line_clear(delta_ms);
                }
                stepped
            }
        }
    }

    // ----- internals -----

    fn accepts_piece_input(&self) -> bool {
        self.state.phase == GamePhase::Playing
    }

    fn emit(&mut self, event: SoundEvent) {
        self.sound.play(event);
    }

    fn draw_piece(&mut self) -> PieceInstance {
        PieceInstance::spawn(self.randomizer.draw(), self.config.board_width)
    }

    fn refresh_ghost(&mut self) {
        self.state.ghost = self.state.project_down(&self.state.current);
    }

    fn shift(&mut self, dx: i32) -> bool {
        if !self.accepts_piece_input() {
            return false;
        }

        let moved = self.state.current.translated(dx, 0);
        if !self.state.fits(&moved) {
            return false;
        }
        self.state.current = moved;
        self.refresh_ghost();
        self.emit(SoundEvent::Move);
        true
    }

    fn step_down(&mut self) -> bool {
        let below = self.state.current.translated(0, 1);
        if !self.state.fits(&below) {
            return false;
        }
        self.state.current = below;
        true
    }

    fn gravity_step(&mut self) {
        if self.step_down() {
            trace!(y = self.state.current.y, "gravity step");
        } else {
            self.lock_piece();
        }
    }

    fn add_score(&mut self, points: u32) {
        if points == 0 {
            return;
        }
        self.state.score = self.state.score.saturating_add(points);
        if self.state.score > self.state.high_score {
            self.state.high_score = self.state.score;
            self.store.save_high_score(self.state.score);
        }
    }

    /// Spawn-collision check for the current piece
    fn check_spawn(&mut self) {
        if self.state.fits(&self.state.current) {
            self.refresh_ghost();
        } else {
            self.enter_game_over();
        }
    }

    /// Write the current piece into the board, start any line clear, and
    /// bring in the next piece
    fn lock_piece(&mut self) {
        let piece = self.state.current;
        for (x, y) in piece.board_cells() {
            if y >= 0 {
                self.state.board.set(x, y, CellState::Filled);
            }
        }
        self.state.can_hold = true;
        self.state.pieces_placed += 1;

        let full_rows = self.state.board.full_rows();
        debug!(
            kind = piece.kind.as_str(),
            x = piece.x,
            y = piece.y,
            rows = full_rows.len(),
            "piece locked"
        );
        if full_rows.is_empty() {
            self.state.combo = 0;
        } else {
            self.begin_line_clear(full_rows);
        }

        self.state.current = self.state.next;
        self.state.next = self.draw_piece();
        self.check_spawn();
    }

    fn begin_line_clear(&mut self, rows: Vec<usize>) {
        let result = calculate_score(
            rows.len(),
            self.state.level,
            self.state.combo,
            self.state.last_clear_was_tetris,
        );
        self.state.last_clear_was_tetris = result.is_tetris;
        self.state.combo += 1;
        self.add_score(result.total);

        debug!(
            rows = ?rows,
            points = result.total,
            combo = self.state.combo,
            "line clear started"
        );
        // Rows still blinking from an earlier lock join this animation.
        self.state.pending_rows.extend(rows);
        self.state.pending_rows.sort_unstable_by(|a, b| b.cmp(a));
        for &y in &self.state.pending_rows {
            self.state.board.fill_row(y, CellState::Flashing);
        }
        self.state.flash_count = 0;
        self.state.flash_timer_ms = 0;

        self.emit(if result.is_tetris {
            SoundEvent::Tetris
        } else {
            SoundEvent::LineClear
        });
    }

    fn advance_line_clear(&mut self, delta_ms: u32) {
        let interval = self.config.flash_interval_ms;
        self.state.flash_timer_ms = self.state.flash_timer_ms.saturating_add(delta_ms);
        if self.state.flash_timer_ms < interval {
            return;
        }
        self.state.flash_timer_ms -= interval;
        self.state.flash_count += 1;

        if self.state.flash_count >= self.config.max_flashes {
            self.finish_line_clear();
            return;
        }

        let cell = if self.state.flash_count % 2 == 0 {
            CellState::Flashing
        } else {
            CellState::Empty
        };
        for &y in &self.state.pending_rows {
            self.state.board.fill_row(y, cell);
        }
    }

    /// Remove the pending rows and credit them
    fn finish_line_clear(&mut self) {
        let rows = std::mem::take(&mut self.state.pending_rows);
        let removed = self.state.board.remove_rows(&rows) as u32;
        self.state.lines += removed;
        self.state.flash_count = 0;
        self.state.flash_timer_ms = 0;

        let level = calculate_level(self.state.lines);
        let leveled_up = level > self.state.level;
        self.state.level = level;
        if leveled_up {
            self.state.drop_interval_ms = get_drop_interval_ms(level);
            debug!(level, interval_ms = self.state.drop_interval_ms, "level up");
            self.emit(SoundEvent::LevelUp);
        }

        if self.state.phase == GamePhase::Playing {
            self.resettle_current();
        }
    }

    /// Lift the falling piece clear of a stack that dropped onto it
    ///
    /// Falls back to the spawn position, where a collision ends the game.
    fn resettle_current(&mut self) {
        let mut piece = self.state.current;
        while !self.state.fits(&piece) && piece.y > 0 {
            piece = piece.translated(0, -1);
        }
        if !self.state.fits(&piece) {
            piece = piece.respawned(self.config.board_width);
        }
        if piece != self.state.current {
            debug!(from = self.state.current.y, to = piece.y, "falling piece lifted");
        }
        self.state.current = piece;
        self.check_spawn();
    }

    fn enter_game_over(&mut self) {
        if self.state.is_clearing() {
            self.finish_line_clear();
        }
        if self.state.phase == GamePhase::GameOver {
            return;
        }
        self.state.phase = GamePhase::GameOver;
        self.state.game_over_elapsed_ms = 0;
        info!(
            score = self.state.score,
            lines = self.state.lines,
            level = self.state.level,
            "game over"
        );
        self.emit(SoundEvent::GameOver);
    }
}
