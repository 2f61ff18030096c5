//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The 1984 playfield:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: horizontally centered on row 0
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity at level 1 |
//! | `DROP_STEP_MS` | 50 | Gravity speed-up per level |
//! | `MIN_DROP_MS` | 50 | Fastest gravity |
//! | `FLASH_INTERVAL_MS` | 100 | Line-clear blink period |
//! | `MAX_FLASHES` | 4 | Blinks before rows are removed |
//! | `RESTART_DELAY_MS` | 5000 | Game-over countdown before auto-restart |
//!
//! # Examples
//!
//! ```
//! use tetris_1984_types::{GamePhase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(PieceKind::T.as_str(), "t");
//!
//! let phase = GamePhase::default();
//! assert_eq!(phase.as_str(), "playing");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity interval reduction per level above 1
pub const DROP_STEP_MS: u32 = 50;

/// Fastest gravity interval
pub const MIN_DROP_MS: u32 = 50;

/// Time between line-clear blinks
pub const FLASH_INTERVAL_MS: u32 = 100;

/// Number of blinks before cleared rows are removed
pub const MAX_FLASHES: u32 = 4;

/// Delay between game over and the automatic restart
pub const RESTART_DELAY_MS: u32 = 5000;

/// Lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per row for both soft and hard drops
pub const DROP_POINTS: u32 = 2;

/// Line clear scoring table, indexed by lines cleared
///
/// Points are multiplied by the current (1-based) level.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Extra points (times level) for a tetris directly after a tetris
pub const BACK_TO_BACK_BONUS: u32 = 1200;

/// Combo scoring base value (times combo count times level)
pub const COMBO_BASE: u32 = 50;

/// Offsets tried, in order, when a rotation collides at its origin
pub const KICK_OFFSETS: [(i32, i32); 5] = [(-1, 0), (1, 0), (0, -1), (-1, -1), (1, -1)];

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in draw-index order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Index into [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }
}

/// A cell on the game board
///
/// The 1984 machine drew every locked block the same way, so cells carry no
/// piece kind. `Flashing` marks rows that are blinking before removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Filled,
    Flashing,
}

impl CellState {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellState::Empty)
    }
}

/// Lifecycle phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    Paused,
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "gameOver",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Input adapters translate raw key events into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, locking it if it cannot descend
    SoftDrop,
    /// Drop piece to the lowest valid position and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Swap the current piece with the held piece
    Hold,
    /// Toggle pause state
    Pause,
    /// Restart the game (any phase)
    Restart,
}

/// Discrete notifications for sound hooks
///
/// Emitted in order as the engine processes commands and ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    Move,
    Rotate,
    Drop,
    Hold,
    LineClear,
    Tetris,
    LevelUp,
    GameOver,
    Pause,
}

impl SoundEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEvent::Move => "move",
            SoundEvent::Rotate => "rotate",
            SoundEvent::Drop => "drop",
            SoundEvent::Hold => "hold",
            SoundEvent::LineClear => "lineClear",
            SoundEvent::Tetris => "tetris",
            SoundEvent::LevelUp => "levelUp",
            SoundEvent::GameOver => "gameOver",
            SoundEvent::Pause => "pause",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_timing_defaults() {
        assert_eq!(BASE_DROP_MS, 1000);
        assert_eq!(MIN_DROP_MS, 50);
        assert_eq!(FLASH_INTERVAL_MS, 100);
        assert_eq!(MAX_FLASHES, 4);
        assert_eq!(RESTART_DELAY_MS, 5000);
    }

    #[test]
    fn piece_kind_names_and_indices_are_distinct() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(kind.as_str().len(), 1);
        }
    }
}
