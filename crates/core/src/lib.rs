//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the 1984 game rules, state management, and the tick
//! driven state machine. It has **no dependencies** on terminals or files:
//! sound and high score persistence reach it through the [`SoundHooks`] and
//! [`PersistenceStore`] traits.
//!
//! - **Deterministic**: the same seed and inputs produce the same game
//! - **Clock-free**: time only advances through [`GameEngine::tick`]
//! - **Headless**: runs anywhere (terminal, tests, benches)
//!
//! # Module Structure
//!
//! - [`board`]: the well, collision queries and row compaction
//! - [`pieces`]: tetromino templates and clockwise rotation with fallback offsets
//! - [`rng`]: uniform, history-free piece randomizer
//! - [`scoring`]: line scores, combo and back-to-back bonuses, level speed
//! - [`game_state`]: the aggregate the engine mutates
//! - [`engine`]: commands, gravity, line-clear animation, game over countdown
//! - [`snapshot`]: owned per-frame view for renderers
//!
//! # Game Rules
//!
//! - **Randomizer**: every piece is an independent uniform draw
//! - **Rotation**: clockwise only, trying `(0,0)` then five fixed offsets
//! - **No lock delay**: a piece locks on the gravity step it cannot fall
//! - **Line clear**: full rows blink four times before removal and stay solid
//!   meanwhile; play goes on above them
//! - **Hold**: once per locked piece
//! - **Game over**: a fresh game starts by itself after the countdown
//!
//! # Example
//!
//! ```
//! use tetris_1984_core::GameEngine;
//! use tetris_1984_core::types::{GameAction, GamePhase};
//!
//! let mut game = GameEngine::with_seed(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.score() > 0); // Hard drop awards points
//! assert_eq!(game.phase(), GamePhase::Playing);
//! ```
//!
//! # Timing
//!
//! - **Tick Rate**: 16ms is what the terminal front end uses
//! - **Gravity**: 1000ms at level 1, 50ms faster per level, floor 50ms
//! - **Flash**: 100ms per blink, rows removed after the fourth

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game_state;
pub mod hooks;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tetris_1984_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::EngineConfig;
pub use engine::GameEngine;
pub use error::ConfigError;
pub use game_state::GameState;
pub use hooks::{EventLog, MemoryStore, NullSound, PersistenceStore, SoundHooks};
pub use pieces::{template, try_rotate, PieceInstance, Shape};
pub use rng::PieceRandomizer;
pub use scoring::{
    calculate_drop_score, calculate_level, calculate_score, get_drop_interval_ms, ScoreResult,
};
pub use snapshot::GameSnapshot;
