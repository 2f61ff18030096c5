//! Terminal input (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Every press
//! is one command; the engine has no auto-repeat of its own, so held keys rely
//! on the terminal's key repeat.

pub mod map;

pub use tetris_1984_types as types;

pub use map::{handle_key_event, should_quit};
