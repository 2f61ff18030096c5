//! Tetris 1984 (workspace facade crate).
//!
//! Re-exports the workspace crates under one name and adds the pieces the
//! terminal binary plugs into the engine: a JSON file high score store and
//! the terminal bell.

pub mod sound;
pub mod store;

pub use tetris_1984_core as core;
pub use tetris_1984_input as input;
pub use tetris_1984_term as term;
pub use tetris_1984_types as types;
