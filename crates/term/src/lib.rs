//! Terminal "game renderer".
//!
//! A small, game-oriented rendering layer: [`GameView`] draws a
//! [`core::GameSnapshot`] into a character [`FrameBuffer`], and
//! [`TerminalRenderer`] flushes that buffer to the terminal with diffing.
//!
//! Only the renderer does I/O; everything else is unit-testable.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_1984_core as core;
pub use tetris_1984_types as types;

pub use fb::{FrameBuffer, Glyph, Ink};
pub use game_view::{FrameRect, GameView, Viewport, CELL_W};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
