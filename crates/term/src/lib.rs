//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders into a
//! simple framebuffer that is then flushed to a terminal backend.
//!
//! - [`GameView`] turns a [`core::GameSnapshot`] into a [`FrameBuffer`] (pure, testable)
//! - [`TerminalRenderer`] owns the terminal and writes only what changed
//!
//! Cells are 2 columns wide by default to compensate for the glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use pure_tetris_core as core;
pub use pure_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
