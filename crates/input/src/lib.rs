//! Terminal input: key events to game actions.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`], one action per key
//! press. Auto-repeat is left to the caller.

pub mod map;

pub use pure_tetris_types as types;

pub use map::{handle_key_event, should_quit};
