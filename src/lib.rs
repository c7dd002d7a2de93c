//! Pure Tetris (workspace facade crate).
//!
//! The simulation lives in dedicated crates under `crates/`; this package re-exports
//! them as `pure_tetris::{core,input,term,types}` and adds the shell pieces used by
//! the binary: runtime [`config`] and the [`sound`] collaborator.

pub mod config;
pub mod sound;

pub use pure_tetris_core as core;
pub use pure_tetris_input as input;
pub use pure_tetris_term as term;
pub use pure_tetris_types as types;
