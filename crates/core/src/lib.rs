//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminals, audio, or I/O, making it:
//!
//! - **Deterministic**: pieces come from an injected [`rng::RandomSource`], so a seed
//!   or a scripted [`rng::PieceSequence`] replays a game exactly
//! - **Testable**: every rule is exercised without a window or a timer
//! - **Portable**: renderers only need [`GameState::snapshot`] or [`Board::cell_at`]
//!
//! # Module Structure
//!
//! - [`board`]: 10x22 grid of locked cells and line-clear compaction
//! - [`game_state`]: the falling piece, scoring and the tick/command state machine
//! - [`pieces`]: tetromino offsets and pivot rotation
//! - [`rng`]: random sources for piece selection
//! - [`snapshot`]: plain-data copy of the state for renderers
//!
//! # Game Rules
//!
//! - Pieces spawn at column 5, are drawn uniformly from the seven kinds, and fall
//!   one row per tick
//! - A piece that cannot move down locks in place and scores 10
//! - Full rows are removed in one pass; the k-th row found in a pass scores k * 100
//! - The game ends when a freshly spawned piece cannot make its first move
//!
//! # Example
//!
//! ```
//! use pure_tetris_core::GameState;
//! use pure_tetris_types::GameAction;
//!
//! let mut game = GameState::with_seed(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.tick();
//!
//! assert!(game.is_running());
//! assert_eq!(game.pieces_spawned(), 1);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use pure_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use game_state::{EventQueue, GameState};
pub use pieces::{base_shape, Piece, PieceShape};
pub use rng::{PieceSequence, RandomSource, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
