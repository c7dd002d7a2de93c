//! Game state module - the tick/command state machine
//!
//! This module ties the board, the live piece and the injected random source
//! together. It handles gravity ticks, player commands, locking, line clears,
//! scoring and the game-over transition.
//!
//! Collision rules, all evaluated at the piece's current anchor:
//!
//! - **Down** (tick, soft drop, spawn check): every cell must lie in
//!   `[0, width) x [0, height - 1)` and the cell directly below it must be empty.
//!   Otherwise the piece locks where it is.
//! - **Horizontal**: every cell must stay off the wall it moves toward, and the
//!   cell at `(x + 1, y)` must be empty. The probe column is `x + 1` for both
//!   directions.
//! - **Rotation**: every candidate cell must lie in `[0, width) x [0, height - 1)`
//!   and the cell below each candidate cell must be empty.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::board::Board;
use crate::pieces::Piece;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Column offset inspected by horizontal moves, whichever direction they go.
/// Left moves also read the right-hand neighbour; that is the game's rule, not a typo.
const HORIZONTAL_PROBE_DX: i8 = 1;

/// Pending notifications, drained by the shell.
pub type EventQueue = ArrayVec<GameEvent, EVENT_QUEUE_CAPACITY>;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    active: Piece,
    rng: R,
    status: GameStatus,
    score: u32,
    lines: u32,
    /// Successful spawns, including the first piece.
    pieces_spawned: u32,
    /// Set once the active piece has been paid for locking.
    lock_awarded: bool,
    events: EventQueue,
}

impl GameState<SimpleRng> {
    /// Create a new game driven by a [`SimpleRng`] with the given seed
    pub fn with_seed(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game on an empty board and spawn the first piece
    pub fn new(rng: R) -> Self {
        Self::with_board(Board::new(), rng)
    }

    /// Start a game on a prepared board
    ///
    /// If the first piece cannot move, the game starts in `GameOver`.
    pub fn with_board(board: Board, rng: R) -> Self {
        let mut state = Self {
            board,
            active: Piece::new(PieceKind::O),
            rng,
            status: GameStatus::Falling,
            score: 0,
            lines: 0,
            pieces_spawned: 0,
            lock_awarded: false,
            events: ArrayVec::new(),
        };
        state.push_event(GameEvent::Started);
        state.spawn_piece();
        state
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Falling
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// The falling piece (after game over: the piece that could not move)
    pub fn active(&self) -> Piece {
        self.active
    }

    /// Absolute coordinates of the falling piece
    pub fn active_cells(&self) -> [(i8, i8); 4] {
        self.active.cells()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Locked cell at (x, y); see [`Board::cell_at`] for the panic contract
    pub fn cell_at(&self, x: i8, y: i8) -> Cell {
        self.board.cell_at(x, y)
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Take all pending events, oldest first.
    pub fn take_events(&mut self) -> EventQueue {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = Some(ActiveSnapshot::from(self.active));
        out.status = self.status;
        out.score = self.score;
        out.lines = self.lines;
        out.pieces_spawned = self.pieces_spawned;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Timer event: move the piece down one row, locking it if it cannot move.
    ///
    /// Returns false once the game is over.
    pub fn tick(&mut self) -> bool {
        if self.game_over() {
            return false;
        }
        self.step_down();
        true
    }

    /// Apply a player command
    ///
    /// Returns true if the command changed the game state.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over() {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.try_move_horizontal(-1),
            GameAction::MoveRight => self.try_move_horizontal(1),
            GameAction::SoftDrop => {
                self.step_down();
                true
            }
            GameAction::RotateCw => self.try_rotate(true),
            GameAction::RotateCcw => self.try_rotate(false),
        }
    }

    /// Check the down rule for `piece` at its current anchor
    pub fn can_move_down(&self, piece: &Piece) -> bool {
        piece
            .cells()
            .iter()
            .all(|&(x, y)| in_drop_bounds(x, y) && !self.board.is_occupied(x, y + 1))
    }

    /// Move down one row, or lock, clear and respawn.
    fn step_down(&mut self) {
        if self.can_move_down(&self.active) {
            self.active.y += 1;
            return;
        }

        self.lock_piece();
        self.clear_lines();
        self.spawn_piece();
    }

    pub(crate) fn try_move_horizontal(&mut self, dx: i8) -> bool {
        let blocked = self.active.cells().iter().any(|&(x, y)| {
            let at_wall = if dx > 0 {
                x >= BOARD_WIDTH as i8 - 1
            } else {
                x <= 0
            };
            at_wall || self.board.is_occupied(x + HORIZONTAL_PROBE_DX, y)
        });

        if blocked {
            return false;
        }
        self.active.x += dx;
        true
    }

    pub(crate) fn try_rotate(&mut self, clockwise: bool) -> bool {
        let candidate = if clockwise {
            self.active.rotate_cw()
        } else {
            self.active.rotate_ccw()
        };

        if !self.can_move_down(&candidate) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Write the active piece into the board and pay the lock bonus once
    fn lock_piece(&mut self) {
        let kind = self.active.kind;
        self.board.lock_cells(&self.active.cells(), kind);

        if !self.lock_awarded {
            self.score += LOCK_SCORE;
            self.lock_awarded = true;
        }

        debug!(
            kind = kind.as_str(),
            x = self.active.x,
            y = self.active.y,
            score = self.score,
            "piece locked"
        );
        self.push_event(GameEvent::Locked { kind });
    }

    /// Clear full rows; the k-th row found in this pass is worth k * 100
    fn clear_lines(&mut self) {
        let cleared = self.board.clear_full_rows();
        if cleared.is_empty() {
            return;
        }

        let mut running = 0;
        for _ in cleared.iter() {
            running += 1;
            self.score += LINE_SCORE_STEP * running;
        }
        self.lines += running;

        debug!(
            rows = ?cleared.as_slice(),
            score = self.score,
            "lines cleared"
        );
        self.push_event(GameEvent::LinesCleared { count: running });
    }

    /// Spawn a random piece and give it its first down-move
    ///
    /// If that move is blocked the piece locks where it spawned, like any
    /// other failed down-move, and the game is over.
    fn spawn_piece(&mut self) {
        let piece = Piece::spawn_random(&mut self.rng);
        self.active = piece;
        self.lock_awarded = false;

        if self.can_move_down(&piece) {
            self.active.y += 1;
            self.pieces_spawned += 1;
            debug!(
                kind = piece.kind.as_str(),
                spawned = self.pieces_spawned,
                "piece spawned"
            );
            self.push_event(GameEvent::Spawned { kind: piece.kind });
        } else {
            self.lock_piece();
            self.status = GameStatus::GameOver;
            debug!(score = self.score, lines = self.lines, "game over");
            self.push_event(GameEvent::GameOver);
        }
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::with_seed(1)
    }
}

#[inline(always)]
fn in_drop_bounds(x: i8, y: i8) -> bool {
    x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 - 1
}
