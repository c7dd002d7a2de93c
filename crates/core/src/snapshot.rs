use crate::pieces::Piece;
use crate::types::{GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    /// Absolute board coordinates of the four cells.
    pub cells: [(i8, i8); 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            x: value.x,
            y: value.y,
            cells: value.cells(),
        }
    }
}

/// Plain-data view of a game for renderers (0 = empty, otherwise `PieceKind::code`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub status: GameStatus,
    pub score: u32,
    pub lines: u32,
    pub pieces_spawned: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            status: GameStatus::Falling,
            score: 0,
            lines: 0,
            pieces_spawned: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameState;

    #[test]
    fn snapshot_reflects_state() {
        let mut state = GameState::with_seed(3);
        state.tick();
        let snap = state.snapshot();

        assert_eq!(snap.score, state.score());
        assert_eq!(snap.pieces_spawned, 1);
        assert!(!snap.game_over());
        let active = snap.active.expect("active piece");
        assert_eq!(active.cells, state.active_cells());
    }

    #[test]
    fn snapshot_into_overwrites_previous() {
        let mut snap = GameSnapshot::default();
        snap.board[0][0] = 7;
        snap.score = 99;

        GameState::with_seed(3).snapshot_into(&mut snap);
        assert_eq!(snap.board[0][0], 0);
        assert_eq!(snap.score, 0);
    }
}
