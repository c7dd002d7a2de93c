//! Pieces module - tetromino shapes and pivot rotation
//!
//! Every kind is four offsets around a pivot cell. Rotation is a pure quarter
//! turn of those offsets; there are no rotation states and no wall kicks. The
//! controller decides whether a rotated candidate is committed.

use crate::rng::RandomSource;
use crate::types::{PieceColor, PieceKind, BOARD_WIDTH};

/// Offset of a single mino relative to the pivot
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the pivot
pub type PieceShape = [MinoOffset; 4];

/// Base offsets of a kind, y growing downward.
pub fn base_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::O => [(0, 0), (-1, 0), (-1, 1), (0, 1)],
        PieceKind::I => [(-2, 0), (-1, 0), (0, 0), (1, 0)],
        PieceKind::S => [(-1, 0), (0, 0), (0, 1), (1, 1)],
        PieceKind::Z => [(-1, 1), (0, 1), (0, 0), (1, 0)],
        PieceKind::L => [(-1, 1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::J => [(-1, 0), (-1, 1), (0, 1), (1, 1)],
        PieceKind::T => [(-1, 1), (0, 1), (0, 0), (1, 1)],
    }
}

/// A live piece: kind, current offsets, and anchor position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    offsets: PieceShape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// A piece of `kind` with base offsets, anchored at its spawn position.
    ///
    /// The spawn column is the middle of the board; the spawn row is the
    /// largest y offset so no cell starts above row 0.
    pub fn new(kind: PieceKind) -> Self {
        let offsets = base_shape(kind);
        let mut piece = Self {
            kind,
            offsets,
            x: (BOARD_WIDTH / 2) as i8,
            y: 0,
        };
        piece.y = piece.max_offset_y();
        piece
    }

    /// Draw a kind uniformly from the seven and return it as a fresh piece.
    pub fn spawn_random(rng: &mut impl RandomSource) -> Self {
        let index = rng.next_range(PieceKind::ALL.len() as u32) as usize;
        Self::new(PieceKind::ALL[index])
    }

    /// Same piece moved to another anchor.
    pub fn at(self, x: i8, y: i8) -> Self {
        Self { x, y, ..self }
    }

    /// Current offsets relative to the anchor.
    pub fn offsets(&self) -> &PieceShape {
        &self.offsets
    }

    /// Absolute board coordinates of the four cells.
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.offsets.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn color(&self) -> PieceColor {
        self.kind.color()
    }

    pub fn max_offset_x(&self) -> i8 {
        self.offsets.iter().map(|&(dx, _)| dx).max().unwrap_or(0)
    }

    pub fn max_offset_y(&self) -> i8 {
        self.offsets.iter().map(|&(_, dy)| dy).max().unwrap_or(0)
    }

    /// Quarter turn clockwise: (x, y) -> (y, -x). O is returned unchanged.
    pub fn rotate_cw(&self) -> Self {
        self.map_offsets(|(dx, dy)| (dy, -dx))
    }

    /// Quarter turn counter-clockwise: (x, y) -> (-y, x). O is returned unchanged.
    pub fn rotate_ccw(&self) -> Self {
        self.map_offsets(|(dx, dy)| (-dy, dx))
    }

    fn map_offsets(&self, f: impl Fn(MinoOffset) -> MinoOffset) -> Self {
        if self.kind == PieceKind::O {
            return *self;
        }
        Self {
            offsets: self.offsets.map(f),
            ..*self
        }
    }
}
