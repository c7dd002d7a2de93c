//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 22 rows (indexed 0-21, y grows downward)
//! - **Hazard row**: row 1 is drawn as the boundary marker row
//! - **Spawn column**: `BOARD_WIDTH / 2`
//!
//! # Examples
//!
//! ```
//! use pure_tetris_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 22);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (22 rows)
pub const BOARD_HEIGHT: u8 = 22;

/// Row drawn as the boundary marker at the top of the playfield.
pub const HAZARD_ROW: u8 = 1;

/// Default gravity interval (1000ms = 1 row per second)
pub const TICK_MS: u32 = 1000;

/// Points awarded for every locked piece.
pub const LOCK_SCORE: u32 = 10;

/// Points per step of the running line counter during a clear pass.
pub const LINE_SCORE_STEP: u32 = 100;

/// Capacity of the pending event queue drained by the shell.
pub const EVENT_QUEUE_CAPACITY: usize = 16;

/// The seven tetromino piece kinds
///
/// Order matches [`PieceKind::ALL`], which is also the index space used by the
/// random piece draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    I,
    S,
    Z,
    L,
    J,
    T,
}

impl PieceKind {
    /// All kinds in draw order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
        PieceKind::T,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use pure_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "o" => Some(PieceKind::O),
            "i" => Some(PieceKind::I),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "t" => Some(PieceKind::T),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "o",
            PieceKind::I => "i",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::T => "t",
        }
    }

    /// Display color of the kind.
    pub fn color(&self) -> PieceColor {
        match self {
            PieceKind::O => PieceColor::Yellow,
            PieceKind::I => PieceColor::Blue,
            PieceKind::S => PieceColor::Red,
            PieceKind::Z => PieceColor::Green,
            PieceKind::L => PieceColor::Orange,
            PieceKind::J => PieceColor::Pink,
            PieceKind::T => PieceColor::Magenta,
        }
    }

    /// Compact cell code used by snapshots (1..=7, 0 is reserved for empty).
    pub fn code(&self) -> u8 {
        match self {
            PieceKind::O => 1,
            PieceKind::I => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::L => 5,
            PieceKind::J => 6,
            PieceKind::T => 7,
        }
    }

    /// Inverse of [`PieceKind::code`]. Returns `None` for 0 and unknown codes.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::O),
            2 => Some(PieceKind::I),
            3 => Some(PieceKind::S),
            4 => Some(PieceKind::Z),
            5 => Some(PieceKind::L),
            6 => Some(PieceKind::J),
            7 => Some(PieceKind::T),
            _ => None,
        }
    }
}

/// Display colors carried by cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    /// Color of the empty sentinel
    White,
    Yellow,
    Blue,
    Red,
    Green,
    Orange,
    Pink,
    Magenta,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the specified piece kind
pub type Cell = Option<PieceKind>;

/// Display color of a cell value, `White` for the empty sentinel.
pub fn cell_color(cell: Cell) -> PieceColor {
    cell.map(|kind| kind.color()).unwrap_or(PieceColor::White)
}

/// Player commands forwarded by the input collaborator
///
/// One action per discrete key press; auto-repeat is not handled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it cannot move
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use pure_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotateCw"), Some(GameAction::RotateCw));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
        }
    }
}

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    /// A live piece is active and unlocked.
    #[default]
    Falling,
    /// Terminal state; only queries are served.
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Falling => "falling",
            GameStatus::GameOver => "game_over",
        }
    }
}

/// Core-side notification for external collaborators (sound, logging).
///
/// Events are queued by the core and drained by the shell; the core never
/// waits on whoever consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new game began; the cue for background music.
    Started,
    /// A new piece entered the board.
    Spawned { kind: PieceKind },
    /// A piece was written into the board.
    Locked { kind: PieceKind },
    /// A clear pass removed `count` rows.
    LinesCleared { count: u32 },
    /// A freshly spawned piece could not move.
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_constants() {
        assert_eq!(BOARD_WIDTH, 10);
        assert_eq!(BOARD_HEIGHT, 22);
        assert_eq!(HAZARD_ROW, 1);
        assert_eq!(TICK_MS, 1000);
        assert_eq!(LOCK_SCORE, 10);
        assert_eq!(LINE_SCORE_STEP, 100);
    }

    #[test]
    fn piece_codes_roundtrip_and_skip_empty() {
        for kind in PieceKind::ALL {
            assert_ne!(kind.code(), 0);
            assert_eq!(PieceKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(PieceKind::from_code(0), None);
        assert_eq!(PieceKind::from_code(8), None);
    }

    #[test]
    fn cell_colors() {
        assert_eq!(cell_color(None), PieceColor::White);
        assert_eq!(cell_color(Some(PieceKind::O)), PieceColor::Yellow);
        assert_eq!(cell_color(Some(PieceKind::T)), PieceColor::Magenta);
        assert_eq!(cell_color(Some(PieceKind::J)), PieceColor::Pink);
    }

    #[test]
    fn action_string_roundtrip() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::RotateCw,
            GameAction::RotateCcw,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}
