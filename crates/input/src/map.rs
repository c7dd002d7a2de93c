//! Key mapping from terminal events to game actions.
//!
//! The letter layout follows the classic one-hand scheme: A/D move, S drops,
//! Q/E rotate. Arrow keys and vi keys are aliases.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(GameAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(GameAction::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(GameAction::SoftDrop)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('e')
        | KeyCode::Char('E')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(GameAction::RotateCw),
        KeyCode::Char('q')
        | KeyCode::Char('Q')
        | KeyCode::Char('z')
        | KeyCode::Char('Z') => Some(GameAction::RotateCcw),

        _ => None,
    }
}

/// Check if key should quit the game.
///
/// `q` rotates, so quitting is Esc or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
