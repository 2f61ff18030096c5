//! Key mapping from terminal events to game actions.
//!
//! Arrow keys and the numeric keypad layout of the 1984 machine both work:
//! `7`/`9` move, `8` rotates, `4` soft drops and `5` restarts.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Release events map to nothing; key repeat is delivered as presses.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('7') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('9') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('4') => Some(GameAction::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('8') => Some(GameAction::Rotate),

        // Actions
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('c') | KeyCode::Char('C')
            if !key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(GameAction::Hold)
        }
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('5') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Left)), Some(GameAction::MoveLeft));
        assert_eq!(handle_key_event(key(KeyCode::Right)), Some(GameAction::MoveRight));
        assert_eq!(handle_key_event(key(KeyCode::Down)), Some(GameAction::SoftDrop));
    }

    #[test]
    fn test_keypad_layout() {
        assert_eq!(handle_key_event(key(KeyCode::Char('7'))), Some(GameAction::MoveLeft));
        assert_eq!(handle_key_event(key(KeyCode::Char('9'))), Some(GameAction::MoveRight));
        assert_eq!(handle_key_event(key(KeyCode::Char('8'))), Some(GameAction::Rotate));
        assert_eq!(handle_key_event(key(KeyCode::Char('4'))), Some(GameAction::SoftDrop));
        assert_eq!(handle_key_event(key(KeyCode::Char('5'))), Some(GameAction::Restart));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Up)), Some(GameAction::Rotate));
        assert_eq!(handle_key_event(key(KeyCode::Char(' '))), Some(GameAction::HardDrop));
        assert_eq!(handle_key_event(key(KeyCode::Char('c'))), Some(GameAction::Hold));
        assert_eq!(handle_key_event(key(KeyCode::Char('P'))), Some(GameAction::Pause));
        assert_eq!(handle_key_event(key(KeyCode::Char('r'))), Some(GameAction::Restart));
        assert_eq!(handle_key_event(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_ctrl_c_is_not_hold() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c), None);
        assert!(should_quit(ctrl_c));
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key_event(release), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(key(KeyCode::Char('q'))));
        assert!(should_quit(key(KeyCode::Esc)));
        assert!(!should_quit(key(KeyCode::Char('x'))));
        assert!(!should_quit(key(KeyCode::Char('c'))));
    }
}
