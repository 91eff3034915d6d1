//! Key mapping from terminal events to the game's logical keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The four player-input keys the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalKey {
    Rotate,
    SoftDrop,
    Left,
    Right,
}

/// Map a key code to a logical key (arrows or WASD).
pub fn logical_key(code: KeyCode) -> Option<LogicalKey> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(LogicalKey::Rotate),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(LogicalKey::SoftDrop),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(LogicalKey::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(LogicalKey::Right),
        _ => None,
    }
}

/// Enter starts (or restarts) a game.
pub fn is_start(key: KeyEvent) -> bool {
    key.code == KeyCode::Enter
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(logical_key(KeyCode::Left), Some(LogicalKey::Left));
        assert_eq!(logical_key(KeyCode::Right), Some(LogicalKey::Right));
        assert_eq!(logical_key(KeyCode::Char('a')), Some(LogicalKey::Left));
        assert_eq!(logical_key(KeyCode::Char('D')), Some(LogicalKey::Right));
    }

    #[test]
    fn test_rotate_and_soft_drop_keys() {
        assert_eq!(logical_key(KeyCode::Up), Some(LogicalKey::Rotate));
        assert_eq!(logical_key(KeyCode::Down), Some(LogicalKey::SoftDrop));
        assert_eq!(logical_key(KeyCode::Char('w')), Some(LogicalKey::Rotate));
        assert_eq!(logical_key(KeyCode::Char('s')), Some(LogicalKey::SoftDrop));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(logical_key(KeyCode::Char('x')), None);
        assert_eq!(logical_key(KeyCode::Tab), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_start_key() {
        assert!(is_start(KeyEvent::from(KeyCode::Enter)));
        assert!(!is_start(KeyEvent::from(KeyCode::Char(' '))));
    }
}
