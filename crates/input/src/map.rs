//! Key mapping from terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{GameAction, Symbol};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Cursor movement
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(GameAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(GameAction::CursorDown),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(GameAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(GameAction::CursorRight),

        // Place a mark at the cursor
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Place),

        // Mark selection (free-choice mode)
        KeyCode::Char('1') => Some(GameAction::PickSymbol(Symbol::X)),
        KeyCode::Char('2') => Some(GameAction::PickSymbol(Symbol::O)),
        KeyCode::Char('3') => Some(GameAction::PickSymbol(Symbol::Brackets)),
        KeyCode::Char('4') => Some(GameAction::PickSymbol(Symbol::Hash)),

        // Game management
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::NewGame),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::ResetScores),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(GameAction::CycleMode),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(GameAction::GrowBoard),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(GameAction::ShrinkBoard),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(GameAction::CycleTimer),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::CursorUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::CursorDown)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('h'))),
            Some(GameAction::CursorLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('L'))),
            Some(GameAction::CursorRight)
        );
    }

    #[test]
    fn test_place_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Place)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::Place)
        );
    }

    #[test]
    fn test_symbol_pick_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('1'))),
            Some(GameAction::PickSymbol(Symbol::X))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('4'))),
            Some(GameAction::PickSymbol(Symbol::Hash))
        );
    }

    #[test]
    fn test_management_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('n'))),
            Some(GameAction::NewGame)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('s'))),
            Some(GameAction::ResetScores)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('m'))),
            Some(GameAction::CycleMode)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('+'))),
            Some(GameAction::GrowBoard)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('-'))),
            Some(GameAction::ShrinkBoard)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('t'))),
            Some(GameAction::CycleTimer)
        );
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
