//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Presses and auto-repeats drive the game; releases are ignored.
pub fn is_actionable(key: &KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

/// Map a key to the game action it triggers, if any.
pub fn action_for_key(key: KeyEvent) -> Option<GameAction> {
    if !is_actionable(&key) || key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };

    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(GameAction::SoftDrop),

        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') | KeyCode::Char('x') => {
            Some(GameAction::RotateCw)
        }
        KeyCode::Char('z') | KeyCode::Char('y') => Some(GameAction::RotateCcw),

        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('p') => Some(GameAction::Pause),
        KeyCode::Enter => Some(GameAction::Start),
        KeyCode::Char('r') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
