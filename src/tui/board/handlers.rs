//! Key mapping for the kanban board
//!
//! Maps keyboard events to abstract board actions, so the key map can be
//! tested without any iocraft rendering.

use iocraft::prelude::{KeyCode, KeyModifiers};

use super::model::{BoardAction, Focus};

/// Convert a key event to a BoardAction (pure function)
///
/// Returns `None` if the key doesn't map to any action in the given focus.
pub fn key_to_action(code: KeyCode, modifiers: KeyModifiers, focus: Focus) -> Option<BoardAction> {
    // Ctrl+Q is the only control chord
    if modifiers.contains(KeyModifiers::CONTROL) {
        return (code == KeyCode::Char('q')).then_some(BoardAction::Quit);
    }

    // Keys that work regardless of focus
    match code {
        KeyCode::Char('q') => return Some(BoardAction::Quit),
        KeyCode::Tab => return Some(BoardAction::FocusNext),
        KeyCode::BackTab => return Some(BoardAction::FocusPrev),
        KeyCode::Char('b') => return Some(BoardAction::NextGroupBy),
        KeyCode::Char('B') => return Some(BoardAction::PrevGroupBy),
        KeyCode::Char('f') => return Some(BoardAction::NextDisplay),
        KeyCode::Char('F') => return Some(BoardAction::PrevDisplay),
        _ => {}
    }

    match focus {
        Focus::Board => board_key_to_action(code),
        Focus::GroupBy => selector_key_to_action(
            code,
            BoardAction::PrevGroupBy,
            BoardAction::NextGroupBy,
        ),
        Focus::Display => selector_key_to_action(
            code,
            BoardAction::PrevDisplay,
            BoardAction::NextDisplay,
        ),
    }
}

fn board_key_to_action(code: KeyCode) -> Option<BoardAction> {
    match code {
        KeyCode::Char('h') | KeyCode::Left => Some(BoardAction::MoveLeft),
        KeyCode::Char('l') | KeyCode::Right => Some(BoardAction::MoveRight),
        KeyCode::Char('j') | KeyCode::Down => Some(BoardAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(BoardAction::MoveUp),
        KeyCode::Char('g') | KeyCode::Home => Some(BoardAction::GoToTop),
        KeyCode::Char('G') | KeyCode::End => Some(BoardAction::GoToBottom),
        KeyCode::PageDown => Some(BoardAction::PageDown),
        KeyCode::PageUp => Some(BoardAction::PageUp),
        _ => None,
    }
}

fn selector_key_to_action(
    code: KeyCode,
    prev: BoardAction,
    next: BoardAction,
) -> Option<BoardAction> {
    match code {
        KeyCode::Char('h') | KeyCode::Left => Some(prev),
        KeyCode::Char('l') | KeyCode::Right => Some(next),
        KeyCode::Esc | KeyCode::Enter => Some(BoardAction::FocusBoard),
        _ => None,
    }
}
