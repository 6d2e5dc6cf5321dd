use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    navigation::{Intent, ViewState},
    study::Direction,
};

/// Rows moved by PageUp/PageDown in the word list
pub const PAGE_ROWS: usize = 10;

/// What a key press asks for: either a controller intent or a purely
/// presentational change that never reaches the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Dispatch(Intent),
    /// Jump straight to a lesson from the catalog (1-10)
    PickLesson(u32),
    HighlightUp,
    HighlightDown,
    SelectHighlighted,
    ScrollUp(usize),
    ScrollDown(usize),
    ScrollTop,
    Quit,
}

pub fn action_for(view: &ViewState, key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // ctrl+c to quit from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match view {
        ViewState::Catalog => catalog_action(key.code),
        ViewState::WordList(_) => word_list_action(key.code),
        ViewState::Flashcards(_) => flashcard_action(key.code),
    }
}

fn catalog_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::HighlightUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::HighlightDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectHighlighted),
        KeyCode::Char('0') => Some(Action::PickLesson(10)),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(Action::PickLesson),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

fn word_list_action(code: KeyCode) -> Option<Action> {
    let intent = match code {
        KeyCode::Up | KeyCode::Char('k') => return Some(Action::ScrollUp(1)),
        KeyCode::Down | KeyCode::Char('j') => return Some(Action::ScrollDown(1)),
        KeyCode::PageUp => return Some(Action::ScrollUp(PAGE_ROWS)),
        KeyCode::PageDown => return Some(Action::ScrollDown(PAGE_ROWS)),
        KeyCode::Home => return Some(Action::ScrollTop),
        KeyCode::Char('q') => return Some(Action::Quit),
        KeyCode::Right | KeyCode::Char('n') => Intent::NextLesson,
        KeyCode::Left | KeyCode::Char('p') => Intent::PreviousLesson,
        KeyCode::Enter | KeyCode::Char('f') => Intent::StartFlashcards,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Intent::Back,
        _ => return None,
    };

    Some(Action::Dispatch(intent))
}

fn flashcard_action(code: KeyCode) -> Option<Action> {
    let intent = match code {
        KeyCode::Char(' ') | KeyCode::Enter => Intent::Flip,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => Intent::Advance,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => Intent::Retreat,
        KeyCode::Char('1') => Intent::SetDirection(Direction::SourceToTarget),
        KeyCode::Char('2') => Intent::SetDirection(Direction::TargetToSource),
        KeyCode::Char('s') => Intent::Reshuffle,
        KeyCode::Backspace | KeyCode::Char('b') => Intent::Back,
        KeyCode::Esc | KeyCode::Char('H') => Intent::Home,
        KeyCode::Char('q') => return Some(Action::Quit),
        _ => return None,
    };

    Some(Action::Dispatch(intent))
}
