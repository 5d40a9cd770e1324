use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::core::Action;
use super::state::{AppState, InputMode, ViewMode};

/// Translate a key press into an intent for the current mode.
///
/// Ctrl+C quits from anywhere. In search mode `q` is ordinary text.
pub fn map_key(state: &AppState, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    if state.view_mode == ViewMode::Help {
        return match key.code {
            KeyCode::Char('?') => Action::ToggleHelp,
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        };
    }

    match state.input_mode {
        InputMode::Search => map_search_key(key),
        InputMode::Normal => map_normal_key(key),
    }
}

fn map_search_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::CommitSearch,
        KeyCode::Esc => Action::CancelSearch,
        KeyCode::Backspace => Action::SearchBackspace,
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Action::SearchInput(c)
        }
        _ => Action::None,
    }
}

fn map_normal_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Char('/') => Action::EnterSearch,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Left | KeyCode::Char('h') => Action::PreviousPage,
        KeyCode::Right | KeyCode::Char('l') => Action::NextPage,
        KeyCode::Char('f') => Action::CycleFilter,
        _ => Action::Navigate(key),
    }
}
