use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    Cancel,
    Confirm,
    ToggleTab,
    Overview,
    History,
    Up,
    Down,
    Input(char),
    None,
}

pub fn map_key(key: KeyEvent) -> AppAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return AppAction::Quit;
        }
    }

    match key.code {
        KeyCode::Char('q') => AppAction::Quit,
        KeyCode::Esc => AppAction::Cancel,
        KeyCode::Enter => AppAction::Confirm,
        KeyCode::Tab | KeyCode::BackTab => AppAction::ToggleTab,
        KeyCode::Left => AppAction::Overview,
        KeyCode::Right => AppAction::History,
        KeyCode::Up => AppAction::Up,
        KeyCode::Down => AppAction::Down,
        KeyCode::Char(ch) => AppAction::Input(ch),
        _ => AppAction::None,
    }
}
