use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Whether keys drive the bill list or type into the add dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    List,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    Cancel,
    AddBill,
    DeleteBill,
    Refresh,
    NextField,
    Submit,
    Backspace,
    Up,
    Down,
    Input(char),
    None,
}

pub fn map_key(key: KeyEvent, mode: InputMode) -> AppAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => AppAction::Quit,
            _ => AppAction::None,
        };
    }

    match key.code {
        KeyCode::Esc => return AppAction::Cancel,
        KeyCode::Enter => return AppAction::Submit,
        KeyCode::Up => return AppAction::Up,
        KeyCode::Down => return AppAction::Down,
        _ => {}
    }

    match mode {
        InputMode::Text => match key.code {
            KeyCode::Tab | KeyCode::BackTab => AppAction::NextField,
            KeyCode::Backspace => AppAction::Backspace,
            KeyCode::Char(ch) => AppAction::Input(ch),
            _ => AppAction::None,
        },
        InputMode::List => match key.code {
            KeyCode::Char('q') => AppAction::Quit,
            KeyCode::Char('a') | KeyCode::Char('+') => AppAction::AddBill,
            KeyCode::Char('d') | KeyCode::Delete => AppAction::DeleteBill,
            KeyCode::Char('r') => AppAction::Refresh,
            KeyCode::Char('k') => AppAction::Up,
            KeyCode::Char('j') => AppAction::Down,
            _ => AppAction::None,
        },
    }
}
