use ratatui::{style::Style, text::Span};

use crate::ui::{keymap::InputMode, theme::Theme};

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

pub fn for_mode(mode: InputMode) -> Vec<KeyHint> {
    match mode {
        InputMode::List => vec![
            KeyHint::new("↑↓", "select"),
            KeyHint::new("a", "add"),
            KeyHint::new("d", "delete"),
            KeyHint::new("r", "refresh"),
            KeyHint::new("q", "quit"),
        ],
        InputMode::Text => vec![
            KeyHint::new("Tab", "next"),
            KeyHint::new("Enter", "confirm"),
            KeyHint::new("Esc", "cancel"),
        ],
    }
}

pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(hint_separator(theme));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

pub fn hint_separator(theme: &Theme) -> Span<'static> {
    Span::styled("  │  ", Style::default().fg(theme.border))
}
