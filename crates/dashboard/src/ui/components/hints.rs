use ratatui::{style::Style, text::Span};

use crate::{
    state::{Tab, ViewState},
    ui::theme::Theme,
};

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

/// Converts a list of key hints into styled spans for rendering.
pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

/// Hints for whatever currently has the keyboard.
pub fn context_hints(state: &ViewState) -> Vec<KeyHint> {
    if state.notice().is_some() {
        return vec![KeyHint::new("Enter", "yopish")];
    }
    if state.delete_confirmation_open() {
        return vec![
            KeyHint::new("y", "o'chirish"),
            KeyHint::new("n", "bekor qilish"),
        ];
    }

    let mut hints = vec![
        KeyHint::new("a", "asosiy"),
        KeyHint::new("t", "tarix"),
    ];
    if state.active_tab() == Tab::History && state.snapshot().is_some() {
        hints.push(KeyHint::new("↑↓", "aylantirish"));
        if !state.is_deleting() {
            hints.push(KeyHint::new("d", "tozalash"));
        }
    }
    hints.push(KeyHint::new("q", "chiqish"));
    hints
}
