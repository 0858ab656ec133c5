use api_types::stats::TransactionKind;
use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// Colours an already formatted amount by transaction direction.
#[must_use]
pub fn styled_amount(label: &str, kind: TransactionKind, theme: &Theme) -> Span<'static> {
    Span::styled(label.to_string(), Style::default().fg(kind_color(kind, theme)))
}

#[must_use]
pub fn kind_color(kind: TransactionKind, theme: &Theme) -> ratatui::style::Color {
    match kind {
        TransactionKind::Income => theme.positive,
        TransactionKind::Expense => theme.negative,
    }
}

/// Arrow shown next to a transaction: incoming or outgoing.
#[must_use]
pub fn kind_icon(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "↙",
        TransactionKind::Expense => "↗",
    }
}
