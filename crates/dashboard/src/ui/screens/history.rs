use chrono_tz::Tz;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    format::format_date,
    ui::{
        components::{
            card::Card,
            money::{kind_color, kind_icon, styled_amount},
        },
        theme::Theme,
    },
    views::{EMPTY_HISTORY, HistoryRow, HistoryView},
};

const HIGHLIGHT_SYMBOL: &str = "» ";

/// Draws the transaction list scrolled so that row `selected` is visible.
pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &HistoryView,
    selected: usize,
    tz: Tz,
    theme: &Theme,
) {
    let card = Card::new("Barcha Amaliyotlar", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    match view {
        HistoryView::Empty => {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    EMPTY_HISTORY,
                    Style::default().fg(theme.text_muted),
                ))
                .alignment(Alignment::Center),
                inner,
            );
        }
        HistoryView::Rows(rows) => {
            let width = (inner.width as usize).saturating_sub(HIGHLIGHT_SYMBOL.chars().count());
            let items = rows
                .iter()
                .map(|row| history_item(row, width, tz, theme))
                .collect::<Vec<_>>();

            let mut list_state = ListState::default();
            list_state.select(Some(selected.min(rows.len().saturating_sub(1))));

            let list = List::new(items)
                .highlight_style(Style::default().add_modifier(Modifier::BOLD))
                .highlight_symbol(HIGHLIGHT_SYMBOL);
            frame.render_stateful_widget(list, inner, &mut list_state);
        }
    }
}

/// Two lines: icon, description and amount; then date and category.
fn history_item(row: &HistoryRow, width: usize, tz: Tz, theme: &Theme) -> ListItem<'static> {
    let head = Line::from(vec![
        Span::styled(
            kind_icon(row.kind),
            Style::default().fg(kind_color(row.kind, theme)),
        ),
        Span::raw(" "),
        Span::styled(row.description.clone(), Style::default().fg(theme.text)),
    ]);
    let amount = styled_amount(&row.amount, row.kind, theme);
    let padding = width.saturating_sub(head.width() + amount.width());

    let mut first = head;
    first.spans.push(Span::raw(" ".repeat(padding)));
    first.spans.push(amount);

    let second = Line::from(Span::styled(
        format!("  {} • {}", format_date(&row.date, tz), row.category),
        Style::default().fg(theme.text_muted),
    ));

    ListItem::new(vec![first, second])
}
