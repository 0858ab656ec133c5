use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::ui::{
    components::{card::Card, centered_rect},
    theme::Theme,
};

const DELETE_WARNING: &str = "Barcha ma'lumotlaringiz butunlay o'chirib yuboriladi. \
Bu amalni qaytarib bo'lmaydi. Ishonchingiz komilmi?";

/// Two-step confirmation before deleting every transaction.
pub fn render_delete_confirmation(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let popup = centered_rect(60, 40, area);
    frame.render_widget(Clear, popup);

    let card = Card::new("Diqqat!", theme);
    let inner = card.inner(popup);
    card.render_frame(frame, popup);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(DELETE_WARNING)
            .style(Style::default().fg(theme.text_muted))
            .wrap(Wrap { trim: true }),
        layout[0],
    );

    let buttons = Line::from(vec![
        Span::styled("[n] Bekor qilish", Style::default().fg(theme.text)),
        Span::raw("    "),
        Span::styled(
            "[y] O'chirish",
            Style::default()
                .fg(theme.negative)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(buttons).alignment(Alignment::Center),
        layout[1],
    );
}

/// Blocking message the user has to dismiss.
pub fn render_notice(frame: &mut Frame<'_>, area: Rect, message: &str, theme: &Theme) {
    let popup = centered_rect(50, 25, area);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(Span::styled(message.to_string(), Style::default().fg(theme.error))),
        Line::from(""),
        Line::from(Span::styled("[Enter] OK", Style::default().fg(theme.accent))),
    ];
    Card::new("Xatolik", theme).render_with(
        frame,
        popup,
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
    );
}
