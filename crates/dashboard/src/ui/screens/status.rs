use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::theme::Theme;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render_loading(frame: &mut Frame<'_>, area: Rect, tick: usize, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            SPINNER[tick % SPINNER.len()],
            Style::default().fg(theme.accent),
        ),
        Span::styled(" Yuklanmoqda...", Style::default().fg(theme.text_muted)),
    ]);
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        middle_row(area, 1),
    );
}

pub fn render_error(frame: &mut Frame<'_>, area: Rect, message: &str, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(
            "Xatolik yuz berdi",
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(message.to_string(), Style::default().fg(theme.error))),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        middle_row(area, 2),
    );
}

fn middle_row(area: Rect, height: u16) -> Rect {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area)[1]
}
