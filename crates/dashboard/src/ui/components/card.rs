use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::ui::theme::Theme;

/// Rounded panel every dashboard section is drawn in.
pub struct Card<'a> {
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> Card<'a> {
    pub fn new(title: &'a str, theme: &'a Theme) -> Self {
        Self { title, theme }
    }

    pub fn block(&self) -> Block<'a> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.border))
            .style(Style::default().bg(self.theme.surface));

        if self.title.is_empty() {
            return block;
        }
        block.title(Span::styled(
            format!(" {} ", self.title),
            Style::default()
                .fg(self.theme.text)
                .add_modifier(Modifier::BOLD),
        ))
    }

    pub fn inner(&self, area: Rect) -> Rect {
        self.block().inner(area)
    }

    pub fn render_frame(&self, frame: &mut Frame<'_>, area: Rect) {
        frame.render_widget(self.block(), area);
    }

    pub fn render_with<W: Widget>(&self, frame: &mut Frame<'_>, area: Rect, content: W) {
        let inner = self.inner(area);
        frame.render_widget(self.block(), area);
        frame.render_widget(content, inner);
    }
}

/// A label over a large value, e.g. the monthly income tile.
pub struct StatCard<'a> {
    label: &'a str,
    value: Span<'a>,
    theme: &'a Theme,
}

impl<'a> StatCard<'a> {
    pub fn new(label: &'a str, value: Span<'a>, theme: &'a Theme) -> Self {
        Self {
            label,
            value,
            theme,
        }
    }

    pub fn render(self, frame: &mut Frame<'_>, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                self.label,
                Style::default().fg(self.theme.text_muted),
            )),
            Line::from(self.value.bold()),
        ];
        Card::new("", self.theme).render_with(frame, area, Paragraph::new(lines));
    }
}
