use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{state::Tab, ui::theme::Theme};

const TABS: [Tab; 2] = [Tab::Overview, Tab::History];

/// Bottom navigation between the overview and the history.
pub fn render_tabs(frame: &mut Frame<'_>, area: Rect, active: Tab, theme: &Theme) {
    let mut spans = Vec::new();

    for (i, tab) in TABS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("   │   ", Style::default().fg(theme.border)));
        }

        if *tab == active {
            spans.push(Span::styled(
                format!("● {}", tab.label()),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!("○ {}", tab.label()),
                Style::default().fg(theme.text_muted),
            ));
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
