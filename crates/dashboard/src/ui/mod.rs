pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use chrono_tz::Tz;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::{Status, Tab, ViewState};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

/// Everything rendering needs besides the view state.
#[derive(Debug, Clone, Copy)]
pub struct UiContext {
    pub theme: Theme,
    pub tz: Tz,
    /// Animation frame counter for the loading spinner.
    pub tick: usize,
}

pub fn render(frame: &mut Frame<'_>, state: &ViewState, ctx: &UiContext) {
    let area = frame.area();
    let theme = &ctx.theme;
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    match state.status() {
        Status::Loading => screens::status::render_loading(frame, area, ctx.tick, theme),
        Status::Error(message) => screens::status::render_error(frame, area, message, theme),
        Status::Ready(_) => render_ready(frame, area, state, ctx),
    }

    if state.delete_confirmation_open() {
        components::dialog::render_delete_confirmation(frame, area, theme);
    }
    if let Some(message) = state.notice() {
        components::dialog::render_notice(frame, area, message, theme);
    }
}

/// Tab content, bottom navigation and key hints.
fn render_ready(frame: &mut Frame<'_>, area: Rect, state: &ViewState, ctx: &UiContext) {
    let theme = &ctx.theme;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    match state.active_tab() {
        Tab::Overview => {
            if let Some(view) = state.overview() {
                screens::overview::render(frame, layout[0], &view, theme);
            }
        }
        Tab::History => {
            if let Some(view) = state.history() {
                let selected = state.history_selected();
                screens::history::render(frame, layout[0], &view, selected, ctx.tz, theme);
            }
        }
    }

    components::tabs::render_tabs(frame, layout[1], state.active_tab(), theme);
    render_hint_bar(frame, layout[2], state, theme);
}

fn render_hint_bar(frame: &mut Frame<'_>, area: Rect, state: &ViewState, theme: &Theme) {
    let hints = components::hints::context_hints(state);
    let mut spans = vec![Span::raw(" ")];
    spans.extend(components::hints::hints_to_spans(&hints, theme));
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().fg(theme.text_muted)),
        area,
    );
}
