use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    format::CURRENCY,
    ui::{
        components::{
            card::{Card, StatCard},
            charts::{ascii_bar, palette_color, render_weekly_chart, share_strip},
        },
        theme::Theme,
    },
    views::{CategoryBar, CategoryShare, OverviewView},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, view: &OverviewView, theme: &Theme) {
    let has_categories =
        !view.income_categories.is_empty() || !view.expense_categories.is_empty();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Balance and monthly stats
            Constraint::Min(8),    // Weekly dynamics
            Constraint::Length(if has_categories { 12 } else { 0 }),
        ])
        .split(area);

    render_summary(frame, layout[0], view, theme);
    render_weekly(frame, layout[1], view, theme);
    if has_categories {
        render_categories(frame, layout[2], view, theme);
    }
}

fn render_summary(frame: &mut Frame<'_>, area: Rect, view: &OverviewView, theme: &Theme) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(area);

    let balance = Line::from(vec![
        Span::styled(
            view.balance.clone(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {CURRENCY}"), Style::default().fg(theme.text_muted)),
    ]);
    let hero = vec![
        Line::from(Span::styled(
            "Joriy Balans",
            Style::default().fg(theme.text_muted),
        )),
        balance,
    ];
    Card::new("", theme).render_with(frame, cols[0], Paragraph::new(hero));

    StatCard::new(
        "↗ Oylik Kirim",
        Span::styled(view.monthly_income.clone(), Style::default().fg(theme.positive)),
        theme,
    )
    .render(frame, cols[1]);
    StatCard::new(
        "↘ Oylik Chiqim",
        Span::styled(view.monthly_expense.clone(), Style::default().fg(theme.negative)),
        theme,
    )
    .render(frame, cols[2]);
}

fn render_weekly(frame: &mut Frame<'_>, area: Rect, view: &OverviewView, theme: &Theme) {
    let card = Card::new("Haftalik Dinamika", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    if view.weekly.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Haftalik ma'lumot yo'q",
                Style::default().fg(theme.text_muted),
            ))
            .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    render_weekly_chart(frame, inner, &view.weekly, view.weekly_max(), theme);
}

/// Income bars, expense distribution and expense bars side by side; lists
/// the server sent empty are left out.
fn render_categories(frame: &mut Frame<'_>, area: Rect, view: &OverviewView, theme: &Theme) {
    let mut panels: Vec<(&str, Panel<'_>)> = Vec::new();
    if !view.income_categories.is_empty() {
        panels.push((
            "Daromad Turlari (Bu oy)",
            Panel::Bars(&view.income_categories, theme.positive),
        ));
    }
    if !view.expense_categories.is_empty() {
        panels.push((
            "Xarajatlar Tahlili",
            Panel::Shares(&view.expense_shares),
        ));
        panels.push((
            "Xarajat Turlari (Bu oy)",
            Panel::Bars(&view.expense_categories, theme.negative),
        ));
    }

    let constraints = vec![Constraint::Ratio(1, panels.len() as u32); panels.len()];
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for ((title, panel), col) in panels.into_iter().zip(cols.iter()) {
        let card = Card::new(title, theme);
        let inner = card.inner(*col);
        card.render_frame(frame, *col);
        let (width, height) = (inner.width as usize, inner.height as usize);
        let lines = match panel {
            Panel::Bars(bars, color) => bar_lines(bars, width, height, color, theme),
            Panel::Shares(shares) => share_lines(shares, width, height, theme),
        };
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

enum Panel<'a> {
    Bars(&'a [CategoryBar], ratatui::style::Color),
    Shares(&'a [CategoryShare]),
}

/// Two lines per bar. When they don't all fit in `height`, the last line
/// counts the categories left out.
fn bar_lines(
    bars: &[CategoryBar],
    width: usize,
    height: usize,
    color: ratatui::style::Color,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let shown = if bars.len() * 2 <= height {
        bars.len()
    } else {
        height.saturating_sub(1) / 2
    };

    let mut lines = Vec::with_capacity(shown * 2 + 1);
    for bar in &bars[..shown] {
        let padding = width.saturating_sub(bar.category.chars().count() + bar.amount.chars().count());
        lines.push(Line::from(vec![
            Span::styled(bar.category.clone(), Style::default().fg(theme.text)),
            Span::raw(" ".repeat(padding)),
            Span::styled(bar.amount.clone(), Style::default().fg(theme.text_muted)),
        ]));
        lines.push(Line::from(Span::styled(
            ascii_bar(bar.percent, width),
            Style::default().fg(color),
        )));
    }
    if shown < bars.len() {
        lines.push(more_line(bars.len() - shown, theme));
    }
    lines
}

fn share_lines(
    shares: &[CategoryShare],
    width: usize,
    height: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    // Strip and a blank line come first.
    let shown = if shares.len() + 2 <= height {
        shares.len()
    } else {
        height.saturating_sub(3)
    };

    let mut lines = vec![share_strip(shares, width, theme), Line::from("")];
    for share in &shares[..shown] {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(palette_color(share.color, theme))),
            Span::styled(share.category.clone(), Style::default().fg(theme.text)),
            Span::styled(
                format!(" {}%", share.share),
                Style::default().fg(theme.text_muted),
            ),
        ]));
    }
    if shown < shares.len() {
        lines.push(more_line(shares.len() - shown, theme));
    }
    lines
}

fn more_line(hidden: usize, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        format!("+{hidden} ta yana"),
        Style::default().fg(theme.text_muted),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars(count: usize) -> Vec<CategoryBar> {
        (0..count)
            .map(|i| CategoryBar {
                category: format!("cat{i}"),
                value: 1_000,
                amount: "1\u{a0}000 UZS".to_string(),
                percent: 100,
            })
            .collect()
    }

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn bars_that_fit_are_all_listed() {
        let theme = Theme::default();
        let lines = bar_lines(&bars(3), 30, 10, theme.negative, &theme);

        assert_eq!(lines.len(), 6);
        assert!(!text(&lines).iter().any(|line| line.contains("ta yana")));
    }

    #[test]
    fn clipped_bars_count_the_rest() {
        let theme = Theme::default();
        let lines = bar_lines(&bars(10), 30, 10, theme.negative, &theme);

        assert_eq!(lines.len(), 9);
        assert_eq!(lines.last().map(ToString::to_string).as_deref(), Some("+6 ta yana"));
    }

    #[test]
    fn clipped_shares_count_the_rest() {
        let theme = Theme::default();
        let shares = (0..10)
            .map(|i| CategoryShare {
                category: format!("cat{i}"),
                value: 100,
                share: 10,
                color: "#ef4444",
            })
            .collect::<Vec<_>>();

        let lines = share_lines(&shares, 30, 10, &theme);

        assert_eq!(lines.len(), 10);
        assert_eq!(lines.last().map(ToString::to_string).as_deref(), Some("+3 ta yana"));
    }
}
