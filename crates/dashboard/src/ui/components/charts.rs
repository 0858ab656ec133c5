use api_types::stats::WeeklyPoint;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType},
};

use crate::{format::format_compact, ui::theme::Theme, views::CategoryShare};

/// Income and expense lines over the weekly series, oldest period on the
/// left. Y-axis labels use the compact amount format.
pub fn render_weekly_chart(
    frame: &mut Frame<'_>,
    area: Rect,
    weekly: &[WeeklyPoint],
    max: i64,
    theme: &Theme,
) {
    let income: Vec<(f64, f64)> = weekly
        .iter()
        .enumerate()
        .map(|(x, point)| (x as f64, point.income as f64))
        .collect();
    let expense: Vec<(f64, f64)> = weekly
        .iter()
        .enumerate()
        .map(|(x, point)| (x as f64, point.expense as f64))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name("Kirim")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.positive))
            .data(&income),
        Dataset::default()
            .name("Chiqim")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.negative))
            .data(&expense),
    ];

    let x_max = weekly.len().saturating_sub(1).max(1) as f64;
    let y_max = max.max(1);
    let x_labels: Vec<Span<'static>> = axis_names(weekly)
        .into_iter()
        .map(|name| Span::styled(name, Style::default().fg(theme.text_muted)))
        .collect();
    let y_labels: Vec<Span<'static>> = [0, y_max / 2, y_max]
        .into_iter()
        .map(|value| Span::styled(format_compact(value), Style::default().fg(theme.text_muted)))
        .collect();

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(theme.border))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(theme.border))
                .bounds([0.0, y_max as f64])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// First, middle and last period names.
fn axis_names(weekly: &[WeeklyPoint]) -> Vec<String> {
    match weekly {
        [] => Vec::new(),
        [only] => vec![only.name.clone()],
        [first, .., last] => {
            let middle = &weekly[weekly.len() / 2];
            if weekly.len() > 2 {
                vec![first.name.clone(), middle.name.clone(), last.name.clone()]
            } else {
                vec![first.name.clone(), last.name.clone()]
            }
        }
    }
}

/// Horizontal bar of `width` cells, filled to `percent`.
///
/// Returns something like `████████░░░░░░░░░░░░`.
#[must_use]
pub fn ascii_bar(percent: u16, width: usize) -> String {
    let filled = ((usize::from(percent.min(100)) * width) / 100).min(width);
    let empty = width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// One line split into coloured segments proportional to each share.
pub fn share_strip(shares: &[CategoryShare], width: usize, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(shares.len());
    let mut used = 0;
    for share in shares {
        let cells = (usize::from(share.share) * width / 100).min(width - used);
        if cells == 0 {
            continue;
        }
        used += cells;
        spans.push(Span::styled(
            "█".repeat(cells),
            Style::default().fg(palette_color(share.color, theme)),
        ));
    }
    if used < width {
        spans.push(Span::styled(
            "░".repeat(width - used),
            Style::default().fg(theme.border),
        ));
    }
    Line::from(spans)
}

pub fn palette_color(hex: &str, theme: &Theme) -> Color {
    hex.parse::<Color>().unwrap_or(theme.accent)
}
