//! Chart grid component
//!
//! Draws the latest live chart of each slot. Bar charts are vertical;
//! doughnut and pie charts become horizontal bars with their share of the
//! total in the label.

use super::super::state::DashboardState;
use super::super::utils::rgba_to_color;
use crate::dashboard::charts::{ChartConfig, ChartKind, ChartSlot};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph};

pub fn render_chart_grid(f: &mut Frame, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (row_index, row) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);
        for (column, cell) in cells.iter().enumerate() {
            let slot = ChartSlot::ALL[row_index * 2 + column];
            render_chart(f, *cell, slot, state.chart(slot).as_ref());
        }
    }
}

fn render_chart(f: &mut Frame, area: Rect, slot: ChartSlot, config: Option<&ChartConfig>) {
    let title = config.map_or_else(|| slot.to_string(), |c| c.title.clone());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(config) = config.filter(|c| !c.values.is_empty()) else {
        let empty = Paragraph::new("No data")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    };

    let block = match legend(config) {
        Some(line) => block.title_bottom(line.right_aligned()),
        None => block,
    };

    let bars = chart_bars(config);
    let mut chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_gap(1);

    chart = match config.kind {
        ChartKind::Bar => chart.bar_width(bar_width(area, bars.len())),
        ChartKind::Doughnut | ChartKind::Pie => {
            chart.direction(Direction::Horizontal).bar_width(1)
        }
    };
    if let Some(max) = config.y_max {
        chart = chart.max(max.round() as u64);
    }

    f.render_widget(chart, area);
}

/// One bar per data point, colored from the palette.
pub fn chart_bars(config: &ChartConfig) -> Vec<Bar<'static>> {
    let total: f64 = config.values.iter().sum();
    config
        .points()
        .enumerate()
        .map(|(index, (label, value))| {
            let color = config.color_at(index).map(rgba_to_color).unwrap_or(Color::White);
            let text = match config.kind {
                ChartKind::Bar => format_value(value),
                ChartKind::Doughnut | ChartKind::Pie => share_label(value, total),
            };
            Bar::default()
                .value(value.max(0.0).round() as u64)
                .label(Line::from(label.to_string()))
                .text_value(text)
                .style(Style::default().fg(color))
        })
        .collect()
}

/// Colored swatches naming each series, or `None` when the legend is hidden.
///
/// Bar charts show their dataset label; doughnut and pie charts one entry per
/// slice.
pub fn legend(config: &ChartConfig) -> Option<Line<'static>> {
    if !config.show_legend {
        return None;
    }
    let entries: Vec<(String, Color)> = match config.kind {
        ChartKind::Bar => config
            .dataset_label
            .iter()
            .map(|label| {
                let color = config.color_at(0).map(rgba_to_color).unwrap_or(Color::White);
                (label.clone(), color)
            })
            .collect(),
        ChartKind::Doughnut | ChartKind::Pie => config
            .labels
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let color = config.color_at(index).map(rgba_to_color).unwrap_or(Color::White);
                (label.clone(), color)
            })
            .collect(),
    };
    if entries.is_empty() {
        return None;
    }

    let mut spans = Vec::with_capacity(entries.len() * 2);
    for (label, color) in entries {
        spans.push(Span::styled("■ ", Style::default().fg(color)));
        spans.push(Span::raw(format!("{} ", label)));
    }
    Some(Line::from(spans))
}

fn bar_width(area: Rect, bars: usize) -> u16 {
    let inner = area.width.saturating_sub(2);
    let per_bar = inner / (bars.max(1) as u16);
    per_bar.saturating_sub(1).clamp(1, 12)
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

fn share_label(value: f64, total: f64) -> String {
    if total > 0.0 {
        format!("{} ({:.1}%)", format_value(value), value / total * 100.0)
    } else {
        format_value(value)
    }
}
