//! Summary cards component
//!
//! Renders the four headline counters

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_summary_cards(f: &mut Frame, area: Rect, state: &DashboardState) {
    let summary = &state.view.summary;
    let cards = [
        ("Total Predictions", summary.total_predictions.as_str(), Color::LightBlue),
        ("Avg Confidence", summary.avg_confidence.as_str(), Color::LightGreen),
        ("Models Used", summary.models_used.as_str(), Color::LightMagenta),
        ("Top Prediction", summary.top_prediction.as_str(), Color::LightYellow),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((title, value, color), chunk) in cards.into_iter().zip(chunks.iter()) {
        let card = Paragraph::new(value)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        f.render_widget(card, *chunk);
    }
}
