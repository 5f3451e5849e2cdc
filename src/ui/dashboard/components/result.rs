//! Prediction result panel
//!
//! Only drawn once a prediction succeeded.

use crate::dashboard::view::PredictionOutcome;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_result_panel(f: &mut Frame, area: Rect, outcome: &PredictionOutcome) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Class: ", Style::default().fg(Color::Gray)),
            Span::styled(
                outcome.class.as_str(),
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Confidence: ", Style::default().fg(Color::Gray)),
            Span::styled(outcome.confidence.as_str(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("Model: ", Style::default().fg(Color::Gray)),
            Span::styled(outcome.model.as_str(), Style::default().fg(Color::Cyan)),
        ]),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title("PREDICTION RESULT")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::LightGreen))
            .padding(Padding::horizontal(1)),
    );
    f.render_widget(panel, area);
}
