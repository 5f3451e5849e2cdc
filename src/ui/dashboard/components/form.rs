//! Prediction form overlay

use super::super::input::{FormState, MODEL_FIELD};
use super::super::utils::centered_rect;
use crate::dashboard::format::humanize;
use crate::dashboard::form::FEATURE_NAMES;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};

pub fn render_form(f: &mut Frame, area: Rect, form: &FormState) {
    let popup = centered_rect(50, 50, area);

    let field_style = |index: usize| {
        if form.focus == index {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    };

    let mut lines: Vec<Line> = FEATURE_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| {
            Line::from(vec![
                Span::styled(format!("{:<14}", name), Style::default().fg(Color::Gray)),
                Span::styled(format!(" {:<10} ", form.form.features[index]), field_style(index)),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!("{:<14}", "Model"), Style::default().fg(Color::Gray)),
        Span::styled(
            format!(" < {} > ", humanize(&form.form.model)),
            field_style(MODEL_FIELD),
        ),
    ]));

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title("MAKE A PREDICTION")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::LightYellow))
            .padding(Padding::uniform(1)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(panel, popup);
}
