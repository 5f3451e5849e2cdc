//! Confirm and notify dialogs

use super::super::utils::centered_rect;
use crate::ui::prompts::Prompt;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

pub fn render_modal(f: &mut Frame, area: Rect, prompt: &Prompt) {
    let popup = centered_rect(50, 25, area);

    let (title, hint, color) = match prompt {
        Prompt::Confirm { .. } => ("CONFIRM", "[Y] Yes   [N] No", Color::LightRed),
        Prompt::Notify { .. } => ("NOTICE", "Press any key", Color::LightYellow),
    };

    let lines = vec![
        Line::from(prompt.message().to_string()),
        Line::from(""),
        Line::from(hint).style(Style::default().fg(Color::DarkGray)),
    ];

    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .padding(Padding::uniform(1)),
        );

    f.render_widget(Clear, popup);
    f.render_widget(dialog, popup);
}
