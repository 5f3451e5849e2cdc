//! Dashboard footer component
//!
//! Renders the key hints of the current mode

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer with the keys that currently do something.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let footer_text = if state.modal.is_some() {
        "[Y/Enter] Confirm | [N/Esc] Cancel"
    } else if state.form.is_some() {
        "[Tab] Next field | [<-/->] Model | [Enter] Predict | [Esc] Cancel"
    } else {
        "[R] Refresh | [P] Predict | [C] Clear history | [Q] Quit"
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
