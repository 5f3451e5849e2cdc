//! Recent predictions panel

use super::super::state::DashboardState;
use crate::consts::cli_consts::view::NO_PREDICTIONS_PLACEHOLDER;
use crate::dashboard::recent::RecentList;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Row, Table};

pub fn render_recent_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("RECENT PREDICTIONS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let rows = match &state.view.recent {
        RecentList::Placeholder => {
            let placeholder = Paragraph::new(NO_PREDICTIONS_PLACEHOLDER)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(placeholder, area);
            return;
        }
        RecentList::Rows(rows) => rows,
    };

    let table_rows = rows.iter().map(|row| {
        Row::new(vec![
            row.time.clone(),
            row.class.clone(),
            row.model.clone(),
            row.confidence.clone(),
        ])
    });

    let table = Table::new(
        table_rows,
        [
            Constraint::Length(24),
            Constraint::Length(12),
            Constraint::Fill(1),
            Constraint::Length(7),
        ],
    )
    .header(
        Row::new(vec!["Time", "Class", "Model", "Conf."])
            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)),
    )
    .block(block);

    f.render_widget(table, area);
}
