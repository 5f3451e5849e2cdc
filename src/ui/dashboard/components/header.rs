//! Dashboard header component
//!
//! Renders the title, the watched service and the refresh status

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title and refresh status.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("PREDICTION DASHBOARD v{}", version))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let last_refresh = state
        .view
        .last_refresh
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    let status = Line::from(vec![
        Span::styled("Service: ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.environment.base_url(),
            Style::default().fg(Color::White),
        ),
        Span::styled("  |  Last refresh: ", Style::default().fg(Color::Gray)),
        Span::styled(last_refresh, Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("  |  every {}s", state.refresh_interval.as_secs()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(
        Paragraph::new(status).alignment(Alignment::Center),
        header_chunks[1],
    );
}
