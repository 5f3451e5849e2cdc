//! Dashboard main renderer

use super::components::{charts, footer, form, header, logs, modal, recent, result, summary};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Percentage(30),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    summary::render_summary_cards(f, main_chunks[1], state);
    charts::render_chart_grid(f, main_chunks[2], state);

    let bottom_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(main_chunks[3]);

    match &state.view.result {
        Some(outcome) => {
            let left_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Fill(1), Constraint::Length(5)])
                .split(bottom_chunks[0]);
            recent::render_recent_panel(f, left_chunks[0], state);
            result::render_result_panel(f, left_chunks[1], outcome);
        }
        None => recent::render_recent_panel(f, bottom_chunks[0], state),
    }
    logs::render_logs_panel(f, bottom_chunks[1], state);
    footer::render_footer(f, main_chunks[4], state);

    if let Some(form_state) = &state.form {
        form::render_form(f, f.area(), form_state);
    }
    if let Some(prompt) = &state.modal {
        modal::render_modal(f, f.area(), prompt);
    }
}
