//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::dashboard::charts::Rgba;
use crate::events::Source;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Color;

/// Get a ratatui color for an event based on where it comes from
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Refresh => Color::Cyan,
        Source::Prediction => Color::Yellow,
        Source::History => Color::Magenta,
        Source::Lifecycle => Color::Gray,
    }
}

/// Terminal color for a chart palette entry; alpha is dropped.
pub fn rgba_to_color(rgba: Rgba) -> Color {
    Color::Rgb(rgba.r, rgba.g, rgba.b)
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages, keeping the action prefix (`Refresh failed`,
/// `Prediction failed`, ...) of the event.
pub fn clean_http_error_message(msg: &str) -> String {
    let Some((action, detail)) = msg.split_once(": ") else {
        return msg.to_string();
    };
    if !detail.starts_with("Reqwest error") {
        return msg.to_string();
    }
    if detail.contains("timed out") {
        return format!("{}: request timed out", action);
    }
    if detail.contains("connect") {
        return format!("{}: service unreachable", action);
    }
    msg.to_string()
}

/// A rectangle of the given percentages centered in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2025-05-01 13:45:10"), "05-01 13:45");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_clean_http_error_message() {
        assert_eq!(
            clean_http_error_message("Refresh failed: Reqwest error: error sending request: tcp connect error"),
            "Refresh failed: service unreachable"
        );
        assert_eq!(
            clean_http_error_message("Prediction failed: Reqwest error: error sending request: tcp connect error"),
            "Prediction failed: service unreachable"
        );
        assert_eq!(
            clean_http_error_message("Clear history failed: Reqwest error: operation timed out"),
            "Clear history failed: request timed out"
        );
        assert_eq!(clean_http_error_message("Cleared 2 records"), "Cleared 2 records");
        assert_eq!(
            clean_http_error_message("Prediction failed: model not connected"),
            "Prediction failed: model not connected"
        );
    }

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 40, area);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 15);
    }
}
