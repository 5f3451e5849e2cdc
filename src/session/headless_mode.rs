//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::dashboard::summary::SummaryCounters;
use crate::events::{Event, EventType, Source};
use std::error::Error;
use tokio_util::sync::CancellationToken;

/// Runs the dashboard in headless mode
///
/// This function handles:
/// 1. Console event logging
/// 2. A summary line after every successful refresh
/// 3. Ctrl+C shutdown handling
///
/// # Arguments
/// * `session` - Session data from setup
///
/// # Returns
/// * `Ok(())` - Headless mode completed successfully
/// * `Err` - Headless mode failed
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", session.controller.environment());

    // Trigger shutdown on Ctrl+C
    let shutdown = CancellationToken::new();
    let shutdown_trigger = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown_trigger.cancel();
        }
    });

    session.controller.initialize();

    // Event loop: log events to console until shutdown
    loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                if event.should_display() {
                    println!("{}", event);
                }
                if is_refresh_success(&event) {
                    println!("{}", summary_line(&session.controller.view_snapshot().summary));
                }
            }
            _ = shutdown.cancelled() => {
                break;
            }
        }
    }

    print_session_shutdown();
    session.controller.dispose();
    print_session_exit_success();

    Ok(())
}

fn is_refresh_success(event: &Event) -> bool {
    event.source == Source::Refresh && event.event_type == EventType::Success
}

/// One-line rendition of the summary counters.
pub fn summary_line(summary: &SummaryCounters) -> String {
    format!(
        "Total: {} | Avg confidence: {} | Models: {} | Top: {}",
        summary.total_predictions,
        summary.avg_confidence,
        summary.models_used,
        summary.top_prediction
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;

    #[test]
    fn test_summary_line_defaults() {
        assert_eq!(
            summary_line(&SummaryCounters::default()),
            "Total: 0 | Avg confidence: 0.0% | Models: 0 | Top: -"
        );
    }

    #[test]
    fn test_only_refresh_success_triggers_summary() {
        let success = Event::new(
            Source::Refresh,
            "Statistics updated: 3 predictions".to_string(),
            EventType::Success,
            LogLevel::Info,
        );
        let prediction = Event::new(
            Source::Prediction,
            "Setosa (97.00%) by Svm".to_string(),
            EventType::Success,
            LogLevel::Info,
        );
        assert!(is_refresh_success(&success));
        assert!(!is_refresh_success(&prediction));
    }
}
