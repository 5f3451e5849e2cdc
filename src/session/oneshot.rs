//! One-shot commands
//!
//! Each command runs a single controller operation with console dialogs and
//! then exits.

use super::{DialogMode, SessionData, setup_session};
use crate::config::Config;
use crate::dashboard::charts::{ChartSlot, ChartStore};
use crate::dashboard::form::PredictionForm;
use crate::dashboard::view::{DashboardView, PredictionOutcome};
use crate::pretty::print_cmd_error;
use crate::session::headless_mode::summary_line;
use std::error::Error;
use std::fmt::Write;

/// Fetch the statistics once and print them.
pub async fn run_stats(config: &Config) -> Result<(), Box<dyn Error>> {
    let session = setup_session(config, DialogMode::Console { assume_yes: false })?;
    if let Err(e) = session.controller.try_load_dashboard_data().await {
        print_cmd_error!("Failed to load statistics", "{}", e);
        return Err(Box::new(e));
    }
    print!(
        "{}",
        stats_report(&session.controller.view_snapshot(), &session.charts)
    );
    Ok(())
}

/// Submit one prediction and print the result panel.
pub async fn run_predict(
    config: &Config,
    features: [String; 4],
    model: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let SessionData { controller, .. } =
        setup_session(config, DialogMode::Console { assume_yes: false })?;
    let form = PredictionForm {
        features,
        model: model.unwrap_or_else(|| config.default_model.clone()),
    };
    let result = match controller.handle_prediction(&form.to_request()).await {
        Ok(result) => result,
        Err(e) => {
            print_cmd_error!("Prediction failed", "{}", e);
            return Err(Box::new(e));
        }
    };
    print!("{}", outcome_report(&PredictionOutcome::from(&result)));
    Ok(())
}

/// Clear the history after confirmation.
pub async fn run_clear_history(config: &Config, assume_yes: bool) -> Result<(), Box<dyn Error>> {
    let SessionData { controller, .. } =
        setup_session(config, DialogMode::Console { assume_yes })?;
    match controller.clear_history().await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => {
            println!("Nothing was cleared.");
            Ok(())
        }
        Err(e) => {
            print_cmd_error!("Failed to clear history", "{}", e);
            Err(Box::new(e))
        }
    }
}

/// Text rendition of the whole dashboard.
pub fn stats_report(view: &DashboardView, charts: &ChartStore) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", summary_line(&view.summary));

    for slot in ChartSlot::ALL {
        let _ = writeln!(out, "\n{}", slot);
        match charts.current(slot) {
            Some(chart) if !chart.values.is_empty() => {
                for (label, value) in chart.points() {
                    let _ = writeln!(out, "  {:<24} {}", label, value);
                }
            }
            _ => {
                let _ = writeln!(out, "  No data");
            }
        }
    }

    let _ = writeln!(out, "\nRecent Predictions");
    let rows = view.recent.rows();
    if rows.is_empty() {
        let _ = writeln!(
            out,
            "  {}",
            crate::consts::cli_consts::view::NO_PREDICTIONS_PLACEHOLDER
        );
    }
    for row in rows {
        let _ = writeln!(
            out,
            "  {:<24} {:<12} {:<22} {}",
            row.time, row.class, row.model, row.confidence
        );
    }
    out
}

pub fn outcome_report(outcome: &PredictionOutcome) -> String {
    format!(
        "Prediction: {}\nConfidence: {}\nModel: {}\n",
        outcome.class, outcome.confidence, outcome.model
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{CountEntry, StatsSnapshot};
    use crate::dashboard::charts::{ChartBoard, build_chart_configs};
    use std::sync::Arc;

    #[test]
    fn test_empty_report() {
        let report = stats_report(&DashboardView::default(), &ChartStore::new());
        assert!(report.starts_with("Total: 0"));
        assert!(report.contains("Predictions by Class\n  No data"));
        assert!(report.contains("No predictions yet"));
    }

    #[test]
    fn test_report_lists_chart_points() {
        let store = ChartStore::new();
        let mut board = ChartBoard::new(Arc::new(store.clone()));
        let snapshot = StatsSnapshot {
            predictions_by_model: Some(vec![CountEntry {
                id: "random_forest".to_string(),
                count: 8,
            }]),
            ..Default::default()
        };
        for (slot, config) in build_chart_configs(&snapshot) {
            board.create_or_replace(slot, &config);
        }

        let report = stats_report(&DashboardView::default(), &store);
        assert!(report.contains("Random Forest"));
        assert!(report.contains(" 8\n"));
    }

    #[test]
    fn test_outcome_report() {
        let outcome = PredictionOutcome {
            class: "Setosa".to_string(),
            confidence: "97.12%".to_string(),
            model: "Svm".to_string(),
        };
        assert_eq!(
            outcome_report(&outcome),
            "Prediction: Setosa\nConfidence: 97.12%\nModel: Svm\n"
        );
    }
}
