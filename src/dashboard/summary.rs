//! Summary counters
//!
//! The four headline numbers of the dashboard.

use crate::api::types::{ConfidenceEntry, CountEntry, StatsSnapshot};
use crate::consts::cli_consts::view::{INITIAL_AVG_CONFIDENCE, INITIAL_TOP_PREDICTION};
use crate::dashboard::format::{capitalize, percent};

/// Display-ready summary counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCounters {
    pub total_predictions: String,
    pub avg_confidence: String,
    pub models_used: String,
    pub top_prediction: String,
}

impl Default for SummaryCounters {
    fn default() -> Self {
        Self {
            total_predictions: "0".to_string(),
            avg_confidence: INITIAL_AVG_CONFIDENCE.to_string(),
            models_used: "0".to_string(),
            top_prediction: INITIAL_TOP_PREDICTION.to_string(),
        }
    }
}

impl SummaryCounters {
    /// Apply a snapshot.
    ///
    /// Totals and model counts are always overwritten (0 when absent). The
    /// average confidence and top class only change when their series has
    /// entries; otherwise the previous display stays.
    pub fn apply(&mut self, snapshot: &StatsSnapshot) {
        self.total_predictions = snapshot.total_predictions.unwrap_or(0).to_string();

        if let Some(avg) = snapshot
            .avg_confidence_by_model
            .as_deref()
            .and_then(mean_of_model_means)
        {
            self.avg_confidence = percent(avg, 1);
        }

        self.models_used = snapshot
            .predictions_by_model
            .as_ref()
            .map_or(0, Vec::len)
            .to_string();

        if let Some(top) = snapshot.predictions_by_class.as_deref().and_then(top_class) {
            self.top_prediction = capitalize(&top.id);
        }
    }
}

/// Unweighted mean of the per-model averages.
///
/// Models with few predictions weigh as much as busy ones; this is not the
/// mean confidence over all predictions.
pub fn mean_of_model_means(entries: &[ConfidenceEntry]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    let sum: f64 = entries.iter().map(|e| e.avg_confidence).sum();
    Some(sum / entries.len() as f64)
}

/// The class with the strictly greatest count; the first one wins ties.
pub fn top_class(entries: &[CountEntry]) -> Option<&CountEntry> {
    entries.iter().fold(None, |best: Option<&CountEntry>, entry| match best {
        Some(current) if entry.count <= current.count => Some(current),
        _ => Some(entry),
    })
}
