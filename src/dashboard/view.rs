//! View-model held by the controller
//!
//! Hosts read a cloned [`DashboardView`] and draw it; only the controller
//! writes to it.

use crate::api::types::{PredictionResult, StatsSnapshot};
use crate::dashboard::format::{capitalize, humanize, percent};
use crate::dashboard::recent::RecentList;
use crate::dashboard::summary::SummaryCounters;
use chrono::{DateTime, Local};

/// The populated result panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionOutcome {
    pub class: String,
    pub confidence: String,
    pub model: String,
}

impl From<&PredictionResult> for PredictionOutcome {
    fn from(result: &PredictionResult) -> Self {
        Self {
            class: capitalize(&result.prediction),
            confidence: percent(result.confidence, 2),
            model: humanize(&result.model_used),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardView {
    pub summary: SummaryCounters,
    pub recent: RecentList,
    /// `None` while the result panel is hidden.
    pub result: Option<PredictionOutcome>,
    /// Completion time of the last successful refresh.
    pub last_refresh: Option<DateTime<Local>>,
}

impl DashboardView {
    pub fn apply_summary(&mut self, snapshot: &StatsSnapshot) {
        self.summary.apply(snapshot);
    }

    pub fn apply_recent(&mut self, snapshot: &StatsSnapshot) {
        self.recent = RecentList::from_feed(snapshot.recent_predictions.as_deref());
        self.last_refresh = Some(Local::now());
    }

    pub fn show_result(&mut self, result: &PredictionResult) {
        self.result = Some(PredictionOutcome::from(result));
    }

    pub fn result_visible(&self) -> bool {
        self.result.is_some()
    }
}
