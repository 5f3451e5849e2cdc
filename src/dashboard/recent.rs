//! Recent predictions list

use crate::api::types::RecentPrediction;
use crate::dashboard::format::{capitalize, humanize, humanize_timestamp, percent};

/// One display row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentRow {
    pub time: String,
    pub class: String,
    pub model: String,
    pub confidence: String,
}

impl RecentRow {
    pub fn from_prediction(prediction: &RecentPrediction) -> Self {
        Self {
            time: humanize_timestamp(prediction.timestamp.as_ref()),
            class: capitalize(&prediction.prediction),
            model: humanize(&prediction.model),
            confidence: percent(prediction.confidence, 1),
        }
    }
}

/// Contents of the recent-predictions panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RecentList {
    /// Nothing to show; the panel displays the fixed placeholder.
    #[default]
    Placeholder,
    Rows(Vec<RecentRow>),
}

impl RecentList {
    /// Rebuild the whole list; absent and empty feeds both show the placeholder.
    pub fn from_feed(feed: Option<&[RecentPrediction]>) -> Self {
        match feed {
            Some(predictions) if !predictions.is_empty() => {
                RecentList::Rows(predictions.iter().map(RecentRow::from_prediction).collect())
            }
            _ => RecentList::Placeholder,
        }
    }

    pub fn rows(&self) -> &[RecentRow] {
        match self {
            RecentList::Placeholder => &[],
            RecentList::Rows(rows) => rows,
        }
    }
}
