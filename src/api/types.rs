//! Wire types for the prediction service.
//!
//! Every field of [`StatsSnapshot`] is optional: an empty or partially
//! populated statistics document is a normal "no data yet" state. A `null`
//! or mistyped value degrades to its default instead of failing the whole
//! document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Aggregated statistics returned by the `api/stats` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatsSnapshot {
    #[serde(default, deserialize_with = "or_default")]
    pub total_predictions: Option<u64>,
    #[serde(default, deserialize_with = "or_default")]
    pub avg_confidence_by_model: Option<Vec<ConfidenceEntry>>,
    #[serde(default, deserialize_with = "or_default")]
    pub predictions_by_model: Option<Vec<CountEntry>>,
    #[serde(default, deserialize_with = "or_default")]
    pub predictions_by_class: Option<Vec<CountEntry>>,
    #[serde(default, deserialize_with = "or_default")]
    pub confidence_distribution: Option<Vec<CountEntry>>,
    #[serde(default, deserialize_with = "or_default")]
    pub recent_predictions: Option<Vec<RecentPrediction>>,
}

/// A grouped count, e.g. predictions per class or per confidence bucket.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountEntry {
    #[serde(rename = "_id", default, deserialize_with = "label_from_value")]
    pub id: String,
    #[serde(default, deserialize_with = "or_default")]
    pub count: u64,
}

/// Mean confidence of a single model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConfidenceEntry {
    #[serde(rename = "_id", default, deserialize_with = "label_from_value")]
    pub id: String,
    #[serde(default, deserialize_with = "or_default")]
    pub avg_confidence: f64,
}

/// One row of the recent-predictions feed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RecentPrediction {
    #[serde(default, deserialize_with = "or_default")]
    pub timestamp: Option<Timestamp>,
    #[serde(default, deserialize_with = "or_default")]
    pub prediction: String,
    #[serde(default, deserialize_with = "or_default")]
    pub model: String,
    #[serde(default, deserialize_with = "or_default")]
    pub confidence: f64,
}

/// A timestamp as stored by the service.
///
/// The persistence layer sometimes leaks its extended-JSON envelope
/// (`{"$date": ...}`), so both the wrapped and the raw form are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Wrapped {
        #[serde(rename = "$date")]
        date: DateValue,
    },
    Raw(DateValue),
}

/// The date-like payload of a [`Timestamp`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// `{"$numberLong": "..."}` milliseconds.
    NumberLong {
        #[serde(rename = "$numberLong")]
        number_long: String,
    },
    /// A date string (RFC 3339, RFC 2822 or naive ISO-8601).
    Text(String),
    /// Anything else; rendered as an invalid date.
    Other(Value),
}

impl Timestamp {
    /// Unwraps the `$date` envelope when present.
    pub fn value(&self) -> &DateValue {
        match self {
            Timestamp::Wrapped { date } => date,
            Timestamp::Raw(date) => date,
        }
    }
}

/// Body of a prediction request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    /// Sepal length, sepal width, petal length, petal width.
    pub features: [f64; 4],
    pub model: String,
}

impl PredictionRequest {
    pub fn new(features: [f64; 4], model: impl Into<String>) -> Self {
        Self {
            features,
            model: model.into(),
        }
    }
}

/// Successful prediction response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResult {
    pub prediction: String,
    pub confidence: f64,
    pub model_used: String,
}

/// Response of the clear-history endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ClearHistoryResult {
    #[serde(default)]
    pub deleted_count: u64,
}

/// Error body returned alongside non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<Value>,
}

/// Reads a value of any JSON type, falling back to `T::default()` when it
/// does not fit.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Reads a group key (`_id`) as its display string, whatever its JSON type.
fn label_from_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Null => "null".to_string(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_all_absent() {
        let snapshot: StatsSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, StatsSnapshot::default());
    }

    #[test]
    fn test_full_document_parses() {
        let json = r#"{
            "total_predictions": 10,
            "avg_confidence_by_model": [{"_id": "svm", "avg_confidence": 0.8}],
            "predictions_by_model": [{"_id": "svm", "count": 10}],
            "predictions_by_class": [{"_id": "setosa", "count": 3}],
            "confidence_distribution": [{"_id": "high", "count": 9}],
            "recent_predictions": [{
                "timestamp": {"$date": "2024-05-01T10:00:00Z"},
                "prediction": "setosa",
                "model": "svm",
                "confidence": 0.91
            }]
        }"#;
        let snapshot: StatsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.total_predictions, Some(10));
        assert_eq!(snapshot.predictions_by_class.unwrap()[0].id, "setosa");
        let recent = snapshot.recent_predictions.unwrap();
        assert_eq!(
            recent[0].timestamp.as_ref().unwrap().value(),
            &DateValue::Text("2024-05-01T10:00:00Z".to_string())
        );
    }

    #[test]
    fn test_non_string_group_keys_become_labels() {
        let json = r#"[{"_id": 0.9, "count": 4}, {"_id": null, "count": 1}]"#;
        let entries: Vec<CountEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].id, "0.9");
        assert_eq!(entries[1].id, "null");
    }

    #[test]
    fn test_timestamp_forms() {
        let wrapped: Timestamp = serde_json::from_str(r#"{"$date": 1714557600000}"#).unwrap();
        assert_eq!(wrapped.value(), &DateValue::Millis(1714557600000));

        let long: Timestamp =
            serde_json::from_str(r#"{"$date": {"$numberLong": "1714557600000"}}"#).unwrap();
        assert_eq!(
            long.value(),
            &DateValue::NumberLong {
                number_long: "1714557600000".to_string()
            }
        );

        let raw: Timestamp = serde_json::from_str(r#""Wed, 01 May 2024 10:00:00 GMT""#).unwrap();
        assert_eq!(
            raw.value(),
            &DateValue::Text("Wed, 01 May 2024 10:00:00 GMT".to_string())
        );
    }

    #[test]
    fn test_null_average_does_not_fail_the_snapshot() {
        let json = r#"{
            "total_predictions": 7,
            "avg_confidence_by_model": [
                {"_id": "svm", "avg_confidence": null},
                {"_id": "knn", "avg_confidence": 0.5}
            ]
        }"#;
        let snapshot: StatsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.total_predictions, Some(7));
        let averages = snapshot.avg_confidence_by_model.unwrap();
        assert_eq!(averages[0].avg_confidence, 0.0);
        assert_eq!(averages[1].avg_confidence, 0.5);
    }

    #[test]
    fn test_odd_recent_row_only_degrades_itself() {
        let json = r#"{
            "total_predictions": 7,
            "predictions_by_class": [{"_id": "setosa", "count": "many"}],
            "recent_predictions": [
                {"timestamp": 1714557600.5, "prediction": null, "model": 3, "confidence": "high"},
                {"timestamp": {"$date": true}, "prediction": "setosa", "model": "svm", "confidence": 0.9}
            ]
        }"#;
        let snapshot: StatsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.total_predictions, Some(7));
        assert_eq!(snapshot.predictions_by_class.unwrap()[0].count, 0);

        let recent = snapshot.recent_predictions.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(
            recent[0].timestamp.as_ref().unwrap().value(),
            &DateValue::Other(serde_json::json!(1714557600.5))
        );
        assert_eq!(recent[0].prediction, "");
        assert_eq!(recent[0].model, "");
        assert_eq!(recent[0].confidence, 0.0);
        assert_eq!(
            recent[1].timestamp.as_ref().unwrap().value(),
            &DateValue::Other(serde_json::json!(true))
        );
        assert_eq!(recent[1].prediction, "setosa");
    }

    #[test]
    fn test_mistyped_series_is_treated_as_absent() {
        let json = r#"{"total_predictions": "7", "predictions_by_model": {"svm": 3}}"#;
        let snapshot: StatsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.total_predictions, None);
        assert_eq!(snapshot.predictions_by_model, None);
    }

    #[test]
    fn test_request_serializes_nan_as_null() {
        let request = PredictionRequest::new([5.1, f64::NAN, 1.4, 0.2], "svm");
        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(body, r#"{"features":[5.1,null,1.4,0.2],"model":"svm"}"#);
    }
}
