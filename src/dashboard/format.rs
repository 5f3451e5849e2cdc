//! Display helpers shared by every dashboard region

use crate::api::types::{DateValue, Timestamp};
use crate::consts::cli_consts::view::INVALID_DATE;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn an identifier such as `random_forest` into `Random Forest`.
///
/// Only the first underscore becomes a space; afterwards every ASCII word
/// character that starts a word is uppercased.
pub fn humanize(s: &str) -> String {
    let spaced = s.replacen('_', " ", 1);
    let mut out = String::with_capacity(spaced.len());
    let mut previous_is_word = false;
    for c in spaced.chars() {
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && !previous_is_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        previous_is_word = is_word;
    }
    out
}

/// Format a ratio in `[0, 1]` as a percentage with fixed precision.
pub fn percent(ratio: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, ratio * 100.0)
}

/// Render a service timestamp in local time, `Invalid Date` when unreadable.
pub fn humanize_timestamp(timestamp: Option<&Timestamp>) -> String {
    timestamp
        .and_then(|ts| parse_date_value(ts.value()))
        .map(|dt| format_datetime(&dt))
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn format_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

fn parse_date_value(value: &DateValue) -> Option<DateTime<Local>> {
    match value {
        DateValue::Millis(ms) => from_millis(*ms),
        DateValue::NumberLong { number_long } => from_millis(number_long.trim().parse().ok()?),
        DateValue::Text(text) => parse_date_text(text.trim()),
        DateValue::Other(other) => from_millis(other.as_f64()?.trunc() as i64),
    }
}

fn from_millis(ms: i64) -> Option<DateTime<Local>> {
    DateTime::<Utc>::from_timestamp_millis(ms).map(|dt| dt.with_timezone(&Local))
}

fn parse_date_text(text: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Local));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Local));
    }
    // Date-time without an offset is local time
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, pattern) {
            return Local.from_local_datetime(&naive).earliest();
        }
    }
    // A bare date is midnight UTC
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc().with_timezone(&Local));
    }
    if let Ok(ms) = text.parse::<i64>() {
        return from_millis(ms);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("versicolor"), "Versicolor");
        assert_eq!(capitalize("iris setosa"), "Iris setosa");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_humanize_model_names() {
        assert_eq!(humanize("random_forest"), "Random Forest");
        assert_eq!(humanize("svm"), "Svm");
        // Only the first underscore is replaced
        assert_eq!(humanize("logistic_regression_v2"), "Logistic Regression_v2");
        assert_eq!(humanize("k-nn"), "K-Nn");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0.7000000000000001, 1), "70.0%");
        assert_eq!(percent(0.9876, 2), "98.76%");
        assert_eq!(percent(0.0, 1), "0.0%");
    }

    #[test]
    fn test_format_datetime_shape() {
        let dt = Utc.with_ymd_and_hms(2024, 5, 1, 14, 3, 9).unwrap();
        assert_eq!(format_datetime(&dt), "5/1/2024, 2:03:09 PM");
    }

    #[test]
    fn test_wrapped_and_raw_timestamps_render_identically() {
        let wrapped = Timestamp::Wrapped {
            date: DateValue::Text("2024-05-01T10:00:00Z".to_string()),
        };
        let raw = Timestamp::Raw(DateValue::Text("2024-05-01T10:00:00Z".to_string()));
        let millis = Timestamp::Raw(DateValue::Millis(1_714_557_600_000));
        let rfc2822 = Timestamp::Raw(DateValue::Text(
            "Wed, 01 May 2024 10:00:00 GMT".to_string(),
        ));

        let expected = humanize_timestamp(Some(&raw));
        assert_ne!(expected, INVALID_DATE);
        assert_eq!(humanize_timestamp(Some(&wrapped)), expected);
        assert_eq!(humanize_timestamp(Some(&millis)), expected);
        assert_eq!(humanize_timestamp(Some(&rfc2822)), expected);
    }

    #[test]
    fn test_unreadable_timestamps() {
        let garbage = Timestamp::Raw(DateValue::Text("yesterday-ish".to_string()));
        assert_eq!(humanize_timestamp(Some(&garbage)), INVALID_DATE);
        assert_eq!(humanize_timestamp(None), INVALID_DATE);

        let boolean = Timestamp::Raw(DateValue::Other(serde_json::json!(true)));
        assert_eq!(humanize_timestamp(Some(&boolean)), INVALID_DATE);
    }

    #[test]
    fn test_fractional_millis_are_truncated() {
        let fractional = Timestamp::Raw(DateValue::Other(serde_json::json!(1_714_557_600_000.7)));
        let whole = Timestamp::Raw(DateValue::Millis(1_714_557_600_000));
        assert_eq!(
            humanize_timestamp(Some(&fractional)),
            humanize_timestamp(Some(&whole))
        );
    }
}
