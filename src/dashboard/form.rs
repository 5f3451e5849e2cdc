//! Prediction form input
//!
//! Field values are kept as typed text and only converted when the form is
//! submitted, the way numeric form controls are read at submit time.

use crate::api::types::PredictionRequest;

pub const FEATURE_NAMES: [&str; 4] = ["Sepal length", "Sepal width", "Petal length", "Petal width"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionForm {
    pub features: [String; 4],
    pub model: String,
}

impl PredictionForm {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            features: Default::default(),
            model: model.into(),
        }
    }

    pub fn with_features(mut self, features: [&str; 4]) -> Self {
        self.features = features.map(str::to_string);
        self
    }

    /// Build the request body.
    ///
    /// No range checks happen here: blank fields read as `0`, unreadable ones
    /// as NaN (sent as `null`), and the service decides what it accepts.
    pub fn to_request(&self) -> PredictionRequest {
        let features = [0, 1, 2, 3].map(|i| coerce_number(&self.features[i]));
        PredictionRequest::new(features, self.model.clone())
    }
}

/// Numeric coercion of a text field.
pub fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(" 5.1 "), 5.1);
        assert_eq!(coerce_number(""), 0.0);
        assert!(coerce_number("abc").is_nan());
    }

    #[test]
    fn test_to_request_keeps_model_and_order() {
        let form = PredictionForm::new("svm").with_features(["5.1", "3.5", "1.4", "0.2"]);
        let request = form.to_request();
        assert_eq!(request.features, [5.1, 3.5, 1.4, 0.2]);
        assert_eq!(request.model, "svm");
    }

    #[test]
    fn test_out_of_range_values_pass_through() {
        let form = PredictionForm::new("svm").with_features(["-4", "999", "", "x"]);
        let request = form.to_request();
        assert_eq!(request.features[0], -4.0);
        assert_eq!(request.features[1], 999.0);
        assert_eq!(request.features[2], 0.0);
        assert!(request.features[3].is_nan());
    }
}
