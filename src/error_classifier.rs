use crate::api::error::ApiError;
use crate::logging::LogLevel;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Log level for a failed background refresh.
    pub fn classify_refresh_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // Non-critical: the service is busy or restarting
            ApiError::Http { status, .. } if *status == 429 => LogLevel::Debug,
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: wrong endpoint, wrong service or a malformed document
            ApiError::Http { .. } => LogLevel::Error,
            ApiError::Decode(_) => LogLevel::Error,

            // Network issues - usually temporary
            ApiError::Reqwest(_) => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> ApiError {
        ApiError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_classify_refresh_error() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_refresh_error(&http(429)), LogLevel::Debug);
        assert_eq!(classifier.classify_refresh_error(&http(503)), LogLevel::Warn);
        assert_eq!(classifier.classify_refresh_error(&http(404)), LogLevel::Error);

        let decode = serde_json::from_str::<u32>("x").unwrap_err();
        assert_eq!(
            classifier.classify_refresh_error(&ApiError::Decode(decode)),
            LogLevel::Error
        );
    }
}
