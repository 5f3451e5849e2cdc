pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the fixed values of the dashboard client,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered controller events
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Maximum number of pending confirm/notify prompts for the terminal host
    pub const PROMPT_QUEUE_SIZE: usize = 16;

    // =============================================================================
    // REFRESH CONFIGURATION
    // =============================================================================

    /// Dashboard refresh cadence
    pub mod refresh {
        use std::time::Duration;

        /// Seconds between two automatic refresh cycles
        pub const DEFAULT_INTERVAL_SECS: u64 = 30;

        /// Helper function to get the default refresh interval
        pub const fn default_interval() -> Duration {
            Duration::from_secs(DEFAULT_INTERVAL_SECS)
        }
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Endpoint paths, relative to the service base URL
    pub mod endpoints {
        pub const STATS: &str = "api/stats";
        pub const PREDICT: &str = "api/predict";
        pub const CLEAR_HISTORY: &str = "api/clear-history";
    }

    // =============================================================================
    // VIEW CONFIGURATION
    // =============================================================================

    /// Fixed texts of the dashboard view
    pub mod view {
        /// Shown in the recent-predictions panel when there is nothing to list
        pub const NO_PREDICTIONS_PLACEHOLDER: &str = "No predictions yet";

        /// Shown when a timestamp cannot be interpreted
        pub const INVALID_DATE: &str = "Invalid Date";

        /// Average confidence before any statistics arrived
        pub const INITIAL_AVG_CONFIDENCE: &str = "0.0%";

        /// Top class before any statistics arrived
        pub const INITIAL_TOP_PREDICTION: &str = "-";

        /// Confirmation prompt of the clear-history action
        pub const CLEAR_HISTORY_PROMPT: &str = "Clear all prediction history?";
    }

    /// Models offered by the prediction form when none are configured
    pub const DEFAULT_MODELS: [&str; 3] = ["random_forest", "svm", "logistic_regression"];
}
