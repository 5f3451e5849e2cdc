use crate::api::error::ApiError;
use crate::api::types::{ClearHistoryResult, PredictionRequest, PredictionResult, StatsSnapshot};
use crate::environment::Environment;

pub(crate) mod client;
pub use client::PredictionClient;
pub mod error;
pub mod types;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PredictionApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the aggregated prediction statistics.
    async fn get_stats(&self) -> Result<StatsSnapshot, ApiError>;

    /// Ask the service to classify one sample.
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, ApiError>;

    /// Delete every stored prediction.
    async fn clear_history(&self) -> Result<ClearHistoryResult, ApiError>;
}
