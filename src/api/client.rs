//! Prediction Service Client
//!
//! A JSON-over-HTTP client for the statistics, prediction and clear-history
//! endpoints of the prediction service.

use crate::api::PredictionApi;
use crate::api::error::ApiError;
use crate::api::types::{ClearHistoryResult, PredictionRequest, PredictionResult, StatsSnapshot};
use crate::consts::cli_consts::endpoints;
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("prediction-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct PredictionClient {
    client: Client,
    environment: Environment,
}

impl PredictionClient {
    /// Builds a client for the given environment.
    ///
    /// Requests have no timeout unless `request_timeout` is set; a hung
    /// request only stalls the task that issued it.
    pub fn new(
        environment: Environment,
        request_timeout: Option<Duration>,
    ) -> Result<Self, ApiError> {
        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self.client.get(&url).send().await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    async fn post_request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let mut request = self.client.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }
}

#[async_trait::async_trait]
impl PredictionApi for PredictionClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn get_stats(&self) -> Result<StatsSnapshot, ApiError> {
        self.get_request(endpoints::STATS).await
    }

    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, ApiError> {
        self.post_request(endpoints::PREDICT, Some(request)).await
    }

    async fn clear_history(&self) -> Result<ClearHistoryResult, ApiError> {
        self.post_request::<(), _>(endpoints::CLEAR_HISTORY, None)
            .await
    }
}
