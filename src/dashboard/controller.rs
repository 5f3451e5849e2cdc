//! Dashboard controller
//!
//! Owns the refresh timer, the chart slots and the view model, and runs the
//! two user actions (prediction submission and clear-history).
//!
//! Background refresh failures never escape: they are logged, published as
//! activity events and the view keeps its last state. User actions report
//! their failures through the [`Notifier`] and skip their side effects.

use crate::api::PredictionApi;
use crate::api::error::ApiError;
use crate::api::types::{PredictionRequest, PredictionResult, StatsSnapshot};
use crate::consts::cli_consts::view::CLEAR_HISTORY_PROMPT;
use crate::dashboard::charts::{ChartBoard, ChartRenderer, build_chart_configs};
use crate::dashboard::notifier::Notifier;
use crate::dashboard::view::{DashboardView, PredictionOutcome};
use crate::environment::Environment;
use crate::error_classifier::ErrorClassifier;
use crate::events::{EventSender, EventType, Source};
use crate::logging::LogLevel;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Shortest accepted refresh period.
const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// View model and chart slots, always updated together.
#[derive(Debug)]
struct Board {
    view: DashboardView,
    charts: ChartBoard,
}

pub struct DashboardController {
    api: Arc<dyn PredictionApi>,
    notifier: Arc<dyn Notifier>,
    board: Mutex<Board>,
    events: EventSender,
    classifier: ErrorClassifier,
    refresh_interval: Duration,
    shutdown: CancellationToken,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl DashboardController {
    pub fn new(
        api: Arc<dyn PredictionApi>,
        notifier: Arc<dyn Notifier>,
        renderer: Arc<dyn ChartRenderer>,
        events: EventSender,
        refresh_interval: Duration,
    ) -> Self {
        Self {
            api,
            notifier,
            board: Mutex::new(Board {
                view: DashboardView::default(),
                charts: ChartBoard::new(renderer),
            }),
            events,
            classifier: ErrorClassifier::new(),
            refresh_interval: refresh_interval.max(MIN_REFRESH_INTERVAL),
            shutdown: CancellationToken::new(),
            timer: Mutex::new(None),
        }
    }

    pub fn environment(&self) -> &Environment {
        self.api.environment()
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    /// Start the refresh timer: one refresh right away, then one per period.
    ///
    /// Every tick spawns its own refresh task, so a hung request never holds
    /// back the next tick. Calling this again while the timer runs, or after
    /// [`dispose`](Self::dispose), does nothing.
    pub fn initialize(self: &Arc<Self>) {
        let mut timer = lock(&self.timer);
        if timer.is_some() || self.shutdown.is_cancelled() {
            return;
        }

        let controller = Arc::clone(self);
        let shutdown = self.shutdown.clone();
        *timer = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(controller.refresh_interval);
            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => break,
                    _ = ticker.tick() => {
                        let controller = Arc::clone(&controller);
                        tokio::spawn(async move {
                            controller.load_dashboard_data().await;
                        });
                    }
                }
            }
        }));
        let message = format!(
            "Dashboard refresh started for {} every {}s",
            self.environment(),
            self.refresh_interval.as_secs()
        );
        log::info!("{}", message);
        self.events
            .send_now(Source::Lifecycle, message, EventType::Refresh, LogLevel::Info);
    }

    /// Stop the refresh timer and release every chart. Idempotent.
    ///
    /// The token is cancelled before the board is locked, so a snapshot
    /// applied concurrently is either disposed here or dropped unapplied.
    pub fn dispose(&self) {
        self.shutdown.cancel();
        if let Some(handle) = lock(&self.timer).take() {
            handle.abort();
            log::info!("Dashboard refresh stopped");
            self.events.send_now(
                Source::Lifecycle,
                "Dashboard refresh stopped".to_string(),
                EventType::Refresh,
                LogLevel::Info,
            );
        }
        lock(&self.board).charts.dispose_all();
    }

    pub fn is_disposed(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    /// A copy of the current view model.
    pub fn view_snapshot(&self) -> DashboardView {
        lock(&self.board).view.clone()
    }

    /// Refresh the dashboard, swallowing any failure.
    pub async fn load_dashboard_data(&self) {
        if let Err(e) = self.try_load_dashboard_data().await {
            log::error!("Failed to load dashboard data: {}", e);
            let level = self.classifier.classify_refresh_error(&e);
            self.events
                .send(
                    Source::Refresh,
                    format!("Refresh failed: {}", e),
                    EventType::Error,
                    level,
                )
                .await;
        }
    }

    /// Refresh the dashboard and report whether the statistics could be read.
    pub async fn try_load_dashboard_data(&self) -> Result<(), ApiError> {
        self.events
            .send(
                Source::Refresh,
                "Fetching statistics".to_string(),
                EventType::Refresh,
                LogLevel::Debug,
            )
            .await;

        let snapshot = self.api.get_stats().await?;
        if !self.apply_snapshot(&snapshot) {
            log::debug!("Dropping statistics received after dispose");
            return Ok(());
        }

        let total = snapshot.total_predictions.unwrap_or(0);
        self.events
            .send(
                Source::Refresh,
                format!("Statistics updated: {} predictions", total),
                EventType::Success,
                LogLevel::Info,
            )
            .await;
        Ok(())
    }

    /// Update summary counters, then charts, then the recent list.
    ///
    /// All three happen under one lock so concurrent refreshes never mix.
    /// Returns `false`, changing nothing, once the controller is disposed.
    pub fn apply_snapshot(&self, snapshot: &StatsSnapshot) -> bool {
        let mut board = lock(&self.board);
        if self.is_disposed() {
            return false;
        }
        board.view.apply_summary(snapshot);
        for (slot, config) in build_chart_configs(snapshot) {
            board.charts.create_or_replace(slot, &config);
        }
        board.view.apply_recent(snapshot);
        true
    }

    /// Submit one prediction.
    ///
    /// On success the result panel is revealed and a full refresh follows.
    /// On failure the user is notified with the service's message and
    /// nothing else changes.
    pub async fn handle_prediction(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, ApiError> {
        self.events
            .send(
                Source::Prediction,
                format!("Requesting prediction from {}", request.model),
                EventType::Waiting,
                LogLevel::Debug,
            )
            .await;
        match self.api.predict(request).await {
            Ok(result) => {
                let outcome = PredictionOutcome::from(&result);
                lock(&self.board).view.show_result(&result);
                self.events
                    .send(
                        Source::Prediction,
                        format!(
                            "{} ({}) by {}",
                            outcome.class, outcome.confidence, outcome.model
                        ),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
                self.load_dashboard_data().await;
                Ok(result)
            }
            Err(e) => {
                log::warn!("Prediction failed: {}", e);
                let message = e.user_message();
                self.notifier.notify(&format!("Error: {}", message)).await;
                self.events
                    .send(
                        Source::Prediction,
                        format!("Prediction failed: {}", message),
                        EventType::Error,
                        LogLevel::Error,
                    )
                    .await;
                Err(e)
            }
        }
    }

    /// Delete all stored predictions after confirmation.
    ///
    /// Returns `Ok(None)` when the user declines; no request is made then.
    pub async fn clear_history(&self) -> Result<Option<u64>, ApiError> {
        if !self.notifier.confirm(CLEAR_HISTORY_PROMPT).await {
            log::debug!("Clear history declined");
            return Ok(None);
        }

        self.events
            .send(
                Source::History,
                "Clearing prediction history".to_string(),
                EventType::Waiting,
                LogLevel::Debug,
            )
            .await;
        match self.api.clear_history().await {
            Ok(cleared) => {
                let message = format!("Cleared {} records", cleared.deleted_count);
                self.notifier.notify(&message).await;
                self.events
                    .send(
                        Source::History,
                        message,
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
                self.load_dashboard_data().await;
                Ok(Some(cleared.deleted_count))
            }
            Err(e) => {
                log::warn!("Clear history failed: {}", e);
                let message = e.user_message();
                self.notifier.notify(&format!("Error: {}", message)).await;
                self.events
                    .send(
                        Source::History,
                        format!("Clear history failed: {}", message),
                        EventType::Error,
                        LogLevel::Error,
                    )
                    .await;
                Err(e)
            }
        }
    }
}

impl Drop for DashboardController {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

impl std::fmt::Debug for DashboardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardController")
            .field("environment", self.environment())
            .field("refresh_interval", &self.refresh_interval)
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
