//! Session setup and initialization

use crate::api::PredictionClient;
use crate::config::Config;
use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, PROMPT_QUEUE_SIZE};
use crate::dashboard::charts::ChartStore;
use crate::dashboard::{ConsoleNotifier, DashboardController, Notifier};
use crate::events::{Event, EventSender};
use crate::ui::{Prompt, TerminalNotifier};
use std::error::Error;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Where the controller's dialogs go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    /// Modal dialogs inside the terminal dashboard.
    Terminal,
    /// Plain stdin/stdout prompts.
    Console { assume_yes: bool },
}

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// The dashboard controller, not yet initialized
    pub controller: Arc<DashboardController>,
    /// Chart backend the controller renders into
    pub charts: ChartStore,
    /// Event receiver for controller events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Dialog queue, present in [`DialogMode::Terminal`]
    pub prompt_receiver: Option<mpsc::Receiver<Prompt>>,
}

/// Sets up a dashboard session
///
/// This function handles all the common setup required by every mode:
/// 1. Resolves the service environment from the configuration
/// 2. Creates the HTTP client
/// 3. Wires the controller to its notifier, chart backend and event channel
///
/// # Arguments
/// * `config` - Resolved configuration
/// * `dialogs` - Where confirmations and notifications are shown
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - Session setup failed
pub fn setup_session(config: &Config, dialogs: DialogMode) -> Result<SessionData, Box<dyn Error>> {
    let environment = config.environment()?;
    let client = PredictionClient::new(environment, config.request_timeout())?;

    let (prompt_receiver, notifier) = match dialogs {
        DialogMode::Terminal => {
            let (sender, receiver) = mpsc::channel(PROMPT_QUEUE_SIZE);
            let notifier: Arc<dyn Notifier> = Arc::new(TerminalNotifier::new(sender));
            (Some(receiver), notifier)
        }
        DialogMode::Console { assume_yes } => {
            let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier::new(assume_yes));
            (None, notifier)
        }
    };

    let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    let charts = ChartStore::new();
    let controller = Arc::new(DashboardController::new(
        Arc::new(client),
        notifier,
        Arc::new(charts.clone()),
        EventSender::new(event_sender),
        config.refresh_interval(),
    ));

    Ok(SessionData {
        controller,
        charts,
        event_receiver,
        prompt_receiver,
    })
}
