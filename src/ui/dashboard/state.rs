//! Dashboard state management
//!
//! Everything the terminal dashboard draws from: the controller's view model,
//! the live charts, the activity log and the open overlays.

use super::input::FormState;
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::dashboard::charts::{ChartConfig, ChartSlot, ChartStore};
use crate::dashboard::view::DashboardView;
use crate::environment::Environment;
use crate::events::Event as ControllerEvent;
use crate::ui::app::UIConfig;
use crate::ui::prompts::Prompt;

use std::collections::VecDeque;
use std::time::Duration;

#[derive(Debug)]
pub struct DashboardState {
    /// The service being watched.
    pub environment: Environment,
    pub refresh_interval: Duration,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Latest copy of the controller's view model.
    pub view: DashboardView,
    /// Chart backend shared with the controller.
    pub charts: ChartStore,
    /// Activity logs for display (last 100 events)
    pub activity_logs: VecDeque<ControllerEvent>,
    /// Open prediction form, if any.
    pub form: Option<FormState>,
    /// Dialog currently on screen.
    pub modal: Option<Prompt>,
    pub models: Vec<String>,
    pub default_model: String,
}

impl DashboardState {
    pub fn new(environment: Environment, charts: ChartStore, ui_config: UIConfig) -> Self {
        Self {
            environment,
            refresh_interval: ui_config.refresh_interval,
            with_background_color: ui_config.with_background_color,
            view: DashboardView::default(),
            charts,
            activity_logs: VecDeque::new(),
            form: None,
            modal: None,
            models: ui_config.models,
            default_model: ui_config.default_model,
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: ControllerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    pub fn open_form(&mut self) {
        self.form = Some(FormState::new(self.models.clone(), &self.default_model));
    }

    /// Chart currently shown in `slot`.
    pub fn chart(&self, slot: ChartSlot) -> Option<ChartConfig> {
        self.charts.current(slot)
    }
}
