//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::dashboard::DashboardController;
use crate::dashboard::charts::ChartStore;
use crate::events::Event as ControllerEvent;
use crate::ui::dashboard::input::FormAction;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::prompts::Prompt;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{Terminal, backend::Backend};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub refresh_interval: Duration,
    pub models: Vec<String>,
    pub default_model: String,
}

impl UIConfig {
    pub fn new(
        with_background_color: bool,
        refresh_interval: Duration,
        models: Vec<String>,
        default_model: impl Into<String>,
    ) -> Self {
        Self {
            with_background_color,
            refresh_interval,
            models,
            default_model: default_model.into(),
        }
    }
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// Runs refreshes and user actions.
    controller: Arc<DashboardController>,

    /// What is on screen.
    state: DashboardState,

    /// Receives events from the controller.
    event_receiver: mpsc::Receiver<ControllerEvent>,

    /// Receives dialogs raised by the controller.
    prompt_receiver: mpsc::Receiver<Prompt>,
}

/// What the loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        controller: Arc<DashboardController>,
        charts: ChartStore,
        event_receiver: mpsc::Receiver<ControllerEvent>,
        prompt_receiver: mpsc::Receiver<Prompt>,
        ui_config: UIConfig,
    ) -> Self {
        let state = DashboardState::new(controller.environment().clone(), charts, ui_config);
        Self {
            controller,
            state,
            event_receiver,
            prompt_receiver,
        }
    }

    /// Pull everything the controller produced since the last frame.
    fn sync(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.add_to_activity_log(event);
        }
        if self.state.modal.is_none() {
            if let Ok(prompt) = self.prompt_receiver.try_recv() {
                self.state.modal = Some(prompt);
            }
        }
        self.state.view = self.controller.view_snapshot();
    }

    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if let Some(prompt) = self.state.modal.take() {
            let is_confirm = matches!(prompt, Prompt::Confirm { .. });
            match (is_confirm, key.code) {
                (true, KeyCode::Char('y' | 'Y') | KeyCode::Enter) => prompt.resolve(true),
                (true, KeyCode::Char('n' | 'N') | KeyCode::Esc) => prompt.resolve(false),
                (true, _) => self.state.modal = Some(prompt),
                (false, _) => prompt.resolve(true),
            }
            return Flow::Continue;
        }

        if let Some(form) = self.state.form.as_mut() {
            match form.handle_key(key) {
                FormAction::None => {}
                FormAction::Cancel => self.state.form = None,
                FormAction::Submit(form) => {
                    self.state.form = None;
                    let controller = Arc::clone(&self.controller);
                    let request = form.to_request();
                    tokio::spawn(async move {
                        let _ = controller.handle_prediction(&request).await;
                    });
                }
            }
            return Flow::Continue;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Flow::Quit,
            KeyCode::Char('r') => {
                let controller = Arc::clone(&self.controller);
                tokio::spawn(async move {
                    controller.load_dashboard_data().await;
                });
            }
            KeyCode::Char('p') => self.state.open_form(),
            KeyCode::Char('c') => {
                let controller = Arc::clone(&self.controller);
                tokio::spawn(async move {
                    let _ = controller.clear_history().await;
                });
            }
            _ => {}
        }
        Flow::Continue
    }
}

/// Runs the application UI in a loop, handling events and rendering the dashboard.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    app.controller.initialize();

    // UI event loop
    loop {
        app.sync();
        terminal.draw(|f| render_dashboard(f, &app.state))?;

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if app.handle_key(key) == Flow::Quit {
                    app.controller.dispose();
                    return Ok(());
                }
            }
        }
    }
}
