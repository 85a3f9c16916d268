//! Application state and logic for the TUI.
//!
//! The [`App`] owns the title being typed and the [`AssessmentController`];
//! everything the renderer needs is read from here.
//! - [`AppMessage`] - Messages from background tasks

mod handlers;
mod messages;

pub use messages::AppMessage;

use chrono::{DateTime, Local};
use tokio::sync::mpsc;
use tracing::debug;

use crate::client::AssessClient;
use crate::health_check::run_health_check;
use crate::input::KeybindingConfig;
use crate::submission::{AssessmentController, SubmissionView};
use crate::traits::HttpClient;
use crate::validation::CharCounter;

/// Main application state.
pub struct App<C: HttpClient + 'static> {
    /// Title being typed
    pub input: String,
    /// Submission lifecycle
    pub controller: AssessmentController<C>,
    /// Client used for the startup health probe
    client: AssessClient<C>,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set whenever state changes; the loop redraws and clears it
    pub needs_redraw: bool,
    /// Tick counter for the spinner
    pub tick_count: u64,
    /// Vertical scroll of the result panel
    pub result_scroll: u16,
    /// When the current terminal view was produced
    pub completed_at: Option<DateTime<Local>>,
    /// Health probe result; `None` until it answers
    pub backend_healthy: Option<bool>,
    /// Key to command table
    pub keybindings: KeybindingConfig,
    /// Sender handed to background tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl<C: HttpClient + 'static> App<C> {
    /// Create a new App instance.
    pub fn new(client: AssessClient<C>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let controller = AssessmentController::new(client.clone(), message_tx.clone());

        Self {
            input: String::new(),
            controller,
            client,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            result_scroll: 0,
            completed_at: None,
            backend_healthy: None,
            keybindings: KeybindingConfig::default(),
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Current submission view.
    pub fn view(&self) -> &SubmissionView {
        self.controller.view()
    }

    pub fn counter(&self) -> CharCounter {
        CharCounter::measure(&self.input)
    }

    pub fn backend_url(&self) -> &str {
        self.client.base_url()
    }

    /// Advance the animation tick. Only a loading view animates.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.view().is_loading() {
            self.mark_dirty();
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Probe the backend in the background; the answer arrives as
    /// [`AppMessage::HealthChecked`].
    pub fn spawn_health_check(&self) {
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = run_health_check(&client).await;
            debug!("startup health check: {:?}", result);
            let _ = tx.send(AppMessage::HealthChecked {
                healthy: result.healthy,
            });
        });
    }

    /// Handle a message from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::AssessmentResolved { ticket, outcome } => {
                if self.controller.on_resolved(ticket, outcome) {
                    self.completed_at = Some(Local::now());
                    self.result_scroll = 0;
                }
            }
            AppMessage::HealthChecked { healthy } => {
                self.backend_healthy = Some(healthy);
            }
        }
        self.mark_dirty();
    }
}
