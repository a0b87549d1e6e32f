//! TUI application state and event handling.
//!
//! All state lives in [`App`] and changes only through three entry points:
//!
//! - [`App::handle_action`] - keyboard actions; returns a [`Command`] when the action
//!   needs the backend
//! - [`App::handle_event`] - completions of backend calls ([`AppEvent`])
//! - [`App::apply_reveal`] - characters typed by the reveal animator
//!
//! `run()` turns commands into tokio tasks that report back over a channel, so the state
//! itself is only ever touched from the UI loop.
//!
//! # Screens
//!
//! - Main: question input, provider picker, staged results
//! - Compare overlay: two history pickers plus side-by-side or diff view
//! - Notice: blocking error popup shown when a query fails

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{error, info, warn};

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::client::{BackendClient, ClientError};
use crate::clipboard::copy_to_clipboard;
use crate::compare::{ComparisonSelection, Slot};
use crate::history::HistoryStore;
use crate::models::{ModelCatalog, QueryResult};
use crate::reveal::{RevealAnimator, RevealState, RevealTiming, RevealUpdate};
use crate::theme::{ThemeMode, resolve_now};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
const MAX_QUESTION_CHARS: usize = 4000;
const SCROLL_STEP: u16 = 10;
const POLL_INTERVAL_MS: u64 = 10;

/// Startup settings for the interactive session
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub provider: String,
    pub theme: ThemeMode,
    pub history_limit: usize,
    pub timing: RevealTiming,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            provider: "mock".to_string(),
            theme: ThemeMode::Auto,
            history_limit: crate::history::DEFAULT_HISTORY_LIMIT,
            timing: RevealTiming::default(),
        }
    }
}

/// Completion of a backend call
#[derive(Debug)]
pub enum AppEvent {
    CatalogLoaded(Result<ModelCatalog, ClientError>),
    QueryFinished { provider: String, outcome: Result<QueryResult, ClientError> },
}

/// Backend work requested by an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadCatalog,
    Submit { question: String, provider: String },
}

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// State of the comparison overlay while it is open
#[derive(Debug, Clone, Default)]
pub struct CompareOverlay {
    pub selection: ComparisonSelection,
    pub focus: Slot,
    pub scroll: u16,
}

pub struct App {
    client: BackendClient,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    reveal_tx: UnboundedSender<RevealUpdate>,
    reveal_rx: UnboundedReceiver<RevealUpdate>,
    // Query input
    question: String,
    catalog: ModelCatalog,
    provider: String,
    loading: bool,
    last_question: Option<String>,
    // Current result and its reveal
    result: Option<QueryResult>,
    reveal: Option<RevealState>,
    animator: RevealAnimator,
    history: HistoryStore,
    theme_mode: ThemeMode,
    compare: Option<CompareOverlay>,
    notice: Option<String>,
    status_message: Option<StatusMessage>,
    scroll: u16,
    should_quit: bool,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(client: BackendClient, options: AppOptions) -> Self {
        let (events_tx, events_rx) = unbounded_channel();
        let (reveal_tx, reveal_rx) = unbounded_channel();

        Self {
            client,
            events_tx,
            events_rx,
            reveal_tx,
            reveal_rx,
            question: String::new(),
            catalog: ModelCatalog::default(),
            provider: options.provider,
            loading: false,
            last_question: None,
            result: None,
            reveal: None,
            animator: RevealAnimator::new(options.timing),
            history: HistoryStore::with_limit(options.history_limit),
            theme_mode: options.theme,
            compare: None,
            notice: None,
            status_message: None,
            scroll: 0,
            should_quit: false,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn reveal(&self) -> Option<&RevealState> {
        self.reveal.as_ref()
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let expired =
            self.status_message.as_ref().is_some_and(|msg| Instant::now() >= msg.expires_at);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.dispatch(Command::LoadCatalog);

        while !self.should_quit {
            self.check_and_clear_expired_status();
            self.drain_channels();

            // Draw if dirty or if it's been >100ms (resize, auto theme hour change)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                let dark = resolve_now(self.theme_mode);
                terminal.draw(|f| render_ui(f, &self.render_state(dark)))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(POLL_INTERVAL_MS))?;
            if let Some(command) = self.handle_action(action) {
                self.dispatch(command);
            }
        }

        self.animator.cancel();
        Ok(())
    }

    fn render_state(&self, dark: bool) -> RenderState<'_> {
        RenderState {
            question: &self.question,
            catalog: &self.catalog,
            provider: &self.provider,
            loading: self.loading,
            reveal: self.reveal.as_ref(),
            history: &self.history,
            theme_mode: self.theme_mode,
            dark,
            compare: self.compare.as_ref(),
            notice: self.notice.as_deref(),
            status_message: self.status_message.as_ref(),
            scroll: self.scroll,
        }
    }

    /// Run a command as a background task that reports back through `events_tx`
    fn dispatch(&self, command: Command) {
        let client = self.client.clone();
        let tx = self.events_tx.clone();

        match command {
            Command::LoadCatalog => {
                tokio::spawn(async move {
                    let outcome = client.load_catalog().await;
                    let _ = tx.send(AppEvent::CatalogLoaded(outcome));
                });
            }
            Command::Submit { question, provider } => {
                tokio::spawn(async move {
                    let outcome = client.submit(&question, &provider).await;
                    let _ = tx.send(AppEvent::QueryFinished { provider, outcome });
                });
            }
        }
    }

    /// Apply everything that arrived from background tasks since the last tick
    fn drain_channels(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
        while let Ok(update) = self.reveal_rx.try_recv() {
            self.apply_reveal(&update);
        }
    }

    /// Handle a user action, returning backend work to start (extracted for testing)
    pub fn handle_action(&mut self, action: Action) -> Option<Command> {
        if action == Action::Quit {
            self.should_quit = true;
            return None;
        }
        if self.notice.is_some() {
            self.handle_notice_action(action);
            return None;
        }
        if self.compare.is_some() {
            self.handle_compare_action(action);
            return None;
        }

        match action {
            Action::Cancel => {
                if self.question.is_empty() {
                    self.should_quit = true;
                } else {
                    self.question.clear();
                    self.needs_redraw = true;
                }
            }
            Action::Submit => return self.submit(self.question.clone()),
            Action::Regenerate => match self.last_question.clone() {
                Some(question) => return self.submit(question),
                None => self.set_status(
                    "✗ Nothing to regenerate yet",
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                ),
            },
            Action::ReloadCatalog => return Some(Command::LoadCatalog),
            Action::Newline => self.insert_char('\n'),
            Action::InsertChar(c) => self.insert_char(c),
            Action::DeleteChar => {
                if self.question.pop().is_some() {
                    self.needs_redraw = true;
                }
            }
            Action::MoveUp => self.cycle_provider(-1),
            Action::MoveDown => self.cycle_provider(1),
            Action::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(SCROLL_STEP);
                self.needs_redraw = true;
            }
            Action::ScrollDown => {
                self.scroll = self.scroll.saturating_add(SCROLL_STEP);
                self.needs_redraw = true;
            }
            Action::CycleTheme => {
                self.theme_mode = self.theme_mode.next();
                self.needs_redraw = true;
            }
            Action::OpenCompare => self.open_compare(),
            Action::CopyFinal => self.copy_final(),
            Action::ToggleCompareMode | Action::ToggleFocus | Action::Quit | Action::None => {}
        }
        None
    }

    fn handle_notice_action(&mut self, action: Action) {
        if matches!(action, Action::Submit | Action::Cancel) {
            self.notice = None;
            self.needs_redraw = true;
        }
    }

    fn handle_compare_action(&mut self, action: Action) {
        let history_len = self.history.len();
        let Some(overlay) = self.compare.as_mut() else {
            return;
        };

        match action {
            Action::Cancel | Action::OpenCompare => self.compare = None,
            Action::ToggleFocus => overlay.focus = overlay.focus.other(),
            Action::ToggleCompareMode => {
                overlay.selection.mode = overlay.selection.mode.toggle();
                overlay.scroll = 0;
            }
            Action::MoveUp | Action::MoveDown => {
                let current =
                    overlay.selection.slot(overlay.focus).and_then(|id| self.history.position(id));
                let next = if action == Action::MoveUp {
                    match current {
                        Some(0) | None => None,
                        Some(idx) => Some(idx - 1),
                    }
                } else {
                    match current {
                        None if history_len > 0 => Some(0),
                        None => None,
                        Some(idx) => Some((idx + 1).min(history_len.saturating_sub(1))),
                    }
                };
                let id = next.and_then(|idx| self.history.nth(idx)).map(|entry| entry.id.clone());
                overlay.selection.select(overlay.focus, id);
                overlay.scroll = 0;
            }
            Action::ScrollUp => overlay.scroll = overlay.scroll.saturating_sub(SCROLL_STEP),
            Action::ScrollDown => overlay.scroll = overlay.scroll.saturating_add(SCROLL_STEP),
            _ => return,
        }
        self.needs_redraw = true;
    }

    /// Start a query unless one is already in flight or the question is blank
    fn submit(&mut self, question: String) -> Option<Command> {
        if self.loading {
            return None;
        }
        if question.trim().is_empty() {
            self.set_status("✗ Type a question first", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return None;
        }

        self.animator.cancel();
        self.loading = true;
        self.result = None;
        self.reveal = None;
        self.scroll = 0;
        self.last_question = Some(question.clone());
        self.needs_redraw = true;

        info!(provider = %self.provider, "submitting question");
        Some(Command::Submit { question, provider: self.provider.clone() })
    }

    /// Handle completion of a backend call (extracted for testing)
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::CatalogLoaded(Ok(catalog)) => {
                if let Some(current) = &catalog.current {
                    self.provider = current.clone();
                }
                self.catalog = catalog;
            }
            AppEvent::CatalogLoaded(Err(e)) => {
                warn!(error = %e, "failed to load provider catalog");
                self.set_status(
                    "✗ Provider list unavailable (Ctrl+L to retry)",
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
            AppEvent::QueryFinished { provider, outcome: Ok(result) } => {
                self.loading = false;
                let id = self.history.append(result.clone());
                let generation = self.animator.start(&result, self.reveal_tx.clone());
                self.reveal = Some(RevealState::new(generation, &result));
                self.result = Some(result);
                info!(%id, %provider, generation, "query result recorded");
            }
            AppEvent::QueryFinished { provider, outcome: Err(e) } => {
                self.loading = false;
                error!(error = %e, %provider, "query failed");
                self.notice = Some(format!("Request to the backend failed:\n{}", e));
            }
        }
        self.needs_redraw = true;
    }

    /// Apply one revealed character (extracted for testing)
    pub fn apply_reveal(&mut self, update: &RevealUpdate) {
        if let Some(state) = self.reveal.as_mut()
            && state.apply(update)
        {
            self.needs_redraw = true;
        }
    }

    fn insert_char(&mut self, c: char) {
        if self.question.chars().count() < MAX_QUESTION_CHARS {
            self.question.push(c);
            self.needs_redraw = true;
        }
    }

    fn cycle_provider(&mut self, delta: isize) {
        let providers = &self.catalog.available_models;
        if providers.is_empty() {
            return;
        }
        let len = providers.len() as isize;
        let next = match providers.iter().position(|p| p.id == self.provider) {
            Some(idx) => (idx as isize + delta).rem_euclid(len) as usize,
            None => 0,
        };
        self.provider = providers[next].id.clone();
        self.needs_redraw = true;
    }

    fn open_compare(&mut self) {
        if self.history.len() < 2 {
            self.set_status(
                "✗ Need at least two results to compare",
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            );
            return;
        }

        // Preselect the two most recent results
        let mut recent = self.history.iter().rev().map(|entry| entry.id.clone());
        let entry_b = recent.next();
        let entry_a = recent.next();
        self.compare = Some(CompareOverlay {
            selection: ComparisonSelection { entry_a, entry_b, ..Default::default() },
            ..Default::default()
        });
        self.needs_redraw = true;
    }

    fn copy_final(&mut self) {
        let Some(result) = self.result.as_ref() else {
            self.set_status("✗ No answer to copy", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        };
        match copy_to_clipboard(&result.final_answer) {
            Ok(()) => self.set_status(
                "✓ Final answer copied to clipboard",
                MessageType::Success,
                STATUS_SUCCESS_DURATION_MS,
            ),
            Err(e) => self.set_status(
                format!("✗ Clipboard error: {}", e),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            ),
        }
    }
}
