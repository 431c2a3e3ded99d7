//! Application state and core logic for dq-rules.
//!
//! This module contains the `App` struct which holds all state for the
//! interactive terminal UI: the four-field selection, the two-screen view
//! state machine, and the single in-flight rule fetch.

use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::clipboard::SnippetClipboard;
use crate::composer;
use crate::editor::PromptEditor;
use crate::error::{GenerationError, ValidationError};
use crate::generation::{GenerationRequest, RuleGenerator};
use crate::models::{ConfigFocus, FetchStatus, Field, OptionSets, ReviewFocus, Rule, Selection};

/// State of one visit to the reviewing screen
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSession {
    /// Tags fetch results so late replies for an abandoned session are dropped
    pub id: u64,
    pub editor: PromptEditor,
    pub fetch: FetchStatus,
    pub rules: Vec<Rule>,
    pub focus: ReviewFocus,
    pub selected_rule: usize,
}

impl ReviewSession {
    fn new(id: u64, prompt: String) -> Self {
        Self {
            id,
            editor: PromptEditor::new(prompt),
            fetch: FetchStatus::Idle,
            rules: Vec::new(),
            focus: ReviewFocus::default(),
            selected_rule: 0,
        }
    }

    pub fn selected(&self) -> Option<&Rule> {
        self.rules.get(self.selected_rule)
    }
}

/// Which screen is active
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Configuring,
    Reviewing(ReviewSession),
}

/// Result of one generation call, tagged with its session
#[derive(Debug)]
pub struct FetchOutcome {
    pub session: u64,
    pub result: Result<Vec<Rule>, GenerationError>,
}

/// Deferred reviewing-screen actions that need all of `self`
enum ReviewAction {
    Back,
    Fetch,
    CopySnippet,
}

/// Application state
pub struct App {
    pub options: OptionSets,
    pub selection: Selection,
    /// Chosen option index per field (`Field::index` order), `None` = unselected
    pub choices: [Option<usize>; 4],
    pub config_focus: ConfigFocus,
    pub validation_error: Option<String>,
    pub view: ViewState,
    /// One-line feedback in the status bar (e.g. clipboard result)
    pub status_message: Option<String>,
    pub animation_tick: u64,
    pub should_quit: bool,
    next_session: u64,
    generator: Arc<dyn RuleGenerator>,
    outcome_tx: UnboundedSender<FetchOutcome>,
    clipboard: SnippetClipboard,
}

impl App {
    /// Create the app and the receiver on which fetch outcomes arrive
    pub fn new(
        options: OptionSets,
        generator: Arc<dyn RuleGenerator>,
    ) -> (Self, UnboundedReceiver<FetchOutcome>) {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let app = Self {
            options,
            selection: Selection::default(),
            choices: [None; 4],
            config_focus: ConfigFocus::default(),
            validation_error: None,
            view: ViewState::Configuring,
            status_message: None,
            animation_tick: 0,
            should_quit: false,
            next_session: 1,
            generator,
            outcome_tx,
            clipboard: SnippetClipboard::default(),
        };
        (app, outcome_rx)
    }

    pub fn review(&self) -> Option<&ReviewSession> {
        match &self.view {
            ViewState::Reviewing(session) => Some(session),
            ViewState::Configuring => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.review().is_some_and(|s| s.fetch.is_loading())
    }

    pub fn tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
    }

    /// Step a dropdown through its options, passing through "unselected".
    /// A field with no options stays unselected.
    pub fn cycle_choice(&mut self, field: Field, forward: bool) {
        let len = self.options.list(field).len();
        let slot = &mut self.choices[field.index()];
        *slot = match (len, *slot, forward) {
            (0, _, _) => None,
            (_, None, true) => Some(0),
            (n, None, false) => Some(n - 1),
            (n, Some(i), true) if i + 1 < n => Some(i + 1),
            (_, Some(0), false) => None,
            (_, Some(i), false) => Some(i - 1),
            (_, Some(_), true) => None,
        };

        let value = slot
            .and_then(|i| self.options.list(field).get(i))
            .cloned()
            .unwrap_or_default();
        self.selection.set(field, value);
    }

    /// Configuring -> Reviewing. On validation failure the view is unchanged.
    pub fn compose_prompt(&mut self) -> Result<(), ValidationError> {
        if !matches!(self.view, ViewState::Configuring) {
            return Ok(());
        }

        match composer::compose(&self.selection) {
            Ok(prompt) => {
                let id = self.next_session;
                self.next_session += 1;
                info!(session = id, operation = %self.selection.operation, "prompt composed");
                self.validation_error = None;
                self.status_message = None;
                self.view = ViewState::Reviewing(ReviewSession::new(id, prompt));
                Ok(())
            }
            Err(err) => {
                debug!(missing = %err.missing_labels(), "prompt composition rejected");
                self.validation_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Reviewing -> Configuring. Selections are kept; the session is dropped.
    pub fn go_back(&mut self) {
        if let ViewState::Reviewing(session) = &self.view {
            if session.fetch.is_loading() {
                debug!(session = session.id, "leaving review with a fetch in flight");
            }
            self.view = ViewState::Configuring;
            self.validation_error = None;
            self.status_message = None;
        }
    }

    /// Start a fetch for the current prompt. Returns false when nothing was
    /// started (not reviewing, already loading, or the prompt is blank).
    pub fn request_fetch(&mut self) -> bool {
        let ViewState::Reviewing(session) = &mut self.view else {
            return false;
        };
        if session.fetch.is_loading() {
            return false;
        }

        session.rules.clear();
        session.selected_rule = 0;

        let request = match GenerationRequest::for_prompt(session.editor.text()) {
            Ok(request) => request,
            Err(err) => {
                warn!(session = session.id, error = %err, "fetch refused");
                session.fetch = FetchStatus::Failed(err.user_message().to_string());
                return false;
            }
        };

        session.fetch = FetchStatus::Loading {
            started: Instant::now(),
        };
        let id = session.id;
        let generator = Arc::clone(&self.generator);
        let tx = self.outcome_tx.clone();
        info!(session = id, generator = generator.name(), "fetching rules");

        tokio::spawn(async move {
            let result = generator.generate(&request).await;
            // Receiver gone means the app is shutting down
            let _ = tx.send(FetchOutcome {
                session: id,
                result,
            });
        });
        true
    }

    /// Apply a finished fetch to the matching session, if it still exists
    pub fn apply_fetch_outcome(&mut self, outcome: FetchOutcome) {
        let ViewState::Reviewing(session) = &mut self.view else {
            debug!(session = outcome.session, "dropping fetch result outside review");
            return;
        };
        if session.id != outcome.session {
            debug!(session = outcome.session, current = session.id, "dropping stale fetch result");
            return;
        }

        match outcome.result {
            Ok(rules) => {
                info!(session = session.id, count = rules.len(), "rules received");
                session.rules = rules;
                session.selected_rule = 0;
                session.fetch = FetchStatus::Idle;
            }
            Err(err) => {
                warn!(session = session.id, error = %err, "rule generation failed");
                session.rules.clear();
                session.fetch = FetchStatus::Failed(err.user_message().to_string());
            }
        }
    }

    /// Copy the selected rule's snippet; failures only produce a status line
    pub fn copy_selected_snippet(&mut self) {
        let Some(snippet) = self
            .review()
            .and_then(|s| s.selected())
            .and_then(|r| r.snippet())
            .map(str::to_owned)
        else {
            self.status_message = Some("Selected rule has no code snippet".to_string());
            return;
        };

        self.status_message = Some(match self.clipboard.copy(&snippet) {
            Ok(()) => "Snippet copied to clipboard".to_string(),
            Err(err) => {
                warn!(error = %err, "clipboard copy failed");
                "Clipboard unavailable".to_string()
            }
        });
    }

    /// Route a key press to the active screen
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.view {
            ViewState::Configuring => self.handle_configuring_key(key),
            ViewState::Reviewing(_) => self.handle_reviewing_key(key),
        }
    }

    fn handle_configuring_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Down | KeyCode::Tab => self.config_focus = self.config_focus.next(),
            KeyCode::Up | KeyCode::BackTab => self.config_focus = self.config_focus.prev(),
            KeyCode::Left => {
                if let ConfigFocus::Field(field) = self.config_focus {
                    self.cycle_choice(field, false);
                }
            }
            KeyCode::Right | KeyCode::Char(' ') => {
                if let ConfigFocus::Field(field) = self.config_focus {
                    self.cycle_choice(field, true);
                }
            }
            KeyCode::Enter => match self.config_focus {
                // Error is already stored for display
                ConfigFocus::GenerateButton => {
                    let _ = self.compose_prompt();
                }
                ConfigFocus::Field(_) => self.config_focus = self.config_focus.next(),
            },
            _ => {}
        }
    }

    fn handle_reviewing_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let action = {
            let ViewState::Reviewing(session) = &mut self.view else {
                return;
            };
            match (key.code, session.focus) {
                (KeyCode::Esc, _) => Some(ReviewAction::Back),
                (KeyCode::F(5), _) => Some(ReviewAction::Fetch),
                (KeyCode::Char('g'), _) if ctrl => Some(ReviewAction::Fetch),
                (KeyCode::Tab | KeyCode::BackTab, _) => {
                    session.focus = session.focus.toggle();
                    None
                }
                (code, ReviewFocus::Prompt) => {
                    edit_prompt(&mut session.editor, code, ctrl);
                    None
                }
                (KeyCode::Up, ReviewFocus::Rules) => {
                    session.selected_rule = session.selected_rule.saturating_sub(1);
                    None
                }
                (KeyCode::Down, ReviewFocus::Rules) => {
                    if session.selected_rule + 1 < session.rules.len() {
                        session.selected_rule += 1;
                    }
                    None
                }
                (KeyCode::Char('c'), ReviewFocus::Rules) => Some(ReviewAction::CopySnippet),
                _ => None,
            }
        };

        match action {
            Some(ReviewAction::Back) => self.go_back(),
            Some(ReviewAction::Fetch) => {
                self.request_fetch();
            }
            Some(ReviewAction::CopySnippet) => self.copy_selected_snippet(),
            None => {}
        }
    }
}

fn edit_prompt(editor: &mut PromptEditor, code: KeyCode, ctrl: bool) {
    match code {
        KeyCode::Char(c) if !ctrl => editor.insert_char(c),
        KeyCode::Enter => editor.insert_newline(),
        KeyCode::Backspace => editor.backspace(),
        KeyCode::Delete => editor.delete(),
        KeyCode::Left => editor.move_left(),
        KeyCode::Right => editor.move_right(),
        KeyCode::Up => editor.move_up(),
        KeyCode::Down => editor.move_down(),
        KeyCode::Home => editor.move_home(),
        KeyCode::End => editor.move_end(),
        _ => {}
    }
}
