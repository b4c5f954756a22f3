//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the
//! dashboard lifecycle: event handling, state updates, side effects
//! (persistence and remote calls), and rendering.

use clawdeck_config::Config;
use clawdeck_gateway::GatewayClient;
use clawdeck_protocol::{Effect, Message};
use clawdeck_store::BoardStore;
use crossterm::event::Event;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};
use tokio::sync::mpsc;
use tracing::debug;

use crate::{
    AppState, Focus,
    event::{InputMode, key_to_message, poll_event},
    remote::{CardEvent, Remote},
    terminal::AppTerminal,
    widgets::{BoardView, PROMPT_CARD_HEIGHT, render_board, render_prompt_card, render_status_bar},
};

/// The main application struct.
///
/// Owns the state, the persisted store, and the remote dispatcher, and
/// provides the main event loop. `update` handles a message and runs
/// the effects it produces; completions from remote calls arrive on the
/// event channel and are folded back into the state between frames.
#[derive(Debug)]
pub struct App {
    state: AppState,
    config: Config,
    store: BoardStore,
    remote: Remote,
    events: mpsc::UnboundedReceiver<CardEvent>,
    should_quit: bool,
}

impl App {
    /// Creates the application from its configuration.
    ///
    /// Loads the persisted board from the store and connects the remote
    /// dispatcher to the given gateway client.
    #[must_use]
    pub fn new(config: Config, store: BoardStore, client: GatewayClient) -> Self {
        let board = store.load();
        let (remote, events) = Remote::new(client);
        Self {
            state: AppState::new(board),
            config,
            store,
            remote,
            events,
            should_quit: false,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns how printable keys should currently be interpreted.
    ///
    /// Text mode applies while a column draft is being edited or while
    /// the prompt card holds focus; everywhere else keys act as board
    /// commands.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.state.editing.is_some() || self.state.focus == Focus::Prompt {
            InputMode::Text
        } else {
            InputMode::Command
        }
    }

    /// Updates the application state based on a message.
    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::Quit => {
                self.should_quit = true;
            }
            Message::FocusNext => {
                self.state.focus_next();
            }
            Message::Cancel => self.cancel(),
            Message::Input(c) => self.input_char(c),
            Message::Backspace => self.backspace(),
            Message::Submit => self.submit(),
            Message::NewTask => {
                if self.state.focus == Focus::Board {
                    self.state.editing = Some(self.state.column());
                }
            }
            Message::Grab => {
                if self.state.focus == Focus::Board
                    && let Some(id) = self.state.selected_task_id()
                {
                    self.state.grabbed = Some(id.to_string());
                }
            }
            Message::Delete => self.delete_selected(),
            Message::Refresh => {
                self.remote.refresh_status();
                self.state.board_status = Some("Refreshing status…".to_string());
            }
            Message::HealthCheck => {
                self.remote.health_check();
                self.state.board_status = Some("Checking gateway…".to_string());
            }
            Message::QuickAction(idx) => {
                if let Some(action) = self.config.prompt.quick_actions.get(idx) {
                    self.submit_text(action.clone());
                }
            }
            Message::OpenBoard => self.open_board(),
            Message::NavigateLeft => {
                if self.board_navigable() {
                    self.state.navigate_left();
                }
            }
            Message::NavigateRight => {
                if self.board_navigable() {
                    self.state.navigate_right();
                }
            }
            Message::NavigateUp => {
                if self.board_navigable() {
                    self.state.navigate_up();
                }
            }
            Message::NavigateDown => {
                if self.board_navigable() {
                    self.state.navigate_down();
                }
            }
        }
    }

    fn board_navigable(&self) -> bool {
        self.state.focus == Focus::Board && self.state.editing.is_none()
    }

    /// Contextual escape: stop editing, release a grab, or clear the
    /// prompt's outcome line. The draft text is kept so editing can
    /// resume.
    fn cancel(&mut self) {
        if self.state.editing.take().is_some() {
            return;
        }
        if self.state.grabbed.take().is_some() {
            return;
        }
        if self.state.focus == Focus::Prompt {
            self.state.prompt.status_line = None;
        }
    }

    fn input_char(&mut self, c: char) {
        if let Some(column) = self.state.editing {
            self.state.draft_mut(column).push(c);
        } else if self.state.focus == Focus::Prompt && !self.state.prompt.pending {
            self.state.prompt.input.push(c);
        }
    }

    fn backspace(&mut self) {
        if let Some(column) = self.state.editing {
            self.state.draft_mut(column).pop();
        } else if self.state.focus == Focus::Prompt && !self.state.prompt.pending {
            self.state.prompt.input.pop();
        }
    }

    /// Contextual submit: commit a draft, drop a grabbed task, or send
    /// the prompt input.
    fn submit(&mut self) {
        if let Some(column) = self.state.editing.take() {
            let draft = std::mem::take(self.state.draft_mut(column));
            let effects = self.state.board.add_task(column, &draft);
            self.perform_effects(effects);
            self.state.clamp_task_selection();
            return;
        }

        if let Some(payload) = self.state.grabbed.take() {
            let target = self.state.column();
            let effects = self.state.board.resolve_drop(&payload, target);
            self.perform_effects(effects);
            self.state.clamp_task_selection();
            return;
        }

        if self.state.focus == Focus::Prompt {
            let text = self.state.prompt.input.trim().to_string();
            self.submit_text(text);
        }
    }

    /// Starts a prompt send unless one is already pending or the text
    /// is empty. Pending sends disable the input, so a second
    /// submission cannot start until the first completes.
    fn submit_text(&mut self, text: String) {
        if self.state.prompt.pending || text.is_empty() {
            return;
        }
        self.state.prompt.pending = true;
        self.remote.send_message(text);
    }

    fn delete_selected(&mut self) {
        if self.state.focus != Focus::Board {
            return;
        }
        if let Some(id) = self.state.selected_task_id() {
            let effects = self.state.board.delete_task(id);
            self.perform_effects(effects);
            self.state.clamp_task_selection();
        }
    }

    fn open_board(&mut self) {
        let url = &self.config.prompt.board_url;
        if url.is_empty() {
            return;
        }
        if let Err(err) = open::that(url) {
            self.state.board_status = Some(format!("Error: {err}"));
        }
    }

    /// Runs the effects returned by a board operation.
    ///
    /// Persistence failures surface on the board status line but leave
    /// the in-memory collection as the source of truth. Notifications
    /// are mirrored to the gateway only when remote sync is enabled.
    fn perform_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Persist => {
                    if let Err(err) = self.store.save(&self.state.board) {
                        self.state.board_status = Some(format!("Error: {err}"));
                    }
                }
                Effect::Notify(note) => {
                    self.state.board_status = Some(note.clone());
                    if self.config.board.remote_sync {
                        self.remote.notify(note);
                    }
                }
                // Every frame redraws from state
                Effect::Render => {}
            }
        }
    }

    /// Folds a remote completion back into the state.
    fn handle_card_event(&mut self, event: CardEvent) {
        debug!(?event, "remote completion");
        match event {
            CardEvent::SendFinished(Ok(text)) => {
                self.state.prompt.pending = false;
                self.state.prompt.input.clear();
                self.state.prompt.status_line = Some(format!("Sent: {text}"));
            }
            CardEvent::SendFinished(Err(err)) => {
                // Input is kept so the message can be retried
                self.state.prompt.pending = false;
                self.state.prompt.status_line = Some(format!("Error: {err}"));
            }
            CardEvent::NotifyFailed(err) => {
                self.state.board_status = Some(format!("Error: {err}"));
            }
            CardEvent::StatusRefreshed(Ok(snapshot)) => {
                self.state.snapshot = snapshot;
                self.state.board_status = Some("Status refreshed".to_string());
            }
            CardEvent::StatusRefreshed(Err(err)) => {
                self.state.snapshot.online = false;
                self.state.board_status = Some(format!("Error: {err}"));
            }
            CardEvent::HealthChecked(Ok(())) => {
                self.state.board_status = Some("Gateway healthy".to_string());
            }
            CardEvent::HealthChecked(Err(err)) => {
                self.state.board_status = Some(format!("Error: {err}"));
            }
        }
    }

    /// Drains all completions that arrived since the last frame.
    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_card_event(event);
        }
    }

    /// Renders the application UI to the given frame.
    pub fn view(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(PROMPT_CARD_HEIGHT), // Prompt card
                Constraint::Min(0),                     // Board card
                Constraint::Length(3),                  // Status bar
            ])
            .split(area);

        let buf = frame.buffer_mut();

        render_prompt_card(
            &self.state.prompt,
            &self.state.snapshot,
            &self.config.prompt,
            self.state.focus == Focus::Prompt,
            chunks[0],
            buf,
        );

        let board_view = BoardView {
            board: &self.state.board,
            selected_column: self.state.selected_column,
            selected_task: self.state.selected_task,
            is_focused: self.state.focus == Focus::Board,
            drafts: &self.state.drafts,
            editing: self.state.editing,
            grab_active: self.state.grabbed.is_some(),
        };
        render_board(&board_view, chunks[1], buf);

        render_status_bar(
            self.state.focus,
            self.state.board_status.as_deref(),
            chunks[2],
            buf,
        );
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits. Each iteration draws
    /// a frame, folds in any remote completions, and handles at most
    /// one key event.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use clawdeck_config::Config;
    /// use clawdeck_gateway::GatewayClient;
    /// use clawdeck_store::BoardStore;
    /// use clawdeck_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let config = Config::load()?;
    ///     let client = GatewayClient::new(
    ///         &config.gateway.base_url,
    ///         &config.gateway.api_token,
    ///         &config.gateway.agent_id,
    ///     );
    ///     let store = BoardStore::for_key(&config.board.storage_key)?;
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(config, store, client);
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            // Render
            terminal.draw(|frame| self.view(frame))?;

            // Fold in remote completions
            self.drain_events();

            // Poll for events
            if let Some(Event::Key(key)) = poll_event()?
                && let Some(msg) = key_to_message(key, self.input_mode())
            {
                self.update(msg);
            }

            // Check for quit
            if self.should_quit {
                break;
            }
        }

        self.remote.shutdown();
        Ok(())
    }
}
