//! TUI application: main loop
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                    effect task (tokio::spawn)
//!   ├─ crossterm EventStream                 └─ EffectRunner::run
//!   ├─ event_rx (TuiEvent from tasks)  <───────── event_tx
//!   └─ tick_interval
//! ```
//!
//! The loop is the only owner of the `ViewController`. Every gateway call
//! runs in its own task and reports back through `event_tx`; outcomes
//! from superseded generations are dropped when applied.

use super::event::TuiEvent;
use super::mode::{InputMode, KeyAction, KeyHandler};
use super::render;
use super::state::TuiState;
use crossterm::{
    event::{Event, EventStream, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use nationsense_application::{
    ChatStatus, Effect, EffectRunner, ImageStore, ModelGateway, ViewController, ViewError,
};
use nationsense_domain::{QueryPhase, ViewMode};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

const FLASH_TTL: Duration = Duration::from_secs(4);

/// The interactive terminal UI
pub struct TuiApp<G: ModelGateway + 'static> {
    runner: EffectRunner<G>,
    controller: ViewController,
    image_store: Arc<dyn ImageStore>,
    event_tx: mpsc::UnboundedSender<TuiEvent>,
    event_rx: mpsc::UnboundedReceiver<TuiEvent>,
}

impl<G: ModelGateway + 'static> TuiApp<G> {
    pub fn new(runner: EffectRunner<G>, image_store: Arc<dyn ImageStore>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            runner,
            controller: ViewController::new(),
            image_store,
            event_tx,
            event_rx,
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Restore the terminal before the panic message is printed
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut state = TuiState::new();
        state.mode = InputMode::Search;
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(100));
        info!("TUI started");

        loop {
            terminal.draw(|frame| render::render(frame, &self.controller, &state))?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(&mut state, term_event);
                }

                Some(event) = self.event_rx.recv() => {
                    self.apply_event(&mut state, event);
                }

                _ = tick.tick() => {
                    state.tick_spinner();
                    state.expire_flash(FLASH_TTL);
                }
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        info!("TUI stopped");

        Ok(())
    }

    fn handle_terminal_event(&mut self, state: &mut TuiState, event: Event) {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            self.handle_key(state, key);
        }
    }

    pub(crate) fn handle_key(&mut self, state: &mut TuiState, key: KeyEvent) {
        let action = KeyHandler::handle(state.mode, key);
        if state.show_help && action != KeyAction::Quit {
            if matches!(action, KeyAction::ToggleHelp | KeyAction::Cancel) {
                state.show_help = false;
            }
            return;
        }
        self.handle_action(state, action);
    }

    fn handle_action(&mut self, state: &mut TuiState, action: KeyAction) {
        match action {
            KeyAction::Quit => state.should_quit = true,
            KeyAction::ToggleHelp => state.show_help = !state.show_help,
            KeyAction::EditSearch => state.mode = InputMode::Search,
            KeyAction::EditChat => self.focus_chat(state),
            KeyAction::Cancel => state.mode = InputMode::Normal,

            KeyAction::SelectView(view) => self.switch_view(state, view),
            KeyAction::NextView => self.switch_view(state, self.controller.view().next()),
            KeyAction::PrevView => self.switch_view(state, self.controller.view().prev()),

            KeyAction::GenerateVision => self.generate_vision(state),
            KeyAction::ResetVision => {
                if self.controller.view() == ViewMode::Vision {
                    self.controller.reset_vision();
                }
            }
            KeyAction::SaveVision => self.save_vision(state),
            KeyAction::Activate => self.activate(state),

            KeyAction::ScrollUp | KeyAction::ScrollDown => {
                // Chat is anchored at the bottom, documents at the top
                let in_chat = self.controller.view() == ViewMode::Chat;
                let away = (action == KeyAction::ScrollUp) == in_chat;
                if away {
                    state.scroll_away();
                } else {
                    state.scroll_back();
                }
            }

            KeyAction::Submit => match state.mode {
                InputMode::Search => self.submit_search(state),
                InputMode::Chat => self.submit_chat(state),
                InputMode::Normal => {}
            },
            KeyAction::InsertChar(c) => state.insert_char(c),
            KeyAction::DeleteChar => state.delete_char(),
            KeyAction::ClearInput => state.clear_input(),
            KeyAction::NextSuggestion => state.next_suggestion(),
            KeyAction::PrevSuggestion => state.prev_suggestion(),
            KeyAction::None => {}
        }
    }

    fn activate(&mut self, state: &mut TuiState) {
        match (self.controller.query().phase(), self.controller.view()) {
            (QueryPhase::Ready, ViewMode::Chat) => self.focus_chat(state),
            (QueryPhase::Ready, ViewMode::Vision) => self.generate_vision(state),
            (QueryPhase::Ready, _) | (QueryPhase::Loading, _) => {}
            (QueryPhase::Empty, _) | (QueryPhase::Error, _) => state.mode = InputMode::Search,
        }
    }

    fn submit_search(&mut self, state: &mut TuiState) {
        let effect = self.controller.submit_search(&state.search_input);
        if effect.is_some() {
            state.mode = InputMode::Normal;
            state.suggestion_index = None;
            state.chat_input.clear();
            state.reset_scroll();
        }
        self.dispatch(state, effect);
    }

    fn switch_view(&mut self, state: &mut TuiState, view: ViewMode) {
        match self.controller.switch_view(view) {
            Ok(effect) => {
                state.reset_scroll();
                self.dispatch(state, effect);
            }
            Err(ViewError::NotReady) => state.set_flash("Name a nation first"),
        }
    }

    fn focus_chat(&mut self, state: &mut TuiState) {
        if self.controller.query().is_ready() && self.controller.view() == ViewMode::Chat {
            state.mode = InputMode::Chat;
        }
    }

    fn submit_chat(&mut self, state: &mut TuiState) {
        match self.controller.send_chat(&state.chat_input) {
            Some(effect) => {
                state.chat_input.clear();
                state.reset_scroll();
                self.dispatch(state, Some(effect));
            }
            None => match self.controller.chat().status() {
                ChatStatus::Sending => state.set_flash("The spirit is still speaking"),
                ChatStatus::Opening => state.set_flash("The channel is still opening"),
                ChatStatus::Unavailable(reason) => state.set_flash(reason.clone()),
                ChatStatus::Closed | ChatStatus::Ready => {}
            },
        }
    }

    fn generate_vision(&mut self, state: &mut TuiState) {
        if self.controller.view() != ViewMode::Vision {
            return;
        }
        match self.controller.generate_vision() {
            Ok(effect) => self.dispatch(state, effect),
            Err(ViewError::NotReady) => state.set_flash("Name a nation first"),
        }
    }

    fn save_vision(&mut self, state: &mut TuiState) {
        if self.controller.view() != ViewMode::Vision {
            return;
        }
        match self.controller.save_vision(self.image_store.as_ref()) {
            Ok(path) => {
                info!("Vision saved to {}", path.display());
                state.set_flash(format!("Saved {}", path.display()));
            }
            Err(e) => {
                warn!("Vision not saved: {}", e);
                state.set_flash(e.to_string());
            }
        }
    }

    /// Run `effect` in its own task; outcomes come back through `event_tx`
    fn dispatch(&self, state: &mut TuiState, effect: Option<Effect>) {
        let Some(effect) = effect else {
            return;
        };
        let label = effect.label();
        debug!("Dispatching {} effect {}", label, effect.generation());
        state.in_flight += 1;

        let runner = self.runner.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            runner
                .run(effect, |outcome| {
                    let _ = tx.send(TuiEvent::Outcome(outcome));
                })
                .await;
            let _ = tx.send(TuiEvent::EffectFinished(label));
        });
    }

    pub(crate) fn apply_event(&mut self, state: &mut TuiState, event: TuiEvent) {
        match event {
            TuiEvent::Outcome(outcome) => {
                if !self.controller.apply(outcome) {
                    debug!("Dropped a stale outcome");
                }
            }
            TuiEvent::EffectFinished(label) => {
                debug!("{} effect finished", label);
                state.in_flight = state.in_flight.saturating_sub(1);
            }
        }
    }
}
