//! TUI application state
//!
//! Everything the terminal UI owns that is not view state: text boxes,
//! scroll offset, overlays and the flash line. View state lives in the
//! `ViewController`.

use super::mode::InputMode;
use nationsense_domain::INITIAL_SUGGESTIONS;
use std::time::{Duration, Instant};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// UI-only state, owned by the TuiApp select! loop
#[derive(Debug, Default)]
pub struct TuiState {
    pub mode: InputMode,

    pub search_input: String,
    pub chat_input: String,
    /// Suggestion highlighted while cycling in Search mode
    pub suggestion_index: Option<usize>,

    /// Lines the body is scrolled away from its anchor: the top for
    /// documents, the newest message for chat
    pub scroll: u16,

    pub show_help: bool,
    pub flash_message: Option<(String, Instant)>,

    spinner_frame: usize,
    /// Effects spawned and not yet finished
    pub in_flight: usize,

    pub should_quit: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Input editing --

    fn active_input_mut(&mut self) -> Option<&mut String> {
        match self.mode {
            InputMode::Normal => None,
            InputMode::Search => Some(&mut self.search_input),
            InputMode::Chat => Some(&mut self.chat_input),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if self.mode == InputMode::Search {
            self.suggestion_index = None;
        }
        if let Some(input) = self.active_input_mut() {
            input.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(input) = self.active_input_mut() {
            input.pop();
        }
    }

    pub fn clear_input(&mut self) {
        if let Some(input) = self.active_input_mut() {
            input.clear();
        }
    }

    /// Fill the search box with the next suggestion
    pub fn next_suggestion(&mut self) {
        let next = match self.suggestion_index {
            Some(i) => (i + 1) % INITIAL_SUGGESTIONS.len(),
            None => 0,
        };
        self.select_suggestion(next);
    }

    pub fn prev_suggestion(&mut self) {
        let len = INITIAL_SUGGESTIONS.len();
        let prev = match self.suggestion_index {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        };
        self.select_suggestion(prev);
    }

    fn select_suggestion(&mut self, index: usize) {
        self.suggestion_index = Some(index);
        self.search_input = INITIAL_SUGGESTIONS[index].to_string();
    }

    // -- Scrolling --

    pub fn scroll_away(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_back(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
    }

    // -- Flash / spinner --

    pub fn set_flash(&mut self, message: impl Into<String>) {
        self.flash_message = Some((message.into(), Instant::now()));
    }

    pub fn expire_flash(&mut self, ttl: Duration) {
        if let Some((_, at)) = &self.flash_message
            && at.elapsed() >= ttl
        {
            self.flash_message = None;
        }
    }

    pub fn tick_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_goes_to_focused_box() {
        let mut state = TuiState::new();
        state.insert_char('x');
        assert!(state.search_input.is_empty());

        state.mode = InputMode::Search;
        for c in "Peru".chars() {
            state.insert_char(c);
        }
        state.delete_char();
        assert_eq!(state.search_input, "Per");

        state.mode = InputMode::Chat;
        state.insert_char('h');
        assert_eq!(state.chat_input, "h");
        assert_eq!(state.search_input, "Per");

        state.clear_input();
        assert!(state.chat_input.is_empty());
    }

    #[test]
    fn test_suggestions_wrap_both_ways() {
        let mut state = TuiState::new();
        state.prev_suggestion();
        assert_eq!(state.suggestion_index, Some(INITIAL_SUGGESTIONS.len() - 1));
        state.next_suggestion();
        assert_eq!(state.suggestion_index, Some(0));
        assert_eq!(state.search_input, INITIAL_SUGGESTIONS[0]);
    }

    #[test]
    fn test_typing_clears_suggestion_highlight() {
        let mut state = TuiState::new();
        state.mode = InputMode::Search;
        state.next_suggestion();
        state.insert_char('!');
        assert_eq!(state.suggestion_index, None);
    }

    #[test]
    fn test_scroll_saturates() {
        let mut state = TuiState::new();
        state.scroll_back();
        assert_eq!(state.scroll, 0);
        state.scroll_away();
        state.scroll_away();
        state.scroll_back();
        assert_eq!(state.scroll, 1);
        state.reset_scroll();
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_flash_expiry() {
        let mut state = TuiState::new();
        state.set_flash("Saved");
        state.expire_flash(Duration::from_secs(60));
        assert!(state.flash_message.is_some());
        state.expire_flash(Duration::ZERO);
        assert!(state.flash_message.is_none());
    }

    #[test]
    fn test_spinner_cycles() {
        let mut state = TuiState::new();
        let first = state.spinner();
        for _ in 0..SPINNER_FRAMES.len() {
            state.tick_spinner();
        }
        assert_eq!(state.spinner(), first);
    }
}
