//! TUI input modes and key mapping
//!
//! - Normal mode: view navigation and commands
//! - Search mode: editing the country box
//! - Chat mode: editing a message to the spirit

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use nationsense_domain::ViewMode;
use ratatui::style::Color;

/// Which text box (if any) receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
    Chat,
}

impl InputMode {
    /// Mode indicator for the status bar
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Search => "SEARCH",
            Self::Chat => "COMMUNE",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Normal => Color::Blue,
            Self::Search => Color::Green,
            Self::Chat => Color::Magenta,
        }
    }

    pub fn is_editing(&self) -> bool {
        !matches!(self, Self::Normal)
    }
}

/// User action derived from a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Focus the country box
    EditSearch,
    /// Focus the chat box
    EditChat,
    SelectView(ViewMode),
    NextView,
    PrevView,
    GenerateVision,
    ResetVision,
    SaveVision,
    /// Enter in Normal mode; meaning depends on the view
    Activate,
    ScrollUp,
    ScrollDown,
    ToggleHelp,
    /// Leave the current input or overlay
    Cancel,
    /// Submit the focused text box
    Submit,
    InsertChar(char),
    DeleteChar,
    ClearInput,
    NextSuggestion,
    PrevSuggestion,
    Quit,
    None,
}

/// Maps key events to actions based on the current mode
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(mode: InputMode, key: KeyEvent) -> KeyAction {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyAction::Quit;
        }
        match mode {
            InputMode::Normal => Self::handle_normal(key),
            InputMode::Search => Self::handle_search(key),
            InputMode::Chat => Self::handle_input(key),
        }
    }

    fn handle_normal(key: KeyEvent) -> KeyAction {
        match (key.code, key.modifiers) {
            (KeyCode::Char('/'), _) | (KeyCode::Char('i'), KeyModifiers::NONE) => {
                KeyAction::EditSearch
            }
            (KeyCode::Char('c'), KeyModifiers::NONE) => KeyAction::EditChat,

            // Views
            (KeyCode::Char(d @ '1'..='4'), _) => ViewMode::from_index(d as usize - '1' as usize)
                .map(KeyAction::SelectView)
                .unwrap_or(KeyAction::None),
            (KeyCode::Tab, _) => KeyAction::NextView,
            (KeyCode::BackTab, _) => KeyAction::PrevView,

            // Vision
            (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::GenerateVision,
            (KeyCode::Char('r'), KeyModifiers::NONE) => KeyAction::ResetVision,
            (KeyCode::Char('s'), KeyModifiers::NONE) => KeyAction::SaveVision,

            (KeyCode::Enter, _) => KeyAction::Activate,
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => KeyAction::ScrollUp,
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => KeyAction::ScrollDown,

            (KeyCode::Char('?'), _) => KeyAction::ToggleHelp,
            (KeyCode::Esc, _) => KeyAction::Cancel,
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_search(key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Tab | KeyCode::Down => KeyAction::NextSuggestion,
            KeyCode::BackTab | KeyCode::Up => KeyAction::PrevSuggestion,
            _ => Self::handle_input(key),
        }
    }

    fn handle_input(key: KeyEvent) -> KeyAction {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => KeyAction::Cancel,
            (KeyCode::Enter, _) => KeyAction::Submit,
            (KeyCode::Char('u'), m) if m.contains(KeyModifiers::CONTROL) => KeyAction::ClearInput,
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                KeyAction::InsertChar(c)
            }
            (KeyCode::Backspace, _) => KeyAction::DeleteChar,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_mode_default() {
        assert_eq!(InputMode::default(), InputMode::Normal);
        assert!(!InputMode::Normal.is_editing());
        assert!(InputMode::Chat.is_editing());
    }

    #[test]
    fn test_mode_indicator() {
        assert_eq!(InputMode::Normal.indicator(), "NORMAL");
        assert_eq!(InputMode::Search.indicator(), "SEARCH");
        assert_eq!(InputMode::Chat.indicator(), "COMMUNE");
    }

    #[test]
    fn test_normal_mode_views() {
        let n = InputMode::Normal;
        assert_eq!(
            KeyHandler::handle(n, key(KeyCode::Char('1'))),
            KeyAction::SelectView(ViewMode::Profile)
        );
        assert_eq!(
            KeyHandler::handle(n, key(KeyCode::Char('4'))),
            KeyAction::SelectView(ViewMode::Chat)
        );
        assert_eq!(KeyHandler::handle(n, key(KeyCode::Tab)), KeyAction::NextView);
        assert_eq!(
            KeyHandler::handle(n, KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            KeyAction::PrevView
        );
        assert_eq!(KeyHandler::handle(n, key(KeyCode::Char('5'))), KeyAction::None);
    }

    #[test]
    fn test_normal_mode_commands() {
        let n = InputMode::Normal;
        assert_eq!(KeyHandler::handle(n, key(KeyCode::Char('/'))), KeyAction::EditSearch);
        assert_eq!(KeyHandler::handle(n, key(KeyCode::Char('i'))), KeyAction::EditSearch);
        assert_eq!(KeyHandler::handle(n, key(KeyCode::Char('c'))), KeyAction::EditChat);
        assert_eq!(KeyHandler::handle(n, key(KeyCode::Char('g'))), KeyAction::GenerateVision);
        assert_eq!(KeyHandler::handle(n, key(KeyCode::Char('r'))), KeyAction::ResetVision);
        assert_eq!(KeyHandler::handle(n, key(KeyCode::Char('s'))), KeyAction::SaveVision);
        assert_eq!(KeyHandler::handle(n, key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(KeyHandler::handle(n, key(KeyCode::Char('?'))), KeyAction::ToggleHelp);
        assert_eq!(KeyHandler::handle(n, key(KeyCode::Enter)), KeyAction::Activate);
        assert_eq!(KeyHandler::handle(n, key(KeyCode::Char('j'))), KeyAction::ScrollDown);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        for mode in [InputMode::Normal, InputMode::Search, InputMode::Chat] {
            assert_eq!(KeyHandler::handle(mode, ctrl('c')), KeyAction::Quit);
        }
    }

    #[test]
    fn test_input_modes_take_letters() {
        assert_eq!(
            KeyHandler::handle(InputMode::Search, key(KeyCode::Char('q'))),
            KeyAction::InsertChar('q')
        );
        assert_eq!(
            KeyHandler::handle(
                InputMode::Chat,
                KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT)
            ),
            KeyAction::InsertChar('J')
        );
        assert_eq!(
            KeyHandler::handle(InputMode::Chat, key(KeyCode::Enter)),
            KeyAction::Submit
        );
        assert_eq!(
            KeyHandler::handle(InputMode::Chat, key(KeyCode::Esc)),
            KeyAction::Cancel
        );
        assert_eq!(
            KeyHandler::handle(InputMode::Search, ctrl('u')),
            KeyAction::ClearInput
        );
    }

    #[test]
    fn test_suggestion_cycling_only_in_search() {
        assert_eq!(
            KeyHandler::handle(InputMode::Search, key(KeyCode::Tab)),
            KeyAction::NextSuggestion
        );
        assert_eq!(
            KeyHandler::handle(InputMode::Search, key(KeyCode::Up)),
            KeyAction::PrevSuggestion
        );
        assert_eq!(
            KeyHandler::handle(InputMode::Chat, key(KeyCode::Tab)),
            KeyAction::None
        );
    }
}
