//! TUI (Text User Interface) for nationsense
//!
//! A single-screen terminal UI built on ratatui: a search box, the four
//! view tabs, the active view and a status bar.

mod app;
mod event;
mod mode;
mod render;
mod state;
mod widgets;

pub use app::TuiApp;
pub use event::TuiEvent;
pub use mode::{InputMode, KeyAction, KeyHandler};
pub use state::TuiState;
