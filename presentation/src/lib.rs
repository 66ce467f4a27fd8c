//! Presentation layer for nationsense
//!
//! This crate contains the CLI definition, the console formatter and
//! spinner used by one-shot mode, and the interactive terminal UI.

pub mod cli;
pub mod config;
pub mod oneshot;
pub mod output;
pub mod progress;
pub mod tui;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use cli::commands::{Cli, ViewArg};
pub use config::OutputConfig;
pub use oneshot::{OneShot, OneShotError};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use tui::TuiApp;
