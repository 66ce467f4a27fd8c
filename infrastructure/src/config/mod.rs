//! Configuration file loading for nationsense
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `NATIONSENSE_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./nationsense.toml` or `./.nationsense.toml`
//! 4. Global: `$XDG_CONFIG_HOME/nationsense/config.toml` (or `~/.config/...`)
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGeminiConfig, FileLoggingConfig, FileOutputConfig,
    FileVisionConfig,
};
pub use loader::{ConfigLoader, ConfigSources};
