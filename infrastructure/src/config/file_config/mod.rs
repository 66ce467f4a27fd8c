//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod gemini;
mod logging;
mod output;
mod vision;

pub use gemini::FileGeminiConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use vision::FileVisionConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problems found in a loaded configuration. Reported as warnings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{0} cannot be 0")]
    ZeroTimeout(&'static str),

    #[error("{0}: model name cannot be empty")]
    EmptyModelName(&'static str),

    #[error("gemini.base_url must be an http(s) URL, got '{0}'")]
    InvalidBaseUrl(String),

    #[error("gemini.api_key_env cannot be empty")]
    EmptyApiKeyEnv,

    #[error("logging.level: unknown level '{0}'")]
    UnknownLogLevel(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini endpoint, models and timeouts
    pub gemini: FileGeminiConfig,
    /// Console output settings
    pub output: FileOutputConfig,
    /// Where saved vision images go
    pub vision: FileVisionConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = self.gemini.validate();
        issues.extend(self.logging.validate());
        issues
    }

    /// Render the effective configuration as TOML (for `--show-config`)
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
