//! Logging settings from TOML (`[logging]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Raw logging configuration
///
/// The file is only written in TUI mode; one-shot mode logs to stderr.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Log file path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Default level when `-v` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl FileLoggingConfig {
    /// Configured file, else `<data_dir>/nationsense/nationsense.log`
    pub fn resolved_file(&self) -> Option<PathBuf> {
        self.file.clone().or_else(|| {
            dirs::data_dir().map(|d| d.join("nationsense").join("nationsense.log"))
        })
    }

    pub(super) fn validate(&self) -> Vec<ConfigValidationError> {
        match &self.level {
            Some(level) if !LEVELS.contains(&level.to_lowercase().as_str()) => {
                vec![ConfigValidationError::UnknownLogLevel(level.clone())]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_is_case_insensitive() {
        let config = FileLoggingConfig {
            file: None,
            level: Some("DEBUG".to_string()),
        };
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_explicit_file_wins() {
        let config = FileLoggingConfig {
            file: Some(PathBuf::from("/var/log/ns.log")),
            level: None,
        };
        assert_eq!(config.resolved_file(), Some(PathBuf::from("/var/log/ns.log")));
    }
}
