//! Gemini settings from TOML (`[gemini]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw Gemini configuration from TOML
///
/// # Example
///
/// ```toml
/// [gemini]
/// text_model = "gemini-2.5-flash"        # profile + insight
/// image_model = "gemini-2.5-flash-image" # vision
/// chat_model = "gemini-2.5-flash"        # commune
/// api_key_env = "API_KEY"
/// timeout_seconds = 60
/// stream_idle_timeout_seconds = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// REST root, without a trailing `/models`
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
    pub chat_model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Whole-request timeout for non-streaming calls
    pub timeout_seconds: u64,
    /// Maximum silence between two chunks of a chat stream
    pub stream_idle_timeout_seconds: u64,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            text_model: "gemini-2.5-flash".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
            chat_model: "gemini-2.5-flash".to_string(),
            api_key_env: "API_KEY".to_string(),
            timeout_seconds: 60,
            stream_idle_timeout_seconds: 30,
        }
    }
}

impl FileGeminiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn stream_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.stream_idle_timeout_seconds)
    }

    pub(super) fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        for (field, model) in [
            ("gemini.text_model", &self.text_model),
            ("gemini.image_model", &self.image_model),
            ("gemini.chat_model", &self.chat_model),
        ] {
            if model.trim().is_empty() {
                issues.push(ConfigValidationError::EmptyModelName(field));
            }
        }

        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            issues.push(ConfigValidationError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.api_key_env.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyApiKeyEnv);
        }
        if self.timeout_seconds == 0 {
            issues.push(ConfigValidationError::ZeroTimeout("gemini.timeout_seconds"));
        }
        if self.stream_idle_timeout_seconds == 0 {
            issues.push(ConfigValidationError::ZeroTimeout(
                "gemini.stream_idle_timeout_seconds",
            ));
        }

        issues
    }
}
