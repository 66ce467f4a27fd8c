//! Shared HTTP client for the Gemini API
//!
//! The API key is read from the environment on first use, never at
//! construction, so the application starts without one.

use super::error::{GeminiError, Result};
use super::protocol::{ApiErrorBody, GenerateContentRequest, GenerateContentResponse};
use crate::config::FileGeminiConfig;
use std::sync::OnceLock;
use tracing::debug;

/// Variable consulted when the configured one is unset
pub const FALLBACK_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Resolve the API key through `lookup`, trying `primary` first
pub fn resolve_api_key<F>(primary: &str, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    [primary, FALLBACK_API_KEY_ENV]
        .into_iter()
        .filter_map(|name| lookup(name))
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
}

pub struct GeminiClient {
    http: reqwest::Client,
    config: FileGeminiConfig,
    api_key: OnceLock<String>,
}

impl GeminiClient {
    pub fn new(config: FileGeminiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            config,
            api_key: OnceLock::new(),
        })
    }

    /// Client with a fixed key, bypassing the environment
    pub fn with_api_key(config: FileGeminiConfig, api_key: impl Into<String>) -> Result<Self> {
        let client = Self::new(config)?;
        let _ = client.api_key.set(api_key.into());
        Ok(client)
    }

    pub fn config(&self) -> &FileGeminiConfig {
        &self.config
    }

    /// The API key, read from the environment on first call
    pub fn api_key(&self) -> Result<&str> {
        if let Some(key) = self.api_key.get() {
            return Ok(key);
        }
        let key = resolve_api_key(&self.config.api_key_env, |name| std::env::var(name).ok())
            .ok_or_else(|| GeminiError::MissingCredential(self.config.api_key_env.clone()))?;
        Ok(self.api_key.get_or_init(|| key))
    }

    pub fn endpoint(&self, model: &str, method: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.config.base_url.trim_end_matches('/'),
            model,
            method
        )
    }

    /// Call `generateContent` and decode the response
    pub async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let api_key = self.api_key()?;
        let url = self.endpoint(model, "generateContent");
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .timeout(self.config.timeout())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: ApiErrorBody::message_from(&body),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        if let Some(error) = parsed.error {
            return Err(GeminiError::Api {
                status: error.code,
                message: error.message,
            });
        }
        Ok(parsed)
    }

    /// Call `streamGenerateContent` and return the open SSE response.
    ///
    /// Only the wait for response headers is bounded by the request
    /// timeout; the body is read under the idle timeout by the caller.
    pub async fn stream(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<reqwest::Response> {
        let api_key = self.api_key()?;
        let url = format!("{}?alt=sse", self.endpoint(model, "streamGenerateContent"));
        debug!("POST {}", url);

        let send = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(request)
            .send();
        let response = tokio::time::timeout(self.config.timeout(), send)
            .await
            .map_err(|_| GeminiError::Timeout)??;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: ApiErrorBody::message_from(&body),
            });
        }
        Ok(response)
    }
}
