//! Error types for the Gemini adapter

use nationsense_application::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when talking to the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Missing API credential: set the {0} environment variable")]
    MissingCredential(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Stream error: {0}")]
    Stream(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("No image data received")]
    NoImage,
}

impl From<GeminiError> for GatewayError {
    fn from(e: GeminiError) -> Self {
        match e {
            GeminiError::MissingCredential(var) => GatewayError::MissingCredential(var),
            GeminiError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            GeminiError::Http(e) if e.is_connect() => GatewayError::ConnectionError(e.to_string()),
            GeminiError::Http(e) => GatewayError::RequestFailed(e.to_string()),
            e @ GeminiError::Api { .. } => GatewayError::RequestFailed(e.to_string()),
            GeminiError::SerializationError(e) => GatewayError::InvalidResponse(e.to_string()),
            GeminiError::Stream(message) => GatewayError::RequestFailed(message),
            GeminiError::Timeout => GatewayError::Timeout,
            GeminiError::EmptyResponse => GatewayError::EmptyResponse,
            GeminiError::NoImage => GatewayError::NoImage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_stays_a_configuration_error() {
        let gateway: GatewayError = GeminiError::MissingCredential("API_KEY".into()).into();
        assert!(gateway.is_configuration());
    }

    #[test]
    fn test_api_error_keeps_status_in_message() {
        let gateway: GatewayError = GeminiError::Api {
            status: 403,
            message: "API key not valid".into(),
        }
        .into();
        assert!(matches!(gateway, GatewayError::RequestFailed(m) if m.contains("403")));
    }
}
