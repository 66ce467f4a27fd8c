//! Model Gateway port
//!
//! Defines the interface for communicating with the generative model
//! provider: profile lookup, insight text, image generation and
//! streamed chat sessions.

use async_trait::async_trait;
use nationsense_domain::{AnimalProfile, DomainError, StreamEvent, messages};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Missing API credential: set the {0} environment variable")]
    MissingCredential(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("No image data received")]
    NoImage,

    #[error("Timeout")]
    Timeout,

    #[error("Transport closed")]
    TransportClosed,
}

impl GatewayError {
    /// Check if this error is a configuration problem rather than a remote failure
    pub fn is_configuration(&self) -> bool {
        matches!(self, GatewayError::MissingCredential(_))
    }

    /// Fixed text to show for this error, `fallback` unless the
    /// credential is missing
    pub fn user_message(&self, fallback: &'static str) -> &'static str {
        if self.is_configuration() {
            messages::ARCHIVES_SEALED
        } else {
            fallback
        }
    }
}

impl From<DomainError> for GatewayError {
    fn from(e: DomainError) -> Self {
        GatewayError::InvalidResponse(e.to_string())
    }
}

/// Handle for receiving streaming events from a chat session.
///
/// Wraps an `mpsc::Receiver<StreamEvent>`. The sequence is finite and
/// cannot be restarted; consuming it drains the receiver.
pub struct StreamHandle {
    pub receiver: mpsc::Receiver<StreamEvent>,
}

impl StreamHandle {
    pub fn new(receiver: mpsc::Receiver<StreamEvent>) -> Self {
        Self { receiver }
    }

    /// Build a handle that yields a fixed sequence of events
    pub fn from_events(events: Vec<StreamEvent>) -> Self {
        let (tx, rx) = mpsc::channel(events.len().max(1));
        for event in events {
            // Capacity covers every event
            let _ = tx.try_send(event);
        }
        Self::new(rx)
    }

    /// Receive the next event, or None once the producer is gone
    pub async fn next(&mut self) -> Option<StreamEvent> {
        self.receiver.recv().await
    }
}

/// A stateful conversation with one animal persona
#[async_trait]
pub trait ChatSession: Send + Sync {
    /// Send a user turn and stream the model's reply
    async fn send_streaming(&self, text: &str) -> Result<StreamHandle, GatewayError>;
}

/// Gateway to the generative model provider
///
/// This port defines how the application layer talks to the model.
/// Implementations (adapters) live in the infrastructure layer.
/// No operation caches results across calls.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Look up the national animal of `country` as a structured profile
    async fn fetch_profile(&self, country: &str) -> Result<AnimalProfile, GatewayError>;

    /// Generate the free-text cultural narrative for an animal
    async fn fetch_insight(&self, country: &str, animal_name: &str)
    -> Result<String, GatewayError>;

    /// Generate an image of the animal, returned as a data URI
    async fn generate_vision(
        &self,
        country: &str,
        animal_name: &str,
    ) -> Result<String, GatewayError>;

    /// Open a chat session seeded with the animal's persona
    async fn open_chat(
        &self,
        country: &str,
        animal_name: &str,
    ) -> Result<Arc<dyn ChatSession>, GatewayError>;
}
