//! Infrastructure layer for nationsense
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, configuration file loading and local
//! file storage for generated images.

pub mod config;
pub mod gemini;
pub mod vision;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigSources, ConfigValidationError, FileConfig, FileGeminiConfig,
    FileLoggingConfig, FileOutputConfig, FileVisionConfig,
};
pub use gemini::{
    client::GeminiClient,
    error::{GeminiError, Result},
    gateway::GeminiGateway,
    session::GeminiChatSession,
};
pub use vision::{VisionFileStore, VisionSaveError};
