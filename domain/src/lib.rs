//! Domain layer for nationsense
//!
//! This crate contains the entities, value objects and pure state
//! transitions. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! - **Profile**: the structured record about a nation's animal
//! - **NationQuery**: the single search state, driven by [`QueryAction`]s
//! - **Transcript**: the ordered chat history with one animal spirit
//! - **Generation**: a monotonic tag used to discard stale async results

pub mod animal;
pub mod chat;
pub mod core;
pub mod nation;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use animal::{profile::AnimalProfile, vision_image::VisionImage};
pub use chat::{
    message::{ChatMessage, ChatRole, MessageId},
    transcript::Transcript,
};
pub use core::{
    country::Country,
    error::DomainError,
    generation::{Generation, GenerationCounter},
};
pub use nation::{
    query::{NationQuery, QueryAction, QueryPhase},
    suggestions::INITIAL_SUGGESTIONS,
    view_mode::ViewMode,
};
pub use prompt::{PromptTemplate, messages};
pub use session::stream::StreamEvent;
