//! Application layer for nationsense
//!
//! This crate contains use cases, view state owners and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    image_store::{ImageStore, ImageStoreError},
    model_gateway::{ChatSession, GatewayError, ModelGateway, StreamHandle},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::chat::{
    ChatOpenTicket, ChatOrchestrator, ChatSendTicket, ChatStatus, ChatStreamUpdate,
};
pub use use_cases::effects::{Effect, EffectRunner, Outcome};
pub use use_cases::insight::{
    FetchInsightUseCase, InsightOutcome, InsightPanel, InsightState, InsightTicket,
};
pub use use_cases::search::SearchUseCase;
pub use use_cases::session_store::{SearchTicket, SessionStore};
pub use use_cases::view_controller::{ViewController, ViewError};
pub use use_cases::vision::{VisionPanel, VisionStatus, VisionTicket};
