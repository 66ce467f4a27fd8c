//! Prompts sent to the model and fixed texts shown to the user.
//!
//! - [`template::PromptTemplate`]: prompt text for each gateway operation
//! - [`messages`]: user-facing fallback and error texts

pub mod messages;
pub mod template;

pub use template::PromptTemplate;
