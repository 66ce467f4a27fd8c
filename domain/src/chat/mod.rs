//! Chat subdomain.
//!
//! - [`message::ChatMessage`]: one turn in a conversation
//! - [`transcript::Transcript`]: the ordered, append-only history

pub mod message;
pub mod transcript;
