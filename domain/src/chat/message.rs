//! Chat message entity

use serde::{Deserialize, Serialize};

/// Identifier of a message, unique within its transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(u64);

impl MessageId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "msg-{}", self.0)
    }
}

/// Author of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

/// A message in a transcript (Entity)
///
/// The text of a model message grows while its stream is open and is
/// frozen once the stream ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    id: MessageId,
    role: ChatRole,
    text: String,
    #[serde(skip)]
    streaming: bool,
}

impl ChatMessage {
    pub(crate) fn new(id: MessageId, role: ChatRole, text: String, streaming: bool) -> Self {
        Self {
            id,
            role,
            text,
            streaming,
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn role(&self) -> ChatRole {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the message is still receiving stream increments
    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    pub(crate) fn push_str(&mut self, delta: &str) {
        self.text.push_str(delta);
    }

    pub(crate) fn finish(&mut self) {
        self.streaming = false;
    }
}
