//! Conversation transcript

use super::message::{ChatMessage, ChatRole, MessageId};

/// Ordered chat history for one conversational session
///
/// Append-only. The only in-place mutation is text growth of the most
/// recent model message while it is streaming.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn get(&self, id: MessageId) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.id() == id)
    }

    /// Append a finished user message
    pub fn push_user(&mut self, text: impl Into<String>) -> MessageId {
        self.push(ChatRole::User, text.into(), false)
    }

    /// Append a finished model message
    pub fn push_model(&mut self, text: impl Into<String>) -> MessageId {
        self.push(ChatRole::Model, text.into(), false)
    }

    /// Append an empty model message that will grow as increments arrive
    pub fn push_placeholder(&mut self) -> MessageId {
        self.push(ChatRole::Model, String::new(), true)
    }

    /// Append a stream increment to the streaming message `id`.
    ///
    /// Returns false if `id` is not the most recent message or is no
    /// longer streaming.
    pub fn append(&mut self, id: MessageId, delta: &str) -> bool {
        match self.messages.last_mut() {
            Some(last) if last.id() == id && last.is_streaming() => {
                last.push_str(delta);
                true
            }
            _ => false,
        }
    }

    /// Freeze the message `id`; further increments are rejected
    pub fn finish(&mut self, id: MessageId) {
        if let Some(message) = self.messages.iter_mut().find(|m| m.id() == id) {
            message.finish();
        }
    }

    fn push(&mut self, role: ChatRole, text: String, streaming: bool) -> MessageId {
        self.next_id += 1;
        let id = MessageId::new(self.next_id);
        self.messages.push(ChatMessage::new(id, role, text, streaming));
        id
    }
}
