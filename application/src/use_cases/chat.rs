//! Chat orchestrator
//!
//! Owns the conversational session for one (country, animal) pair and its
//! transcript. A new pair always starts a new session whose transcript
//! holds only a locally built greeting. At most one send is in flight per
//! session; stream increments grow the reply placeholder in place.

use crate::ports::model_gateway::{ChatSession, GatewayError, ModelGateway, StreamHandle};
use nationsense_domain::{
    Generation, GenerationCounter, MessageId, StreamEvent, Transcript, messages,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Availability of the chat input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChatStatus {
    /// No session for the current profile
    #[default]
    Closed,
    /// Session requested, greeting shown
    Opening,
    /// Accepting input
    Ready,
    /// A reply is streaming; input disabled
    Sending,
    /// The session could not be opened
    Unavailable(String),
}

/// A session open issued on entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatOpenTicket {
    pub generation: Generation,
    pub country: String,
    pub animal_name: String,
}

/// A user turn to stream a reply for
pub struct ChatSendTicket {
    pub generation: Generation,
    pub message: MessageId,
    pub session: Arc<dyn ChatSession>,
    pub text: String,
}

impl std::fmt::Debug for ChatSendTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSendTicket")
            .field("generation", &self.generation)
            .field("message", &self.message)
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

/// One step of a streamed reply, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatStreamUpdate {
    Delta(String),
    Finished,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ChatPair {
    key: Generation,
    country: String,
    animal_name: String,
}

/// Owner of the chat session and transcript
#[derive(Default)]
pub struct ChatOrchestrator {
    pair: Option<ChatPair>,
    session: Option<Arc<dyn ChatSession>>,
    transcript: Transcript,
    status: ChatStatus,
    generations: GenerationCounter,
}

impl ChatOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn status(&self) -> &ChatStatus {
        &self.status
    }

    pub fn can_send(&self) -> bool {
        self.status == ChatStatus::Ready && self.session.is_some()
    }

    /// Enter the chat view for a pair. `key` identifies the search that
    /// produced the profile.
    ///
    /// Re-entering with the same pair keeps the session and transcript.
    /// Otherwise the previous session is dropped, the transcript restarts
    /// with the greeting and a ticket to open the new session is returned.
    pub fn enter(
        &mut self,
        key: Generation,
        country: &str,
        animal_name: &str,
    ) -> Option<ChatOpenTicket> {
        let pair = ChatPair {
            key,
            country: country.to_string(),
            animal_name: animal_name.to_string(),
        };
        let reusable = !matches!(self.status, ChatStatus::Closed | ChatStatus::Unavailable(_));
        if self.pair.as_ref() == Some(&pair) && reusable {
            return None;
        }

        let generation = self.generations.advance();
        info!("Opening chat with the {} of {}", animal_name, country);

        self.session = None;
        self.transcript = Transcript::new();
        self.transcript
            .push_model(messages::chat_greeting(animal_name, country));
        self.status = ChatStatus::Opening;
        self.pair = Some(pair);

        Some(ChatOpenTicket {
            generation,
            country: country.to_string(),
            animal_name: animal_name.to_string(),
        })
    }

    /// Install the opened session. Returns false if the open was superseded.
    pub fn opened(
        &mut self,
        generation: Generation,
        result: Result<Arc<dyn ChatSession>, GatewayError>,
    ) -> bool {
        if !self.generations.is_current(generation) {
            debug!("Discarding stale chat session {}", generation);
            return false;
        }
        match result {
            Ok(session) => {
                self.session = Some(session);
                self.status = ChatStatus::Ready;
            }
            Err(e) => {
                warn!("Chat session could not be opened: {}", e);
                let message = e.user_message(messages::CONNECTION_SEVERED);
                self.transcript = Transcript::new();
                self.status = ChatStatus::Unavailable(message.to_string());
            }
        }
        true
    }

    /// Drop the session and transcript; late results are discarded
    pub fn close(&mut self) {
        self.generations.advance();
        self.pair = None;
        self.session = None;
        self.transcript = Transcript::new();
        self.status = ChatStatus::Closed;
    }

    /// Append the user turn and an empty reply placeholder.
    ///
    /// Returns None for blank text, while a send is in flight or when no
    /// session is open.
    pub fn begin_send(&mut self, text: &str) -> Option<ChatSendTicket> {
        let text = text.trim();
        if text.is_empty() || !self.can_send() {
            return None;
        }
        let session = self.session.as_ref().map(Arc::clone)?;

        self.transcript.push_user(text);
        let message = self.transcript.push_placeholder();
        self.status = ChatStatus::Sending;

        Some(ChatSendTicket {
            generation: self.generations.current(),
            message,
            session,
            text: text.to_string(),
        })
    }

    /// Apply one streamed update. Returns false if it belongs to a
    /// superseded session.
    pub fn apply(
        &mut self,
        generation: Generation,
        message: MessageId,
        update: ChatStreamUpdate,
    ) -> bool {
        if !self.generations.is_current(generation) {
            debug!("Discarding stale chat update {}", generation);
            return false;
        }
        match update {
            ChatStreamUpdate::Delta(delta) => self.transcript.append(message, &delta),
            ChatStreamUpdate::Finished => {
                self.transcript.finish(message);
                self.status = ChatStatus::Ready;
                true
            }
            ChatStreamUpdate::Failed(reason) => {
                warn!("Chat stream interrupted: {}", reason);
                self.transcript.finish(message);
                self.transcript.push_model(messages::CONNECTION_SEVERED);
                self.status = ChatStatus::Ready;
                true
            }
        }
    }

    /// Open a session inline (enter + open + install)
    pub async fn enter_and_open<G: ModelGateway + ?Sized>(
        &mut self,
        gateway: &G,
        key: Generation,
        country: &str,
        animal_name: &str,
    ) {
        if let Some(ticket) = self.enter(key, country, animal_name) {
            let result = gateway
                .open_chat(&ticket.country, &ticket.animal_name)
                .await;
            self.opened(ticket.generation, result);
        }
    }

    /// Send a turn and apply its reply inline. Returns false if the send
    /// was refused.
    pub async fn send(&mut self, text: &str) -> bool {
        let Some(ticket) = self.begin_send(text) else {
            return false;
        };
        let ChatSendTicket {
            generation,
            message,
            session,
            text,
        } = ticket;

        stream_reply(session.as_ref(), &text, |update| {
            self.apply(generation, message, update);
        })
        .await;
        true
    }
}

/// Drive one send and report its updates in order.
///
/// Always ends with exactly one `Finished` or `Failed`.
pub async fn stream_reply<F>(session: &dyn ChatSession, text: &str, mut on_update: F)
where
    F: FnMut(ChatStreamUpdate) + Send,
{
    match session.send_streaming(text).await {
        Ok(handle) => forward_stream(handle, on_update).await,
        Err(e) => on_update(ChatStreamUpdate::Failed(e.to_string())),
    }
}

async fn forward_stream<F>(mut handle: StreamHandle, mut on_update: F)
where
    F: FnMut(ChatStreamUpdate) + Send,
{
    let mut received_delta = false;
    while let Some(event) = handle.next().await {
        match event {
            StreamEvent::Delta(delta) => {
                if !delta.is_empty() {
                    received_delta = true;
                    on_update(ChatStreamUpdate::Delta(delta));
                }
            }
            StreamEvent::Completed(full) => {
                if !received_delta && !full.is_empty() {
                    on_update(ChatStreamUpdate::Delta(full));
                }
                on_update(ChatStreamUpdate::Finished);
                return;
            }
            StreamEvent::Error(e) => {
                on_update(ChatStreamUpdate::Failed(e));
                return;
            }
        }
    }
    on_update(ChatStreamUpdate::Finished);
}
