//! Effects and their outcomes
//!
//! View state owners never call the gateway directly. They hand out an
//! [`Effect`] stamped with the generation it belongs to; the runner turns
//! it into one or more [`Outcome`]s carrying the same stamp.

use super::chat::{ChatOpenTicket, ChatSendTicket, ChatStreamUpdate, stream_reply};
use super::insight::{FetchInsightUseCase, InsightOutcome, InsightTicket};
use super::search::SearchUseCase;
use super::session_store::SearchTicket;
use super::vision::VisionTicket;
use crate::ports::model_gateway::{ChatSession, GatewayError, ModelGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use nationsense_domain::{AnimalProfile, Generation, MessageId};
use std::sync::Arc;
use tracing::debug;

/// A gateway call requested by a view
#[derive(Debug)]
pub enum Effect {
    FetchProfile(SearchTicket),
    FetchInsight(InsightTicket),
    GenerateVision(VisionTicket),
    OpenChat(ChatOpenTicket),
    SendChat(ChatSendTicket),
}

impl Effect {
    pub fn generation(&self) -> Generation {
        match self {
            Effect::FetchProfile(t) => t.generation,
            Effect::FetchInsight(t) => t.generation,
            Effect::GenerateVision(t) => t.generation,
            Effect::OpenChat(t) => t.generation,
            Effect::SendChat(t) => t.generation,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Effect::FetchProfile(_) => "profile",
            Effect::FetchInsight(_) => "insight",
            Effect::GenerateVision(_) => "vision",
            Effect::OpenChat(_) => "chat-open",
            Effect::SendChat(_) => "chat-send",
        }
    }
}

/// Result of running an effect, still stamped with its generation
pub enum Outcome {
    Profile {
        generation: Generation,
        result: Result<AnimalProfile, GatewayError>,
    },
    Insight {
        generation: Generation,
        outcome: InsightOutcome,
    },
    Vision {
        generation: Generation,
        result: Result<String, GatewayError>,
    },
    ChatOpened {
        generation: Generation,
        result: Result<Arc<dyn ChatSession>, GatewayError>,
    },
    ChatStream {
        generation: Generation,
        message: MessageId,
        update: ChatStreamUpdate,
    },
}

impl std::fmt::Debug for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Profile { generation, result } => f
                .debug_struct("Profile")
                .field("generation", generation)
                .field("ok", &result.is_ok())
                .finish(),
            Outcome::Insight {
                generation,
                outcome,
            } => f
                .debug_struct("Insight")
                .field("generation", generation)
                .field("outcome", outcome)
                .finish(),
            Outcome::Vision { generation, result } => f
                .debug_struct("Vision")
                .field("generation", generation)
                .field("ok", &result.is_ok())
                .finish(),
            Outcome::ChatOpened { generation, result } => f
                .debug_struct("ChatOpened")
                .field("generation", generation)
                .field("ok", &result.is_ok())
                .finish(),
            Outcome::ChatStream {
                generation,
                message,
                update,
            } => f
                .debug_struct("ChatStream")
                .field("generation", generation)
                .field("message", message)
                .field("update", update)
                .finish(),
        }
    }
}

/// Executes effects against the gateway
pub struct EffectRunner<G: ModelGateway + 'static> {
    gateway: Arc<G>,
    progress: Arc<dyn ProgressNotifier>,
}

impl<G: ModelGateway + 'static> Clone for EffectRunner<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            progress: Arc::clone(&self.progress),
        }
    }
}

impl<G: ModelGateway + 'static> EffectRunner<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            progress: Arc::new(NoProgress),
        }
    }

    /// Report profile lookups through a progress notifier
    pub fn with_progress(mut self, progress: Arc<dyn ProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    pub fn gateway(&self) -> &Arc<G> {
        &self.gateway
    }

    /// Run one effect, reporting every outcome to `sink` in order.
    ///
    /// A chat send reports one outcome per stream update.
    pub async fn run<F>(&self, effect: Effect, mut sink: F)
    where
        F: FnMut(Outcome) + Send,
    {
        debug!("Running {} effect {}", effect.label(), effect.generation());
        match effect {
            Effect::FetchProfile(ticket) => {
                let result = SearchUseCase::new(Arc::clone(&self.gateway))
                    .execute_with_progress(&ticket.country, self.progress.as_ref())
                    .await;
                sink(Outcome::Profile {
                    generation: ticket.generation,
                    result,
                });
            }
            Effect::FetchInsight(ticket) => {
                let outcome = FetchInsightUseCase::new(Arc::clone(&self.gateway))
                    .execute(&ticket.country, &ticket.animal_name)
                    .await;
                sink(Outcome::Insight {
                    generation: ticket.generation,
                    outcome,
                });
            }
            Effect::GenerateVision(ticket) => {
                let result = self
                    .gateway
                    .generate_vision(&ticket.country, &ticket.animal_name)
                    .await;
                sink(Outcome::Vision {
                    generation: ticket.generation,
                    result,
                });
            }
            Effect::OpenChat(ticket) => {
                let result = self
                    .gateway
                    .open_chat(&ticket.country, &ticket.animal_name)
                    .await;
                sink(Outcome::ChatOpened {
                    generation: ticket.generation,
                    result,
                });
            }
            Effect::SendChat(ticket) => {
                let ChatSendTicket {
                    generation,
                    message,
                    session,
                    text,
                } = ticket;
                stream_reply(session.as_ref(), &text, |update| {
                    sink(Outcome::ChatStream {
                        generation,
                        message,
                        update,
                    })
                })
                .await;
            }
        }
    }

    /// Run one effect and collect its outcomes
    pub async fn run_collect(&self, effect: Effect) -> Vec<Outcome> {
        let mut outcomes = Vec::new();
        self.run(effect, |outcome| outcomes.push(outcome)).await;
        outcomes
    }
}
