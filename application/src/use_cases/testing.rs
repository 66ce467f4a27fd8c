//! Scripted gateway shared by the use case tests

use crate::ports::model_gateway::{ChatSession, GatewayError, ModelGateway, StreamHandle};
use async_trait::async_trait;
use nationsense_domain::{AnimalProfile, StreamEvent};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub(crate) fn crane() -> AnimalProfile {
    AnimalProfile::new("Red-crowned Crane", "A tall white crane with a red crown.")
        .unwrap()
        .with_scientific_name("Grus japonensis")
        .with_traits(["Longevity", "Fidelity", "Grace"])
}

pub(crate) fn lion() -> AnimalProfile {
    AnimalProfile::new("Asiatic Lion", "A maned big cat.").unwrap()
}

/// Scripted chat session replaying one event list per send
pub(crate) struct ScriptedChat {
    replies: Mutex<VecDeque<Result<Vec<StreamEvent>, GatewayError>>>,
    pub sent: Mutex<Vec<String>>,
}

impl ScriptedChat {
    pub fn new(replies: Vec<Result<Vec<StreamEvent>, GatewayError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            sent: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ChatSession for ScriptedChat {
    async fn send_streaming(&self, text: &str) -> Result<StreamHandle, GatewayError> {
        self.sent.lock().unwrap().push(text.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(events)) => Ok(StreamHandle::from_events(events)),
            Some(Err(e)) => Err(e),
            None => Err(GatewayError::TransportClosed),
        }
    }
}

/// Gateway answering from per-operation queues and counting calls
#[derive(Default)]
pub(crate) struct ScriptedGateway {
    pub profiles: Mutex<VecDeque<Result<AnimalProfile, GatewayError>>>,
    pub insights: Mutex<VecDeque<Result<String, GatewayError>>>,
    pub visions: Mutex<VecDeque<Result<String, GatewayError>>>,
    pub chats: Mutex<VecDeque<Result<Arc<ScriptedChat>, GatewayError>>>,
    pub profile_calls: AtomicUsize,
    pub insight_calls: AtomicUsize,
    pub vision_calls: AtomicUsize,
    pub chat_opens: Mutex<Vec<(String, String)>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(self, result: Result<AnimalProfile, GatewayError>) -> Self {
        self.profiles.lock().unwrap().push_back(result);
        self
    }

    pub fn with_insight(self, result: Result<String, GatewayError>) -> Self {
        self.insights.lock().unwrap().push_back(result);
        self
    }

    pub fn with_vision(self, result: Result<String, GatewayError>) -> Self {
        self.visions.lock().unwrap().push_back(result);
        self
    }

    pub fn with_chat(self, chat: Arc<ScriptedChat>) -> Self {
        self.chats.lock().unwrap().push_back(Ok(chat));
        self
    }

    pub fn with_chat_failure(self, error: GatewayError) -> Self {
        self.chats.lock().unwrap().push_back(Err(error));
        self
    }
}

#[async_trait]
impl ModelGateway for ScriptedGateway {
    async fn fetch_profile(&self, _country: &str) -> Result<AnimalProfile, GatewayError> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        self.profiles
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GatewayError::TransportClosed))
    }

    async fn fetch_insight(
        &self,
        _country: &str,
        _animal_name: &str,
    ) -> Result<String, GatewayError> {
        self.insight_calls.fetch_add(1, Ordering::SeqCst);
        self.insights
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GatewayError::TransportClosed))
    }

    async fn generate_vision(
        &self,
        _country: &str,
        _animal_name: &str,
    ) -> Result<String, GatewayError> {
        self.vision_calls.fetch_add(1, Ordering::SeqCst);
        self.visions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GatewayError::NoImage))
    }

    async fn open_chat(
        &self,
        country: &str,
        animal_name: &str,
    ) -> Result<Arc<dyn ChatSession>, GatewayError> {
        self.chat_opens
            .lock()
            .unwrap()
            .push((country.to_string(), animal_name.to_string()));
        let chat = self
            .chats
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Arc::new(ScriptedChat::new(vec![]))))?;
        Ok(chat)
    }
}
