//! Stub ports shared by the presentation tests

use async_trait::async_trait;
use nationsense_application::{
    ChatSession, GatewayError, ImageStore, ImageStoreError, ModelGateway, StreamHandle,
};
use nationsense_domain::{AnimalProfile, StreamEvent, VisionImage};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

pub(crate) fn crane() -> AnimalProfile {
    AnimalProfile::new("Red-crowned Crane", "A tall white crane.")
        .unwrap()
        .with_scientific_name("Grus japonensis")
        .with_habitat("Wetlands of Hokkaido")
        .with_traits(["Longevity", "Fidelity", "Grace"])
}

/// Replies "Hello, traveler" in two deltas; the text "break" fails the send
pub(crate) struct StubChat;

#[async_trait]
impl ChatSession for StubChat {
    async fn send_streaming(&self, text: &str) -> Result<StreamHandle, GatewayError> {
        if text == "break" {
            return Err(GatewayError::TransportClosed);
        }
        Ok(StreamHandle::from_events(vec![
            StreamEvent::Delta("Hello".into()),
            StreamEvent::Delta(", traveler".into()),
            StreamEvent::Completed("Hello, traveler".into()),
        ]))
    }
}

/// Gateway that always knows the crane, unless `unknown` is set
#[derive(Default)]
pub(crate) struct StubGateway {
    pub unknown: bool,
}

impl StubGateway {
    pub fn unknown() -> Self {
        Self { unknown: true }
    }
}

#[async_trait]
impl ModelGateway for StubGateway {
    async fn fetch_profile(&self, _country: &str) -> Result<AnimalProfile, GatewayError> {
        if self.unknown {
            return Err(GatewayError::EmptyResponse);
        }
        Ok(crane())
    }

    async fn fetch_insight(&self, _country: &str, _animal: &str) -> Result<String, GatewayError> {
        Ok("The crane carries a thousand years.".into())
    }

    async fn generate_vision(
        &self,
        _country: &str,
        _animal: &str,
    ) -> Result<String, GatewayError> {
        Ok("data:image/png;base64,aGVsbG8=".into())
    }

    async fn open_chat(
        &self,
        _country: &str,
        _animal: &str,
    ) -> Result<Arc<dyn ChatSession>, GatewayError> {
        Ok(Arc::new(StubChat))
    }
}

/// Image store keeping what it was asked to save
#[derive(Default)]
pub(crate) struct MemoryStore {
    pub saved: Mutex<Vec<(String, usize)>>,
}

impl ImageStore for MemoryStore {
    fn save(&self, animal_name: &str, image: &VisionImage) -> Result<PathBuf, ImageStoreError> {
        self.saved
            .lock()
            .unwrap()
            .push((animal_name.to_string(), image.byte_len()));
        Ok(PathBuf::from("spirit.png"))
    }
}
