//! Gemini model gateway implementation

use super::client::GeminiClient;
use super::error::GeminiError;
use super::protocol::{GenerateContentRequest, GenerationConfig};
use super::session::GeminiChatSession;
use crate::config::FileGeminiConfig;
use async_trait::async_trait;
use nationsense_application::{ChatSession, GatewayError, ModelGateway};
use nationsense_domain::{AnimalProfile, PromptTemplate};
use std::sync::Arc;
use tracing::{debug, info};

/// Model gateway backed by the Gemini REST API
pub struct GeminiGateway {
    client: Arc<GeminiClient>,
}

impl GeminiGateway {
    /// Create a gateway. The API key is not read until the first call.
    pub fn new(config: FileGeminiConfig) -> Result<Self, GatewayError> {
        let client = GeminiClient::new(config)?;
        info!("GeminiGateway initialized");
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create a gateway sharing an existing client
    pub fn with_client(client: Arc<GeminiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ModelGateway for GeminiGateway {
    async fn fetch_profile(&self, country: &str) -> Result<AnimalProfile, GatewayError> {
        let request = GenerateContentRequest::prompt(PromptTemplate::profile_query(country))
            .with_generation_config(GenerationConfig::json(PromptTemplate::profile_schema()));

        let response = self
            .client
            .generate(&self.client.config().text_model, &request)
            .await?;

        let text = response.text();
        if text.trim().is_empty() {
            return Err(GeminiError::EmptyResponse.into());
        }
        debug!("Profile payload for {}: {} bytes", country, text.len());
        Ok(AnimalProfile::from_json(&text)?)
    }

    async fn fetch_insight(&self, country: &str, animal_name: &str) -> Result<String, GatewayError> {
        let request =
            GenerateContentRequest::prompt(PromptTemplate::insight_query(country, animal_name));
        let response = self
            .client
            .generate(&self.client.config().text_model, &request)
            .await?;
        Ok(response.text())
    }

    async fn generate_vision(
        &self,
        country: &str,
        animal_name: &str,
    ) -> Result<String, GatewayError> {
        let request =
            GenerateContentRequest::prompt(PromptTemplate::vision_query(country, animal_name));
        let response = self
            .client
            .generate(&self.client.config().image_model, &request)
            .await?;

        response
            .first_inline_data()
            .map(|data| data.to_data_uri())
            .ok_or_else(|| GeminiError::NoImage.into())
    }

    async fn open_chat(
        &self,
        country: &str,
        animal_name: &str,
    ) -> Result<Arc<dyn ChatSession>, GatewayError> {
        // Surface a missing key when the session opens rather than on first send
        self.client.api_key()?;

        let session = GeminiChatSession::new(
            Arc::clone(&self.client),
            PromptTemplate::chat_persona(country, animal_name),
        );
        info!("Chat session opened for the {} of {}", animal_name, country);
        Ok(Arc::new(session))
    }
}
