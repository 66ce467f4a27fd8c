//! Search use case
//!
//! Looks up the animal profile for one country. No retry: the caller
//! surfaces the error.

use crate::ports::model_gateway::{GatewayError, ModelGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use nationsense_domain::{AnimalProfile, Country};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for a single profile lookup
pub struct SearchUseCase<G: ModelGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: ModelGateway + 'static> SearchUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Execute the lookup with default (no-op) progress
    pub async fn execute(&self, country: &Country) -> Result<AnimalProfile, GatewayError> {
        self.execute_with_progress(country, &NoProgress).await
    }

    /// Execute the lookup with progress callbacks
    pub async fn execute_with_progress(
        &self,
        country: &Country,
        progress: &dyn ProgressNotifier,
    ) -> Result<AnimalProfile, GatewayError> {
        let label = format!("Searching {}", country);
        progress.on_request_start(&label);

        let result = self.gateway.fetch_profile(country.name()).await;
        match &result {
            Ok(profile) => info!("Found {} for {}", profile.name(), country),
            Err(e) => warn!("Profile lookup for {} failed: {}", country, e),
        }

        progress.on_request_complete(&label, result.is_ok());
        result
    }
}
