//! View controller
//!
//! Routes user intents to the session store and the per-view panels and
//! applies effect outcomes back onto them. A new search resets every panel
//! and closes the chat session.

use super::chat::ChatOrchestrator;
use super::effects::{Effect, EffectRunner, Outcome};
use super::insight::InsightPanel;
use super::session_store::SessionStore;
use super::vision::VisionPanel;
use crate::ports::image_store::{ImageStore, ImageStoreError};
use crate::ports::model_gateway::ModelGateway;
use nationsense_domain::{NationQuery, ViewMode};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("No animal profile is loaded")]
    NotReady,
}

/// Owner of all view state
#[derive(Default)]
pub struct ViewController {
    store: SessionStore,
    insight: InsightPanel,
    vision: VisionPanel,
    chat: ChatOrchestrator,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &NationQuery {
        self.store.query()
    }

    pub fn view(&self) -> ViewMode {
        self.store.view()
    }

    pub fn insight(&self) -> &InsightPanel {
        &self.insight
    }

    pub fn vision(&self) -> &VisionPanel {
        &self.vision
    }

    pub fn chat(&self) -> &ChatOrchestrator {
        &self.chat
    }

    /// Submit a country. Blank input is ignored.
    pub fn submit_search(&mut self, input: &str) -> Option<Effect> {
        let ticket = self.store.submit(input)?;
        self.insight.reset();
        self.vision.reset();
        self.chat.close();
        Some(Effect::FetchProfile(ticket))
    }

    /// Switch the active view, returning the fetch the new view needs
    pub fn switch_view(&mut self, view: ViewMode) -> Result<Option<Effect>, ViewError> {
        let previous = self.store.view();
        if !self.store.set_view(view) {
            return Err(ViewError::NotReady);
        }
        // Re-selecting chat retries an open that failed
        if previous == view && view != ViewMode::Chat {
            return Ok(None);
        }
        debug!("View {} -> {}", previous, view);

        if previous == ViewMode::Insight {
            self.insight.leave();
        }

        let key = self.store.search_generation();
        let query = self.store.query();
        let Some(profile) = query.animal() else {
            return Err(ViewError::NotReady);
        };
        let effect = match view {
            ViewMode::Insight => self
                .insight
                .enter(query.country(), profile)
                .map(Effect::FetchInsight),
            ViewMode::Chat => self
                .chat
                .enter(key, query.country(), profile.name())
                .map(Effect::OpenChat),
            ViewMode::Profile | ViewMode::Vision => None,
        };
        Ok(effect)
    }

    /// Request a vision image for the current animal
    pub fn generate_vision(&mut self) -> Result<Option<Effect>, ViewError> {
        let query = self.store.query();
        let profile = query.animal().ok_or(ViewError::NotReady)?;
        Ok(self
            .vision
            .begin(query.country(), profile.name())
            .map(Effect::GenerateVision))
    }

    /// Discard the vision image, also detaching it from the profile
    pub fn reset_vision(&mut self) {
        self.vision.reset();
        self.store.detach_image();
    }

    /// Save the held vision image through `store`
    pub fn save_vision(&self, store: &dyn ImageStore) -> Result<PathBuf, ImageStoreError> {
        let profile = self.query().animal().ok_or(ImageStoreError::NothingToSave)?;
        let image = self.vision.image().ok_or(ImageStoreError::NothingToSave)?;
        store.save(profile.name(), image)
    }

    /// Send a chat turn. None when the input is refused.
    pub fn send_chat(&mut self, text: &str) -> Option<Effect> {
        self.chat.begin_send(text).map(Effect::SendChat)
    }

    /// Apply an outcome. Returns false if it was stale and dropped.
    pub fn apply(&mut self, outcome: Outcome) -> bool {
        match outcome {
            Outcome::Profile { generation, result } => self.store.resolve(generation, result),
            Outcome::Insight {
                generation,
                outcome,
            } => {
                if !self.insight.is_live(generation) {
                    debug!("Discarding stale insight {}", generation);
                    return false;
                }
                if let Some(text) = self.insight.resolve(generation, outcome) {
                    self.store.attach_insight(text);
                }
                true
            }
            Outcome::Vision { generation, result } => {
                let was_generating = self.vision.is_generating();
                if let Some(uri) = self.vision.resolve(generation, result) {
                    self.store.attach_image(uri);
                }
                was_generating && !self.vision.is_generating()
            }
            Outcome::ChatOpened { generation, result } => self.chat.opened(generation, result),
            Outcome::ChatStream {
                generation,
                message,
                update,
            } => self.chat.apply(generation, message, update),
        }
    }

    /// Run an effect inline, applying each outcome as it arrives
    pub async fn run<G: ModelGateway + 'static>(&mut self, runner: &EffectRunner<G>, effect: Effect) {
        runner
            .run(effect, |outcome| {
                self.apply(outcome);
            })
            .await;
    }
}
