//! One-shot runner
//!
//! Drives a [`ViewController`] to completion for a single country and
//! view, awaiting each effect inline instead of spawning it.

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use nationsense_application::{
    ChatStatus, ChatStreamUpdate, EffectRunner, ImageStore, ImageStoreError, ModelGateway,
    Outcome, ViewController, ViewError,
};
use nationsense_domain::{QueryPhase, ViewMode, messages};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum OneShotError {
    #[error("{0}")]
    Lookup(String),

    #[error(transparent)]
    View(#[from] ViewError),

    #[error("{0}")]
    Vision(String),

    #[error("{0}")]
    ChatUnavailable(String),

    #[error(transparent)]
    Save(#[from] ImageStoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs one lookup and one view without a terminal UI
pub struct OneShot<G: ModelGateway + 'static> {
    runner: EffectRunner<G>,
    controller: ViewController,
    image_store: Arc<dyn ImageStore>,
    json: bool,
}

impl<G: ModelGateway + 'static> OneShot<G> {
    pub fn new(runner: EffectRunner<G>, image_store: Arc<dyn ImageStore>) -> Self {
        Self {
            runner,
            controller: ViewController::new(),
            image_store,
            json: false,
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn controller(&self) -> &ViewController {
        &self.controller
    }

    /// Look up `country` and wait for the profile
    pub async fn search(&mut self, country: &str) -> Result<(), OneShotError> {
        let Some(effect) = self.controller.submit_search(country) else {
            return Err(OneShotError::Lookup(messages::NATION_NOT_FOUND.to_string()));
        };
        self.controller.run(&self.runner, effect).await;

        let query = self.controller.query();
        match query.phase() {
            QueryPhase::Ready => Ok(()),
            _ => Err(OneShotError::Lookup(
                query.error().unwrap_or(messages::NATION_NOT_FOUND).to_string(),
            )),
        }
    }

    /// Switch to `view` and run whatever it fetches on entry.
    ///
    /// For the vision view this also generates the image and saves it,
    /// returning the saved path.
    pub async fn open_view(&mut self, view: ViewMode) -> Result<Option<PathBuf>, OneShotError> {
        if let Some(effect) = self.controller.switch_view(view)? {
            self.controller.run(&self.runner, effect).await;
        }

        match view {
            ViewMode::Vision => self.generate_vision().await.map(Some),
            ViewMode::Chat => match self.controller.chat().status() {
                ChatStatus::Unavailable(message) => {
                    Err(OneShotError::ChatUnavailable(message.clone()))
                }
                _ => Ok(None),
            },
            ViewMode::Profile | ViewMode::Insight => Ok(None),
        }
    }

    async fn generate_vision(&mut self) -> Result<PathBuf, OneShotError> {
        if let Some(effect) = self.controller.generate_vision()? {
            self.controller.run(&self.runner, effect).await;
        }
        if let Some(error) = self.controller.vision().error() {
            return Err(OneShotError::Vision(error.to_string()));
        }
        let path = self.controller.save_vision(self.image_store.as_ref())?;
        info!("Vision saved to {}", path.display());
        Ok(path)
    }

    /// Read one user turn per line from `input` and stream each reply to
    /// `out` as it arrives. Blank lines are skipped.
    pub async fn chat<R, W>(&mut self, input: R, out: &mut W) -> Result<(), OneShotError>
    where
        R: AsyncBufRead + Unpin,
        W: Write + Send,
    {
        let Some(profile) = self.controller.query().animal() else {
            return Err(ViewError::NotReady.into());
        };
        let animal_name = profile.name().to_string();

        if let Some(greeting) = self.controller.chat().transcript().last() {
            out.write_all(
                ConsoleFormatter::chat_line(&animal_name, greeting.role(), greeting.text())
                    .as_bytes(),
            )?;
        }

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let Some(effect) = self.controller.send_chat(&line) else {
                debug!("Skipping chat input {:?}", line);
                continue;
            };
            write!(
                out,
                "\n{} {}\n{} ",
                "You:".cyan().bold(),
                line.trim(),
                format!("{}:", animal_name).yellow().bold()
            )?;

            let controller = &mut self.controller;
            let mut write_error = None;
            self.runner
                .run(effect, |outcome| {
                    if let Outcome::ChatStream { update, .. } = &outcome {
                        let written = match update {
                            ChatStreamUpdate::Delta(delta) => write!(out, "{}", delta),
                            ChatStreamUpdate::Finished => writeln!(out),
                            ChatStreamUpdate::Failed(_) => {
                                writeln!(out, "\n{}", messages::CONNECTION_SEVERED.red())
                            }
                        };
                        let flushed = written.and_then(|_| out.flush());
                        if let Err(e) = flushed {
                            write_error.get_or_insert(e);
                        }
                    }
                    controller.apply(outcome);
                })
                .await;
            if let Some(e) = write_error {
                return Err(e.into());
            }
        }
        Ok(())
    }

    /// Render the active view
    pub fn render(&self) -> String {
        if self.json {
            ConsoleFormatter::format_json(&self.controller)
        } else {
            ConsoleFormatter::format(&self.controller)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryStore, StubGateway};

    fn one_shot(gateway: StubGateway, store: Arc<MemoryStore>) -> OneShot<StubGateway> {
        OneShot::new(EffectRunner::new(Arc::new(gateway)), store)
    }

    fn known() -> StubGateway {
        StubGateway::default()
    }

    #[tokio::test]
    async fn test_search_then_profile() {
        colored::control::set_override(false);
        let mut shot = one_shot(known(), Arc::new(MemoryStore::default()));
        shot.search("Japan").await.unwrap();
        assert_eq!(shot.open_view(ViewMode::Profile).await.unwrap(), None);
        assert!(shot.render().contains("Red-crowned Crane"));
    }

    #[tokio::test]
    async fn test_failed_lookup_reports_fixed_message() {
        let mut shot = one_shot(StubGateway::unknown(), Arc::new(MemoryStore::default()));
        let err = shot.search("Atlantis").await.unwrap_err();
        assert_eq!(err.to_string(), messages::NATION_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_blank_search_is_rejected() {
        let mut shot = one_shot(known(), Arc::new(MemoryStore::default()));
        assert!(matches!(
            shot.search("   ").await,
            Err(OneShotError::Lookup(_))
        ));
    }

    #[tokio::test]
    async fn test_insight_view_fetches_narrative() {
        colored::control::set_override(false);
        let mut shot = one_shot(known(), Arc::new(MemoryStore::default()));
        shot.search("Japan").await.unwrap();
        shot.open_view(ViewMode::Insight).await.unwrap();
        assert!(shot.render().contains("a thousand years"));
    }

    #[tokio::test]
    async fn test_vision_view_saves_image() {
        let store = Arc::new(MemoryStore::default());
        let mut shot = one_shot(known(), Arc::clone(&store));
        shot.search("Japan").await.unwrap();
        let path = shot.open_view(ViewMode::Vision).await.unwrap();
        assert_eq!(path, Some(PathBuf::from("spirit.png")));
        assert_eq!(
            store.saved.lock().unwrap().as_slice(),
            &[("Red-crowned Crane".to_string(), 5)]
        );
    }

    #[tokio::test]
    async fn test_view_before_search_is_refused() {
        let mut shot = one_shot(known(), Arc::new(MemoryStore::default()));
        assert!(matches!(
            shot.open_view(ViewMode::Insight).await,
            Err(OneShotError::View(ViewError::NotReady))
        ));
    }

    #[tokio::test]
    async fn test_chat_streams_each_line() {
        colored::control::set_override(false);
        let mut shot = one_shot(known(), Arc::new(MemoryStore::default()));
        shot.search("Japan").await.unwrap();
        shot.open_view(ViewMode::Chat).await.unwrap();

        let input: &[u8] = b"Who are you?\n\nbreak\n";
        let mut out = Vec::new();
        shot.chat(input, &mut out).await.unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("I am the spirit of the Red-crowned Crane"));
        assert!(printed.contains("You: Who are you?"));
        assert!(printed.contains("Red-crowned Crane: Hello, traveler"));
        assert!(printed.contains(messages::CONNECTION_SEVERED));

        let transcript = shot.controller().chat().transcript();
        // greeting, user, reply, user, empty reply, sentinel
        assert_eq!(transcript.len(), 6);
        assert_eq!(transcript.messages()[2].text(), "Hello, traveler");
        assert_eq!(transcript.last().unwrap().text(), messages::CONNECTION_SEVERED);
    }
}
