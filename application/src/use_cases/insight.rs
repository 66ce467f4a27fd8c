//! Insight ("sixth sense") view logic
//!
//! The narrative is served from the profile when it is already attached.
//! Otherwise it is fetched once per entry. A failed fetch degrades to a
//! fixed fallback text instead of an error.

use crate::ports::model_gateway::ModelGateway;
use nationsense_domain::{AnimalProfile, Generation, GenerationCounter, messages};
use std::sync::Arc;
use tracing::{debug, warn};

/// Display state of the insight view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InsightState {
    /// Not entered for the current profile
    #[default]
    Idle,
    Fetching,
    Shown(String),
    /// Terminal fallback display after a failed fetch
    Degraded(String),
}

impl InsightState {
    /// Text to display, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            InsightState::Shown(text) | InsightState::Degraded(text) => Some(text),
            InsightState::Idle | InsightState::Fetching => None,
        }
    }
}

/// Result of an insight fetch; never an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsightOutcome {
    Shown(String),
    Degraded(String),
}

/// An insight fetch issued on entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightTicket {
    pub generation: Generation,
    pub country: String,
    pub animal_name: String,
}

/// Local state of the insight view
#[derive(Debug, Default)]
pub struct InsightPanel {
    state: InsightState,
    generations: GenerationCounter,
}

impl InsightPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InsightState {
        &self.state
    }

    /// Enter the view for `profile`. Returns a ticket if a fetch is needed.
    pub fn enter(&mut self, country: &str, profile: &AnimalProfile) -> Option<InsightTicket> {
        let generation = self.generations.advance();

        if let Some(cached) = profile.cultural_significance() {
            debug!("Insight for {} served from profile", profile.name());
            self.state = InsightState::Shown(cached.to_string());
            return None;
        }

        self.state = InsightState::Fetching;
        Some(InsightTicket {
            generation,
            country: country.to_string(),
            animal_name: profile.name().to_string(),
        })
    }

    /// Leave the view; any fetch still in flight is ignored when it lands
    pub fn leave(&mut self) {
        self.generations.advance();
        if self.state == InsightState::Fetching {
            self.state = InsightState::Idle;
        }
    }

    /// Forget everything about the previous profile
    pub fn reset(&mut self) {
        self.generations.advance();
        self.state = InsightState::Idle;
    }

    /// Apply a fetch outcome. Returns the text to attach to the profile
    /// when the fetch succeeded and the view is still live.
    pub fn resolve(&mut self, generation: Generation, outcome: InsightOutcome) -> Option<String> {
        if !self.generations.is_current(generation) {
            debug!("Discarding stale insight {}", generation);
            return None;
        }

        match outcome {
            InsightOutcome::Shown(text) => {
                self.state = InsightState::Shown(text.clone());
                Some(text)
            }
            InsightOutcome::Degraded(text) => {
                self.state = InsightState::Degraded(text);
                None
            }
        }
    }

    /// Whether a result tagged `generation` would still be applied
    pub fn is_live(&self, generation: Generation) -> bool {
        self.generations.is_current(generation)
    }
}

/// Use case fetching the narrative with graceful degradation
pub struct FetchInsightUseCase<G: ModelGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: ModelGateway + 'static> FetchInsightUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, country: &str, animal_name: &str) -> InsightOutcome {
        match self.gateway.fetch_insight(country, animal_name).await {
            Ok(text) if text.trim().is_empty() => {
                InsightOutcome::Shown(messages::SPIRITS_SILENT.to_string())
            }
            Ok(text) => InsightOutcome::Shown(text),
            Err(e) => {
                warn!("Insight for {} in {} failed: {}", animal_name, country, e);
                InsightOutcome::Degraded(messages::ARCHIVES_UNREACHABLE.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::model_gateway::GatewayError;
    use crate::use_cases::testing::{ScriptedGateway, crane};
    use std::sync::atomic::Ordering;

    #[test]
    fn test_cached_insight_needs_no_fetch() {
        let mut panel = InsightPanel::new();
        let profile = crane().with_cultural_significance("A symbol of a thousand years.");

        assert!(panel.enter("Japan", &profile).is_none());
        assert_eq!(
            panel.state(),
            &InsightState::Shown("A symbol of a thousand years.".to_string())
        );

        panel.leave();
        assert!(panel.enter("Japan", &profile).is_none());
    }

    #[test]
    fn test_fetch_then_show() {
        let mut panel = InsightPanel::new();
        let ticket = panel.enter("Japan", &crane()).unwrap();
        assert_eq!(panel.state(), &InsightState::Fetching);
        assert_eq!(ticket.animal_name, "Red-crowned Crane");

        let attach = panel.resolve(ticket.generation, InsightOutcome::Shown("Grace.".into()));
        assert_eq!(attach.as_deref(), Some("Grace."));
        assert_eq!(panel.state().text(), Some("Grace."));
    }

    #[test]
    fn test_degraded_is_not_attached() {
        let mut panel = InsightPanel::new();
        let ticket = panel.enter("Japan", &crane()).unwrap();
        let attach = panel.resolve(
            ticket.generation,
            InsightOutcome::Degraded(messages::ARCHIVES_UNREACHABLE.into()),
        );
        assert!(attach.is_none());
        assert_eq!(
            panel.state(),
            &InsightState::Degraded(messages::ARCHIVES_UNREACHABLE.to_string())
        );
    }

    #[test]
    fn test_result_after_leave_is_suppressed() {
        let mut panel = InsightPanel::new();
        let ticket = panel.enter("Japan", &crane()).unwrap();
        panel.leave();

        assert!(!panel.is_live(ticket.generation));
        assert!(
            panel
                .resolve(ticket.generation, InsightOutcome::Shown("late".into()))
                .is_none()
        );
        assert_eq!(panel.state(), &InsightState::Idle);
    }

    #[tokio::test]
    async fn test_use_case_degrades_on_failure() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .with_insight(Err(GatewayError::Timeout))
                .with_insight(Ok("   ".to_string())),
        );
        let use_case = FetchInsightUseCase::new(Arc::clone(&gateway));

        assert_eq!(
            use_case.execute("Japan", "Red-crowned Crane").await,
            InsightOutcome::Degraded(messages::ARCHIVES_UNREACHABLE.to_string())
        );
        assert_eq!(
            use_case.execute("Japan", "Red-crowned Crane").await,
            InsightOutcome::Shown(messages::SPIRITS_SILENT.to_string())
        );
        assert_eq!(gateway.insight_calls.load(Ordering::SeqCst), 2);
    }
}
