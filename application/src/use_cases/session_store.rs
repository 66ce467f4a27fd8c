//! Session store
//!
//! Single owner of the [`NationQuery`], the active [`ViewMode`] and the
//! search generation counter. All query mutations go through
//! [`NationQuery::apply`].

use crate::ports::model_gateway::GatewayError;
use nationsense_domain::{
    AnimalProfile, Country, Generation, GenerationCounter, NationQuery, QueryAction, QueryPhase,
    ViewMode, messages,
};
use tracing::{debug, info};

/// A profile lookup issued for one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: Generation,
    pub country: Country,
}

/// Owner of the current search and view selection
#[derive(Debug, Default)]
pub struct SessionStore {
    query: NationQuery,
    view: ViewMode,
    generations: GenerationCounter,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &NationQuery {
        &self.query
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn phase(&self) -> QueryPhase {
        self.query.phase()
    }

    /// Generation of the most recent submission
    pub fn search_generation(&self) -> Generation {
        self.generations.current()
    }

    /// Start a new search. Blank input is a no-op and returns None.
    pub fn submit(&mut self, input: &str) -> Option<SearchTicket> {
        let country = Country::try_new(input)?;
        let generation = self.generations.advance();
        info!("Search {} for {}", generation, country);
        self.dispatch(QueryAction::Submit(country.clone()));
        Some(SearchTicket {
            generation,
            country,
        })
    }

    /// Apply the result of a profile lookup. Returns false if it was stale.
    pub fn resolve(
        &mut self,
        generation: Generation,
        result: Result<AnimalProfile, GatewayError>,
    ) -> bool {
        if !self.generations.is_current(generation) {
            debug!("Discarding stale search result {}", generation);
            return false;
        }

        match result {
            Ok(profile) => {
                self.dispatch(QueryAction::Resolved(profile));
                self.view = ViewMode::Profile;
            }
            Err(e) => {
                let message = e.user_message(messages::NATION_NOT_FOUND);
                self.dispatch(QueryAction::Failed(message.to_string()));
            }
        }
        true
    }

    /// Select a view. Only permitted once a profile is ready.
    pub fn set_view(&mut self, view: ViewMode) -> bool {
        if !self.query.is_ready() {
            return false;
        }
        self.view = view;
        true
    }

    pub fn attach_insight(&mut self, insight: String) {
        self.dispatch(QueryAction::AttachInsight(insight));
    }

    pub fn attach_image(&mut self, url: String) {
        self.dispatch(QueryAction::AttachImage(url));
    }

    pub fn detach_image(&mut self) {
        self.dispatch(QueryAction::DetachImage);
    }

    fn dispatch(&mut self, action: QueryAction) {
        self.query = std::mem::take(&mut self.query).apply(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::testing::{crane, lion};

    #[test]
    fn test_blank_submission_is_noop() {
        let mut store = SessionStore::new();
        assert!(store.submit("   ").is_none());
        assert!(store.submit("").is_none());
        assert_eq!(store.phase(), QueryPhase::Empty);
    }

    #[test]
    fn test_submit_resolve_cycle() {
        let mut store = SessionStore::new();
        let ticket = store.submit(" Japan ").unwrap();
        assert_eq!(ticket.country.name(), "Japan");
        assert_eq!(store.phase(), QueryPhase::Loading);

        assert!(store.resolve(ticket.generation, Ok(crane())));
        assert_eq!(store.phase(), QueryPhase::Ready);
        assert_eq!(store.view(), ViewMode::Profile);
    }

    #[test]
    fn test_failure_shows_fixed_message() {
        let mut store = SessionStore::new();
        let ticket = store.submit("Atlantis").unwrap();
        store.resolve(ticket.generation, Err(GatewayError::EmptyResponse));
        assert_eq!(store.phase(), QueryPhase::Error);
        assert_eq!(store.query().error(), Some(messages::NATION_NOT_FOUND));
    }

    #[test]
    fn test_missing_credential_shows_config_message() {
        let mut store = SessionStore::new();
        let ticket = store.submit("Japan").unwrap();
        store.resolve(
            ticket.generation,
            Err(GatewayError::MissingCredential("API_KEY".into())),
        );
        assert_eq!(store.query().error(), Some(messages::ARCHIVES_SEALED));
    }

    #[test]
    fn test_newer_search_wins() {
        let mut store = SessionStore::new();
        let a = store.submit("Japan").unwrap();
        let b = store.submit("India").unwrap();

        assert!(store.resolve(b.generation, Ok(lion())));
        assert!(!store.resolve(a.generation, Ok(crane())));
        assert!(!store.resolve(a.generation, Err(GatewayError::Timeout)));

        assert_eq!(store.query().country(), "India");
        assert_eq!(store.query().animal().unwrap().name(), "Asiatic Lion");
    }

    #[test]
    fn test_stale_result_cannot_end_newer_loading() {
        let mut store = SessionStore::new();
        let a = store.submit("Japan").unwrap();
        let _b = store.submit("India").unwrap();
        assert!(!store.resolve(a.generation, Ok(crane())));
        assert_eq!(store.phase(), QueryPhase::Loading);
    }

    #[test]
    fn test_view_switch_requires_ready() {
        let mut store = SessionStore::new();
        assert!(!store.set_view(ViewMode::Chat));

        let ticket = store.submit("Japan").unwrap();
        assert!(!store.set_view(ViewMode::Chat));

        store.resolve(ticket.generation, Ok(crane()));
        assert!(store.set_view(ViewMode::Chat));
        assert_eq!(store.view(), ViewMode::Chat);
    }

    #[test]
    fn test_successful_search_resets_view() {
        let mut store = SessionStore::new();
        let ticket = store.submit("Japan").unwrap();
        store.resolve(ticket.generation, Ok(crane()));
        store.set_view(ViewMode::Vision);

        let ticket = store.submit("Japan").unwrap();
        store.resolve(ticket.generation, Ok(crane()));
        assert_eq!(store.view(), ViewMode::Profile);
    }
}
