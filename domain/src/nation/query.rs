//! Nation query state machine
//!
//! ```text
//! Empty ──Submit──> Loading ──Resolved──> Ready
//!                      │  ^                 │
//!                Failed│  └─────Submit──────┤
//!                      v                    │
//!                    Error ───Submit────> Loading
//! ```
//!
//! Transitions are pure: [`NationQuery::apply`] consumes the old state and
//! returns the next one. Stale results are filtered by the owner before an
//! action reaches this function.

use crate::animal::profile::AnimalProfile;
use crate::core::country::Country;
use serde::{Deserialize, Serialize};

/// Derived phase of a [`NationQuery`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryPhase {
    Empty,
    Loading,
    Error,
    Ready,
}

impl QueryPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryPhase::Empty => "empty",
            QueryPhase::Loading => "loading",
            QueryPhase::Error => "error",
            QueryPhase::Ready => "ready",
        }
    }
}

impl std::fmt::Display for QueryPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inputs to the query state machine
#[derive(Debug, Clone)]
pub enum QueryAction {
    /// A non-blank search was submitted
    Submit(Country),
    /// The profile lookup succeeded
    Resolved(AnimalProfile),
    /// The profile lookup failed; carries the user-facing message
    Failed(String),
    /// A cultural insight was fetched for the current profile
    AttachInsight(String),
    /// An image was generated for the current profile
    AttachImage(String),
    /// The generated image was discarded
    DetachImage,
}

/// The current search and its outcome
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationQuery {
    country: String,
    animal: Option<AnimalProfile>,
    loading: bool,
    error: Option<String>,
}

impl NationQuery {
    /// The initial state before any search
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn animal(&self) -> Option<&AnimalProfile> {
        self.animal.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> QueryPhase {
        if self.loading {
            QueryPhase::Loading
        } else if self.error.is_some() {
            QueryPhase::Error
        } else if self.animal.is_some() {
            QueryPhase::Ready
        } else {
            QueryPhase::Empty
        }
    }

    pub fn is_ready(&self) -> bool {
        self.phase() == QueryPhase::Ready
    }

    /// Apply an action and return the next state.
    ///
    /// Actions that make no sense in the current phase leave it unchanged.
    pub fn apply(self, action: QueryAction) -> Self {
        match action {
            QueryAction::Submit(country) => Self {
                country: country.into_name(),
                animal: None,
                loading: true,
                error: None,
            },
            QueryAction::Resolved(animal) if self.loading => Self {
                country: self.country,
                animal: Some(animal),
                loading: false,
                error: None,
            },
            QueryAction::Failed(message) if self.loading => Self {
                country: self.country,
                animal: None,
                loading: false,
                error: Some(message),
            },
            QueryAction::AttachInsight(insight) if self.is_ready() => {
                let mut next = self;
                if let Some(animal) = next.animal.as_mut() {
                    animal.attach_cultural_significance(insight);
                }
                next
            }
            QueryAction::AttachImage(url) if self.is_ready() => {
                let mut next = self;
                if let Some(animal) = next.animal.as_mut() {
                    animal.attach_image_url(url);
                }
                next
            }
            QueryAction::DetachImage if self.is_ready() => {
                let mut next = self;
                if let Some(animal) = next.animal.as_mut() {
                    animal.detach_image_url();
                }
                next
            }
            _ => self,
        }
    }
}
