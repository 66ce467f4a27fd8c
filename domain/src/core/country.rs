//! Country value object

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// A country name submitted as a search (Value Object)
///
/// Always trimmed and never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    name: String,
}

impl Country {
    /// Try to create a country from user input, returning None for blank input
    pub fn try_new(input: impl AsRef<str>) -> Option<Self> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                name: trimmed.to_string(),
            })
        }
    }

    /// Get the country name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consume and return the inner name
    pub fn into_name(self) -> String {
        self.name
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl std::str::FromStr for Country {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s).ok_or(DomainError::EmptyCountry)
    }
}
