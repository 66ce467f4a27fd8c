//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Country cannot be empty")]
    EmptyCountry,

    #[error("Invalid animal profile: {0}")]
    InvalidProfile(String),

    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_profile_display() {
        let error = DomainError::InvalidProfile("name is empty".to_string());
        assert_eq!(error.to_string(), "Invalid animal profile: name is empty");
    }
}
