//! Error types for the great people core

use crate::great_person::GreatPersonId;
use thiserror::Error;

/// Main error type for the great people core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GreatPeopleError {
    /// Catalog lookup miss. This is a content bug and should fail loudly.
    #[error("Great person not found: {0}")]
    NotFound(GreatPersonId),

    /// Resolution against an empty queue or with an id that was not offered.
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    #[error("Invalid definition: {0}")]
    InvalidDefinition(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Game context is not initialized yet")]
    NotInitialized,
}

impl From<serde_json::Error> for GreatPeopleError {
    fn from(err: serde_json::Error) -> Self {
        GreatPeopleError::Deserialization(err.to_string())
    }
}

impl From<std::io::Error> for GreatPeopleError {
    fn from(err: std::io::Error) -> Self {
        GreatPeopleError::Persistence(err.to_string())
    }
}

/// Result type alias for the great people core
pub type Result<T> = std::result::Result<T, GreatPeopleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GreatPeopleError::NotFound(GreatPersonId::from("Plato"));
        assert_eq!(err.to_string(), "Great person not found: Plato");

        let err = GreatPeopleError::InvalidChoice("queue is empty".to_string());
        assert_eq!(err.to_string(), "Invalid choice: queue is empty");
    }

    #[test]
    fn test_from_serde_json() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: GreatPeopleError = parse.unwrap_err().into();
        assert!(matches!(err, GreatPeopleError::Deserialization(_)));
    }
}
