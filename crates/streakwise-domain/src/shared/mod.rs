use serde::{Deserialize, Serialize};

/// Identifier of the user an activity event belongs to.
///
/// Wraps the opaque string identifier supplied by the feed producer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn from_string(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl DomainError {
    /// Get error message
    pub fn message(&self) -> &str {
        match self {
            DomainError::InvalidTimestamp(msg)
            | DomainError::EmptyInput(msg)
            | DomainError::UserNotFound(msg)
            | DomainError::Validation(msg)
            | DomainError::Deserialization(msg) => msg,
        }
    }
}
