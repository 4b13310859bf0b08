//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Ignite Call
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum IgniteCallError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Security error: {0}")]
    Security(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IgniteCallError {
    /// Message carried by the variant, without the category prefix.
    ///
    /// Used when the message is shown to end users (e.g. the registration
    /// form alert), where "Conflict: ..." would leak the taxonomy.
    pub fn message(&self) -> &str {
        match self {
            Self::Database(msg)
            | Self::Config(msg)
            | Self::Network(msg)
            | Self::Auth(msg)
            | Self::Security(msg)
            | Self::NotFound(msg)
            | Self::Conflict(msg)
            | Self::InvalidInput(msg)
            | Self::Internal(msg) => msg,
        }
    }
}

/// Result type alias for Ignite Call operations
pub type Result<T> = std::result::Result<T, IgniteCallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category() {
        let err = IgniteCallError::Conflict("Username already taken.".into());
        assert_eq!(err.to_string(), "Conflict: Username already taken.");
        assert_eq!(err.message(), "Username already taken.");
    }

    #[test]
    fn serializes_as_tagged_enum() {
        let err = IgniteCallError::Auth("denied".into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "Auth");
        assert_eq!(json["message"], "denied");
    }
}
