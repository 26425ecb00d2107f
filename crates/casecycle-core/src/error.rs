//! Error types for the casecycle client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire casecycle client.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum CasecycleError {
    /// Malformed stored JSON or malformed user input
    #[error("Parse error: {0}")]
    Parse(String),

    /// Schema violation detected before submission; reasons are human-readable
    #[error("Validation failed: {}", .reasons.join("; "))]
    Validation { reasons: Vec<String> },

    /// Credential exchange rejected by the service
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Write rejected by the service, with the server's diagnostic text
    #[error("Mutation rejected ({status}): {body}")]
    Mutation { status: u16, body: String },

    /// Read rejected by the service or network unreachable
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CasecycleError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates a Validation error from a list of reasons
    pub fn validation(reasons: Vec<String>) -> Self {
        Self::Validation { reasons }
    }

    /// Creates an Authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    /// Creates a Mutation error carrying the server's response body
    pub fn mutation(status: u16, body: impl Into<String>) -> Self {
        Self::Mutation {
            status,
            body: body.into(),
        }
    }

    /// Creates a Fetch error
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is an Authentication error
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }

    /// Check if this is a Mutation error
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Mutation { .. })
    }

    /// Check if this is a Fetch error
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }

    /// Returns the validation reasons if this is a Validation error.
    pub fn validation_reasons(&self) -> Option<&[String]> {
        match self {
            Self::Validation { reasons } => Some(reasons),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for CasecycleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for CasecycleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for CasecycleError {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(err.to_string())
    }
}

/// A type alias for `Result<T, CasecycleError>`.
pub type Result<T> = std::result::Result<T, CasecycleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_joins_reasons() {
        let err = CasecycleError::validation(vec![
            "tam_estimate must be a number".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: tam_estimate must be a number"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_mutation_carries_server_body() {
        let err = CasecycleError::mutation(422, "name already exists");
        assert_eq!(err.to_string(), "Mutation rejected (422): name already exists");
        assert!(err.is_mutation());
        assert!(!err.is_fetch());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CasecycleError = json_err.into();
        assert!(matches!(err, CasecycleError::Serialization { .. }));
    }
}
