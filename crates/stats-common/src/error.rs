//! Error types and utilities for the graph statistics crates.

use thiserror::Error;

/// Result type alias for graph statistics operations.
pub type Result<T> = std::result::Result<T, StatsError>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for graph statistics operations.
#[derive(Error, Debug)]
pub enum StatsError {
    /// Configuration related errors.
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<BoxedSource>,
    },

    /// I/O related errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The request never produced a response (connection refused, timeout, ...).
    #[error("Network error: {message}")]
    Network {
        /// Human readable description.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<BoxedSource>,
    },

    /// The backend answered with a non-success status.
    #[error("unexpected reply: {status_text}")]
    UnexpectedReply {
        /// Numeric HTTP status.
        status: u16,
        /// Reason phrase reported for the status.
        status_text: String,
    },

    /// The response payload could not be decoded.
    #[error("Decode error: {message}")]
    Decode {
        /// Human readable description.
        message: String,
        /// Error raised by the decoder.
        #[source]
        source: Option<BoxedSource>,
    },

    /// Validation errors for user input or configuration values.
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description.
        message: String,
        /// Offending field, if known.
        field: Option<String>,
    },
}

impl StatsError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new network error with source
    pub fn network_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an error for a non-success reply
    pub fn unexpected_reply(status: u16, status_text: impl Into<String>) -> Self {
        Self::UnexpectedReply {
            status,
            status_text: status_text.into(),
        }
    }

    /// Create a new decode error with source
    pub fn decode_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Decode {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error for a specific field
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// HTTP status of a non-success reply, if this is one.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedReply { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_unexpected_reply_message_embeds_status_text() {
        let err = StatsError::unexpected_reply(503, "Service Unavailable");
        assert_eq!(err.to_string(), "unexpected reply: Service Unavailable");
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_source_is_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = StatsError::network_with_source("Request failed", io);
        assert_eq!(err.to_string(), "Network error: Request failed");
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("refused"));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_validation_field() {
        let err = StatsError::validation_field("must be positive", "timeout_secs");
        let StatsError::Validation { field, .. } = err else {
            panic!("unexpected variant: {err:?}");
        };
        assert_eq!(field.as_deref(), Some("timeout_secs"));
    }
}
