//! Error types for the dashboard client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Api Error Enum ==
/// Unified error type for the dashboard client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Any failed HTTP call; carries the raw transport message
    #[error("{0}")]
    Transport(String),

    /// Request URL could not be resolved against the base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Filter field outside the declared set
    #[error("Unknown filter field: {0}")]
    UnknownFilter(String),
}

impl ApiError {
    /// Returns the message recorded in the outcome log for this error.
    pub fn message(&self) -> String {
        match self {
            ApiError::Transport(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the dashboard client.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_display_is_raw_message() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.message(), "connection refused");
    }

    #[test]
    fn test_invalid_url_message() {
        let err = ApiError::InvalidUrl("relative URL without a base".to_string());
        assert_eq!(err.message(), "Invalid URL: relative URL without a base");
    }
}
