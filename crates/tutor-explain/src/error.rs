//! Error types for the explanation client.

use thiserror::Error;

/// Message used when the endpoint rejects a request without saying why.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to generate explanation";

/// Errors that can occur while requesting an explanation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ExplainError {
    /// The endpoint could not be reached or the request timed out.
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("explanation endpoint returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the response body, or the fallback message.
        message: String,
    },

    /// A success response whose body was not the expected JSON.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The client could not be built from its settings.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ExplainError {
    /// Human-readable message stored in the rejected explanation state.
    ///
    /// Endpoint-reported messages are shown as-is, so transport and
    /// application failures read alike to the learner.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Api { message, .. } => message,
            Self::Network(_) => {
                "Could not reach the explanation service. Please check your connection."
            }
            Self::InvalidResponse(_) => "The explanation service sent an unreadable reply.",
            Self::Config(_) => "The explanation service is not configured correctly.",
        }
    }

}

impl From<reqwest::Error> for ExplainError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else if err.is_builder() {
            Self::Config(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ExplainError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

/// Result type alias for explanation operations.
pub type Result<T> = std::result::Result<T, ExplainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let err = ExplainError::Api {
            status: 500,
            message: "Model overloaded".to_string(),
        };
        assert_eq!(err.user_message(), "Model overloaded");

        let err = ExplainError::Network("connection refused".to_string());
        assert!(err.user_message().contains("check your connection"));
    }

    #[test]
    fn test_display() {
        let err = ExplainError::Api {
            status: 502,
            message: FALLBACK_ERROR_MESSAGE.to_string(),
        };
        assert_eq!(
            err.to_string(),
            "explanation endpoint returned 502: Failed to generate explanation"
        );
    }
}
