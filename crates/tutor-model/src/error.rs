//! Error types for model parsing.

use thiserror::Error;

/// Errors raised at the string boundary of the model.
///
/// These indicate a caller contract violation (a transition or kind name
/// that the closed vocabulary does not contain), never a user condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// Block kind name outside the closed enumeration.
    #[error("unknown block kind: {0}")]
    UnknownKind(String),

    /// Transition name outside the closed action vocabulary.
    #[error("unhandled transition type: {0}")]
    UnknownTransition(String),

    /// Transition was named correctly but its arguments were malformed.
    #[error("malformed arguments for {transition}: {reason}")]
    MalformedTransition {
        /// Transition name.
        transition: String,
        /// What was wrong with the arguments.
        reason: String,
    },

    /// Block id that is not a valid identifier.
    #[error("invalid block id: {0}")]
    InvalidBlockId(String),

    /// Page name outside the known pages.
    #[error("unknown page: {0}")]
    UnknownPage(String),
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ModelError::UnknownTransition("FLY".to_string()).to_string(),
            "unhandled transition type: FLY"
        );
        let err = ModelError::MalformedTransition {
            transition: "REMOVE_BLOCK".to_string(),
            reason: "missing id".to_string(),
        };
        assert!(err.to_string().contains("missing id"));
    }
}
