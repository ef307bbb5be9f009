//! JSON bodies exchanged with the explanation endpoint.

use serde::{Deserialize, Serialize};
use tutor_model::{Concept, DEFAULT_SYSTEM_PROMPT};

use crate::error::FALLBACK_ERROR_MESSAGE;

/// Request body: the learner-facing prompt and the tutor persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainRequest {
    pub user_prompt: String,
    pub system_prompt: String,
}

impl ExplainRequest {
    pub fn new(user_prompt: impl Into<String>, system_prompt: impl Into<String>) -> Self {
        Self {
            user_prompt: user_prompt.into(),
            system_prompt: system_prompt.into(),
        }
    }

    /// Request for a catalog concept with the default tutor persona.
    #[must_use]
    pub fn for_concept(concept: &Concept) -> Self {
        Self::new(concept.prompt, DEFAULT_SYSTEM_PROMPT)
    }
}

/// Success body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub text: String,
}

/// Failure body. The `error` field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ExplainErrorBody {
    /// Parse a failure body leniently; anything unreadable counts as empty.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// The reported message, or the fallback when none was given.
    #[must_use]
    pub fn into_message(self) -> String {
        self.error
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_is_camel_case() {
        let request = ExplainRequest::new("What is JSX?", "Be brief.");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["userPrompt"], "What is JSX?");
        assert_eq!(json["systemPrompt"], "Be brief.");
    }

    #[test]
    fn test_request_for_concept() {
        let concept = tutor_model::find_concept("props").unwrap();
        let request = ExplainRequest::for_concept(concept);
        assert_eq!(request.user_prompt, concept.prompt);
        assert_eq!(request.system_prompt, DEFAULT_SYSTEM_PROMPT);
    }

    #[test]
    fn test_error_body_message() {
        assert_eq!(
            ExplainErrorBody::parse(r#"{"error":"Quota exceeded"}"#).into_message(),
            "Quota exceeded"
        );
        assert_eq!(
            ExplainErrorBody::parse("{}").into_message(),
            FALLBACK_ERROR_MESSAGE
        );
        assert_eq!(
            ExplainErrorBody::parse("<html>Bad Gateway</html>").into_message(),
            FALLBACK_ERROR_MESSAGE
        );
        assert_eq!(
            ExplainErrorBody::parse(r#"{"error":""}"#).into_message(),
            FALLBACK_ERROR_MESSAGE
        );
    }
}
