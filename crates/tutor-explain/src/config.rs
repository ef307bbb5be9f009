//! Settings for the explanation client.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tutor_model::DEFAULT_SYSTEM_PROMPT;

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/explain";

/// Request timeout used when none is configured, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User settings for explanation requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplainSettings {
    /// URL the request body is POSTed to.
    pub endpoint: String,

    /// Whole-request timeout. Zero disables the timeout.
    pub timeout_secs: u64,

    /// System prompt sent with every request.
    pub system_prompt: String,
}

impl Default for ExplainSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

impl ExplainSettings {
    /// Request timeout, if enabled.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}
