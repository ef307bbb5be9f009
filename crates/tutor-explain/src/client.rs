//! HTTP client for the explanation endpoint.

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};

use crate::config::ExplainSettings;
use crate::error::{ExplainError, Result};
use crate::redact::redact;
use crate::wire::{ExplainErrorBody, ExplainRequest, ExplainResponse};

/// User agent string for endpoint requests.
const USER_AGENT_VALUE: &str = concat!("blueprint-tutor/", env!("CARGO_PKG_VERSION"));

/// Client for one explanation endpoint.
#[derive(Debug, Clone)]
pub struct ExplainClient {
    client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl ExplainClient {
    /// Creates a client from settings.
    ///
    /// Fails with [`ExplainError::Config`] when the endpoint is not a valid
    /// URL or the HTTP client cannot be built.
    pub fn new(settings: &ExplainSettings) -> Result<Self> {
        let endpoint = reqwest::Url::parse(&settings.endpoint).map_err(|e| {
            ExplainError::Config(format!("invalid endpoint {:?}: {e}", settings.endpoint))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ExplainError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, endpoint })
    }

    /// Endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Sends one explanation request and returns the explanation text.
    pub async fn explain(&self, request: &ExplainRequest) -> Result<String> {
        tracing::debug!(
            endpoint = %self.endpoint,
            user_prompt = redact(&request.user_prompt),
            "Requesting explanation"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;
        let text = self.handle_response(response).await?;

        tracing::debug!(
            chars = text.chars().count(),
            text = redact(&text),
            "Explanation received"
        );
        Ok(text)
    }

    /// Checks the status and parses the body.
    async fn handle_response(&self, response: reqwest::Response) -> Result<String> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status, &body));
        }

        let body = response.text().await?;
        let parsed: ExplainResponse = serde_json::from_str(&body)?;
        Ok(parsed.text)
    }
}

/// Maps a non-success response to an error, using the body's message if any.
fn api_error(status: StatusCode, body: &str) -> ExplainError {
    let message = ExplainErrorBody::parse(body).into_message();
    tracing::warn!(status = status.as_u16(), %message, "Explanation endpoint error");
    ExplainError::Api {
        status: status.as_u16(),
        message,
    }
}
