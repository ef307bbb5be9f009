//! Request lifecycle: begin, await, settle.
//!
//! [`request_explanation`] drives one explanation request against a store.
//! The begin action is dispatched first, so observers see the pending state
//! immediately. The store lock is released while the source is awaited and
//! exactly one settle action is dispatched afterwards. Transport and
//! endpoint failures settle identically, as a rejected state carrying
//! [`ExplainError::user_message`]. There is no retry.

use std::future::Future;

use tutor_store::{ExplanationHost, ExplanationPhase, RequestTicket, StoreHandle};

use crate::client::ExplainClient;
use crate::error::{ExplainError, Result};
use crate::wire::ExplainRequest;

/// Something that can turn a request into explanation text.
pub trait ExplanationSource {
    /// Produce the explanation for `request`.
    fn explain(&self, request: &ExplainRequest) -> impl Future<Output = Result<String>> + Send;
}

impl ExplanationSource for ExplainClient {
    fn explain(&self, request: &ExplainRequest) -> impl Future<Output = Result<String>> + Send {
        ExplainClient::explain(self, request)
    }
}

/// What happened to one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// The outcome was applied; `phase` is fulfilled or rejected.
    Applied {
        ticket: RequestTicket,
        phase: ExplanationPhase,
    },
    /// A newer request was started first; the outcome was dropped.
    Superseded { ticket: RequestTicket },
    /// The begin action did not start a request; nothing was sent.
    NotStarted,
}

impl Settlement {
    /// Whether the outcome reached the store.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Run one explanation request against `handle`.
///
/// `begin` must be the state's begin-explanation action.
pub async fn request_explanation<S, Src>(
    handle: &StoreHandle<S>,
    source: &Src,
    begin: S::Action,
    request: &ExplainRequest,
) -> Settlement
where
    S: ExplanationHost,
    Src: ExplanationSource,
{
    let Some(ticket) = handle.with(|store| store.begin_explanation(begin)) else {
        return Settlement::NotStarted;
    };
    tracing::info!(%ticket, "Explanation request started");

    let outcome = source
        .explain(request)
        .await
        .map_err(|err: ExplainError| {
            tracing::warn!(%ticket, error = %err, "Explanation request failed");
            err.user_message().to_string()
        });

    let (applied, phase) = handle.with(|store| {
        let applied = store.settle_explanation(ticket, outcome);
        (applied, store.state().explanation().phase())
    });

    if applied {
        tracing::info!(%ticket, %phase, "Explanation request settled");
        Settlement::Applied { ticket, phase }
    } else {
        tracing::debug!(%ticket, "Explanation request superseded");
        Settlement::Superseded { ticket }
    }
}
