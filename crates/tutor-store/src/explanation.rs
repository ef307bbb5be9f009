//! Explanation request sub-state.
//!
//! Tracks the outcome of the most recent outbound explanation request:
//!
//! ```text
//! idle --begin--> pending --success--> fulfilled
//!                         --failure--> rejected
//! fulfilled | rejected --clear--> idle
//! fulfilled | rejected --begin--> pending
//! ```
//!
//! Each `begin` issues a [`RequestTicket`] from a monotonic counter. A
//! settlement is applied only when it carries the most recent ticket, so a
//! slow response to an older request can never overwrite a newer one. Each
//! ticket settles at most once. `clear` does not cancel anything: a late
//! response to the current request still lands after the result was
//! dismissed.

use std::fmt;

use serde::Serialize;

/// Identifies one started explanation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestTicket(u64);

impl RequestTicket {
    /// Generation number of this request.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Phase of the explanation sub-state, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplanationPhase {
    Idle,
    Pending,
    Fulfilled,
    Rejected,
}

impl ExplanationPhase {
    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Fulfilled => "fulfilled",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ExplanationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Exactly one of idle, pending, fulfilled, or rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "value", rename_all = "snake_case")]
pub enum ExplanationState {
    #[default]
    Idle,
    Pending,
    /// Explanation text returned by the endpoint.
    Fulfilled(String),
    /// Human-readable failure message.
    Rejected(String),
}

/// Explanation sub-state plus the request generation counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Explanation {
    state: ExplanationState,
    generation: u64,
    #[serde(skip)]
    settled: bool,
}

impl Explanation {
    /// Current sub-state.
    #[must_use]
    pub fn state(&self) -> &ExplanationState {
        &self.state
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> ExplanationPhase {
        match self.state {
            ExplanationState::Idle => ExplanationPhase::Idle,
            ExplanationState::Pending => ExplanationPhase::Pending,
            ExplanationState::Fulfilled(_) => ExplanationPhase::Fulfilled,
            ExplanationState::Rejected(_) => ExplanationPhase::Rejected,
        }
    }

    /// True only between request start and settlement.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, ExplanationState::Pending)
    }

    /// Explanation text; empty unless fulfilled.
    #[must_use]
    pub fn text(&self) -> &str {
        match &self.state {
            ExplanationState::Fulfilled(text) => text,
            _ => "",
        }
    }

    /// Failure message, if rejected.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ExplanationState::Rejected(message) => Some(message),
            _ => None,
        }
    }

    /// Ticket of the most recently started request, if any.
    #[must_use]
    pub fn current_ticket(&self) -> Option<RequestTicket> {
        (self.generation > 0).then_some(RequestTicket(self.generation))
    }

    /// Whether a settlement carrying `ticket` would be applied.
    #[must_use]
    pub fn accepts(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.generation && !self.settled
    }

    /// Enter pending, clearing any prior text or error.
    pub fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        self.settled = false;
        self.state = ExplanationState::Pending;
        RequestTicket(self.generation)
    }

    /// Apply a settlement.
    ///
    /// Returns `false` when `ticket` belongs to a superseded request or was
    /// already settled; the state is left untouched in that case.
    pub fn settle(&mut self, ticket: RequestTicket, outcome: Result<String, String>) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(
                "Dropping stale explanation settlement {} (current #{})",
                ticket,
                self.generation
            );
            return false;
        }
        if self.settled {
            tracing::debug!("Dropping repeated explanation settlement {}", ticket);
            return false;
        }
        self.settled = true;
        self.state = match outcome {
            Ok(text) => ExplanationState::Fulfilled(text),
            Err(message) => ExplanationState::Rejected(message),
        };
        true
    }

    /// Return to idle regardless of the current sub-state.
    pub fn clear(&mut self) {
        self.state = ExplanationState::Idle;
    }
}
