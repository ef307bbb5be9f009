//! Tutor Bot message log.
//!
//! Each page owns its own log, so messages never bleed between pages.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Number of messages kept per log.
pub const TUTOR_LOG_CAPACITY: usize = 10;

/// One narration entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TutorMessage {
    /// Unique per message.
    pub id: Uuid,
    /// Concept being illustrated (e.g. "useEffect", "Diffing").
    pub concept: String,
    /// Short headline of what happened.
    pub event: String,
    /// Longer explanation of why.
    pub explanation: String,
    /// When the message was created.
    pub timestamp: DateTime<Utc>,
}

impl TutorMessage {
    /// Create a message stamped with the current time.
    pub fn new(
        concept: impl Into<String>,
        event: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            concept: concept.into(),
            event: event.into(),
            explanation: explanation.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Bounded log, newest message first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TutorLog {
    messages: VecDeque<TutorMessage>,
}

impl TutorLog {
    /// Prepend a message, dropping the oldest beyond capacity.
    pub fn push(&mut self, message: TutorMessage) {
        tracing::trace!(concept = %message.concept, event = %message.event, "tutor message");
        self.messages.push_front(message);
        self.messages.truncate(TUTOR_LOG_CAPACITY);
    }

    /// Messages, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &TutorMessage> {
        self.messages.iter()
    }

    /// Most recent message.
    pub fn latest(&self) -> Option<&TutorMessage> {
        self.messages.front()
    }

    /// Number of messages held.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the log holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop every message.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
