//! Prompt redaction for log output.
//!
//! Prompts and explanation text are learner content. They only reach the
//! logs when prompt logging has been switched on explicitly.

use std::sync::atomic::{AtomicBool, Ordering};

static LOG_PROMPTS_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder used when prompt logging is disabled.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Enable or disable logging of prompt and response bodies.
pub fn set_log_prompts(enabled: bool) {
    LOG_PROMPTS_ENABLED.store(enabled, Ordering::Release);
}

/// Returns true if prompt logging is explicitly enabled.
pub fn log_prompts_enabled() -> bool {
    LOG_PROMPTS_ENABLED.load(Ordering::Acquire)
}

/// Returns the input when prompt logging is enabled, otherwise a redacted token.
pub fn redact(value: &str) -> &str {
    if log_prompts_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}
