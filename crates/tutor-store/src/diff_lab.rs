//! Virtual DOM diff lab.
//!
//! A scripted animation of a render update, not a reconciliation algorithm.
//! Changing the UI snapshot walks a fixed three-phase cycle:
//!
//! ```text
//! Idle --update--> Diffing --1500ms--> Patching --1000ms--> Idle
//! ```
//!
//! Every step narrates itself into the lab's [`TutorLog`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::tutor::{TutorLog, TutorMessage};

/// The two props rendered by the lab's tiny component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSnapshot {
    pub text: String,
    pub color: String,
}

impl UiSnapshot {
    pub fn new(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: color.into(),
        }
    }
}

impl Default for UiSnapshot {
    fn default() -> Self {
        Self::new("Hello", "bg-blue-500")
    }
}

/// Animation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffPhase {
    #[default]
    Idle,
    Diffing,
    Patching,
}

impl DiffPhase {
    /// How long this phase lasts before advancing; `None` for idle.
    #[must_use]
    pub fn delay(&self, delays: &DiffDelays) -> Option<Duration> {
        match self {
            Self::Idle => None,
            Self::Diffing => Some(delays.diffing),
            Self::Patching => Some(delays.patching),
        }
    }
}

/// Phase durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffDelays {
    pub diffing: Duration,
    pub patching: Duration,
}

impl DiffDelays {
    /// Zero-length phases, for non-interactive runs.
    pub const INSTANT: Self = Self {
        diffing: Duration::ZERO,
        patching: Duration::ZERO,
    };
}

impl Default for DiffDelays {
    fn default() -> Self {
        Self {
            diffing: Duration::from_millis(1500),
            patching: Duration::from_millis(1000),
        }
    }
}

/// Lab state: the current and previous snapshot plus the animation phase.
#[derive(Debug, Clone, Default)]
pub struct DiffLab {
    current: UiSnapshot,
    previous: UiSnapshot,
    phase: DiffPhase,
    log: TutorLog,
}

impl DiffLab {
    pub fn new(initial: UiSnapshot) -> Self {
        Self {
            previous: initial.clone(),
            current: initial,
            phase: DiffPhase::Idle,
            log: TutorLog::default(),
        }
    }

    pub fn current(&self) -> &UiSnapshot {
        &self.current
    }

    pub fn previous(&self) -> &UiSnapshot {
        &self.previous
    }

    pub fn phase(&self) -> DiffPhase {
        self.phase
    }

    pub fn log(&self) -> &TutorLog {
        &self.log
    }

    /// Names of the props that differ between previous and current.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut changes = Vec::new();
        if self.current.text != self.previous.text {
            changes.push("text");
        }
        if self.current.color != self.previous.color {
            changes.push("color");
        }
        changes
    }

    /// Request a re-render with `next`. Restarts the cycle if one is running.
    pub fn update(&mut self, next: UiSnapshot) {
        self.log.push(TutorMessage::new(
            "State Change",
            "State is changing!",
            "You clicked a button! This called 'setUiState' to request a UI update.",
        ));
        self.previous = std::mem::replace(&mut self.current, next);
        self.enter(DiffPhase::Diffing);
    }

    /// Move to the next phase. Idle stays idle.
    pub fn advance(&mut self) -> DiffPhase {
        match self.phase {
            DiffPhase::Idle => {}
            DiffPhase::Diffing => self.enter(DiffPhase::Patching),
            DiffPhase::Patching => self.enter(DiffPhase::Idle),
        }
        self.phase
    }

    fn enter(&mut self, phase: DiffPhase) {
        tracing::debug!(from = ?self.phase, to = ?phase, "diff lab phase");
        self.phase = phase;
        let message = match phase {
            DiffPhase::Diffing => TutorMessage::new(
                "Diffing",
                "Diffing VDOM trees...",
                "React is comparing the \"New VDOM\" to the \"Previous VDOM\" to see what changed.",
            ),
            DiffPhase::Patching => {
                let changes = self.changed_fields();
                let explanation = if changes.is_empty() {
                    "No difference was found, so React leaves the Real DOM alone.".to_string()
                } else {
                    let names: Vec<String> = changes.iter().map(|c| format!("`{c}`")).collect();
                    format!(
                        "A difference was found in {}! React is now updating *only that part* \
                         of the Real DOM.",
                        names.join(" and ")
                    )
                };
                TutorMessage::new("Patch", "Change found! Patching...", explanation)
            }
            DiffPhase::Idle => TutorMessage::new(
                "Patch",
                "Patch complete!",
                "The Real DOM is updated. The \"New VDOM\" now becomes the \"Previous VDOM\" \
                 for the next update.",
            ),
        };
        self.log.push(message);
    }
}

/// Drive the lab from its current phase back to idle, sleeping between phases.
pub async fn run_cycle(lab: &mut DiffLab, delays: &DiffDelays) {
    while let Some(delay) = lab.phase().delay(delays) {
        tokio::time::sleep(delay).await;
        lab.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_enters_diffing() {
        let mut lab = DiffLab::default();
        lab.update(UiSnapshot::new("Hi", "bg-blue-500"));
        assert_eq!(lab.phase(), DiffPhase::Diffing);
        assert_eq!(lab.previous().text, "Hello");
        assert_eq!(lab.changed_fields(), vec!["text"]);
        assert_eq!(lab.log().len(), 2);
    }

    #[test]
    fn test_full_cycle() {
        let mut lab = DiffLab::default();
        lab.update(UiSnapshot::new("Hi", "bg-red-500"));
        assert_eq!(lab.advance(), DiffPhase::Patching);
        assert!(lab.log().latest().unwrap().explanation.contains("`text` and `color`"));
        assert_eq!(lab.advance(), DiffPhase::Idle);
        assert_eq!(lab.log().latest().unwrap().event, "Patch complete!");
        assert_eq!(lab.advance(), DiffPhase::Idle);
        assert_eq!(lab.log().len(), 4);
    }

    #[test]
    fn test_no_change_patch() {
        let mut lab = DiffLab::default();
        lab.update(UiSnapshot::default());
        lab.advance();
        assert!(lab.changed_fields().is_empty());
        assert!(lab.log().latest().unwrap().explanation.starts_with("No difference"));
    }

    #[test]
    fn test_update_mid_cycle_restarts() {
        let mut lab = DiffLab::default();
        lab.update(UiSnapshot::new("A", "bg-blue-500"));
        lab.advance();
        lab.update(UiSnapshot::new("B", "bg-blue-500"));
        assert_eq!(lab.phase(), DiffPhase::Diffing);
        assert_eq!(lab.previous().text, "A");
    }

    #[test]
    fn test_phase_delays() {
        let delays = DiffDelays::default();
        assert_eq!(DiffPhase::Idle.delay(&delays), None);
        assert_eq!(
            DiffPhase::Diffing.delay(&delays),
            Some(Duration::from_millis(1500))
        );
        assert_eq!(
            DiffPhase::Patching.delay(&delays),
            Some(Duration::from_millis(1000))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_cycle_takes_fixed_time() {
        let mut lab = DiffLab::default();
        lab.update(UiSnapshot::new("Bye", "bg-blue-500"));

        let start = tokio::time::Instant::now();
        run_cycle(&mut lab, &DiffDelays::default()).await;

        assert_eq!(lab.phase(), DiffPhase::Idle);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(2500), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(2600), "{elapsed:?}");
    }
}
