//! Tutor settings, persisted as TOML.
//!
//! Settings are read once at startup. A missing or unreadable file falls
//! back to defaults so the tutor always starts.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tutor_explain::ExplainSettings;
use tutor_store::{DiffDelays, UiSnapshot};

/// Tutor settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Explanation endpoint settings.
    pub explain: ExplainSettings,

    /// Diff lab settings.
    pub diff_lab: DiffLabSettings,
}

impl Settings {
    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Self::default();
        };
        toml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable settings {}: {e}", path.display());
            Self::default()
        })
    }

    /// Save settings to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {e}"))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {e}"))?;

        std::fs::write(path, content).map_err(|e| format!("Failed to write settings: {e}"))
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "BlueprintTutor", "tutor")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

/// Diff lab timing and starting snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffLabSettings {
    /// Length of the diffing phase in milliseconds.
    pub diffing_ms: u64,
    /// Length of the patching phase in milliseconds.
    pub patching_ms: u64,
    /// Initial text prop.
    pub initial_text: String,
    /// Initial color prop.
    pub initial_color: String,
}

impl Default for DiffLabSettings {
    fn default() -> Self {
        let delays = DiffDelays::default();
        let initial = UiSnapshot::default();
        Self {
            diffing_ms: duration_ms(delays.diffing),
            patching_ms: duration_ms(delays.patching),
            initial_text: initial.text,
            initial_color: initial.color,
        }
    }
}

impl DiffLabSettings {
    /// Phase durations.
    #[must_use]
    pub fn delays(&self) -> DiffDelays {
        DiffDelays {
            diffing: Duration::from_millis(self.diffing_ms),
            patching: Duration::from_millis(self.patching_ms),
        }
    }

    /// Snapshot the lab starts from.
    #[must_use]
    pub fn initial(&self) -> UiSnapshot {
        UiSnapshot::new(&self.initial_text, &self.initial_color)
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
