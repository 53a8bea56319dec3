//! Widget behavior: debounce timing, keystroke policy, dropdown size

use serde::Deserialize;
use std::time::Duration;

/// Input and dropdown behavior
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    /// Quiet period after the last keystroke before a search is issued
    pub debounce_ms: u64,

    /// Drop a space typed into an empty input instead of scheduling a search
    pub suppress_leading_space: bool,

    /// Maximum number of dropdown rows
    pub max_suggestions: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            suppress_leading_space: false,
            max_suggestions: 5,
        }
    }
}

/// Widget settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileWidget {
    pub debounce_ms: Option<u64>,
    pub suppress_leading_space: Option<bool>,
    pub max_suggestions: Option<usize>,
}

impl WidgetConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileWidget>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            debounce_ms: file.debounce_ms.unwrap_or(defaults.debounce_ms),
            suppress_leading_space: file
                .suppress_leading_space
                .unwrap_or(defaults.suppress_leading_space),
            // A zero-row dropdown could never show anything
            max_suggestions: file
                .max_suggestions
                .filter(|&n| n > 0)
                .unwrap_or(defaults.max_suggestions),
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
