//! Configuration for the search widget
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/repofind/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod serialization;
mod widget;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use observability::{FileLogging, LogRotation, LoggingConfig};
pub use widget::{FileWidget, WidgetConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default search endpoint base
pub const DEFAULT_API_URL: &str = "https://api.github.com";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the repository search API
    pub api_url: String,

    /// User-Agent header sent with every search (the API rejects requests without one)
    pub user_agent: String,

    /// Per-request timeout in seconds (0 = wait indefinitely)
    pub request_timeout_secs: u64,

    /// Color theme: "dark" or "light"
    pub theme: String,

    /// Input/dropdown behavior
    pub widget: WidgetConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: format!("repofind/{}", VERSION),
            request_timeout_secs: 0,
            theme: "dark".to_string(),
            widget: WidgetConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub user_agent: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub theme: Option<String>,

    /// Optional [widget] section
    pub widget: Option<FileWidget>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/repofind/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("repofind").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        // Config::default().to_toml() is the single source of truth
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn load() -> Result<Self> {
        let file = Self::load_file_config()?;
        Ok(Self::from_sources(file, |key| std::env::var(key).ok()))
    }

    /// Read and parse the config file if it exists
    ///
    /// A missing file means defaults. A file that exists but cannot be read or
    /// parsed is an error: silently falling back would hide the user's typo.
    fn load_file_config() -> Result<FileConfig> {
        let Some(path) = Self::config_path() else {
            return Ok(FileConfig::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse_file_config(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read config file {}", path.display())),
        }
    }

    pub(crate) fn parse_file_config(contents: &str) -> Result<FileConfig> {
        Ok(toml::from_str(contents)?)
    }

    /// Merge file config with environment overrides
    ///
    /// `env` is a lookup function so tests can supply variables without
    /// touching the process environment.
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // API URL: env > file > default
        let api_url = env("REPOFIND_API_URL")
            .or(file.api_url)
            .unwrap_or(defaults.api_url);

        let user_agent = file.user_agent.unwrap_or(defaults.user_agent);

        let request_timeout_secs = file
            .request_timeout_secs
            .unwrap_or(defaults.request_timeout_secs);

        // Theme: env > file > default
        let theme = env("REPOFIND_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Debounce delay: env > file > default (unparseable env values are ignored)
        let mut widget = WidgetConfig::from_file(file.widget);
        if let Some(ms) = env("REPOFIND_DEBOUNCE_MS").and_then(|v| v.parse().ok()) {
            widget.debounce_ms = ms;
        }

        // Log level: env > file > default (RUST_LOG still wins at subscriber level)
        let mut logging = LoggingConfig::from_file(file.logging);
        if let Some(level) = env("REPOFIND_LOG_LEVEL") {
            logging.level = level;
        }

        Self {
            api_url,
            user_agent,
            request_timeout_secs,
            theme,
            widget,
            logging,
        }
    }
}
