//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the full config as a commented TOML document
    pub fn to_toml(&self) -> String {
        format!(
            r#"# repofind configuration

# Repository search API base URL
api_url = {api_url}

# User-Agent sent with every request
user_agent = {user_agent}

# Request timeout in seconds (0 = no timeout)
request_timeout_secs = {timeout}

# Color theme: dark, light
theme = {theme}

# Input and dropdown behavior
[widget]
# Quiet period after the last keystroke before searching
debounce_ms = {debounce_ms}
# Ignore a space typed into an empty input
suppress_leading_space = {suppress}
# Maximum dropdown rows
max_suggestions = {max_suggestions}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# File logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            api_url = quoted(&self.api_url),
            user_agent = quoted(&self.user_agent),
            timeout = self.request_timeout_secs,
            theme = quoted(&self.theme),
            debounce_ms = self.widget.debounce_ms,
            suppress = self.widget.suppress_leading_space,
            max_suggestions = self.widget.max_suggestions,
            log_level = quoted(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = quoted(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = quoted(&self.logging.file_prefix),
        )
    }
}

/// TOML string literal for `value`, escaped by the toml crate
fn quoted(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
