// Theme system for the TUI
//
// Two built-in palettes selected by name from config. Each theme defines
// colors for every UI element the widget draws.

use crate::logging::LogLevel;
use ratatui::style::{Color, Modifier, Style};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// Parse a theme name from config; unknown names fall back to dark
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            _ => ThemeKind::Dark,
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,

    // Title and status
    pub title: Color,
    pub status_bar: Color,

    // Input
    pub placeholder: Color,

    // Dropdown
    pub dropdown_bg: Color,
    pub dropdown_fg: Color,

    // Selection list
    pub repo_name: Color,
    pub repo_owner: Color,
    pub stars: Color,
    pub remove: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            border: Color::Gray,
            border_focused: Color::Cyan,

            title: Color::Cyan,
            status_bar: Color::Green,

            placeholder: Color::DarkGray,

            dropdown_bg: Color::Rgb(30, 30, 40),
            dropdown_fg: Color::White,

            repo_name: Color::White,
            repo_owner: Color::Gray,
            stars: Color::Yellow,
            remove: Color::Red,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            border: Color::DarkGray,
            border_focused: Color::Blue,

            title: Color::Blue,
            status_bar: Color::DarkGray,

            placeholder: Color::Gray,

            dropdown_bg: Color::Rgb(235, 235, 245),
            dropdown_fg: Color::Black,

            repo_name: Color::Black,
            repo_owner: Color::DarkGray,
            stars: Color::Rgb(184, 134, 11), // Dark goldenrod
            remove: Color::Red,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11),
            log_info: Color::Blue,
            log_debug: Color::Gray,
        }
    }

    /// Style for a log line at `level`
    pub fn log_style(&self, level: LogLevel) -> Style {
        match level {
            LogLevel::Error => Style::default()
                .fg(self.log_error)
                .add_modifier(Modifier::BOLD),
            LogLevel::Warn => Style::default().fg(self.log_warn),
            LogLevel::Info => Style::default().fg(self.log_info),
            LogLevel::Debug | LogLevel::Trace => Style::default().fg(self.log_debug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_theme_names() {
        assert_eq!(ThemeKind::parse("light"), ThemeKind::Light);
        assert_eq!(ThemeKind::parse(" Light "), ThemeKind::Light);
        assert_eq!(ThemeKind::parse("dark"), ThemeKind::Dark);
        assert_eq!(ThemeKind::parse("solarized"), ThemeKind::Dark);
    }
}
