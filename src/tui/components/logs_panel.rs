//! Logs panel component
//!
//! Displays captured tracing events. The panel owns its scroll state and a
//! snapshot of the log buffer taken once per frame; the buffer itself stays
//! shared with the tracing layer.

use super::scrollbar::render_scrollbar;
use crate::logging::LogEntry;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct LogsPanel {
    /// Scroll state (position, viewport, auto-follow)
    scroll: ScrollState,

    entries: Vec<LogEntry>,
}

impl LogsPanel {
    /// Create a new logs panel with auto-follow enabled
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
            entries: Vec::new(),
        }
    }

    /// Take a fresh snapshot of the log buffer; call each frame before render
    pub fn sync_entries(&mut self, entries: Vec<LogEntry>, viewport_height: usize) {
        self.scroll.update_dimensions(entries.len(), viewport_height);
        self.entries = entries;
    }

    pub fn is_following(&self) -> bool {
        self.scroll.auto_follow
    }
}

impl Default for LogsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LogsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Logs
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let (start, end) = self.scroll.visible_range();

        let items: Vec<ListItem> = self.entries[start..end]
            .iter()
            .map(|entry| {
                ListItem::new(format_log_entry(entry)).style(ctx.theme.log_style(entry.level))
            })
            .collect();

        let title = if self.is_following() {
            " System Logs "
        } else {
            " System Logs [scroll] "
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ctx.theme.border))
                .title(title),
        );

        f.render_widget(list, area);
        render_scrollbar(f, area, &self.scroll);
    }
}

impl Interactive for LogsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up => self.scroll.scroll_up(),
            KeyCode::Down => self.scroll.scroll_down(),
            KeyCode::PageUp => self.scroll.page_up(),
            KeyCode::PageDown => self.scroll.page_down(),
            KeyCode::Home => self.scroll.scroll_to_top(),
            KeyCode::End => self.scroll.scroll_to_bottom(),
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓/PgUp/PgDn:scroll logs")
    }
}

/// Format a log entry for display, with the crate prefix dropped from the target
fn format_log_entry(entry: &LogEntry) -> String {
    let target = entry
        .target
        .strip_prefix("repofind::")
        .unwrap_or(&entry.target);
    format!(
        "[{}] {:5} {}: {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        target,
        entry.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use chrono::{TimeZone, Utc};
    use crossterm::event::KeyModifiers;

    fn entries(n: usize) -> Vec<LogEntry> {
        (0..n)
            .map(|i| LogEntry {
                timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 5).unwrap(),
                level: LogLevel::Info,
                target: "repofind::controller".to_string(),
                message: format!("line {}", i),
            })
            .collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_format_log_entry() {
        let entry = &entries(1)[0];
        assert_eq!(format_log_entry(entry), "[12:30:05] INFO  controller: line 0");
    }

    #[test]
    fn test_scroll_keys() {
        let mut panel = LogsPanel::new();
        panel.sync_entries(entries(50), 10);
        assert!(panel.is_following());

        assert_eq!(panel.handle_key(key(KeyCode::PageUp)), Handled::Yes);
        assert!(!panel.is_following());

        // New entries don't yank the view back down
        panel.sync_entries(entries(60), 10);
        assert!(!panel.is_following());

        assert_eq!(panel.handle_key(key(KeyCode::End)), Handled::Yes);
        assert!(panel.is_following());
    }

    #[test]
    fn test_other_keys_bubble_up() {
        let mut panel = LogsPanel::new();
        assert_eq!(panel.handle_key(key(KeyCode::Char('a'))), Handled::No);
        assert_eq!(panel.handle_key(key(KeyCode::Esc)), Handled::No);
    }
}
