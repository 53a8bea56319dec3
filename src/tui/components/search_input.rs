//! Search input line
//!
//! Single-line text box with a placeholder. The value lives in the
//! controller; this component only draws it and places the cursor.

use crate::tui::traits::{Component, ComponentId, RenderContext};
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const PLACEHOLDER: &str = "Type a repository name...";

pub struct SearchInput<'a> {
    value: &'a str,
}

impl<'a> SearchInput<'a> {
    pub fn new(value: &'a str) -> Self {
        Self { value }
    }

    /// The tail of the value that fits in `width` columns, leaving one for the cursor
    fn visible_tail(&self, width: usize) -> &'a str {
        let budget = width.saturating_sub(1);
        if self.value.width() <= budget {
            return self.value;
        }

        let mut used = 0;
        let mut start = self.value.len();
        for (idx, ch) in self.value.char_indices().rev() {
            let w = ch.width().unwrap_or(0);
            if used + w > budget {
                break;
            }
            used += w;
            start = idx;
        }
        &self.value[start..]
    }
}

impl Component for SearchInput<'_> {
    fn id(&self) -> ComponentId {
        ComponentId::SearchInput
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ctx.theme.border_focused))
            .title(" Search ");
        let inner = block.inner(area);

        let text = if self.value.is_empty() {
            Span::styled(PLACEHOLDER, Style::default().fg(ctx.theme.placeholder))
        } else {
            Span::styled(
                self.visible_tail(inner.width as usize),
                Style::default().fg(ctx.theme.fg),
            )
        };

        f.render_widget(Paragraph::new(text).block(block), area);

        let typed = if self.value.is_empty() {
            0
        } else {
            self.visible_tail(inner.width as usize).width() as u16
        };
        f.set_cursor_position(Position::new(inner.x + typed, inner.y));
    }
}
