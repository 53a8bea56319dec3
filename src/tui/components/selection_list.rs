//! Selection list component
//!
//! Draws the selected repositories, one per row, each with a remove control
//! at the right edge. The view keeps its own copy of the rows and is fully
//! re-synced from the store after every change. The list has no size limit,
//! so the view scrolls once the rows outgrow the panel.

use super::formatters::{format_number, truncate_to_width};
use super::scrollbar::render_scrollbar;
use crate::selection::SelectedRepo;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{Clickable, Component, ComponentId, RenderContext};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const REMOVE_LABEL: &str = "[✕]";
const REMOVE_WIDTH: u16 = 3;

#[derive(Default)]
pub struct SelectionView {
    rows: Vec<SelectedRepo>,

    /// Follows the newest entry until the user scrolls up
    scroll: ScrollState,
}

impl SelectionView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all rows with `entries`
    pub fn sync_entries(&mut self, entries: &[SelectedRepo]) {
        self.rows = entries.to_vec();
        self.scroll
            .update_dimensions(self.rows.len(), self.scroll.viewport());
    }

    /// Record the panel's inner height; call each frame before render
    pub fn set_viewport(&mut self, height: usize) {
        self.scroll.update_dimensions(self.rows.len(), height);
    }

    pub fn scroll_up(&mut self) {
        self.scroll.scroll_up();
    }

    pub fn scroll_down(&mut self) {
        self.scroll.scroll_down();
    }

    pub fn rows(&self) -> &[SelectedRepo] {
        &self.rows
    }

    fn inner(area: Rect) -> Rect {
        Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        }
    }

    /// First row drawn into a panel `height` rows tall
    fn first_visible(&self, height: usize) -> usize {
        self.scroll
            .offset()
            .min(self.rows.len().saturating_sub(height))
    }

    fn row_line(repo: &SelectedRepo, width: usize, ctx: &RenderContext) -> Line<'static> {
        let stars = format!(" ({} ⭐)", format_number(repo.stars));
        // name, " by ", owner, stars, one-column gap, control
        let text_room = width.saturating_sub(4 + stars.width() + 1 + REMOVE_WIDTH as usize);
        let name = truncate_to_width(&repo.name, text_room);
        let owner = truncate_to_width(&repo.owner, text_room.saturating_sub(name.width()));

        let used = name.width() + 4 + owner.width() + stars.width();
        let pad = width.saturating_sub(used + REMOVE_WIDTH as usize);

        Line::from(vec![
            Span::styled(
                name,
                Style::default()
                    .fg(ctx.theme.repo_name)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" by ", Style::default().fg(ctx.theme.placeholder)),
            Span::styled(owner, Style::default().fg(ctx.theme.repo_owner)),
            Span::styled(stars, Style::default().fg(ctx.theme.stars)),
            Span::raw(" ".repeat(pad)),
            Span::styled(REMOVE_LABEL, Style::default().fg(ctx.theme.remove)),
        ])
    }
}

impl Component for SelectionView {
    fn id(&self) -> ComponentId {
        ComponentId::SelectionList
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ctx.theme.border))
            .title(format!(" Selected ({}) ", self.rows().len()));

        if self.rows.is_empty() {
            let empty = Paragraph::new("No repositories selected")
                .style(Style::default().fg(ctx.theme.placeholder))
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let inner = Self::inner(area);
        let height = inner.height as usize;
        let start = self.first_visible(height);
        let end = (start + height).min(self.rows.len());

        let width = inner.width as usize;
        let items: Vec<ListItem> = self.rows[start..end]
            .iter()
            .map(|repo| ListItem::new(Self::row_line(repo, width, ctx)))
            .collect();

        f.render_widget(List::new(items).block(block), area);
        render_scrollbar(f, area, &self.scroll);
    }
}

impl Clickable for SelectionView {
    /// Id of the entry whose remove control was clicked
    type Target = u64;

    fn hit_test(&self, area: Rect, position: Position) -> Option<u64> {
        let inner = Self::inner(area);
        if !inner.contains(position) || inner.width < REMOVE_WIDTH {
            return None;
        }

        let control_x = inner.x + inner.width - REMOVE_WIDTH;
        if position.x < control_x {
            return None;
        }

        let index = self.first_visible(inner.height as usize) + (position.y - inner.y) as usize;
        self.rows.get(index).map(|repo| repo.id)
    }
}
