//! Autocomplete dropdown component
//!
//! Holds at most `max_rows` suggestion rows and draws them as an overlay
//! directly under the search input. A click on a row yields the item it was
//! built from and hides the dropdown.

use super::formatters::{format_compact_number, truncate_to_width};
use crate::search::SearchResultItem;
use crate::tui::traits::{Clickable, Component, ComponentId, RenderContext};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Default dropdown size
pub const DEFAULT_MAX_ROWS: usize = 5;

pub struct AutocompleteView {
    rows: Vec<SearchResultItem>,
    visible: bool,
    max_rows: usize,
}

impl AutocompleteView {
    pub fn new(max_rows: usize) -> Self {
        Self {
            rows: Vec::new(),
            visible: false,
            max_rows: max_rows.max(1),
        }
    }

    /// Replace the rows with the first `max_rows` items, in the order given
    ///
    /// An empty list hides the dropdown.
    pub fn set_items(&mut self, items: Vec<SearchResultItem>) {
        self.rows.clear();
        if items.is_empty() {
            self.visible = false;
            return;
        }

        self.rows = items;
        self.rows.truncate(self.max_rows);
        self.visible = true;
    }

    /// Hide without clearing; the rows are replaced on the next `set_items`
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn rows(&self) -> &[SearchResultItem] {
        &self.rows
    }

    /// Pick the row at `index`: returns its item and hides the dropdown
    pub fn take_row(&mut self, index: usize) -> Option<SearchResultItem> {
        if !self.visible {
            return None;
        }
        let item = self.rows.get(index).cloned()?;
        self.visible = false;
        Some(item)
    }

    /// Height of the overlay including borders, 0 when hidden
    pub fn height(&self) -> u16 {
        if self.visible {
            self.rows.len() as u16 + 2
        } else {
            0
        }
    }

    fn row_line(item: &SearchResultItem, width: usize, ctx: &RenderContext) -> Line<'static> {
        let stars = format!("★ {}", format_compact_number(item.stars));
        // name, separator, owner, gap, stars
        let label_width = width.saturating_sub(3 + 1 + stars.width());
        let name = truncate_to_width(&item.name, label_width);
        let owner = truncate_to_width(&item.owner, label_width.saturating_sub(name.width()));

        let used = name.width() + 3 + owner.width();
        let pad = width.saturating_sub(used + stars.width());

        Line::from(vec![
            Span::styled(
                name,
                Style::default()
                    .fg(ctx.theme.dropdown_fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" · ", Style::default().fg(ctx.theme.border)),
            Span::styled(owner, Style::default().fg(ctx.theme.repo_owner)),
            Span::raw(" ".repeat(pad)),
            Span::styled(stars, Style::default().fg(ctx.theme.stars)),
        ])
    }
}

impl Default for AutocompleteView {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROWS)
    }
}

impl Component for AutocompleteView {
    fn id(&self) -> ComponentId {
        ComponentId::Autocomplete
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        if !self.visible || area.height < 3 {
            return;
        }

        let inner_width = area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|item| ListItem::new(Self::row_line(item, inner_width, ctx)))
            .collect();

        let list = List::new(items)
            .style(
                Style::default()
                    .bg(ctx.theme.dropdown_bg)
                    .fg(ctx.theme.dropdown_fg),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(ctx.theme.border_focused)),
            );

        // Overlay: wipe whatever the selection list drew underneath
        f.render_widget(Clear, area);
        f.render_widget(list, area);
    }
}

impl Clickable for AutocompleteView {
    /// Index of the clicked row
    type Target = usize;

    fn hit_test(&self, area: Rect, position: Position) -> Option<usize> {
        if !self.visible || !area.contains(position) {
            return None;
        }

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };
        if !inner.contains(position) {
            return None;
        }

        let index = (position.y - inner.y) as usize;
        (index < self.rows.len()).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::Theme;

    fn item(id: u64, name: &str) -> SearchResultItem {
        SearchResultItem {
            id,
            name: name.to_string(),
            owner: format!("owner{}", id),
            stars: id * 100,
        }
    }

    fn items(n: u64) -> Vec<SearchResultItem> {
        (1..=n).map(|i| item(i, &format!("repo{}", i))).collect()
    }

    #[test]
    fn test_caps_rows_and_keeps_order() {
        for n in [1, 3, 5, 30] {
            let mut view = AutocompleteView::default();
            view.set_items(items(n));

            assert!(view.is_visible());
            assert_eq!(view.rows().len(), (n as usize).min(5));
            let ids: Vec<u64> = view.rows().iter().map(|r| r.id).collect();
            let expected: Vec<u64> = (1..=(n.min(5))).collect();
            assert_eq!(ids, expected);
        }
    }

    #[test]
    fn test_empty_items_hide() {
        let mut view = AutocompleteView::default();
        view.set_items(items(3));
        assert!(view.is_visible());

        view.set_items(Vec::new());
        assert!(!view.is_visible());
        assert!(view.rows().is_empty());
        assert_eq!(view.height(), 0);
    }

    #[test]
    fn test_take_row_returns_item_and_hides() {
        let mut view = AutocompleteView::default();
        view.set_items(items(3));

        let picked = view.take_row(1).unwrap();
        assert_eq!(picked.id, 2);
        assert!(!view.is_visible());

        // Hidden dropdown can't be picked from
        assert!(view.take_row(0).is_none());
    }

    #[test]
    fn test_take_row_out_of_range() {
        let mut view = AutocompleteView::default();
        view.set_items(items(2));
        assert!(view.take_row(4).is_none());
        assert!(view.is_visible());
    }

    #[test]
    fn test_hide_leaves_rows_stale() {
        let mut view = AutocompleteView::default();
        view.set_items(items(2));
        view.hide();

        assert!(!view.is_visible());
        assert_eq!(view.rows().len(), 2);
    }

    #[test]
    fn test_hit_test_maps_rows_inside_borders() {
        let mut view = AutocompleteView::default();
        view.set_items(items(3));
        let area = Rect::new(2, 4, 40, view.height());

        // Top border
        assert_eq!(view.hit_test(area, Position::new(10, 4)), None);
        assert_eq!(view.hit_test(area, Position::new(10, 5)), Some(0));
        assert_eq!(view.hit_test(area, Position::new(10, 7)), Some(2));
        // Bottom border
        assert_eq!(view.hit_test(area, Position::new(10, 8)), None);
        // Outside
        assert_eq!(view.hit_test(area, Position::new(10, 20)), None);
    }

    #[test]
    fn test_hit_test_hidden_is_none() {
        let mut view = AutocompleteView::default();
        view.set_items(items(3));
        let area = Rect::new(0, 0, 40, view.height());
        view.hide();
        assert_eq!(view.hit_test(area, Position::new(5, 1)), None);
    }

    #[test]
    fn test_row_fills_width_with_wide_names() {
        let theme = Theme::dark();
        let ctx = RenderContext::new(&theme, 0);
        let wide = SearchResultItem {
            id: 9,
            name: "数据库连接池".to_string(),
            owner: "开源社区".to_string(),
            stars: 12_500,
        };

        for width in [16, 30, 78] {
            let line = AutocompleteView::row_line(&wide, width, &ctx);
            assert_eq!(line.width(), width, "width {}", width);
        }
    }
}
