// Screen layout and click routing
//
// One place computes where every panel lives for the current frame; the same
// rectangles are used to draw and to resolve mouse clicks, so a click always
// lands on what the user saw.

use crate::controller::ClickTarget;
use crate::tui::components::autocomplete::AutocompleteView;
use crate::tui::components::selection_list::SelectionView;
use crate::tui::traits::Clickable;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Responsive breakpoint for width-dependent rendering decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: Split pane, minimal terminal
    Compact,
    /// 60-99 cols: Half-screen
    Normal,
    /// 100+ cols: Full terminal
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }
}

/// Rectangles for every panel in one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub input: Rect,
    pub selection: Rect,
    pub logs: Option<Rect>,
    pub status: Rect,
    /// Overlay directly under the input; zero-height when hidden
    pub dropdown: Rect,
}

impl ScreenLayout {
    /// Split `area` into panels
    ///
    /// ```text
    /// ┌ title ─────────────┐
    /// ┌ input ─────────────┐
    /// │ dropdown overlay   │  (drawn over the selection list)
    /// ┌ selection ─────────┐
    /// ┌ logs (optional) ───┐
    /// ─ status ────────────
    /// ```
    pub fn compute(area: Rect, dropdown_height: u16, show_logs: bool) -> Self {
        let mut constraints = vec![
            Constraint::Length(3), // Title
            Constraint::Length(3), // Input
            Constraint::Min(3),    // Selection list
        ];
        if show_logs {
            constraints.push(Constraint::Percentage(30));
        }
        constraints.push(Constraint::Length(2)); // Status

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let (logs, status) = if show_logs {
            (Some(chunks[3]), chunks[4])
        } else {
            (None, chunks[3])
        };

        let input = chunks[1];
        let dropdown_top = input.y + input.height;
        let room = area.bottom().saturating_sub(dropdown_top);
        let dropdown = Rect {
            x: input.x,
            y: dropdown_top,
            width: input.width,
            height: dropdown_height.min(room),
        };

        Self {
            title: chunks[0],
            input,
            selection: chunks[2],
            logs,
            status,
            dropdown,
        }
    }

    /// Resolve a click at `position` against what was drawn
    ///
    /// The dropdown overlays the selection list, so it is checked first.
    pub fn classify(
        &self,
        position: Position,
        autocomplete: &AutocompleteView,
        selection: &SelectionView,
    ) -> ClickTarget {
        if autocomplete.is_visible() && self.dropdown.contains(position) {
            return match autocomplete.hit_test(self.dropdown, position) {
                Some(index) => ClickTarget::DropdownRow(index),
                None => ClickTarget::Inside,
            };
        }

        if self.input.contains(position) {
            return ClickTarget::Inside;
        }

        if self.selection.contains(position) {
            if let Some(id) = selection.hit_test(self.selection, position) {
                return ClickTarget::RemoveControl(id);
            }
        }

        ClickTarget::Outside
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchResultItem;
    use crate::selection::SelectedRepo;

    fn dropdown_with(n: u64) -> AutocompleteView {
        let mut view = AutocompleteView::default();
        view.set_items(
            (1..=n)
                .map(|id| SearchResultItem {
                    id,
                    name: format!("repo{}", id),
                    owner: "octo".to_string(),
                    stars: id,
                })
                .collect(),
        );
        view
    }

    fn selection_with(ids: &[u64]) -> SelectionView {
        let entries: Vec<SelectedRepo> = ids
            .iter()
            .map(|&id| SelectedRepo {
                id,
                name: format!("sel{}", id),
                owner: "octo".to_string(),
                stars: 1,
            })
            .collect();
        let mut view = SelectionView::new();
        view.sync_entries(&entries);
        view
    }

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
        assert!(Breakpoint::Wide.at_least(Breakpoint::Normal));
        assert!(!Breakpoint::Compact.at_least(Breakpoint::Normal));
    }

    #[test]
    fn test_compute_stacks_panels() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 24), 0, false);

        assert_eq!(layout.title, Rect::new(0, 0, 80, 3));
        assert_eq!(layout.input, Rect::new(0, 3, 80, 3));
        assert_eq!(layout.selection, Rect::new(0, 6, 80, 16));
        assert_eq!(layout.status, Rect::new(0, 22, 80, 2));
        assert!(layout.logs.is_none());
        assert_eq!(layout.dropdown.y, 6);
        assert_eq!(layout.dropdown.height, 0);
    }

    #[test]
    fn test_compute_with_logs() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 40), 7, true);
        let logs = layout.logs.unwrap();

        assert_eq!(logs.bottom(), layout.status.y);
        assert_eq!(layout.selection.bottom(), logs.y);
        assert_eq!(layout.dropdown, Rect::new(0, 6, 80, 7));
    }

    #[test]
    fn test_dropdown_clipped_to_screen() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 10), 7, false);
        assert_eq!(layout.dropdown.y, 6);
        assert_eq!(layout.dropdown.height, 4);
    }

    #[test]
    fn test_classify_dropdown_rows() {
        let autocomplete = dropdown_with(3);
        let selection = selection_with(&[]);
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 24), autocomplete.height(), false);

        // Rows start one line under the dropdown's top border
        assert_eq!(
            layout.classify(Position::new(10, 7), &autocomplete, &selection),
            ClickTarget::DropdownRow(0)
        );
        assert_eq!(
            layout.classify(Position::new(10, 9), &autocomplete, &selection),
            ClickTarget::DropdownRow(2)
        );
        assert_eq!(
            layout.classify(Position::new(10, 6), &autocomplete, &selection),
            ClickTarget::Inside
        );
    }

    #[test]
    fn test_classify_input_and_outside() {
        let autocomplete = dropdown_with(3);
        let selection = selection_with(&[]);
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 24), autocomplete.height(), false);

        assert_eq!(
            layout.classify(Position::new(5, 4), &autocomplete, &selection),
            ClickTarget::Inside
        );
        assert_eq!(
            layout.classify(Position::new(5, 1), &autocomplete, &selection),
            ClickTarget::Outside
        );
        // Below the dropdown, inside the selection panel
        assert_eq!(
            layout.classify(Position::new(5, 15), &autocomplete, &selection),
            ClickTarget::Outside
        );
    }

    #[test]
    fn test_classify_remove_control() {
        let mut autocomplete = dropdown_with(1);
        autocomplete.hide();
        let selection = selection_with(&[42, 7]);
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 24), autocomplete.height(), false);

        // Selection inner rows start at y=7; control is in the last 3 inner columns
        assert_eq!(
            layout.classify(Position::new(77, 7), &autocomplete, &selection),
            ClickTarget::RemoveControl(42)
        );
        assert_eq!(
            layout.classify(Position::new(78, 8), &autocomplete, &selection),
            ClickTarget::RemoveControl(7)
        );
        assert_eq!(
            layout.classify(Position::new(20, 8), &autocomplete, &selection),
            ClickTarget::Outside
        );
    }

    #[test]
    fn test_hidden_dropdown_does_not_catch_clicks() {
        let mut autocomplete = dropdown_with(3);
        let selection = selection_with(&[42]);
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 24), autocomplete.height(), false);
        autocomplete.hide();

        // Same cell as the first dropdown row, now the first selection row's control
        assert_eq!(
            layout.classify(Position::new(77, 7), &autocomplete, &selection),
            ClickTarget::RemoveControl(42)
        );
    }
}
