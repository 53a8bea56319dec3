// Status bar component
//
// Renders widget state, counts and key hints at the bottom.

use crate::tui::layout::Breakpoint;
use crate::tui::traits::RenderContext;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Values shown in the status line
pub struct StatusInfo<'a> {
    pub state: &'a str,
    pub suggestions: usize,
    pub selected: usize,
    pub show_logs: bool,
    /// Extra hint from the focused panel
    pub hint: Option<&'static str>,
}

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide/Normal: labels and key hints
/// - Compact: counts only
pub fn render(f: &mut Frame, area: Rect, ctx: &RenderContext, info: &StatusInfo) {
    let bp = Breakpoint::from_width(area.width);

    let text = if !bp.at_least(Breakpoint::Normal) {
        format!(
            " {} │ ▾{} │ ✓{}",
            info.state, info.suggestions, info.selected
        )
    } else {
        let logs_hint = if info.show_logs {
            "F2:hide logs"
        } else {
            "F2:logs"
        };
        let mut text = format!(
            " {} │ {} suggestions │ {} selected │ Esc:dismiss  {}  Ctrl+C:quit",
            info.state, info.suggestions, info.selected, logs_hint
        );
        if let (Some(hint), true) = (info.hint, bp.at_least(Breakpoint::Wide)) {
            text.push_str("  ");
            text.push_str(hint);
        }
        text
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(ctx.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
