// Title bar component
//
// Renders the app name with a spinner while a search is in flight.

use crate::controller::ControllerState;
use crate::tui::traits::RenderContext;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, ctx: &RenderContext, state: ControllerState) {
    let indicator = match state {
        ControllerState::Suspended => format!(" {} searching", ctx.spinner_char()),
        _ => String::new(),
    };

    let title = Paragraph::new(format!(" 🔍 repofind · GitHub repositories{}", indicator))
        .style(
            Style::default()
                .fg(ctx.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ctx.theme.title)),
        );

    f.render_widget(title, area);
}
