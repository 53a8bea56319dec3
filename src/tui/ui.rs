// UI rendering
//
// Computes the frame layout, syncs per-frame component state, then draws
// panels back to front. The dropdown is drawn last because it overlays the
// selection list.

use super::app::App;
use super::components::search_input::SearchInput;
use super::components::status_bar::{self, StatusInfo};
use super::components::title_bar;
use super::layout::ScreenLayout;
use super::traits::{Component, Interactive, RenderContext};
use crate::search::RepoSearch;
use ratatui::{style::Style, widgets::Block, Frame};

/// Main UI render function - called on every frame
pub fn draw<S: RepoSearch>(f: &mut Frame, app: &mut App<S>) {
    let layout = ScreenLayout::compute(
        f.area(),
        app.controller.autocomplete().height(),
        app.show_logs,
    );
    app.layout = layout;

    app.controller
        .selection_view_mut()
        .set_viewport(layout.selection.height.saturating_sub(2) as usize);

    if let Some(logs_area) = layout.logs {
        let viewport = logs_area.height.saturating_sub(2) as usize;
        app.logs_panel
            .sync_entries(app.log_buffer.get_all(), viewport);
    }

    let ctx = RenderContext::new(&app.theme, app.animation_frame());

    f.render_widget(
        Block::default().style(Style::default().bg(ctx.theme.bg).fg(ctx.theme.fg)),
        f.area(),
    );

    title_bar::render(f, layout.title, &ctx, app.controller.state());
    app.controller
        .selection_view()
        .render(f, layout.selection, &ctx);

    if let Some(logs_area) = layout.logs {
        app.logs_panel.render(f, logs_area, &ctx);
    }

    let info = StatusInfo {
        state: app.controller.state().label(),
        suggestions: if app.controller.autocomplete().is_visible() {
            app.controller.autocomplete().rows().len()
        } else {
            0
        },
        selected: app.controller.store().len(),
        show_logs: app.show_logs,
        hint: app
            .show_logs
            .then(|| app.logs_panel.focus_hint())
            .flatten(),
    };
    status_bar::render(f, layout.status, &ctx, &info);

    SearchInput::new(app.controller.input()).render(f, layout.input, &ctx);
    app.controller
        .autocomplete()
        .render(f, layout.dropdown, &ctx);
}
