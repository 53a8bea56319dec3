// TUI application state
//
// Holds the controller and the shell around it (log panel, theme, layout)
// and routes terminal events: global keys first, then the log panel when it
// is visible, then the input line.

use super::components::logs_panel::LogsPanel;
use super::layout::ScreenLayout;
use super::theme::Theme;
use super::traits::{Handled, Interactive};
use crate::controller::{AppMessage, InputController};
use crate::logging::LogBuffer;
use crate::search::RepoSearch;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

/// Main application state for the TUI
pub struct App<S: RepoSearch> {
    pub controller: InputController<S>,

    /// Log buffer for system logs display
    pub log_buffer: LogBuffer,
    pub logs_panel: LogsPanel,
    pub show_logs: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    pub theme: Theme,

    /// Layout of the last drawn frame, used to resolve clicks
    pub layout: ScreenLayout,

    /// Animation frame counter (for spinners)
    animation_frame: usize,
}

impl<S: RepoSearch> App<S> {
    pub fn new(controller: InputController<S>, log_buffer: LogBuffer, theme: Theme) -> Self {
        Self {
            controller,
            log_buffer,
            logs_panel: LogsPanel::new(),
            show_logs: false,
            should_quit: false,
            theme,
            layout: ScreenLayout::default(),
            animation_frame: 0,
        }
    }

    /// Advance the animation frame (called on timer tick)
    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    pub fn animation_frame(&self) -> usize {
        self.animation_frame
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
        tracing::debug!(visible = self.show_logs, "Toggled log panel");
    }

    /// Layered dispatch: Global → Logs panel → Input line
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Terminals that report releases would otherwise type every char twice
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.handle_global_key(key).was_handled() {
            return;
        }

        if self.show_logs && self.logs_panel.handle_key(key).was_handled() {
            return;
        }

        self.controller.handle_key(key);
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::F(2) => self.toggle_logs(),
            KeyCode::Esc => self.controller.dismiss(),
            _ => return Handled::No,
        }
        Handled::Yes
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let position = Position::new(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let target = self.layout.classify(
                    position,
                    self.controller.autocomplete(),
                    self.controller.selection_view(),
                );
                tracing::trace!(?target, x = mouse.column, y = mouse.row, "Click");
                self.controller.on_click(target);
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let up = mouse.kind == MouseEventKind::ScrollUp;
                let over_logs = self.layout.logs.is_some_and(|area| area.contains(position));
                if over_logs {
                    let code = if up { KeyCode::Up } else { KeyCode::Down };
                    self.logs_panel
                        .handle_key(KeyEvent::new(code, KeyModifiers::NONE));
                } else if self.layout.selection.contains(position) {
                    let view = self.controller.selection_view_mut();
                    if up {
                        view.scroll_up();
                    } else {
                        view.scroll_down();
                    }
                }
            }
            _ => {}
        }
    }

    pub fn handle_message(&mut self, msg: AppMessage) {
        self.controller.handle_message(msg);
    }
}
