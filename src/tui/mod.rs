// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks, controller messages)
// - Rendering the UI

pub mod app;
pub mod components;
pub mod layout;
pub mod scroll;
pub mod theme;
pub mod traits;
pub mod ui;

use crate::config::Config;
use crate::controller::{AppMessage, InputController};
use crate::logging::LogBuffer;
use crate::search::{GitHubClient, RepoSearch};
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use theme::ThemeKind;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, even if the loop failed.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    let client = Arc::new(GitHubClient::new(&config)?);
    let (msg_tx, mut msg_rx) = mpsc::unbounded_channel();
    let controller = InputController::new(client, &config.widget, msg_tx);
    let theme = ThemeKind::parse(&config.theme).theme();
    let mut app = App::new(controller, log_buffer, theme);

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    tracing::info!(
        api_url = %config.api_url,
        debounce_ms = config.widget.debounce_ms,
        "repofind started"
    );

    let result = run_event_loop(&mut terminal, &mut app, &mut msg_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources with tokio::select!:
/// 1. Terminal input (keys, mouse, resize)
/// 2. Controller messages (debounce fired, search finished)
/// 3. Timer ticks (spinner animation)
///
/// The UI is redrawn after each one.
async fn run_event_loop<S: RepoSearch>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S>,
    msg_rx: &mut mpsc::UnboundedReceiver<AppMessage>,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => app.handle_key(key),
                Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                // Resize and focus changes only need the redraw
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                None => break,
            },

            Some(msg) = msg_rx.recv() => app.handle_message(msg),

            _ = tick_interval.tick() => app.tick_animation(),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
