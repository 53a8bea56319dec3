// repofind - search-as-you-type GitHub repository picker
//
// Architecture:
// - Debouncer collapses keystroke bursts into one delayed search
// - GitHubClient queries the repository-search endpoint
// - InputController drives the dropdown and the selection list from key
//   and click events; async work reports back over a channel
// - The TUI owns the terminal and routes events to the controller

mod cli;
mod config;
mod controller;
mod debounce;
mod logging;
mod search;
mod selection;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, LogRotation, LoggingConfig};
use logging::{LogBuffer, TuiLogLayer};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config commands run before logging is set up and exit early
    if let Some(Commands::Config { show, path, reset }) = cli.command {
        return cli::handle_config(show, path, reset);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();
    let config = Config::load()?;

    let tui_mode = cli.command.is_none();
    let log_buffer = LogBuffer::new();

    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard = init_tracing(&config, tui_mode, &log_buffer);

    match cli.command {
        Some(Commands::Search { query }) => cli::run_search(&config, &query.join(" ")).await,
        _ => tui::run_tui(config, log_buffer).await,
    }
}

/// Initialize tracing with output chosen by mode
///
/// - TUI mode: capture logs to the in-memory buffer (prevents garbling the display)
/// - CLI mode: human-readable logs on stderr, keeping stdout for results
/// - File logging: optional JSON lines with rotation, in addition to the above
///
/// Precedence: RUST_LOG env var > config/REPOFIND_LOG_LEVEL > default "info"
fn init_tracing(config: &Config, tui_mode: bool, log_buffer: &LogBuffer) -> Option<WorkerGuard> {
    let default_filter = format!("repofind={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let (file_writer, guard) = match file_writer(&config.logging) {
        Some((writer, guard)) => (Some(writer), Some(guard)),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_mode.then(|| TuiLogLayer::new(log_buffer.clone())))
        .with((!tui_mode).then(|| fmt::layer().with_writer(std::io::stderr)))
        .with(file_writer.map(|writer| {
            fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
        }))
        .init();

    guard
}

/// Non-blocking rolling file writer, if file logging is enabled
fn file_writer(logging: &LoggingConfig) -> Option<(NonBlocking, WorkerGuard)> {
    if !logging.file_enabled {
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        // Fall back to non-file logging
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            logging.file_dir, e
        );
        return None;
    }

    let appender = match logging.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
        }
    };

    // Writes happen on a background thread
    Some(tracing_appender::non_blocking(appender))
}
