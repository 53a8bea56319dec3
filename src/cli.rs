// CLI module - command-line argument parsing and handlers
//
// Without a subcommand the interactive widget runs. Subcommands:
// - search <query>: Run one search and print the capped result list
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults

use crate::config::{Config, VERSION};
use crate::search::{GitHubClient, RepoSearch};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

/// repofind - search GitHub repositories and build a selection list
#[derive(Parser)]
#[command(name = "repofind")]
#[command(version = VERSION)]
#[command(about = "Search GitHub repositories as you type", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a single search and print the results
    Search {
        /// Query text; multiple words are joined with spaces
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// search
// ─────────────────────────────────────────────────────────────────────────────

/// Search once and print up to `max_suggestions` rows, highest-starred first
pub async fn run_search(config: &Config, query: &str) -> Result<()> {
    if query.trim().is_empty() {
        anyhow::bail!("Search query is empty");
    }

    let client = GitHubClient::new(config)?;
    let items = client
        .search(query)
        .await
        .with_context(|| format!("Search for {:?} failed", query))?;

    tracing::debug!(query, count = items.len(), "Search returned");

    if items.is_empty() {
        println!("No repositories found.");
        return Ok(());
    }

    for item in items.iter().take(config.widget.max_suggestions) {
        println!("{:>9} ★  {}/{}", item.stars, item.owner, item.name);
    }

    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// config
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_config(show: bool, path: bool, reset: bool) -> Result<()> {
    if path {
        handle_config_path()
    } else if show {
        handle_config_show()
    } else if reset {
        handle_config_reset()
    } else {
        // No flag provided, show help
        println!("Usage: repofind config [--show|--path|--reset]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --path    Show config file path");
        println!("  --reset   Reset config file to defaults");
        Ok(())
    }
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::load()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    // Write the default config (using Config's single source of truth)
    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_runs_widget() {
        let cli = Cli::try_parse_from(["repofind"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_search_joins_words() {
        let cli = Cli::try_parse_from(["repofind", "search", "rust", "web"]).unwrap();
        match cli.command {
            Some(Commands::Search { query }) => assert_eq!(query.join(" "), "rust web"),
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_search_requires_query() {
        assert!(Cli::try_parse_from(["repofind", "search"]).is_err());
    }

    #[test]
    fn test_config_flags() {
        let cli = Cli::try_parse_from(["repofind", "config", "--show"]).unwrap();
        match cli.command {
            Some(Commands::Config { show, path, reset }) => {
                assert!(show);
                assert!(!path);
                assert!(!reset);
            }
            _ => panic!("expected config"),
        }
    }

    #[tokio::test]
    async fn test_blank_search_is_rejected_before_network() {
        let err = run_search(&Config::default(), "   ").await.unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
