//! tictac - terminal tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use tictac::{AppConfig, Cli};
use tictac_core::Session;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?.with_overrides(cli.seed, cli.log_file);

    init_tracing(&config)?;
    info!(config = ?config, "Configuration loaded");

    let session = match config.seed() {
        Some(seed) => Session::seeded(*seed),
        None => Session::new(),
    };
    tictac::tui::run(session)
}

/// Logs go to a file so they don't interfere with the TUI.
fn init_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
