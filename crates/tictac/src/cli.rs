//! Command-line interface for tictac.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Terminal tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it doesn't exist)
    #[arg(short, long, default_value = "tictac.toml")]
    pub config: PathBuf,

    /// Seed for the computer's random moves (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// File to write logs to (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
