//! Terminal tic-tac-toe.
//!
//! Wires a [`tictac_core::Session`] to a ratatui front end:
//!
//! - **Cli**: command-line flags
//! - **Config**: optional TOML settings (seed, log file, log filter)
//! - **Tui**: rendering and key handling

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
pub mod tui;

pub use cli::Cli;
pub use config::{AppConfig, ConfigError};
