//! CLI module for chirpy
//!
//! Provides command-line interface for:
//! - init: Create the database file
//! - serve: Open the store and start the HTTP server

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
