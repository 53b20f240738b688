//! CLI command implementations

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::json;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use crate::http_server::HttpServer;
use crate::observability::{log_event_with_fields, Event};
use crate::store::RecordStore;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve {
            config,
            port,
            database,
        } => serve(&config, port, database),
    }
}

fn load_config(config_path: &Path) -> CliResult<Config> {
    let config = Config::load_or_default(config_path)?;
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("path", config_path.display().to_string().as_str())],
    );
    Ok(config)
}

/// Create the database file and report where it lives
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let store = RecordStore::open(&config.database_path)?;

    let response = json!({
        "initialized": true,
        "database": store.path().display().to_string(),
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Open the store and serve HTTP until the process is stopped
pub fn serve(config_path: &Path, port: Option<u16>, database: Option<PathBuf>) -> CliResult<()> {
    let mut config = load_config(config_path)?;

    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(database) = database {
        config.database_path = database;
    }
    config.validate()?;

    let store = RecordStore::open(&config.database_path)?;
    let server = HttpServer::new(config.server, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}
