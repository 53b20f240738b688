//! CLI argument definitions using clap
//!
//! Commands:
//! - chirpy init --config <path>
//! - chirpy serve --config <path> [--port <n>] [--database <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Chirpy - a small chirp service backed by one JSON file
#[derive(Parser, Debug)]
#[command(name = "chirpy")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database file if it does not exist
    Init {
        /// Path to configuration file (defaults apply if missing)
        #[arg(long, default_value = "./chirpy.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults apply if missing)
        #[arg(long, default_value = "./chirpy.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,

        /// Override the configured database file
        #[arg(long)]
        database: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from([
            "chirpy",
            "serve",
            "--port",
            "9000",
            "--database",
            "/tmp/db.json",
        ])
        .unwrap();

        match cli.command {
            Command::Serve {
                config,
                port,
                database,
            } => {
                assert_eq!(config, PathBuf::from("./chirpy.json"));
                assert_eq!(port, Some(9000));
                assert_eq!(database, Some(PathBuf::from("/tmp/db.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["chirpy"]).is_err());
    }
}
