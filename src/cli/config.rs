//! Configuration file
//!
//! A JSON object; every key is optional:
//!
//! ```json
//! {
//!   "database_path": "database.json",
//!   "host": "0.0.0.0",
//!   "port": 8080,
//!   "filesystem_root": ".",
//!   "blocked_words": ["kerfuffle", "sharbert", "fornax"],
//!   "cors_origins": []
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backing JSON file of the record store
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    #[serde(flatten)]
    pub server: HttpServerConfig,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("database.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            server: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults
    pub fn load_or_default(path: &Path) -> CliResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        if self.database_path.as_os_str().is_empty() {
            return Err(CliError::config_error("database_path must not be empty"));
        }

        Ok(())
    }
}
