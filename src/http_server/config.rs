//! HTTP Server Configuration
//!
//! Bind address, CORS origins, static file root and the chirp filter
//! vocabulary.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::chirps::BlockedWords;

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means permissive
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Directory served under `/app` (default: ".")
    #[serde(default = "default_filesystem_root")]
    pub filesystem_root: PathBuf,

    /// Words masked in chirp bodies
    #[serde(default)]
    pub blocked_words: BlockedWords,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_filesystem_root() -> PathBuf {
    PathBuf::from(".")
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            filesystem_root: default_filesystem_root(),
            blocked_words: BlockedWords::default(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
