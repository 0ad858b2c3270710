//! Server configuration
//!
//! Read from environment variables, with CLI flags taking precedence:
//!
//! - `GIDER_HOST`: Interface to bind (default: `0.0.0.0`)
//! - `GIDER_PORT`: Port to listen on (default: `8000`)
//! - `GIDER_ALLOWED_ORIGINS`: Comma-separated CORS origins (default: none)

use gider_core::{Error, Result};
use tracing::warn;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: vec![],
        }
    }
}

impl ServerConfig {
    /// Build configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("GIDER_HOST").filter(|s| !s.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(port) = lookup("GIDER_PORT").filter(|s| !s.trim().is_empty()) {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("Invalid GIDER_PORT: {}", port)))?;
        }

        if let Some(origins) = lookup("GIDER_ALLOWED_ORIGINS") {
            config.allowed_origins = parse_origins(&origins);
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a comma-separated list of CORS origins
///
/// Entries that are not valid header values are dropped with a warning.
pub fn parse_origins(input: &str) -> Vec<String> {
    input
        .split(',')
        .filter_map(|s| {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            if axum::http::HeaderValue::from_str(s).is_err() {
                warn!(input = s, "Failed to parse allowed origin entry");
                return None;
            }
            Some(s.to_string())
        })
        .collect()
}
