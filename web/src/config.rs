//! Configuration management for the listkeeper server.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Session cookie configuration
    pub session: SessionConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Install the Prometheus recorder and serve `/metrics`
    pub metrics_enabled: bool,
}

/// Session cookie configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    /// Only send the session cookie over HTTPS
    pub secure_cookies: bool,
    /// Seconds of inactivity before a session and its lists are dropped
    pub idle_timeout_secs: i64,
    /// Most sessions held at once; the least recently used are evicted first
    pub capacity: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4567,
            log_level: "info".to_string(),
            metrics_enabled: true,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secure_cookies: false,
            idle_timeout_secs: 86_400,
            capacity: 10_000,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable variables fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let trimmed = |key: &str| lookup(key).map(|s| s.trim().to_string());

        Self {
            server: ServerConfig {
                host: lookup("LISTKEEPER_HOST").unwrap_or(defaults.server.host),
                port: parse(trimmed("LISTKEEPER_PORT")).unwrap_or(defaults.server.port),
                log_level: lookup("LISTKEEPER_LOG_LEVEL").unwrap_or(defaults.server.log_level),
                metrics_enabled: parse(trimmed("LISTKEEPER_METRICS"))
                    .unwrap_or(defaults.server.metrics_enabled),
            },
            session: SessionConfig {
                secure_cookies: parse(trimmed("LISTKEEPER_SECURE_COOKIES"))
                    .unwrap_or(defaults.session.secure_cookies),
                idle_timeout_secs: parse::<i64>(trimmed("LISTKEEPER_SESSION_IDLE_SECS"))
                    .filter(|secs: &i64| *secs > 0)
                    .unwrap_or(defaults.session.idle_timeout_secs),
                capacity: parse::<u64>(trimmed("LISTKEEPER_SESSION_CAPACITY"))
                    .filter(|capacity: &u64| *capacity > 0)
                    .unwrap_or(defaults.session.capacity),
            },
        }
    }

    /// Address the server listens on.
    ///
    /// # Errors
    ///
    /// Returns an error if host and port do not form a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}

fn parse<T: FromStr>(raw: Option<String>) -> Option<T> {
    raw.and_then(|s| s.parse().ok())
}
