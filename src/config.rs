//! Server configuration loaded from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `TASKMASTER_HTTP_ADDR` | `0.0.0.0:8080` |
//! | `TASKMASTER_BASE_PATH` | empty (routes at `/tasks`) |
//! | `TASKMASTER_DATABASE_URL` | unset (in-memory store) |
//! | `TASKMASTER_DB_POOL_SIZE` | `10` |
//! | `TASKMASTER_LOG_FORMAT` | `pretty` |
//!
//! Empty or whitespace-only values count as unset.

use std::fmt;
use std::net::SocketAddr;

use thiserror::Error;

use crate::observability::LogFormat;

/// Environment variable holding the listen address.
pub const HTTP_ADDR_VAR: &str = "TASKMASTER_HTTP_ADDR";
/// Environment variable holding the route prefix.
pub const BASE_PATH_VAR: &str = "TASKMASTER_BASE_PATH";
/// Environment variable holding the `PostgreSQL` URL.
pub const DATABASE_URL_VAR: &str = "TASKMASTER_DATABASE_URL";
/// Environment variable holding the connection pool size.
pub const DB_POOL_SIZE_VAR: &str = "TASKMASTER_DB_POOL_SIZE";
/// Environment variable holding the log format.
pub const LOG_FORMAT_VAR: &str = "TASKMASTER_LOG_FORMAT";

const DEFAULT_HTTP_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 8080);
const DEFAULT_DB_POOL_SIZE: u32 = 10;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable holds a value that cannot be used.
    #[error("{name} is invalid: {reason}")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ConfigError {
    fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name,
            reason: reason.into(),
        }
    }
}

/// Server configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address the HTTP server binds to.
    pub http_addr: SocketAddr,
    /// Prefix for the task routes; empty or `/`-prefixed without a trailing
    /// slash.
    pub base_path: String,
    /// `PostgreSQL` URL; the in-memory store is used when `None`.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub db_pool_size: u32,
    /// Log output format.
    pub log_format: LogFormat,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("http_addr", &self.http_addr)
            .field("base_path", &self.base_path)
            .field("database_url", &self.database_url.as_ref().map(|_| "[REDACTED]"))
            .field("db_pool_size", &self.db_pool_size)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: SocketAddr::from(DEFAULT_HTTP_ADDR),
            base_path: String::new(),
            database_url: None,
            db_pool_size: DEFAULT_DB_POOL_SIZE,
            log_format: LogFormat::default(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name).and_then(|value| {
                let trimmed = value.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_owned())
            })
        };
        let mut config = Self::default();

        if let Some(addr) = read(HTTP_ADDR_VAR) {
            config.http_addr = addr
                .parse()
                .map_err(|err| ConfigError::invalid(HTTP_ADDR_VAR, format!("{err}")))?;
        }
        if let Some(base_path) = read(BASE_PATH_VAR) {
            config.base_path = normalize_base_path(&base_path)?;
        }
        config.database_url = read(DATABASE_URL_VAR);
        if let Some(size) = read(DB_POOL_SIZE_VAR) {
            config.db_pool_size = parse_pool_size(&size)?;
        }
        if let Some(format) = read(LOG_FORMAT_VAR) {
            config.log_format = format
                .parse()
                .map_err(|err| ConfigError::invalid(LOG_FORMAT_VAR, format!("{err}")))?;
        }

        Ok(config)
    }
}

fn normalize_base_path(raw: &str) -> Result<String, ConfigError> {
    if !raw.starts_with('/') {
        return Err(ConfigError::invalid(BASE_PATH_VAR, "must start with '/'"));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn parse_pool_size(raw: &str) -> Result<u32, ConfigError> {
    let size = raw
        .parse::<u32>()
        .map_err(|err| ConfigError::invalid(DB_POOL_SIZE_VAR, format!("{err}")))?;
    if size == 0 {
        return Err(ConfigError::invalid(DB_POOL_SIZE_VAR, "must be at least 1"));
    }
    Ok(size)
}
