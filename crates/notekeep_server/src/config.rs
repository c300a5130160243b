//! Environment-driven server configuration.
//!
//! Values come from the process environment, optionally seeded from a
//! `.env` file by the binary. Blank values count as unset.

use crate::error::ServerError;
use notekeep_core::default_log_level;

pub const HOST_VAR: &str = "NOTEKEEP_HOST";
pub const PORT_VAR: &str = "NOTEKEEP_PORT";
pub const LOG_LEVEL_VAR: &str = "NOTEKEEP_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "NOTEKEEP_LOG_DIR";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// Absolute directory for rolling log files; `None` logs to stderr.
    pub log_dir: Option<String>,
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    /// - `InvalidConfig` when the port is not a valid `u16`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match read(PORT_VAR) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|err| ServerError::InvalidConfig {
                    key: PORT_VAR,
                    value: raw.clone(),
                    reason: err.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: read(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            log_level: read(LOG_LEVEL_VAR).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: read(LOG_DIR_VAR),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
