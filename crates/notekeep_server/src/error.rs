//! Startup and serve errors for the HTTP binary.

use notekeep_core::LoggingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid value `{value}` for {key}: {reason}")]
    InvalidConfig {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("logging init failed: {0}")]
    Logging(#[from] LoggingError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },
    #[error("server stopped with error: {0}")]
    Serve(#[source] std::io::Error),
}
