//! Error types for the greeting server

use std::net::SocketAddr;
use thiserror::Error;

/// Result type alias for server operations
pub type Result<T> = std::result::Result<T, ServerError>;

/// Errors that stop the server from starting or running
#[derive(Debug, Error)]
pub enum ServerError {
    /// Built-in configuration could not be resolved
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Host/port pair does not form a socket address
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Listener could not be created on the requested address
    #[error("listen tcp {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Tokio runtime could not be built
    #[error("runtime error: {0}")]
    Runtime(#[source] std::io::Error),

    /// Pattern registered twice on the same multiplexer
    #[error("multiple registrations for {0}")]
    DuplicateRoute(String),
}
