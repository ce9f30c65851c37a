// Configuration module entry point
// Resolves the fixed listener settings into typed configuration

mod types;

use std::net::SocketAddr;

use crate::error::{Result, ServerError};

pub use types::{Config, ServerConfig};

/// Listen on every IPv4 interface
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Hard-coded service port
pub const DEFAULT_PORT: u16 = 8080;

impl Config {
    /// Build the configuration from compiled-in defaults only.
    ///
    /// No file, environment or command-line source is consulted: the service
    /// always listens on `0.0.0.0:8080`.
    pub fn builtin() -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .build()?;

        Ok(settings.try_deserialize::<Self>()?)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| ServerError::InvalidAddress(format!("{addr}: {e}")))
    }
}
