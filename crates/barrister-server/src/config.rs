use std::net::{IpAddr, SocketAddr};

use barrister_core::AppError;

/// Listen address for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Read configuration from environment variables.
    ///
    /// - `BARRISTER_HOST` (optional, defaults to `0.0.0.0`)
    /// - `BARRISTER_PORT` (optional, defaults to 3000)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(
            std::env::var("BARRISTER_HOST").ok(),
            std::env::var("BARRISTER_PORT").ok(),
        )
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, AppError> {
        let host = match host {
            None => IpAddr::from([0, 0, 0, 0]),
            Some(raw) => raw.parse().map_err(|_| {
                AppError::ConfigError(format!("Invalid BARRISTER_HOST '{raw}': not an IP address"))
            })?,
        };

        let port = match port {
            None => 3000,
            Some(raw) => raw.parse().map_err(|_| {
                AppError::ConfigError(format!(
                    "Invalid BARRISTER_PORT '{raw}': must be an integer between 0 and 65535"
                ))
            })?,
        };

        Ok(Self { host, port })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
