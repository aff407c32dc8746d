//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Environment variable for the bind host.
pub const HOST_VAR: &str = "ARRIVALS_HOST";

/// Environment variable for the bind port.
pub const PORT_VAR: &str = "ARRIVALS_PORT";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Host is not an IP address
    #[error("invalid ARRIVALS_HOST: {0}")]
    InvalidHost(String),

    /// Port is not a number in 0-65535
    #[error("invalid ARRIVALS_PORT: {0}")]
    InvalidPort(String),
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind to.
    pub host: IpAddr,

    /// Port to listen on.
    pub port: u16,
}

impl ServerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(host: IpAddr, port: u16) -> Self {
        Self { host, port }
    }

    /// Read configuration from the process environment.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup(HOST_VAR) {
            Some(h) => h
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(h.clone()))?,
            None => defaults.host,
        };

        let port = match lookup(PORT_VAR) {
            Some(p) => p
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(p.clone()))?,
            None => defaults.port,
        };

        Ok(Self { host, port })
    }

    /// Returns the socket address to bind.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
        }
    }
}
