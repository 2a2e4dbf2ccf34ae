//! HTTP server configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse_or, ConfigError};

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl ServerConfig {
    /// Load from the environment with development-friendly defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_or("SERVER_HOST", "127.0.0.1"),
            port: env_parse_or("SERVER_PORT", 8080)?,
        })
    }

    /// The `host:port` pair to bind the listener to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
        };
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }
}
