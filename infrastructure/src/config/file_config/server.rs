//! HTTP server configuration from TOML (`[server]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Address the web front end listens on (default: "127.0.0.1:5000")
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
        }
    }
}

impl FileServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigValidationError> {
        self.bind
            .parse()
            .map_err(|_| ConfigValidationError::InvalidBindAddress(self.bind.clone()))
    }
}
