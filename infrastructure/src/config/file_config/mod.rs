//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types on demand.

mod backend;
mod output;
mod server;

pub use backend::FileBackendConfig;
pub use output::FileOutputConfig;
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("backend.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("backend.model cannot be empty")]
    EmptyModelName,

    #[error("backend.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("backend.api_key_env cannot be empty")]
    EmptyApiKeyEnv,

    #[error("backend.max_tokens must be greater than 0")]
    InvalidMaxTokens,

    #[error("backend.temperature must be between 0.0 and 2.0, got {0}")]
    InvalidTemperature(f32),

    #[error("server.bind is not a valid socket address: {0}")]
    InvalidBindAddress(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion backend settings
    pub backend: FileBackendConfig,
    /// HTTP front end settings
    pub server: FileServerConfig,
    /// Terminal output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.backend.validate()?;
        self.server.socket_addr()?;
        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
