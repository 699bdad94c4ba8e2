//! Infrastructure layer for llm-qa
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod credentials;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBackendConfig, FileConfig, FileOutputConfig,
    FileServerConfig,
};
pub use credentials::{EnvCredentialSource, load_dotenv};
pub use providers::groq::{GroqGateway, GroqSession};
