//! Environment-backed credential source

use qa_application::ports::credential_source::CredentialSource;
use qa_domain::BackendCredential;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Reads the backend credential from an environment variable.
///
/// The variable is read on every call, so a key exported after startup is
/// picked up by the next request.
#[derive(Debug, Clone)]
pub struct EnvCredentialSource {
    var: String,
}

impl EnvCredentialSource {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialSource for EnvCredentialSource {
    fn credential(&self) -> Option<BackendCredential> {
        match std::env::var(&self.var) {
            Ok(value) => BackendCredential::try_new(value),
            Err(std::env::VarError::NotPresent) => None,
            Err(e) => {
                warn!("Ignoring {}: {}", self.var, e);
                None
            }
        }
    }
}

/// Load a `.env` file from the working directory (or a parent) if present.
///
/// Variables already set in the process environment win.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!("Loaded environment from {}", path.display());
            Some(path)
        }
        Err(e) if e.not_found() => None,
        Err(e) => {
            warn!("Failed to load .env file: {}", e);
            None
        }
    }
}
