//! Credential source port
//!
//! Supplies the backend credential at dispatch time.

use qa_domain::BackendCredential;

/// Where the backend credential comes from.
///
/// Consulted once per request. Returning `None` is a normal state that makes
/// the dispatcher fall back to offline mode.
pub trait CredentialSource: Send + Sync {
    fn credential(&self) -> Option<BackendCredential>;
}

/// A fixed credential (or fixed absence of one)
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialSource(Option<BackendCredential>);

impl StaticCredentialSource {
    /// A source that never yields a credential
    pub fn none() -> Self {
        Self(None)
    }

    pub fn from_secret(secret: impl Into<String>) -> Self {
        Self(BackendCredential::try_new(secret))
    }
}

impl CredentialSource for StaticCredentialSource {
    fn credential(&self) -> Option<BackendCredential> {
        self.0.clone()
    }
}
