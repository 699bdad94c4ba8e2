//! Backend credential value object

/// Secret used to authenticate against the completion backend (Value Object)
///
/// Read fresh for every dispatch and never cached. The `Debug` impl
/// redacts the value so it cannot leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct BackendCredential(String);

impl BackendCredential {
    /// Wrap a secret, returning None if it is empty
    ///
    /// An empty variable is treated the same as a missing one. Whitespace
    /// is kept as-is and sent to the backend.
    pub fn try_new(secret: impl Into<String>) -> Option<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            None
        } else {
            Some(Self(secret))
        }
    }

    /// Expose the secret (only for building the auth header)
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for BackendCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BackendCredential(***)")
    }
}
