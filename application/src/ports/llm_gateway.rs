//! LLM Gateway port
//!
//! Defines the interface for communicating with the completion backend.

use async_trait::async_trait;
use qa_domain::{BackendCredential, CompletionRequest};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Response contained no choices")]
    EmptyResponse,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// This port defines how the application layer reaches the backend.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Open a session authenticated with `credential`
    ///
    /// The credential is handed over per call; gateways must not keep it
    /// beyond the returned session.
    async fn create_session(
        &self,
        credential: &BackendCredential,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// An authenticated LLM session
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Send one request and wait for the complete reply.
    ///
    /// Returns the content of the first choice, untrimmed.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}
