//! Dispatch use case.
//!
//! Sends a prompt to the backend, or falls back to offline mode when no
//! credential is configured. This is the single error boundary of the
//! pipeline: every backend failure is captured as a [`DispatchError`].

use crate::config::CompletionParams;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use qa_domain::{Answer, BackendCredential, CompletionRequest, Prompt};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Category of a backend failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchErrorKind {
    Connection,
    Timeout,
    Authentication,
    Status,
    InvalidResponse,
    EmptyResponse,
    Other,
}

/// A backend failure, captured at the dispatcher boundary.
///
/// Renders as `Groq API error: <detail>`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Groq API error: {detail}")]
pub struct DispatchError {
    pub kind: DispatchErrorKind,
    pub detail: String,
}

impl DispatchError {
    pub fn new(kind: DispatchErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

impl From<GatewayError> for DispatchError {
    fn from(error: GatewayError) -> Self {
        let kind = match &error {
            GatewayError::ConnectionError(_) => DispatchErrorKind::Connection,
            GatewayError::Timeout => DispatchErrorKind::Timeout,
            GatewayError::AuthenticationFailed(_) => DispatchErrorKind::Authentication,
            GatewayError::Status { .. } => DispatchErrorKind::Status,
            GatewayError::InvalidResponse(_) => DispatchErrorKind::InvalidResponse,
            GatewayError::EmptyResponse => DispatchErrorKind::EmptyResponse,
            GatewayError::Other(_) => DispatchErrorKind::Other,
        };
        Self::new(kind, error.to_string())
    }
}

/// Flatten a dispatch outcome into the text shown to the user
pub fn render_outcome(outcome: &Result<Answer, DispatchError>) -> String {
    match outcome {
        Ok(answer) => answer.text(),
        Err(error) => error.to_string(),
    }
}

/// Use case for dispatching a prompt to the backend
#[derive(Clone)]
pub struct DispatchUseCase {
    gateway: Arc<dyn LlmGateway>,
    params: CompletionParams,
}

impl DispatchUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: CompletionParams) -> Self {
        Self { gateway, params }
    }

    /// Build the request that would be sent for `prompt`
    pub fn request_for(&self, prompt: &Prompt) -> CompletionRequest {
        CompletionRequest::for_prompt(
            prompt,
            self.params.model.clone(),
            self.params.max_tokens,
            self.params.temperature,
        )
    }

    /// Dispatch `prompt`.
    ///
    /// Without a credential no network call is made and the offline
    /// fallback is returned. With one, exactly one request is sent.
    pub async fn dispatch(
        &self,
        prompt: &Prompt,
        credential: Option<&BackendCredential>,
    ) -> Result<Answer, DispatchError> {
        let Some(credential) = credential else {
            info!("No backend credential configured, using offline fallback");
            return Ok(Answer::offline(prompt.clone()));
        };

        let request = self.request_for(prompt);
        debug!(
            model = %request.model,
            max_tokens = request.max_tokens,
            temperature = request.temperature,
            "Dispatching completion request"
        );

        match self.send(credential, &request).await {
            Ok(text) => {
                info!("Backend answered ({} bytes)", text.len());
                Ok(Answer::completion(text))
            }
            Err(e) => {
                warn!("Backend call failed: {}", e);
                Err(e.into())
            }
        }
    }

    async fn send(
        &self,
        credential: &BackendCredential,
        request: &CompletionRequest,
    ) -> Result<String, GatewayError> {
        let session = self.gateway.create_session(credential).await?;
        session.complete(request).await
    }
}
