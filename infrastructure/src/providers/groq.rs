//! Groq chat-completions adapter
//!
//! Implements [`LlmGateway`] over Groq's OpenAI-compatible HTTP API:
//! `POST {base_url}/chat/completions` with a bearer token.

use crate::config::FileBackendConfig;
use async_trait::async_trait;
use qa_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use qa_domain::{BackendCredential, CompletionRequest};
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Gateway to a Groq (or any OpenAI-compatible) endpoint
pub struct GroqGateway {
    client: reqwest::Client,
    base_url: String,
}

impl GroqGateway {
    /// Create a gateway whose requests give up after `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("llm-qa/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &FileBackendConfig) -> Result<Self, GatewayError> {
        Self::new(config.base_url.clone(), config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl LlmGateway for GroqGateway {
    async fn create_session(
        &self,
        credential: &BackendCredential,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(GroqSession {
            client: self.client.clone(),
            url: format!("{}/chat/completions", self.base_url),
            credential: credential.clone(),
        }))
    }
}

/// One authenticated request context against Groq
pub struct GroqSession {
    client: reqwest::Client,
    url: String,
    credential: BackendCredential,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[async_trait]
impl LlmSession for GroqSession {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        debug!(url = %self.url, model = %request.model, "Sending chat completion");

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(self.credential.expose())
            .json(request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = api_error_message(&body);
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    GatewayError::AuthenticationFailed(message)
                }
                _ => GatewayError::Status {
                    status: status.as_u16(),
                    body: message,
                },
            });
        }

        let body = response.text().await.map_err(map_transport_error)?;
        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(GatewayError::EmptyResponse)
    }
}

/// Prefer the API's own error message over the raw body
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|parsed| parsed.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else if e.is_decode() {
        GatewayError::InvalidResponse(e.to_string())
    } else {
        GatewayError::Other(e.to_string())
    }
}
