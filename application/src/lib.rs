//! Application layer for llm-qa
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::CompletionParams;
pub use ports::{
    credential_source::{CredentialSource, StaticCredentialSource},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
};
pub use use_cases::ask_question::{AskOutput, AskQuestionUseCase, PreparedQuestion};
pub use use_cases::dispatch::{DispatchError, DispatchErrorKind, DispatchUseCase, render_outcome};
