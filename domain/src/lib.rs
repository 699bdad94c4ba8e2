//! Domain layer for llm-qa
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! A question flows through three stages:
//!
//! - **Normalization**: raw text becomes a [`NormalizedQuestion`] (trimmed
//!   original, lowercased punctuation-free form, whitespace tokens)
//! - **Prompt construction**: [`build_prompt`] wraps the question in a fixed
//!   instruction template
//! - **Answer**: the backend reply, or the offline fallback when no
//!   [`BackendCredential`] is configured

pub mod answer;
pub mod core;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use answer::{Answer, OFFLINE_HEADLINE, OFFLINE_PREAMBLE};
pub use core::{
    credential::BackendCredential,
    error::DomainError,
    model::Model,
    question::{NormalizedQuestion, is_blank_question, normalize},
};
pub use prompt::{Prompt, PromptTemplate, build_prompt};
pub use session::{
    entities::{Message, Role},
    request::CompletionRequest,
};
