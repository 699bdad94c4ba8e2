//! Prompt domain
//!
//! The fixed instruction template that wraps a user's question before it is
//! sent to the backend.

mod template;

pub use template::{Prompt, PromptTemplate, build_prompt};
