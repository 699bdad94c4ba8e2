//! Per-call sampling settings for completions
//!
//! [`CompletionParams`] groups the static parameters that shape every
//! request the dispatcher builds. They are fixed at startup.

use qa_domain::Model;
use serde::{Deserialize, Serialize};

/// Default upper bound on generated tokens
pub const DEFAULT_MAX_TOKENS: u32 = 400;

/// Default sampling temperature; low to keep answers focused
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Sampling parameters for backend completions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionParams {
    /// Model identifier sent with every request.
    pub model: Model,
    /// Maximum number of generated tokens.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl CompletionParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = max;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}
