//! Prompt templates for question answering

use crate::core::question::NormalizedQuestion;
use serde::Serialize;

/// A fully rendered instruction string, ready for the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Prompt(String);

impl Prompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Prompt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Templates for generating prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// System message sent alongside every question
    pub fn system() -> &'static str {
        "You are a helpful assistant."
    }

    /// Role framing that opens the user prompt
    pub fn role_framing() -> &'static str {
        "You are an assistant that answers user questions concisely and accurately."
    }

    /// Answer-format guidance that closes the user prompt
    pub fn answer_guidance() -> &'static str {
        "Answer the user's question directly. If the question is ambiguous, ask one brief \
         clarifying question. Keep the answer clear and show one short paragraph. If you \
         must give step-by-step, number them."
    }

    /// User prompt for a single question
    ///
    /// Both forms are interpolated verbatim; the model reads raw text.
    pub fn question_prompt(original: &str, processed: &str) -> String {
        format!(
            "{}\n\nUser question (original): {}\nUser question (processed): {}\n\n{}\n\nAnswer:",
            Self::role_framing(),
            original,
            processed,
            Self::answer_guidance()
        )
    }
}

/// Combine the raw and normalized question into a single instruction string.
///
/// No validation: an empty question still yields a well-formed prompt.
pub fn build_prompt(question: &NormalizedQuestion) -> Prompt {
    Prompt(PromptTemplate::question_prompt(
        question.original(),
        question.processed(),
    ))
}
