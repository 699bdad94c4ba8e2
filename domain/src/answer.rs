//! Answer value object

use crate::prompt::Prompt;

/// First line of the offline fallback answer
pub const OFFLINE_HEADLINE: &str = "No LLM backend configured.";

/// Second line of the offline fallback answer
pub const OFFLINE_PREAMBLE: &str = "Here is your processed prompt instead:";

/// A successful outcome of dispatching a prompt
///
/// Backend failures are not answers; they are reported separately by the
/// dispatcher so callers can tell them apart programmatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Trimmed text of the backend's first choice
    Completion(String),
    /// No credential configured; the prompt is echoed back instead
    OfflineFallback { prompt: Prompt },
}

impl Answer {
    pub fn completion(text: impl AsRef<str>) -> Self {
        Answer::Completion(text.as_ref().trim().to_string())
    }

    pub fn offline(prompt: Prompt) -> Self {
        Answer::OfflineFallback { prompt }
    }

    pub fn is_offline(&self) -> bool {
        matches!(self, Answer::OfflineFallback { .. })
    }

    /// The user-visible text
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Completion(text) => f.write_str(text),
            Answer::OfflineFallback { prompt } => {
                write!(f, "{}\n{}\n\n{}", OFFLINE_HEADLINE, OFFLINE_PREAMBLE, prompt)
            }
        }
    }
}
