//! Normalized question value object

use serde::{Deserialize, Serialize};

/// A user question in both raw and canonical form (Value Object)
///
/// Built once per request by [`normalize`] and handed to the prompt builder.
/// `processed` is lowercase with punctuation replaced by single spaces;
/// `tokens` is `processed` split on whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedQuestion {
    original: String,
    processed: String,
    tokens: Vec<String>,
}

impl NormalizedQuestion {
    /// Normalize `text`, returning None if it is empty or only whitespace
    pub fn try_new(text: &str) -> Option<Self> {
        if is_blank_question(text) {
            None
        } else {
            Some(normalize(text))
        }
    }

    /// The trimmed input, exactly as the user typed it
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Lowercased, punctuation-free, whitespace-collapsed form
    pub fn processed(&self) -> &str {
        &self.processed
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Consume and return `(processed, tokens)`
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.processed, self.tokens)
    }
}

/// True when the input carries no question at all
pub fn is_blank_question(text: &str) -> bool {
    text.trim().is_empty()
}

/// Convert raw user text into its canonical form.
///
/// Pure and deterministic. Input made only of punctuation yields an empty
/// `processed` string and no tokens.
pub fn normalize(text: &str) -> NormalizedQuestion {
    let original = text.trim().to_string();

    let stripped: String = original
        .to_lowercase()
        .chars()
        .map(|c| {
            if is_word_char(c) || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let tokens: Vec<String> = stripped.split_whitespace().map(str::to_string).collect();
    let processed = tokens.join(" ");

    NormalizedQuestion {
        original,
        processed,
        tokens,
    }
}

/// Unicode `Alphabetic` or `Numeric`, or `_`.
///
/// Dependent vowel signs count as letters, so "दुनिया" stays one word; a
/// virama does not.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl std::fmt::Display for NormalizedQuestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.processed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "Hello, World!!",
        "   ",
        "",
        "What is 2+2?",
        "  Tabs\tand\nnewlines\r\n ",
        "snake_case stays_together",
        "ÉCOLE — Überprüfung, naïve?",
        "!!!???...",
        "日本語のテスト、です。",
        "a--b__c..d",
        "नमस्ते दुनिया",
    ];

    #[test]
    fn test_hello_world() {
        let n = normalize("Hello, World!!");
        assert_eq!(n.original(), "Hello, World!!");
        assert_eq!(n.processed(), "hello world");
        assert_eq!(n.tokens(), ["hello", "world"]);
    }

    #[test]
    fn test_whitespace_only() {
        let n = normalize("   ");
        assert_eq!(n.original(), "");
        assert_eq!(n.processed(), "");
        assert!(n.tokens().is_empty());
    }

    #[test]
    fn test_punctuation_only() {
        let n = normalize("?!.,;:");
        assert_eq!(n.original(), "?!.,;:");
        assert_eq!(n.processed(), "");
        assert!(n.tokens().is_empty());
    }

    #[test]
    fn test_arithmetic_question() {
        let n = normalize("What is 2+2?");
        assert_eq!(n.processed(), "what is 2 2");
        assert_eq!(n.tokens(), ["what", "is", "2", "2"]);
    }

    #[test]
    fn test_combining_vowel_signs_stay_in_word() {
        let n = normalize("नमस्ते दुनिया");
        assert_eq!(n.processed(), "नमस ते दुनिया");
        assert_eq!(n.tokens(), ["नमस", "ते", "दुनिया"]);
    }

    #[test]
    fn test_underscore_is_word_char() {
        let n = normalize("snake_case, kebab-case");
        assert_eq!(n.processed(), "snake_case kebab case");
    }

    #[test]
    fn test_unicode_letters_kept() {
        let n = normalize("Ünïcode Straße!");
        assert_eq!(n.processed(), "ünïcode straße");
    }

    #[test]
    fn test_original_is_trimmed_only() {
        let n = normalize("  Keep THIS, as-is?  ");
        assert_eq!(n.original(), "Keep THIS, as-is?");
    }

    #[test]
    fn test_idempotent_on_processed() {
        for sample in SAMPLES {
            let once = normalize(sample);
            let twice = normalize(once.processed());
            assert_eq!(twice.processed(), once.processed(), "input: {:?}", sample);
        }
    }

    #[test]
    fn test_tokens_match_single_space_split() {
        for sample in SAMPLES {
            let n = normalize(sample);
            let expected: Vec<&str> = if n.processed().is_empty() {
                Vec::new()
            } else {
                n.processed().split(' ').collect()
            };
            assert_eq!(n.tokens(), expected.as_slice(), "input: {:?}", sample);
            assert!(n.tokens().iter().all(|t| !t.is_empty()));
        }
    }

    #[test]
    fn test_try_new_rejects_blank() {
        assert!(NormalizedQuestion::try_new("").is_none());
        assert!(NormalizedQuestion::try_new(" \t\n").is_none());
        assert!(NormalizedQuestion::try_new("Why?").is_some());
    }

    #[test]
    fn test_try_new_accepts_punctuation_only() {
        let n = NormalizedQuestion::try_new("???").unwrap();
        assert_eq!(n.processed(), "");
    }
}
