//! Completion backend adapters
//!
//! - [`groq::GroqGateway`] — Groq's OpenAI-compatible chat-completions API

pub mod groq;
