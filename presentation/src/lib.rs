//! Presentation layer for llm-qa
//!
//! This crate contains the CLI definition, console formatting, the
//! interactive terminal front end, and the HTTP front end.

pub mod cli;
pub mod interactive;
pub mod output;
pub mod progress;
pub mod web;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use interactive::{InteractiveFrontend, InteractiveOutcome};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::DispatchSpinner;
pub use web::{router, serve};
