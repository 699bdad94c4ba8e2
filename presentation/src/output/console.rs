//! Console output formatter for question answering

use colored::Colorize;
use qa_domain::NormalizedQuestion;

const RULE_WIDTH: usize = 18;

/// Formats pipeline results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Force colors off (or back to terminal detection)
    pub fn set_color(enabled: bool) {
        if enabled {
            colored::control::unset_override();
        } else {
            colored::control::set_override(false);
        }
    }

    /// Title shown when the terminal front end starts
    pub fn banner() -> String {
        format!("{}", "=== LLM Q&A CLI (Groq Edition) ===".cyan().bold())
    }

    /// Prompt shown before reading the question
    pub fn input_prompt() -> &'static str {
        "Enter your question: "
    }

    /// Message shown when the user submits nothing
    pub fn no_question() -> &'static str {
        "No question entered. Exiting."
    }

    /// Preview of the normalized question, shown before dispatch
    pub fn preview(question: &NormalizedQuestion) -> String {
        format!(
            "\n{}\n{} {}\n{} {}",
            "[Processed question preview]".yellow().bold(),
            "Processed:".cyan().bold(),
            question.processed(),
            "Tokens:".cyan().bold(),
            Self::tokens(question.tokens())
        )
    }

    /// Status line shown while the backend is being called
    pub fn sending() -> String {
        format!("\n{}\n", "[Sending to Groq LLM...]".dimmed())
    }

    /// The final answer block
    pub fn answer(text: &str) -> String {
        format!(
            "{}\n{}\n{}",
            "=== LLM Answer ===".green().bold(),
            text,
            "=".repeat(RULE_WIDTH).green()
        )
    }

    /// Render tokens as a bracketed, quoted list
    pub fn tokens(tokens: &[String]) -> String {
        let quoted: Vec<String> = tokens.iter().map(|t| format!("'{}'", t)).collect();
        format!("[{}]", quoted.join(", "))
    }
}
