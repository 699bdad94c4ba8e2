//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for llm-qa
#[derive(Parser, Debug)]
#[command(name = "llm-qa")]
#[command(author, version, about = "Ask a language model a question from the terminal or the browser")]
#[command(long_about = r#"
llm-qa normalizes your question, wraps it in an instruction prompt and sends
it to Groq's chat-completions API.

Set GROQ_API_KEY (in the environment or a .env file) to reach the backend.
Without it, llm-qa runs offline and shows the prompt it would have sent.

Configuration files are loaded from (in priority order):
1. LLM_QA_* environment variables (e.g. LLM_QA_BACKEND__MODEL)
2. --config <path>     Explicit config file
3. ./llm-qa.toml       Project-level config
4. ~/.config/llm-qa/config.toml   Global config

Example:
  llm-qa
  llm-qa "What is the borrow checker?"
  llm-qa --serve --bind 0.0.0.0:5000
"#)]
pub struct Cli {
    /// The question to ask (prompted for when omitted)
    pub question: Option<String>,

    /// Start the web front end instead of the terminal prompt
    #[arg(long)]
    pub serve: bool,

    /// Address for the web front end (overrides server.bind)
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Model to query (overrides backend.model)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Maximum tokens in the answer (overrides backend.max_tokens)
    #[arg(long, value_name = "N")]
    pub max_tokens: Option<u32>,

    /// Sampling temperature (overrides backend.temperature)
    #[arg(long, value_name = "T")]
    pub temperature: Option<f32>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress banners and progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and effective settings, then exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["llm-qa"]).unwrap();
        assert!(cli.question.is_none());
        assert!(!cli.serve);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_positional_question() {
        let cli = Cli::try_parse_from(["llm-qa", "What is 2+2?"]).unwrap();
        assert_eq!(cli.question.as_deref(), Some("What is 2+2?"));
    }

    #[test]
    fn test_serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "llm-qa",
            "--serve",
            "--bind",
            "0.0.0.0:8080",
            "-m",
            "llama3-8b-8192",
            "--max-tokens",
            "64",
            "--temperature",
            "0.5",
            "-vv",
        ])
        .unwrap();
        assert!(cli.serve);
        assert_eq!(cli.bind.as_deref(), Some("0.0.0.0:8080"));
        assert_eq!(cli.model.as_deref(), Some("llama3-8b-8192"));
        assert_eq!(cli.max_tokens, Some(64));
        assert_eq!(cli.temperature, Some(0.5));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_bad_max_tokens_rejected() {
        assert!(Cli::try_parse_from(["llm-qa", "--max-tokens", "many"]).is_err());
    }
}
