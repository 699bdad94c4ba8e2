//! Interactive terminal front end
//!
//! Reads one question, shows its normalized preview, dispatches it and
//! prints the answer. One question per run.

use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::DispatchSpinner;
use qa_application::{AskQuestionUseCase, render_outcome};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// What happened during one interactive run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractiveOutcome {
    /// The user submitted an empty line
    NoQuestion,
    /// An answer (or rendered backend error) was printed
    Answered(String),
}

/// Terminal front end over the shared pipeline
pub struct InteractiveFrontend {
    use_case: AskQuestionUseCase,
    show_progress: bool,
    quiet: bool,
}

impl InteractiveFrontend {
    pub fn new(use_case: AskQuestionUseCase) -> Self {
        Self {
            use_case,
            show_progress: true,
            quiet: false,
        }
    }

    /// Set whether to show the spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Hide the banner and status lines
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Run once.
    ///
    /// `question` skips the read when the question was given up front;
    /// otherwise one line is read from `input`.
    pub async fn run<R: BufRead, W: Write>(
        &self,
        question: Option<String>,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<InteractiveOutcome> {
        if !self.quiet {
            writeln!(out, "{}", ConsoleFormatter::banner())?;
        }

        let raw = match question {
            Some(q) => q,
            None => {
                write!(out, "{}", ConsoleFormatter::input_prompt())?;
                out.flush()?;
                let mut line = String::new();
                input.read_line(&mut line)?;
                line
            }
        };

        let prepared = match self.use_case.prepare(&raw) {
            Ok(prepared) => prepared,
            Err(e) => {
                debug!("Rejected input: {}", e);
                writeln!(out, "{}", ConsoleFormatter::no_question())?;
                return Ok(InteractiveOutcome::NoQuestion);
            }
        };

        writeln!(out, "{}", ConsoleFormatter::preview(&prepared.question))?;
        if !self.quiet {
            writeln!(out, "{}", ConsoleFormatter::sending())?;
        }
        out.flush()?;

        let spinner = DispatchSpinner::start(
            self.show_progress && !self.quiet,
            "Waiting for the model...",
        );
        let outcome = self.use_case.answer(&prepared).await;
        spinner.finish();

        let text = render_outcome(&outcome);
        writeln!(out, "{}", ConsoleFormatter::answer(&text))?;
        Ok(InteractiveOutcome::Answered(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use qa_application::{
        CompletionParams, DispatchUseCase, GatewayError, LlmGateway, LlmSession,
        StaticCredentialSource,
    };
    use qa_domain::{BackendCredential, CompletionRequest};
    use std::io::Cursor;
    use std::sync::Arc;

    struct FixedGateway(Result<&'static str, &'static str>);

    struct FixedSession(Result<&'static str, &'static str>);

    #[async_trait]
    impl LlmGateway for FixedGateway {
        async fn create_session(
            &self,
            _credential: &BackendCredential,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            Ok(Box::new(FixedSession(self.0)))
        }
    }

    #[async_trait]
    impl LlmSession for FixedSession {
        async fn complete(&self, _request: &CompletionRequest) -> Result<String, GatewayError> {
            self.0
                .map(str::to_string)
                .map_err(|e| GatewayError::ConnectionError(e.to_string()))
        }
    }

    fn frontend(reply: Result<&'static str, &'static str>, key: &str) -> InteractiveFrontend {
        let dispatcher = DispatchUseCase::new(Arc::new(FixedGateway(reply)), CompletionParams::default());
        let use_case =
            AskQuestionUseCase::new(dispatcher, Arc::new(StaticCredentialSource::from_secret(key)));
        InteractiveFrontend::new(use_case).with_progress(false)
    }

    async fn run(
        frontend: &InteractiveFrontend,
        question: Option<&str>,
        stdin: &str,
    ) -> (InteractiveOutcome, String) {
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut out = Vec::new();
        let outcome = frontend
            .run(question.map(str::to_string), &mut input, &mut out)
            .await
            .unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_empty_line_exits() {
        let fe = frontend(Ok("unused"), "");
        let (outcome, printed) = run(&fe, None, "   \n").await;

        assert_eq!(outcome, InteractiveOutcome::NoQuestion);
        assert!(printed.contains("Enter your question: "));
        assert!(printed.contains("No question entered. Exiting."));
        assert!(!printed.contains("LLM Answer"));
    }

    #[tokio::test]
    async fn test_offline_run_prints_preview_then_prompt() {
        let fe = frontend(Ok("unused"), "");
        let (outcome, printed) = run(&fe, None, "What is 2+2?\n").await;

        let InteractiveOutcome::Answered(text) = outcome else {
            panic!("expected an answer");
        };
        assert!(text.starts_with("No LLM backend configured."));
        assert!(text.contains("User question (original): What is 2+2?"));

        let preview_at = printed.find("what is 2 2").unwrap();
        let answer_at = printed.find("No LLM backend configured.").unwrap();
        assert!(preview_at < answer_at);
        assert!(printed.contains("['what', 'is', '2', '2']"));
    }

    #[tokio::test]
    async fn test_online_answer_printed() {
        let fe = frontend(Ok(" 4 "), "gsk_key");
        let (outcome, printed) = run(&fe, Some("What is 2+2?"), "").await;

        assert_eq!(outcome, InteractiveOutcome::Answered("4".to_string()));
        assert!(!printed.contains("Enter your question"));
        assert!(printed.contains("\n4\n"));
    }

    #[tokio::test]
    async fn test_backend_failure_keeps_preview() {
        let fe = frontend(Err("connection reset"), "gsk_key");
        let (outcome, printed) = run(&fe, Some("Hello?"), "").await;

        let InteractiveOutcome::Answered(text) = outcome else {
            panic!("expected an answer");
        };
        assert!(text.starts_with("Groq API error:"));
        assert!(printed.contains("hello"));
        assert!(printed.contains("Groq API error: Connection error: connection reset"));
    }

    #[tokio::test]
    async fn test_quiet_hides_banner() {
        let fe = frontend(Ok("ok"), "gsk_key").with_quiet(true);
        let (_, printed) = run(&fe, Some("Hi"), "").await;

        assert!(!printed.contains("Groq Edition"));
        assert!(!printed.contains("[Sending to Groq LLM...]"));
        assert!(printed.contains("Processed:"));
    }
}
