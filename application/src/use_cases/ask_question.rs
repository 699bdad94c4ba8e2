//! Ask Question use case.
//!
//! The full pipeline shared by every front end:
//! normalize → build prompt → read credential → dispatch.
//!
//! Front ends that show a preview before the answer call
//! [`AskQuestionUseCase::prepare`] and [`AskQuestionUseCase::answer`]
//! separately; others call [`AskQuestionUseCase::execute`].

use crate::ports::credential_source::CredentialSource;
use crate::use_cases::dispatch::{DispatchError, DispatchUseCase, render_outcome};
use qa_domain::{Answer, DomainError, NormalizedQuestion, Prompt, build_prompt};
use std::sync::Arc;
use tracing::info;

/// A question ready to be dispatched
#[derive(Debug, Clone)]
pub struct PreparedQuestion {
    pub question: NormalizedQuestion,
    pub prompt: Prompt,
}

/// Result of running the full pipeline on one question
#[derive(Debug, Clone)]
pub struct AskOutput {
    pub question: NormalizedQuestion,
    pub outcome: Result<Answer, DispatchError>,
}

impl AskOutput {
    /// The answer exactly as it should be shown to the user
    pub fn answer_text(&self) -> String {
        render_outcome(&self.outcome)
    }
}

/// Use case for answering one question
#[derive(Clone)]
pub struct AskQuestionUseCase {
    dispatcher: DispatchUseCase,
    credentials: Arc<dyn CredentialSource>,
}

impl AskQuestionUseCase {
    pub fn new(dispatcher: DispatchUseCase, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            dispatcher,
            credentials,
        }
    }

    /// Normalize `raw` and build its prompt.
    ///
    /// Blank input is rejected here so no front end can dispatch it.
    pub fn prepare(&self, raw: &str) -> Result<PreparedQuestion, DomainError> {
        let question = NormalizedQuestion::try_new(raw).ok_or(DomainError::EmptyQuestion)?;
        let prompt = build_prompt(&question);
        Ok(PreparedQuestion { question, prompt })
    }

    /// Dispatch a prepared question.
    ///
    /// The credential is read from the source on every call.
    pub async fn answer(&self, prepared: &PreparedQuestion) -> Result<Answer, DispatchError> {
        let credential = self.credentials.credential();
        self.dispatcher
            .dispatch(&prepared.prompt, credential.as_ref())
            .await
    }

    /// Run the whole pipeline on `raw`.
    pub async fn execute(&self, raw: &str) -> Result<AskOutput, DomainError> {
        let prepared = self.prepare(raw)?;
        info!(
            chars = prepared.question.original().chars().count(),
            tokens = prepared.question.tokens().len(),
            "Answering question"
        );

        let outcome = self.answer(&prepared).await;
        Ok(AskOutput {
            question: prepared.question,
            outcome,
        })
    }
}
