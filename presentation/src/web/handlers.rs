//! Request handlers for the web front end

use axum::{
    Form, Json,
    extract::State,
    response::Html,
};
use qa_application::AskQuestionUseCase;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::debug;

const INDEX_HTML: &str = include_str!("index.html");

/// Form body of `POST /ask`
#[derive(Debug, Default, Deserialize)]
pub struct AskForm {
    #[serde(default)]
    pub question: String,
}

/// JSON body returned by `POST /ask`
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AskResponse {
    Rejected {
        error: String,
    },
    Answered {
        processed: String,
        tokens: Vec<String>,
        answer: String,
    },
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// A missing or unparsable form counts as an empty question.
pub async fn ask(
    State(use_case): State<Arc<AskQuestionUseCase>>,
    form: Option<Form<AskForm>>,
) -> Json<AskResponse> {
    let question = form.map(|Form(f)| f.question).unwrap_or_default();

    match use_case.execute(&question).await {
        Ok(output) => {
            let answer = output.answer_text();
            let (processed, tokens) = output.question.into_parts();
            Json(AskResponse::Answered {
                processed,
                tokens,
                answer,
            })
        }
        Err(e) => {
            debug!("Rejected question: {}", e);
            Json(AskResponse::Rejected {
                error: e.to_string(),
            })
        }
    }
}
