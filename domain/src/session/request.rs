//! Completion request value object

use crate::core::model::Model;
use crate::prompt::{Prompt, PromptTemplate};
use crate::session::entities::{Message, Role};
use serde::Serialize;

/// The logical shape of one chat-completion call.
///
/// Always a two-message conversation: the fixed system framing followed by
/// the user prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: Model,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn for_prompt(prompt: &Prompt, model: Model, max_tokens: u32, temperature: f32) -> Self {
        Self {
            model,
            messages: vec![
                Message::system(PromptTemplate::system()),
                Message::user(prompt.as_str()),
            ],
            max_tokens,
            temperature,
        }
    }

    /// Content of the user message
    pub fn user_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::question::normalize;
    use crate::prompt::build_prompt;

    #[test]
    fn test_two_message_conversation() {
        let prompt = build_prompt(&normalize("Why is the sky blue?"));
        let request = CompletionRequest::for_prompt(&prompt, Model::default(), 400, 0.2);

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[0].content, "You are a helpful assistant.");
        assert_eq!(request.messages[1].role, Role::User);
        assert_eq!(request.user_content(), Some(prompt.as_str()));
    }

    #[test]
    fn test_wire_shape() {
        let prompt = build_prompt(&normalize("x"));
        let request = CompletionRequest::for_prompt(&prompt, Model::Mixtral8x7b, 400, 0.2);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "mixtral-8x7b-32768");
        assert_eq!(value["max_tokens"], 400);
        assert_eq!(value["messages"][1]["role"], "user");
        assert!(value["temperature"].as_f64().unwrap() > 0.19);
    }
}
