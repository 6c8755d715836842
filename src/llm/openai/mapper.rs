//! Mapping between abstraction types and chat completion types

use crate::llm::core::{
    error::LlmError,
    types::{ChatMessage, ChatRequest, ChatRole},
};

use super::types::{ChatCompletionRequest, ChatCompletionResponse, CompletionMessage};

/// Build the chat completion body for `model`
///
/// The message list is the system instruction, then the whole transcript,
/// then the new user message. Unlike the Gemini mapping, no leading turns
/// are dropped.
pub fn to_completion_request(request: ChatRequest, model: &str) -> ChatCompletionRequest {
    let mut messages = Vec::with_capacity(request.history.len() + 2);
    messages.push(CompletionMessage {
        role: "system".to_string(),
        content: request.system,
    });
    messages.extend(request.history.iter().map(to_completion_message));
    messages.push(CompletionMessage {
        role: "user".to_string(),
        content: request.message,
    });

    ChatCompletionRequest {
        model: model.to_string(),
        messages,
        temperature: request.config.temperature,
        max_tokens: request.config.max_tokens,
    }
}

/// Convert a transcript entry, renaming `model` to `assistant`
fn to_completion_message(message: &ChatMessage) -> CompletionMessage {
    let role = match message.role {
        ChatRole::Model => ChatRole::Assistant,
        other => other,
    };

    CompletionMessage {
        role: role.as_str().to_string(),
        content: message.text.clone(),
    }
}

/// Extract the reply text
///
/// A reported error wins over anything in `choices`.
pub fn from_completion_response(response: ChatCompletionResponse) -> Result<String, LlmError> {
    if let Some(error) = response.error {
        return Err(LlmError::ProviderError {
            message: error.message.unwrap_or_default(),
        });
    }

    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.unwrap_or_default())
        .ok_or_else(|| LlmError::InvalidResponse("response contained no choices".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::openai::types::{Choice, ChoiceMessage, ErrorBody};

    #[test]
    fn test_message_list_layout() {
        let request = ChatRequest::new(
            "persona",
            vec![ChatMessage::model("Greeting"), ChatMessage::user("Q1"), ChatMessage::model("A1")],
            "Q2",
        );
        let body = to_completion_request(request, "gpt-4o-mini");

        let roles: Vec<&str> = body.messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, vec!["system", "assistant", "user", "assistant", "user"]);
        assert_eq!(body.messages[0].content, "persona");
        assert_eq!(body.messages[4].content, "Q2");
        assert_eq!(body.model, "gpt-4o-mini");
        assert_eq!(body.temperature, Some(0.7));
    }

    #[test]
    fn test_roles_other_than_model_pass_through() {
        let history = vec![
            ChatMessage::user("u"),
            ChatMessage {
                role: ChatRole::System,
                text: "s".to_string(),
                is_error: false,
            },
            ChatMessage {
                role: ChatRole::Assistant,
                text: "a".to_string(),
                is_error: false,
            },
        ];
        let body = to_completion_request(ChatRequest::new("p", history, "m"), "x");
        let roles: Vec<&str> = body.messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, vec!["system", "user", "system", "assistant", "user"]);
    }

    #[test]
    fn test_error_wins_over_choices() {
        let response = ChatCompletionResponse {
            choices: vec![Choice {
                message: ChoiceMessage {
                    content: Some("ignored".to_string()),
                },
            }],
            error: Some(ErrorBody {
                message: Some("Rate limit reached".to_string()),
            }),
        };
        let err = from_completion_response(response).unwrap_err();
        assert_eq!(err.into_reply(), "Error: Rate limit reached");
    }

    #[test]
    fn test_empty_choices() {
        let response = ChatCompletionResponse {
            choices: vec![],
            error: None,
        };
        assert!(matches!(
            from_completion_response(response),
            Err(LlmError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_first_choice_returned() {
        let response = ChatCompletionResponse {
            choices: vec![
                Choice {
                    message: ChoiceMessage {
                        content: Some("first".to_string()),
                    },
                },
                Choice {
                    message: ChoiceMessage {
                        content: Some("second".to_string()),
                    },
                },
            ],
            error: None,
        };
        assert_eq!(from_completion_response(response).unwrap(), "first");
    }
}
