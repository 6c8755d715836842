//! Core types for the LLM abstraction layer

use serde::{Deserialize, Serialize};

use super::config::GenerationConfig;

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Visitor input
    User,
    /// Reply produced by the assistant (Gemini naming)
    Model,
    /// Reply produced by the assistant (OpenAI naming)
    Assistant,
    /// Instruction or notice not written by either party
    System,
}

impl ChatRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
            ChatRole::Assistant => "assistant",
            ChatRole::System => "system",
        }
    }
}

/// A single message in the chat transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: ChatRole,
    /// Message text
    pub text: String,
    /// Set when the text is a failure notice rather than a reply
    #[serde(default)]
    pub is_error: bool,
}

impl ChatMessage {
    /// Create a new user message
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            is_error: false,
        }
    }

    /// Create a new model reply
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
            is_error: false,
        }
    }

    /// Create a model-side message flagged as an error
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
            is_error: true,
        }
    }
}

/// Request handed to a chat backend
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// System instruction sent with every request
    pub system: String,
    /// Prior transcript, oldest first
    pub history: Vec<ChatMessage>,
    /// New visitor message
    pub message: String,
    /// Generation parameters
    pub config: GenerationConfig,
}

impl ChatRequest {
    pub fn new(
        system: impl Into<String>,
        history: Vec<ChatMessage>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            system: system.into(),
            history,
            message: message.into(),
            config: GenerationConfig::default(),
        }
    }
}
