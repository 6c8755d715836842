// Request and response bodies of the HTTP API

use serde::{Deserialize, Serialize};

use crate::llm::ChatMessage;

// Request Types
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegenerateRequest {
    pub history: Vec<ChatMessage>,
}

// Chat session bootstrap
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSessionResponse {
    pub provider: &'static str,
    pub configured: bool,
    pub suggestions: Vec<&'static str>,
    pub show_suggestions: bool,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
