//! Error types for the LLM layer

use thiserror::Error;

/// Prefix carried by every failed reply handed back to the chat widget
pub const ERROR_PREFIX: &str = "Error: ";

/// Used when a failure carries no usable message
pub const FALLBACK_MESSAGE: &str = "An unexpected error occurred while communicating with the AI.";

/// Errors that can occur when talking to an LLM backend
#[derive(Debug, Error)]
pub enum LlmError {
    /// No API key configured; no request is attempted
    #[error("API Key is missing in your configuration.")]
    MissingApiKey,

    /// Provider tag outside the supported set
    #[error("Unsupported AI provider configured.")]
    UnsupportedProvider(String),

    /// HTTP request failures (status 0 when no response was received)
    #[error("HTTP error (status {status}): {body}")]
    HttpError { status: u16, body: String },

    /// Error reported by the backend in its response payload
    #[error("{message}")]
    ProviderError { message: String },

    /// JSON encoding/decoding issues
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Well-formed response without a usable reply
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl LlmError {
    /// Render the error as a chat reply: `"Error: "` followed by the message
    pub fn into_reply(self) -> String {
        let message = self.to_string();
        let message = message.trim();
        if message.is_empty() {
            format!("{}{}", ERROR_PREFIX, FALLBACK_MESSAGE)
        } else {
            format!("{}{}", ERROR_PREFIX, message)
        }
    }
}

/// Whether a reply produced by the chat service denotes a failure
pub fn is_error_reply(text: &str) -> bool {
    text.starts_with(ERROR_PREFIX.trim_end())
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::HttpError {
            status: err.status().map(|s| s.as_u16()).unwrap_or(0),
            body: err.to_string(),
        }
    }
}
