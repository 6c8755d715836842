//! Provider identifiers and the backend trait

use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

use super::{error::LlmError, types::ChatRequest};

/// Display name reported when the configured provider is not supported
pub const UNKNOWN_PROVIDER_NAME: &str = "AI Agent";

/// Main interface that all chat backends must satisfy
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one request and return the reply text
    ///
    /// Issues exactly one outbound request. Failures are returned as
    /// `LlmError`; converting them to chat replies is up to the caller.
    async fn complete(&self, request: ChatRequest) -> Result<String, LlmError>;
}

/// Supported LLM backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// Google Gemini, native generateContent API
    Gemini,
    /// OpenAI chat completions
    OpenAi,
    /// Groq, OpenAI-compatible
    Groq,
    /// OpenRouter, OpenAI-compatible
    OpenRouter,
}

impl Provider {
    /// Get the provider tag as written in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::OpenAi => "openai",
            Provider::Groq => "groq",
            Provider::OpenRouter => "openrouter",
        }
    }

    /// Endpoint used when no base URL is configured
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Provider::Gemini => "https://generativelanguage.googleapis.com/v1beta",
            Provider::OpenAi => "https://api.openai.com/v1",
            Provider::Groq => "https://api.groq.com/openai/v1",
            Provider::OpenRouter => "https://openrouter.ai/api/v1",
        }
    }

    /// Model used when no model is configured
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini-flash-latest",
            Provider::OpenAi => "gpt-4o-mini",
            Provider::Groq => "llama-3.3-70b-versatile",
            Provider::OpenRouter => "google/gemini-2.0-flash-exp:free",
        }
    }

    /// Human-readable name shown in the chat header
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Gemini => "Google Gemini",
            Provider::OpenAi => "OpenAI",
            Provider::Groq => "Groq (Llama)",
            Provider::OpenRouter => "OpenRouter",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" => Ok(Provider::Gemini),
            "openai" => Ok(Provider::OpenAi),
            "groq" => Ok(Provider::Groq),
            "openrouter" => Ok(Provider::OpenRouter),
            other => Err(LlmError::UnsupportedProvider(other.to_string())),
        }
    }
}
