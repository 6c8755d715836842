//! LLM Abstraction Layer
//!
//! This module provides a single chat interface over Google Gemini and the
//! OpenAI-compatible chat completions APIs (OpenAI, Groq, OpenRouter).

pub mod core;
pub mod gemini;
pub mod http;
pub mod openai;
pub mod service;

// Re-export commonly used types
pub use core::{
    config::{GenerationConfig, ProviderConfig},
    error::{is_error_reply, LlmError},
    provider::{ChatBackend, Provider},
    types::{ChatMessage, ChatRequest, ChatRole},
};

pub use service::ChatService;
