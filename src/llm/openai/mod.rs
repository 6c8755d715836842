//! OpenAI-compatible provider implementation
//!
//! One client serves OpenAI, Groq and OpenRouter; they differ only in
//! endpoint and default model.

pub mod client;
pub mod mapper;
pub mod types;

pub use client::OpenAiCompatibleClient;
