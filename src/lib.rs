// HTTP Server modules
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;

// Portfolio content and chat
pub mod conversation;
pub mod portfolio;

// LLM abstraction layer
pub mod llm;
