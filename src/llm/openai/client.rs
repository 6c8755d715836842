//! OpenAI-compatible client implementation (OpenAI, Groq, OpenRouter)

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::llm::core::{
    error::LlmError,
    provider::{ChatBackend, Provider},
    types::ChatRequest,
};
use crate::llm::http::{build_client, read_json};

use super::mapper::{from_completion_response, to_completion_request};
use super::types::ChatCompletionResponse;

/// Title sent in the `X-Title` header (OpenRouter attribution)
pub const APP_TITLE: &str = "Youssef Portfolio AI";

/// Client for any chat completions API speaking the OpenAI wire format
pub struct OpenAiCompatibleClient {
    http_client: Client,
    provider: Provider,
    api_key: String,
    base_url: String,
    model: String,
    site_url: Option<String>,
}

impl OpenAiCompatibleClient {
    /// Create a client for `provider`
    ///
    /// `model` and `base_url` fall back to the provider's defaults when `None`.
    pub fn new(
        provider: Provider,
        api_key: impl Into<String>,
        model: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            http_client: build_client()?,
            provider,
            api_key: api_key.into(),
            base_url: base_url
                .unwrap_or_else(|| provider.default_base_url().to_string())
                .trim_end_matches('/')
                .to_string(),
            model: model.unwrap_or_else(|| provider.default_model().to_string()),
            site_url: None,
        })
    }

    /// Send `HTTP-Referer: site_url` with every request
    pub fn with_site_url(mut self, site_url: Option<String>) -> Self {
        self.site_url = site_url;
        self
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the chat completions endpoint URL
    pub fn endpoint_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatBackend for OpenAiCompatibleClient {
    async fn complete(&self, request: ChatRequest) -> Result<String, LlmError> {
        let body = to_completion_request(request, &self.model);
        debug!(
            provider = %self.provider,
            model = %self.model,
            messages = body.messages.len(),
            "Sending chat completion request"
        );

        let mut builder = self
            .http_client
            .post(self.endpoint_url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("X-Title", APP_TITLE);
        if let Some(site_url) = &self.site_url {
            builder = builder.header("HTTP-Referer", site_url);
        }

        let response = builder.json(&body).send().await?;

        let reply = read_json::<ChatCompletionResponse>(response).await?;
        if reply.body.error.is_none() && !reply.status.is_success() {
            return Err(LlmError::HttpError {
                status: reply.status.as_u16(),
                body: reply.text,
            });
        }

        from_completion_response(reply.body)
    }
}
