//! Gemini client implementation

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::llm::core::{
    error::LlmError,
    provider::{ChatBackend, Provider},
    types::ChatRequest,
};
use crate::llm::http::{build_client, read_json};

use super::mapper::{from_gemini_response, to_gemini_request};
use super::types::GenerateContentResponse;

/// Client for the Gemini generateContent API
pub struct GeminiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// API key sent in the `x-goog-api-key` header
    api_key: String,
    /// API root, e.g. `https://generativelanguage.googleapis.com/v1beta`
    base_url: String,
    /// Model identifier
    model: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// `model` and `base_url` fall back to the Gemini defaults when `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        api_key: impl Into<String>,
        model: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            http_client: build_client()?,
            api_key: api_key.into(),
            base_url: base_url.unwrap_or_else(|| Provider::Gemini.default_base_url().to_string()),
            model: model.unwrap_or_else(|| Provider::Gemini.default_model().to_string()),
        })
    }

    /// Model identifier used for requests
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the endpoint URL for a single generation
    fn build_endpoint_url(&self) -> String {
        build_endpoint_url(&self.base_url, &self.model)
    }
}

fn build_endpoint_url(base_url: &str, model: &str) -> String {
    format!(
        "{}/models/{}:generateContent",
        base_url.trim_end_matches('/'),
        model.trim_start_matches("models/")
    )
}

#[async_trait]
impl ChatBackend for GeminiClient {
    async fn complete(&self, request: ChatRequest) -> Result<String, LlmError> {
        let gemini_request = to_gemini_request(request);
        debug!(
            model = %self.model,
            turns = gemini_request.contents.len(),
            "Sending Gemini request"
        );

        let response = self
            .http_client
            .post(self.build_endpoint_url())
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&gemini_request)
            .send()
            .await?;

        let reply = read_json::<GenerateContentResponse>(response).await?;
        if reply.body.error.is_none() && !reply.status.is_success() {
            return Err(LlmError::HttpError {
                status: reply.status.as_u16(),
                body: reply.text,
            });
        }

        from_gemini_response(reply.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_format() {
        let url = build_endpoint_url(
            "https://generativelanguage.googleapis.com/v1beta",
            "gemini-flash-latest",
        );
        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-flash-latest:generateContent"
        );
    }

    #[test]
    fn test_endpoint_url_strips_prefix_and_slash() {
        let url = build_endpoint_url("http://127.0.0.1:8080/", "models/gemini-2.5-flash");
        assert_eq!(
            url,
            "http://127.0.0.1:8080/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_defaults_applied() {
        let client = GeminiClient::new("key", None, None).unwrap();
        assert_eq!(client.model(), "gemini-flash-latest");
        assert!(client
            .build_endpoint_url()
            .starts_with("https://generativelanguage.googleapis.com/v1beta/models/"));
    }
}
