//! Provider-dispatch chat service
//!
//! `ChatService` turns a transcript plus a new visitor message into exactly
//! one request against the configured backend and always answers with plain
//! text. Failures come back as replies starting with `"Error: "`.

use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::llm::core::{
    config::ProviderConfig,
    error::LlmError,
    provider::{ChatBackend, Provider, UNKNOWN_PROVIDER_NAME},
    types::{ChatMessage, ChatRequest},
};
use crate::llm::gemini::GeminiClient;
use crate::llm::openai::OpenAiCompatibleClient;
use crate::portfolio::prompt::system_instruction;

/// Key prefix issued by Groq
const GROQ_KEY_PREFIX: &str = "gsk_";

/// Chat adapter bound to one immutable provider configuration
pub struct ChatService {
    config: ProviderConfig,
    /// Resolved provider, or the unsupported tag
    provider: Result<Provider, String>,
    system: String,
    /// Built on first use and reused afterwards
    backend: OnceCell<Box<dyn ChatBackend>>,
}

impl ChatService {
    /// Create a service from configuration
    ///
    /// The provider is resolved once: a `gsk_` key with the provider left at
    /// `gemini` is routed to Groq.
    pub fn new(config: ProviderConfig) -> Self {
        let provider = resolve_provider(&config);

        match &provider {
            Ok(p) => info!(
                provider = %p,
                model = config.model.as_deref().unwrap_or(p.default_model()),
                configured = !config.api_key.is_empty(),
                "Chat service initialized"
            ),
            Err(tag) => warn!(provider = %tag, "Chat service initialized with unsupported provider"),
        }

        Self {
            config,
            provider,
            system: system_instruction().to_string(),
            backend: OnceCell::new(),
        }
    }

    /// Replace the system instruction sent with every request
    pub fn with_system_instruction(mut self, system: impl Into<String>) -> Self {
        self.system = system.into();
        self
    }

    /// Whether an API key is configured
    pub fn is_configured(&self) -> bool {
        !self.config.api_key.is_empty()
    }

    /// The resolved provider, `None` when the configured tag is unsupported
    pub fn provider(&self) -> Option<Provider> {
        self.provider.as_ref().ok().copied()
    }

    /// Name shown in the chat header, e.g. "Google Gemini"
    pub fn provider_name(&self) -> &'static str {
        self.provider()
            .map(|p| p.display_name())
            .unwrap_or(UNKNOWN_PROVIDER_NAME)
    }

    /// API root requests are sent to
    pub fn base_url(&self) -> Option<&str> {
        let provider = self.provider()?;
        Some(
            self.config
                .base_url
                .as_deref()
                .unwrap_or(provider.default_base_url()),
        )
    }

    /// Model requests are sent for
    pub fn model(&self) -> Option<&str> {
        let provider = self.provider()?;
        Some(self.config.model.as_deref().unwrap_or(provider.default_model()))
    }

    /// Send a message and return the reply text
    ///
    /// Never fails: every error is rendered as `"Error: <message>"`.
    pub async fn send_message(&self, history: &[ChatMessage], message: &str) -> String {
        match self.try_send_message(history, message).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(
                    provider = self.provider_tag(),
                    error = %err,
                    "Chat request failed"
                );
                err.into_reply()
            }
        }
    }

    /// Send a message, keeping the typed error
    pub async fn try_send_message(
        &self,
        history: &[ChatMessage],
        message: &str,
    ) -> Result<String, LlmError> {
        if !self.is_configured() {
            return Err(LlmError::MissingApiKey);
        }

        let provider = match &self.provider {
            Ok(provider) => *provider,
            Err(tag) => return Err(LlmError::UnsupportedProvider(tag.clone())),
        };

        let backend = self
            .backend
            .get_or_try_init(|| async { self.build_backend(provider) })
            .await?;

        let request = ChatRequest::new(self.system.clone(), history.to_vec(), message);
        backend.complete(request).await
    }

    fn build_backend(&self, provider: Provider) -> Result<Box<dyn ChatBackend>, LlmError> {
        let api_key = self.config.api_key.clone();
        let model = self.config.model.clone();
        let base_url = self.config.base_url.clone();

        match provider {
            Provider::Gemini => Ok(Box::new(GeminiClient::new(api_key, model, base_url)?)),
            Provider::OpenAi | Provider::Groq | Provider::OpenRouter => {
                let client = OpenAiCompatibleClient::new(provider, api_key, model, base_url)?
                    .with_site_url(self.config.site_url.clone());
                Ok(Box::new(client))
            }
        }
    }

    fn provider_tag(&self) -> &str {
        match &self.provider {
            Ok(provider) => provider.as_str(),
            Err(tag) => tag,
        }
    }
}

fn resolve_provider(config: &ProviderConfig) -> Result<Provider, String> {
    match config.provider.parse::<Provider>() {
        Ok(Provider::Gemini) if config.api_key.starts_with(GROQ_KEY_PREFIX) => {
            info!("Detected Groq key prefix, switching provider to groq");
            Ok(Provider::Groq)
        }
        Ok(provider) => Ok(provider),
        Err(_) => Err(config.provider.clone()),
    }
}
