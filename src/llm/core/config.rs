//! Provider and generation configuration

use serde::{Deserialize, Serialize};

/// Sampling temperature sent with every chat request
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Provider tag used when `AI_PROVIDER` is absent
pub const DEFAULT_PROVIDER: &str = "gemini";

/// Parameters for controlling text generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Randomness (0.0-2.0, higher = more random)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: Some(DEFAULT_TEMPERATURE),
            max_tokens: None,
        }
    }
}

/// Backend selection read once at startup
///
/// Values are trimmed and empty strings are treated as absent. The provider
/// tag is kept as written (lower-cased) so that an unknown tag can still be
/// reported at call time instead of failing startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Provider tag, e.g. "gemini", "openai", "groq", "openrouter"
    pub provider: String,
    /// Secret used to authenticate against the backend
    pub api_key: String,
    /// Model override; the provider default is used when `None`
    pub model: Option<String>,
    /// Endpoint override; the provider default is used when `None`
    pub base_url: Option<String>,
    /// Origin of the site, forwarded as `HTTP-Referer` to OpenAI-compatible backends
    pub site_url: Option<String>,
}

impl ProviderConfig {
    /// Create a configuration for a provider tag and key
    pub fn new(provider: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            provider: normalize_provider(&provider.into()),
            api_key: api_key.into().trim().to_string(),
            model: None,
            base_url: None,
            site_url: None,
        }
    }

    /// Read `AI_PROVIDER`, `API_KEY`, `AI_MODEL`, `AI_BASE_URL` and `AI_SITE_URL`
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            provider: normalize_provider(&read("AI_PROVIDER").unwrap_or_default()),
            api_key: read("API_KEY").unwrap_or_default(),
            model: read("AI_MODEL"),
            base_url: read("AI_BASE_URL").map(|url| url.trim_end_matches('/').to_string()),
            site_url: read("AI_SITE_URL"),
        }
    }

    /// Set the model override
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the endpoint override
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into().trim_end_matches('/').to_string());
        self
    }

    /// Set the site origin sent as `HTTP-Referer`
    pub fn with_site_url(mut self, site_url: impl Into<String>) -> Self {
        self.site_url = Some(site_url.into());
        self
    }
}

fn normalize_provider(tag: &str) -> String {
    let tag = tag.trim().to_lowercase();
    if tag.is_empty() {
        DEFAULT_PROVIDER.to_string()
    } else {
        tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_generation_config_default() {
        let config = GenerationConfig::default();
        assert_eq!(config.temperature, Some(0.7));
        assert!(config.max_tokens.is_none());
    }

    #[test]
    fn test_generation_config_serialization() {
        let json = serde_json::to_string(&GenerationConfig::default()).unwrap();
        assert!(json.contains("\"temperature\":0.7"));
        assert!(!json.contains("max_tokens"));
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = ProviderConfig::from_lookup(lookup(&[]));
        assert_eq!(config.provider, "gemini");
        assert_eq!(config.api_key, "");
        assert!(config.model.is_none());
        assert!(config.base_url.is_none());
        assert!(config.site_url.is_none());
    }

    #[test]
    fn test_from_lookup_trims_and_lowercases() {
        let config = ProviderConfig::from_lookup(lookup(&[
            ("AI_PROVIDER", "  OpenRouter "),
            ("API_KEY", " sk-or-123 \n"),
            ("AI_MODEL", " meta-llama/llama-3-8b "),
            ("AI_BASE_URL", "http://localhost:8080/v1/"),
        ]));
        assert_eq!(config.provider, "openrouter");
        assert_eq!(config.api_key, "sk-or-123");
        assert_eq!(config.model.as_deref(), Some("meta-llama/llama-3-8b"));
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080/v1"));
    }

    #[test]
    fn test_blank_values_are_absent() {
        let config = ProviderConfig::from_lookup(lookup(&[
            ("AI_PROVIDER", "   "),
            ("AI_MODEL", ""),
            ("AI_BASE_URL", "  "),
        ]));
        assert_eq!(config.provider, "gemini");
        assert!(config.model.is_none());
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_builder() {
        let config = ProviderConfig::new("GROQ", " gsk_abc ")
            .with_model("llama-3.1-8b-instant")
            .with_base_url("http://127.0.0.1:9000/")
            .with_site_url("https://example.dev");
        assert_eq!(config.provider, "groq");
        assert_eq!(config.api_key, "gsk_abc");
        assert_eq!(config.model.as_deref(), Some("llama-3.1-8b-instant"));
        assert_eq!(config.base_url.as_deref(), Some("http://127.0.0.1:9000"));
        assert_eq!(config.site_url.as_deref(), Some("https://example.dev"));
    }
}
