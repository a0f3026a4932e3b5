//! LLM provider clients for the SEO audit pipeline.
//!
//! Two interchangeable providers share the [`CompletionModel`] contract from
//! `seo-core`; the concrete client is selected once at construction from
//! [`LlmSettings`], so call sites never branch on a provider flag.

pub mod anthropic;
pub mod mock;
pub mod openai;

pub use anthropic::{AnthropicClient, AnthropicConfig};
pub use mock::MockModel;
pub use openai::{OpenAiClient, OpenAiConfig};

use seo_core::{CompletionModel, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// LLM call timeout, shared by both provider clients.
pub const LLM_TIMEOUT_SECS: u64 = 120;

/// Supported completion providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    Anthropic,
}

impl Provider {
    /// Parse the provider selector; anything other than `anthropic` selects
    /// OpenAI, matching the default.
    pub fn from_selector(value: &str) -> Self {
        if value.eq_ignore_ascii_case("anthropic") {
            Provider::Anthropic
        } else {
            Provider::OpenAi
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Anthropic => "anthropic",
        }
    }

    /// The implied model name for this provider.
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::OpenAi => openai::DEFAULT_OPENAI_MODEL,
            Provider::Anthropic => anthropic::DEFAULT_ANTHROPIC_MODEL,
        }
    }
}

/// Provider selection plus credentials, read once at process start.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub provider: Provider,
    pub openai_api_key: String,
    pub anthropic_api_key: String,
    /// Test override for the provider endpoint.
    pub base_url: Option<String>,
}

impl LlmSettings {
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            openai_api_key: String::new(),
            anthropic_api_key: String::new(),
            base_url: None,
        }
    }

    pub fn with_openai_api_key(mut self, key: impl Into<String>) -> Self {
        self.openai_api_key = key.into();
        self
    }

    pub fn with_anthropic_api_key(mut self, key: impl Into<String>) -> Self {
        self.anthropic_api_key = key.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// Build the completion client for the configured provider. A missing
/// credential is not an error here; the client reports `Config` at call time
/// so an unconfigured server can still start and report its status.
pub fn model_from_settings(settings: &LlmSettings) -> Result<Arc<dyn CompletionModel>> {
    match settings.provider {
        Provider::OpenAi => {
            let mut config =
                OpenAiConfig::new(&settings.openai_api_key, settings.provider.default_model());
            if let Some(base_url) = &settings.base_url {
                config = config.with_base_url(base_url);
            }
            Ok(Arc::new(OpenAiClient::new(config)?))
        }
        Provider::Anthropic => {
            let mut config = AnthropicConfig::new(
                &settings.anthropic_api_key,
                settings.provider.default_model(),
            );
            if let Some(base_url) = &settings.base_url {
                config = config.with_base_url(base_url);
            }
            Ok(Arc::new(AnthropicClient::new(config)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_selector() {
        assert_eq!(Provider::from_selector("anthropic"), Provider::Anthropic);
        assert_eq!(Provider::from_selector("Anthropic"), Provider::Anthropic);
        assert_eq!(Provider::from_selector("openai"), Provider::OpenAi);
        // Unrecognized values fall back to the default provider.
        assert_eq!(Provider::from_selector(""), Provider::OpenAi);
        assert_eq!(Provider::from_selector("gemini"), Provider::OpenAi);
    }

    #[test]
    fn test_default_models() {
        assert_eq!(Provider::OpenAi.default_model(), "gpt-4o-mini");
        assert_eq!(Provider::Anthropic.default_model(), "claude-3-5-sonnet-20241022");
    }

    #[test]
    fn test_dispatch_by_provider() {
        let model = model_from_settings(&LlmSettings::new(Provider::OpenAi)).unwrap();
        assert_eq!(model.name(), "gpt-4o-mini");

        let model = model_from_settings(&LlmSettings::new(Provider::Anthropic)).unwrap();
        assert_eq!(model.name(), "claude-3-5-sonnet-20241022");
    }
}
