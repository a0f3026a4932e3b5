//! Process-wide configuration, read once at startup and immutable after.

use seo_model::Provider;

fn env_or_empty(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

/// Credentials and provider selection for the three external collaborators.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub firecrawl_api_key: String,
    pub openai_api_key: String,
    pub anthropic_api_key: String,
    pub serp_api_key: String,
    pub provider: Provider,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            firecrawl_api_key: String::new(),
            openai_api_key: String::new(),
            anthropic_api_key: String::new(),
            serp_api_key: String::new(),
            provider: Provider::OpenAi,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment. Missing variables
    /// become empty strings; the affected collaborator reports itself as
    /// unconfigured rather than failing startup.
    pub fn from_env() -> Self {
        Self {
            firecrawl_api_key: env_or_empty("FIRECRAWL_API_KEY"),
            openai_api_key: env_or_empty("OPENAI_API_KEY"),
            anthropic_api_key: env_or_empty("ANTHROPIC_API_KEY"),
            serp_api_key: env_or_empty("SERP_API_KEY"),
            provider: Provider::from_selector(&env_or_empty("LLM_PROVIDER")),
        }
    }

    /// The implied model name for the selected provider.
    pub fn llm_model(&self) -> &'static str {
        self.provider.default_model()
    }

    pub fn llm_configured(&self) -> bool {
        !self.openai_api_key.is_empty() || !self.anthropic_api_key.is_empty()
    }
}
