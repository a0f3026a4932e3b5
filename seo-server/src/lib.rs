//! HTTP surface for the SEO audit service: configuration, shared state, and
//! the axum router with the audit/status/health endpoints.

pub mod config;
pub mod rest;

pub use config::AppConfig;
pub use rest::create_app;

use seo_agents::{
    FirecrawlClient, FirecrawlConfig, OptimizationAdvisor, PageAuditor, SerpAnalyst, SerpClient,
    SerpConfig,
};
use seo_core::Result;
use seo_model::{LlmSettings, model_from_settings};
use std::sync::Arc;

/// Shared request-handler state: the read-only configuration snapshot plus
/// the three agents. No mutable state crosses requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub auditor: Arc<PageAuditor>,
    pub analyst: Arc<SerpAnalyst>,
    pub advisor: Arc<OptimizationAdvisor>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        auditor: PageAuditor,
        analyst: SerpAnalyst,
        advisor: OptimizationAdvisor,
    ) -> Self {
        Self {
            config: Arc::new(config),
            auditor: Arc::new(auditor),
            analyst: Arc::new(analyst),
            advisor: Arc::new(advisor),
        }
    }

    /// Wire up the production collaborator clients from configuration.
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let settings = LlmSettings::new(config.provider)
            .with_openai_api_key(&config.openai_api_key)
            .with_anthropic_api_key(&config.anthropic_api_key);
        let model = model_from_settings(&settings)?;

        let scraper = FirecrawlClient::new(FirecrawlConfig::new(&config.firecrawl_api_key))?;
        let search = SerpClient::new(SerpConfig::new(&config.serp_api_key))?;

        Ok(Self::new(
            config,
            PageAuditor::new(scraper, model.clone()),
            SerpAnalyst::new(search, model.clone()),
            OptimizationAdvisor::new(model),
        ))
    }
}
