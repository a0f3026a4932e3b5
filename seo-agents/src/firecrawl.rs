//! Firecrawl scrape client.

use reqwest::Client;
use seo_core::{AuditError, Result, ScrapedPage};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Firecrawl API base URL.
pub const FIRECRAWL_API_BASE: &str = "https://api.firecrawl.dev";

/// Scrape call timeout.
pub const SCRAPE_TIMEOUT_SECS: u64 = 90;

/// Configuration for the Firecrawl API.
#[derive(Debug, Clone)]
pub struct FirecrawlConfig {
    /// Firecrawl API key. May be empty; scrapes then fail with a
    /// configuration error instead of reaching the network.
    pub api_key: String,
    /// Optional custom base URL.
    pub base_url: Option<String>,
}

impl FirecrawlConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), base_url: None }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(FIRECRAWL_API_BASE)
    }
}

#[derive(Debug, Serialize)]
struct ScrapeRequest<'a> {
    url: &'a str,
    formats: [&'static str; 3],
    #[serde(rename = "onlyMainContent")]
    only_main_content: bool,
    /// Scrape budget in milliseconds, as the API expects.
    timeout: u64,
}

#[derive(Debug, Deserialize)]
struct ScrapeEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: ScrapedPage,
}

/// Client for the page-scraping collaborator. All-or-nothing: there is no
/// fallback path for scrape failures.
pub struct FirecrawlClient {
    client: Client,
    config: FirecrawlConfig,
}

impl FirecrawlClient {
    pub fn new(config: FirecrawlConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(SCRAPE_TIMEOUT_SECS))
            .build()
            .map_err(|e| AuditError::Upstream(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    fn api_url(&self) -> String {
        format!("{}/v1/scrape", self.config.effective_base_url().trim_end_matches('/'))
    }

    pub async fn scrape(&self, url: &str) -> Result<ScrapedPage> {
        if self.config.api_key.is_empty() {
            return Err(AuditError::Config("Firecrawl API key not configured".to_string()));
        }

        tracing::info!(%url, "scraping page with Firecrawl");

        let request = ScrapeRequest {
            url,
            formats: ["markdown", "html", "links"],
            only_main_content: true,
            timeout: SCRAPE_TIMEOUT_SECS * 1000,
        };

        let response = self
            .client
            .post(self.api_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| AuditError::Upstream(format!("Firecrawl request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AuditError::Upstream(format!(
                "Firecrawl API error ({status}): {error_text}"
            )));
        }

        let envelope: ScrapeEnvelope = response.json().await.map_err(|e| {
            AuditError::Upstream(format!("failed to decode Firecrawl response: {e}"))
        })?;

        if !envelope.success {
            return Err(AuditError::Upstream("Firecrawl scraping failed".to_string()));
        }

        Ok(envelope.data)
    }
}
