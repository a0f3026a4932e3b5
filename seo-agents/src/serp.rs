//! Search-results client with a deterministic mock fallback.
//!
//! Unlike the scrape dependency, search is never allowed to abort the
//! pipeline: a missing credential or a failed call substitutes synthetic
//! results, and the substitution is a visible outcome (`SerpSource::Mock`)
//! rather than a caught error.

use reqwest::Client;
use seo_core::{AuditError, OrganicResult, Result};
use serde::Deserialize;
use std::time::Duration;

/// Default SerpAPI base URL.
pub const SERPAPI_BASE: &str = "https://serpapi.com";

/// Search call timeout.
pub const SEARCH_TIMEOUT_SECS: u64 = 30;

/// Maximum organic results carried into analysis.
pub const SERP_RESULT_LIMIT: usize = 10;

/// Configuration for the search API.
#[derive(Debug, Clone)]
pub struct SerpConfig {
    /// Search API key. Empty selects mock mode.
    pub api_key: String,
    /// Optional custom base URL.
    pub base_url: Option<String>,
}

impl SerpConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), base_url: None }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(SERPAPI_BASE)
    }
}

/// Where a batch of organic results came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerpSource {
    Live,
    Mock,
}

/// Outcome of a search fetch: at most [`SERP_RESULT_LIMIT`] results plus
/// their provenance.
#[derive(Debug, Clone)]
pub struct SerpFetch {
    pub results: Vec<OrganicResult>,
    pub source: SerpSource,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
}

pub struct SerpClient {
    client: Client,
    config: SerpConfig,
}

impl SerpClient {
    pub fn new(config: SerpConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(SEARCH_TIMEOUT_SECS))
            .build()
            .map_err(|e| AuditError::Upstream(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    fn api_url(&self) -> String {
        format!("{}/search", self.config.effective_base_url().trim_end_matches('/'))
    }

    /// Fetch organic results for `query`. Infallible: any live-path failure
    /// degrades to the mock generator.
    pub async fn fetch(&self, query: &str) -> SerpFetch {
        if self.config.api_key.is_empty() {
            tracing::warn!("SERP API key not configured, using mock results");
            return SerpFetch { results: mock_results(query), source: SerpSource::Mock };
        }

        tracing::info!(%query, "searching SERP");

        match self.fetch_live(query).await {
            Ok(results) => SerpFetch { results, source: SerpSource::Live },
            Err(err) => {
                tracing::warn!(error = %err, "SERP API call failed, using mock results");
                SerpFetch { results: mock_results(query), source: SerpSource::Mock }
            }
        }
    }

    async fn fetch_live(&self, query: &str) -> Result<Vec<OrganicResult>> {
        let response = self
            .client
            .get(self.api_url())
            .query(&[
                ("q", query),
                ("api_key", &self.config.api_key),
                ("num", "10"),
                ("engine", "google"),
            ])
            .send()
            .await
            .map_err(|e| AuditError::Upstream(format!("SERP request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AuditError::Upstream(format!("SERP API error ({status}): {error_text}")));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| AuditError::Upstream(format!("failed to decode SERP response: {e}")))?;

        let mut results = body.organic_results;
        results.truncate(SERP_RESULT_LIMIT);
        Ok(results)
    }
}

/// Deterministic placeholder results: positions 1-10 with templated
/// title/link/snippet embedding the query verbatim.
pub fn mock_results(query: &str) -> Vec<OrganicResult> {
    let slug = query.replace(' ', "-");
    (1..=SERP_RESULT_LIMIT as u32)
        .map(|position| OrganicResult {
            position,
            title: format!("Result {position}: {query} - Example Site"),
            link: format!("https://example{position}.com/{slug}"),
            snippet: format!(
                "This is a comprehensive guide about {query}. Learn everything you need to know..."
            ),
        })
        .collect()
}
