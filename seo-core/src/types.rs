//! Value schemas exchanged between the pipeline stages.
//!
//! Every list/number field that the model may omit carries `#[serde(default)]`
//! so it renders as an empty list / zero / empty string rather than null;
//! the prompt templates and report assembly assume presence.

use crate::error::{AuditError, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Inbound audit request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRequest {
    pub url: String,
}

impl AuditRequest {
    /// Reject URLs without an explicit http/https scheme before any
    /// collaborator is invoked.
    pub fn validate(&self) -> Result<()> {
        if self.url.starts_with("http://") || self.url.starts_with("https://") {
            Ok(())
        } else {
            Err(AuditError::InvalidRequest(
                "URL must start with http:// or https://".to_string(),
            ))
        }
    }
}

/// Page metadata as reported by the scrape service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

/// Scraped page content returned by the scrape service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapedPage {
    pub markdown: String,
    pub html: String,
    pub links: Vec<String>,
    pub metadata: PageMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadingItem {
    pub tag: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkCounts {
    pub internal: u32,
    pub external: u32,
    pub broken: u32,
    pub notes: String,
}

/// On-page findings extracted by the Page Auditor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditResults {
    pub title_tag: String,
    pub meta_description: String,
    pub primary_heading: String,
    pub secondary_headings: Vec<HeadingItem>,
    pub word_count: u32,
    pub content_summary: String,
    pub link_counts: LinkCounts,
    pub technical_findings: Vec<String>,
    pub content_opportunities: Vec<String>,
}

/// Keyword targets the Page Auditor infers for the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetKeywords {
    pub primary_keyword: String,
    pub secondary_keywords: Vec<String>,
    pub search_intent: String,
    pub supporting_topics: Vec<String>,
}

/// Full output of Agent 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageAuditOutput {
    pub audit_results: AuditResults,
    pub target_keywords: TargetKeywords,
}

/// One analyzed search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerpResult {
    pub rank: u32,
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub content_type: String,
}

/// Competitive-landscape analysis produced by Agent 2.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerpAnalysis {
    pub primary_keyword: String,
    #[serde(default)]
    pub top_10_results: Vec<SerpResult>,
    #[serde(default)]
    pub title_patterns: Vec<String>,
    #[serde(default)]
    pub content_formats: Vec<String>,
    #[serde(default)]
    pub people_also_ask: Vec<String>,
    #[serde(default)]
    pub key_themes: Vec<String>,
    #[serde(default)]
    pub differentiation_opportunities: Vec<String>,
}

/// Raw organic search result as returned by the search service (or the mock
/// generator) and embedded verbatim into the SERP analysis prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganicResult {
    pub position: u32,
    pub title: String,
    pub link: String,
    pub snippet: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    Completed,
    Failed,
}

/// The sole externally visible result of an audit run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditResponse {
    pub status: AuditStatus,
    pub audit_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_audit: Option<PageAuditOutput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serp_analysis: Option<SerpAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: String,
}

impl AuditResponse {
    pub fn completed(
        audit_id: impl Into<String>,
        page_audit: PageAuditOutput,
        serp_analysis: SerpAnalysis,
        report: String,
    ) -> Self {
        Self {
            status: AuditStatus::Completed,
            audit_id: audit_id.into(),
            page_audit: Some(page_audit),
            serp_analysis: Some(serp_analysis),
            report: Some(report),
            error: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    /// A failed response carries only the error message; no partial agent
    /// outputs survive, even if some stages succeeded before the failure.
    pub fn failed(audit_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            status: AuditStatus::Failed,
            audit_id: audit_id.into(),
            page_audit: None,
            serp_analysis: None,
            report: None,
            error: Some(error.into()),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Mint a timestamp-derived audit identifier. Not globally unique; the
/// collision window is one second.
pub fn new_audit_id() -> String {
    format!("audit_{}", Utc::now().format("%Y%m%d_%H%M%S"))
}
