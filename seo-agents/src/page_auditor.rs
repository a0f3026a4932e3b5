//! Agent 1: Page Auditor. Scrape, analyze, parse — all-or-nothing.

use crate::firecrawl::FirecrawlClient;
use crate::prompts::{self, AUDITOR_SYSTEM_PROMPT};
use seo_core::{ChatMessage, CompletionModel, PageAuditOutput, Result, parse_json_response};
use std::sync::Arc;

/// Token budget for the audit completion.
pub const AUDIT_MAX_TOKENS: u32 = 3000;

pub struct PageAuditor {
    scraper: FirecrawlClient,
    model: Arc<dyn CompletionModel>,
}

impl PageAuditor {
    pub fn new(scraper: FirecrawlClient, model: Arc<dyn CompletionModel>) -> Self {
        Self { scraper, model }
    }

    pub async fn run(&self, url: &str) -> Result<PageAuditOutput> {
        tracing::info!(%url, "[Agent 1] Page Auditor analyzing");

        let page = self.scraper.scrape(url).await?;
        let prompt = prompts::audit_prompt(url, &page);
        let messages = [ChatMessage::system(AUDITOR_SYSTEM_PROMPT), ChatMessage::user(prompt)];

        let response = self.model.complete(&messages, AUDIT_MAX_TOKENS).await?;

        match parse_json_response(&response) {
            Ok(output) => Ok(output),
            Err(err) => {
                tracing::error!(error = %err, response = %response, "failed to parse audit results");
                Err(err)
            }
        }
    }
}
