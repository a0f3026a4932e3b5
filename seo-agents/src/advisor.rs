//! Agent 3: Optimization Advisor. One synthesis completion, returned
//! verbatim (trimmed); the Markdown is not validated.

use crate::prompts::{self, ADVISOR_SYSTEM_PROMPT};
use seo_core::{ChatMessage, CompletionModel, PageAuditOutput, Result, SerpAnalysis};
use std::sync::Arc;

/// Token budget for the report completion.
pub const REPORT_MAX_TOKENS: u32 = 4000;

pub struct OptimizationAdvisor {
    model: Arc<dyn CompletionModel>,
}

impl OptimizationAdvisor {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self { model }
    }

    pub async fn run(
        &self,
        url: &str,
        page_audit: &PageAuditOutput,
        serp_analysis: &SerpAnalysis,
    ) -> Result<String> {
        tracing::info!("[Agent 3] Optimization Advisor generating report");

        let prompt = prompts::report_prompt(url, page_audit, serp_analysis)?;
        let messages = [ChatMessage::system(ADVISOR_SYSTEM_PROMPT), ChatMessage::user(prompt)];

        let report = self.model.complete(&messages, REPORT_MAX_TOKENS).await?;
        Ok(report.trim().to_string())
    }
}
