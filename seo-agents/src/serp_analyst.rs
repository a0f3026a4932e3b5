//! Agent 2: SERP Analyst. Search (or mock), analyze, parse.

use crate::prompts::{self, ANALYST_SYSTEM_PROMPT};
use crate::serp::{SerpClient, SerpSource};
use seo_core::{ChatMessage, CompletionModel, Result, SerpAnalysis, parse_json_response};
use std::sync::Arc;

/// Token budget for the SERP analysis completion.
pub const SERP_MAX_TOKENS: u32 = 3000;

pub struct SerpAnalyst {
    search: SerpClient,
    model: Arc<dyn CompletionModel>,
}

impl SerpAnalyst {
    pub fn new(search: SerpClient, model: Arc<dyn CompletionModel>) -> Self {
        Self { search, model }
    }

    /// An empty keyword is passed through to the search query unguarded.
    pub async fn run(&self, primary_keyword: &str) -> Result<SerpAnalysis> {
        tracing::info!(keyword = %primary_keyword, "[Agent 2] SERP Analyst researching");

        let fetch = self.search.fetch(primary_keyword).await;
        if fetch.source == SerpSource::Mock {
            tracing::info!("analyzing mock SERP results");
        }

        let prompt = prompts::serp_prompt(primary_keyword, &fetch.results)?;
        let messages = [ChatMessage::system(ANALYST_SYSTEM_PROMPT), ChatMessage::user(prompt)];

        let response = self.model.complete(&messages, SERP_MAX_TOKENS).await?;

        match parse_json_response(&response) {
            Ok(analysis) => Ok(analysis),
            Err(err) => {
                tracing::error!(error = %err, response = %response, "failed to parse SERP analysis");
                Err(err)
            }
        }
    }
}
