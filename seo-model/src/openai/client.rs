//! OpenAI client implementation.

use super::config::OpenAiConfig;
use super::convert::{self, ChatCompletionRequest, ChatCompletionResponse};
use crate::LLM_TIMEOUT_SECS;
use async_trait::async_trait;
use reqwest::Client;
use seo_core::{AuditError, ChatMessage, CompletionModel, Result};
use std::time::Duration;

/// OpenAI chat-completions client.
pub struct OpenAiClient {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(LLM_TIMEOUT_SECS))
            .build()
            .map_err(|e| AuditError::Upstream(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    fn api_url(&self) -> String {
        format!("{}/chat/completions", self.config.effective_base_url().trim_end_matches('/'))
    }

    fn build_request(&self, messages: &[ChatMessage], max_tokens: u32) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: convert::to_wire_messages(messages),
            max_tokens,
            temperature: self.config.temperature,
        }
    }
}

#[async_trait]
impl CompletionModel for OpenAiClient {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, messages: &[ChatMessage], max_tokens: u32) -> Result<String> {
        if self.config.api_key.is_empty() {
            return Err(AuditError::Config("OpenAI API key not configured".to_string()));
        }

        let request = self.build_request(messages, max_tokens);
        let response = self
            .client
            .post(self.api_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| AuditError::Upstream(format!("OpenAI API request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AuditError::Upstream(format!(
                "OpenAI API error ({status}): {error_text}"
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AuditError::Upstream(format!("failed to decode OpenAI response: {e}")))?;

        convert::extract_text(completion)
    }
}
