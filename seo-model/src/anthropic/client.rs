//! Anthropic client implementation.

use super::config::{ANTHROPIC_VERSION, AnthropicConfig};
use super::convert::{self, MessagesRequest, MessagesResponse};
use crate::LLM_TIMEOUT_SECS;
use async_trait::async_trait;
use reqwest::Client;
use seo_core::{AuditError, ChatMessage, CompletionModel, Result};
use std::time::Duration;

/// Anthropic messages-API client.
pub struct AnthropicClient {
    client: Client,
    config: AnthropicConfig,
}

impl AnthropicClient {
    pub fn new(config: AnthropicConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(LLM_TIMEOUT_SECS))
            .build()
            .map_err(|e| AuditError::Upstream(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    fn api_url(&self) -> String {
        format!("{}/v1/messages", self.config.effective_base_url().trim_end_matches('/'))
    }

    fn build_request(&self, messages: &[ChatMessage], max_tokens: u32) -> MessagesRequest {
        let (system, wire_messages) = convert::split_system(messages);
        MessagesRequest {
            model: self.config.model.clone(),
            max_tokens,
            messages: wire_messages,
            system,
        }
    }
}

#[async_trait]
impl CompletionModel for AnthropicClient {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, messages: &[ChatMessage], max_tokens: u32) -> Result<String> {
        if self.config.api_key.is_empty() {
            return Err(AuditError::Config("Anthropic API key not configured".to_string()));
        }

        let request = self.build_request(messages, max_tokens);
        let response = self
            .client
            .post(self.api_url())
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| AuditError::Upstream(format!("Anthropic API request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AuditError::Upstream(format!(
                "Anthropic API error ({status}): {error_text}"
            )));
        }

        let completion: MessagesResponse = response.json().await.map_err(|e| {
            AuditError::Upstream(format!("failed to decode Anthropic response: {e}"))
        })?;

        convert::extract_text(completion)
    }
}
