//! Request/response envelope types for the Anthropic messages API.
//!
//! Chat messages use one shared shape across providers; Anthropic wants the
//! system instruction extracted into a top-level `system` field rather than
//! carried in the message list.

use seo_core::{AuditError, ChatMessage, Result, Role};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WireMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(default)]
    pub text: String,
}

/// Split the conversation into the Anthropic envelope: system content pulled
/// out, everything else passed through in order.
pub fn split_system(messages: &[ChatMessage]) -> (Option<String>, Vec<WireMessage>) {
    let mut system = None;
    let mut wire = Vec::with_capacity(messages.len());
    for message in messages {
        match message.role {
            Role::System => system = Some(message.content.clone()),
            _ => wire.push(WireMessage {
                role: message.role.as_str(),
                content: message.content.clone(),
            }),
        }
    }
    (system, wire)
}

/// Extract the completion text at `content[0].text`.
pub fn extract_text(response: MessagesResponse) -> Result<String> {
    response
        .content
        .into_iter()
        .next()
        .map(|block| block.text)
        .ok_or_else(|| AuditError::Upstream("Anthropic response contained no content".to_string()))
}
