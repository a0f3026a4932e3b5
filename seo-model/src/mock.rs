//! Canned completion model for tests: queued responses plus a call log so
//! tests can assert how many completions ran and what they were fed.

use async_trait::async_trait;
use seo_core::{AuditError, ChatMessage, CompletionModel, Result};
use std::collections::VecDeque;
use std::sync::Mutex;

pub struct MockModel {
    name: String,
    responses: Mutex<VecDeque<String>>,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(response.into());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Messages recorded for each completion call, in order.
    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionModel for MockModel {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, messages: &[ChatMessage], _max_tokens: u32) -> Result<String> {
        self.calls.lock().unwrap().push(messages.to_vec());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AuditError::Upstream("mock model has no queued response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_queued_responses_in_order() {
        let mock = MockModel::new("test-model").with_response("first").with_response("second");

        let messages = [ChatMessage::user("hi")];
        assert_eq!(mock.complete(&messages, 100).await.unwrap(), "first");
        assert_eq!(mock.complete(&messages, 100).await.unwrap(), "second");
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_exhausted_queue_errors() {
        let mock = MockModel::new("test-model");
        let err = mock.complete(&[ChatMessage::user("hi")], 100).await.unwrap_err();
        assert!(matches!(err, AuditError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_call_log_records_messages() {
        let mock = MockModel::new("test-model").with_response("ok");
        let messages = [ChatMessage::system("sys"), ChatMessage::user("prompt")];
        mock.complete(&messages, 100).await.unwrap();

        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0][1].content, "prompt");
    }
}
