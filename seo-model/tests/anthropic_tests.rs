//! Wire-level tests for the Anthropic client against a mock HTTP server.

use seo_core::{AuditError, ChatMessage, CompletionModel};
use seo_model::{AnthropicClient, AnthropicConfig};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, api_key: &str) -> AnthropicClient {
    AnthropicClient::new(
        AnthropicConfig::new(api_key, "claude-3-5-sonnet-20241022").with_base_url(server.uri()),
    )
    .unwrap()
}

#[tokio::test]
async fn test_system_message_lifted_into_envelope() {
    let server = MockServer::start().await;

    // The system message must land in the top-level `system` field and not in
    // the messages list.
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "sk-ant-test"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(serde_json::json!({
            "model": "claude-3-5-sonnet-20241022",
            "max_tokens": 3000,
            "system": "Always respond with valid JSON only.",
            "messages": [{"role": "user", "content": "Analyze this page."}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": [{"type": "text", "text": "{\"ok\": true}"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "sk-ant-test");
    let messages = [
        ChatMessage::system("Always respond with valid JSON only."),
        ChatMessage::user("Analyze this page."),
    ];
    let text = client.complete(&messages, 3000).await.unwrap();
    assert_eq!(text, "{\"ok\": true}");
}

#[tokio::test]
async fn test_non_success_status_is_upstream_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(529).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let client = client_for(&server, "sk-ant-test");
    let err = client.complete(&[ChatMessage::user("hi")], 100).await.unwrap_err();
    match err {
        AuditError::Upstream(message) => assert!(message.contains("529")),
        other => panic!("expected Upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_key_fails_without_network_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    let client = client_for(&server, "");
    let err = client.complete(&[ChatMessage::user("hi")], 100).await.unwrap_err();
    assert!(matches!(err, AuditError::Config(_)));
}
