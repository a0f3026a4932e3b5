//! Tests for the SERP client: live path, truncation, and the mock fallback.

use seo_agents::{SerpClient, SerpConfig, SerpSource};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, api_key: &str) -> SerpClient {
    SerpClient::new(SerpConfig::new(api_key).with_base_url(server.uri())).unwrap()
}

#[tokio::test]
async fn test_missing_key_uses_mock_without_network_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    let fetch = client_for(&server, "").fetch("hello").await;
    assert_eq!(fetch.source, SerpSource::Mock);
    assert_eq!(fetch.results.len(), 10);
    for (i, result) in fetch.results.iter().enumerate() {
        assert_eq!(result.position, i as u32 + 1);
        assert!(result.title.contains("hello"));
        assert!(result.snippet.contains("hello"));
    }
}

#[tokio::test]
async fn test_live_fetch_passes_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "rust seo"))
        .and(query_param("api_key", "serp-test"))
        .and(query_param("num", "10"))
        .and(query_param("engine", "google"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "organic_results": [
                {"position": 1, "title": "Rust SEO Guide", "link": "https://a.com", "snippet": "..."},
                {"position": 2, "title": "SEO in Rust", "link": "https://b.com", "snippet": "..."}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let fetch = client_for(&server, "serp-test").fetch("rust seo").await;
    assert_eq!(fetch.source, SerpSource::Live);
    assert_eq!(fetch.results.len(), 2);
    assert_eq!(fetch.results[0].title, "Rust SEO Guide");
}

#[tokio::test]
async fn test_live_fetch_truncates_to_ten() {
    let server = MockServer::start().await;

    let results: Vec<_> = (1..=15)
        .map(|i| {
            serde_json::json!({"position": i, "title": format!("Result {i}"), "link": "", "snippet": ""})
        })
        .collect();
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"organic_results": results})),
        )
        .mount(&server)
        .await;

    let fetch = client_for(&server, "serp-test").fetch("anything").await;
    assert_eq!(fetch.source, SerpSource::Live);
    assert_eq!(fetch.results.len(), 10);
}

#[tokio::test]
async fn test_server_error_falls_back_to_mock() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let fetch = client_for(&server, "serp-test").fetch("hello").await;
    assert_eq!(fetch.source, SerpSource::Mock);
    assert_eq!(fetch.results.len(), 10);
    assert!(fetch.results[0].title.contains("hello"));
}

#[tokio::test]
async fn test_undecodable_body_falls_back_to_mock() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let fetch = client_for(&server, "serp-test").fetch("hello").await;
    assert_eq!(fetch.source, SerpSource::Mock);
}
