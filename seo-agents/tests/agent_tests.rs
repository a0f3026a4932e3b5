//! Agent-level tests: collaborator doubles via wiremock, model doubles via
//! the canned MockModel.

use seo_agents::{
    FirecrawlClient, FirecrawlConfig, OptimizationAdvisor, PageAuditor, SerpAnalyst, SerpClient,
    SerpConfig,
};
use seo_core::{
    AuditError, AuditResults, PageAuditOutput, Role, SerpAnalysis, TargetKeywords,
};
use seo_model::MockModel;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AUDIT_JSON: &str = r#"{
  "audit_results": {
    "title_tag": "Hello Page",
    "primary_heading": "Hello",
    "word_count": 2
  },
  "target_keywords": {
    "primary_keyword": "hello",
    "search_intent": "informational"
  }
}"#;

async fn mock_firecrawl(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v1/scrape"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": {
                "markdown": "# Hello\n\nWorld",
                "html": "<h1>Hello</h1>",
                "links": [],
                "metadata": {"title": "Hello Page"}
            }
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_page_auditor_parses_fenced_response() {
    let server = MockServer::start().await;
    mock_firecrawl(&server).await;

    let model = Arc::new(
        MockModel::new("test-model").with_response(format!("```json\n{AUDIT_JSON}\n```")),
    );
    let auditor = PageAuditor::new(
        FirecrawlClient::new(FirecrawlConfig::new("fc-test").with_base_url(server.uri())).unwrap(),
        model.clone(),
    );

    let output = auditor.run("https://example.com/page").await.unwrap();
    assert_eq!(output.audit_results.primary_heading, "Hello");
    assert_eq!(output.target_keywords.primary_keyword, "hello");
    // omitted fields coerce to their defaults
    assert!(output.audit_results.technical_findings.is_empty());
    assert_eq!(output.audit_results.link_counts.internal, 0);

    // The prompt fed to the model embeds the scraped content and demands JSON.
    let calls = model.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0][0].role, Role::System);
    assert!(calls[0][1].content.contains("# Hello\n\nWorld"));
    assert!(calls[0][1].content.contains("Return ONLY the JSON object"));
}

#[tokio::test]
async fn test_page_auditor_propagates_scrape_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/scrape"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": false})),
        )
        .mount(&server)
        .await;

    let model = Arc::new(MockModel::new("test-model").with_response("unused"));
    let auditor = PageAuditor::new(
        FirecrawlClient::new(FirecrawlConfig::new("fc-test").with_base_url(server.uri())).unwrap(),
        model.clone(),
    );

    let err = auditor.run("https://example.com").await.unwrap_err();
    assert!(matches!(err, AuditError::Upstream(_)));
    // no completion is attempted after a scrape failure
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn test_page_auditor_flags_unparseable_response() {
    let server = MockServer::start().await;
    mock_firecrawl(&server).await;

    let model =
        Arc::new(MockModel::new("test-model").with_response("Sure! Here is the audit: {..."));
    let auditor = PageAuditor::new(
        FirecrawlClient::new(FirecrawlConfig::new("fc-test").with_base_url(server.uri())).unwrap(),
        model,
    );

    let err = auditor.run("https://example.com").await.unwrap_err();
    assert!(matches!(err, AuditError::Parse(_)));
}

#[tokio::test]
async fn test_serp_analyst_mock_mode_end_to_end() {
    let model = Arc::new(
        MockModel::new("test-model")
            .with_response(r#"{"primary_keyword": "hello", "key_themes": ["guides"]}"#),
    );
    let analyst = SerpAnalyst::new(SerpClient::new(SerpConfig::new("")).unwrap(), model.clone());

    let analysis = analyst.run("hello").await.unwrap();
    assert_eq!(analysis.primary_keyword, "hello");
    assert_eq!(analysis.key_themes, vec!["guides"]);
    assert!(analysis.top_10_results.is_empty());

    // The prompt embeds the ten deterministic mock results.
    let calls = model.calls();
    assert!(calls[0][1].content.contains("Result 1: hello - Example Site"));
    assert!(calls[0][1].content.contains("Result 10: hello - Example Site"));
}

#[tokio::test]
async fn test_serp_analyst_accepts_empty_keyword() {
    let model =
        Arc::new(MockModel::new("test-model").with_response(r#"{"primary_keyword": ""}"#));
    let analyst = SerpAnalyst::new(SerpClient::new(SerpConfig::new("")).unwrap(), model);

    let analysis = analyst.run("").await.unwrap();
    assert_eq!(analysis.primary_keyword, "");
}

#[tokio::test]
async fn test_advisor_returns_trimmed_report() {
    let model = Arc::new(
        MockModel::new("test-model").with_response("\n\n# SEO Audit Report\n\nAll good.\n\n"),
    );
    let advisor = OptimizationAdvisor::new(model.clone());

    let page_audit = PageAuditOutput {
        audit_results: AuditResults::default(),
        target_keywords: TargetKeywords { primary_keyword: "hello".into(), ..Default::default() },
    };
    let serp: SerpAnalysis = serde_json::from_str(r#"{"primary_keyword": "hello"}"#).unwrap();

    let report = advisor.run("https://example.com", &page_audit, &serp).await.unwrap();
    assert!(report.starts_with("# SEO Audit Report"));
    assert!(report.ends_with("All good."));

    let calls = model.calls();
    assert!(calls[0][1].content.contains("TARGET URL: https://example.com"));
    assert!(calls[0][1].content.contains("\"primary_keyword\": \"hello\""));
}
