//! The audit endpoint: runs the three agents strictly in sequence.
//!
//! Stage failures never surface as transport errors. Any agent error aborts
//! the pipeline and is folded into a `status: "failed"` body with no partial
//! agent outputs; only request-validation failures use an HTTP error code.

use crate::AppState;
use axum::{Json, extract::State, http::StatusCode};
use seo_core::{
    AuditRequest, AuditResponse, PageAuditOutput, Result, SerpAnalysis, new_audit_id,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ValidationError {
    pub error: String,
}

pub async fn run_audit(
    State(state): State<AppState>,
    Json(request): Json<AuditRequest>,
) -> std::result::Result<Json<AuditResponse>, (StatusCode, Json<ValidationError>)> {
    if let Err(err) = request.validate() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationError { error: err.to_string() }),
        ));
    }

    let audit_id = new_audit_id();
    tracing::info!(url = %request.url, %audit_id, "starting SEO audit");

    let response = match run_pipeline(&state, &request.url).await {
        Ok((page_audit, serp_analysis, report)) => {
            AuditResponse::completed(audit_id, page_audit, serp_analysis, report)
        }
        Err(err) => {
            tracing::error!(error = %err, "audit failed");
            AuditResponse::failed(audit_id, err.to_string())
        }
    };

    Ok(Json(response))
}

/// Agent 1 → Agent 2 → Agent 3, each stage gated on the previous one's
/// success and carrying its output forward.
async fn run_pipeline(
    state: &AppState,
    url: &str,
) -> Result<(PageAuditOutput, SerpAnalysis, String)> {
    let page_audit = state.auditor.run(url).await?;
    tracing::info!(
        primary_keyword = %page_audit.target_keywords.primary_keyword,
        "page audit complete"
    );

    let serp_analysis = state.analyst.run(&page_audit.target_keywords.primary_keyword).await?;
    tracing::info!(competitors = serp_analysis.top_10_results.len(), "SERP analysis complete");

    let report = state.advisor.run(url, &page_audit, &serp_analysis).await?;
    tracing::info!("optimization report generated");

    Ok((page_audit, serp_analysis, report))
}
