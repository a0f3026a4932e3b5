//! Configuration snapshot and liveness endpoints. Pure reads, no mutation.

use crate::AppState;
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub api: String,
    pub firecrawl: String,
    pub llm_provider: String,
    pub llm_model: String,
    pub llm_configured: bool,
    pub serp: String,
}

pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let config = &state.config;
    Json(StatusResponse {
        api: "operational".to_string(),
        firecrawl: if config.firecrawl_api_key.is_empty() {
            "not_configured".to_string()
        } else {
            "configured".to_string()
        },
        llm_provider: config.provider.as_str().to_string(),
        llm_model: config.llm_model().to_string(),
        llm_configured: config.llm_configured(),
        serp: if config.serp_api_key.is_empty() {
            "mock_mode".to_string()
        } else {
            "configured".to_string()
        },
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "SEO Audit Team".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
