//! Router assembly for the HTTP surface.

pub mod audit;
pub mod status;

use crate::AppState;
use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Build the application router: the audit pipeline and configuration
/// snapshot under `/api`, liveness at `/health`.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(AllowOrigin::any());

    let api_router = Router::new()
        .route("/audit", post(audit::run_audit))
        .route("/status", get(status::get_status))
        .with_state(state);

    Router::new()
        .nest("/api", api_router)
        .route("/health", get(status::health_check))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors))
}
