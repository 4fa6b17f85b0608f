use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status and whether the analysis service is ready right now.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let analysis_service = if state.analyzer.service().readiness().await.is_ready() {
        "ready"
    } else {
        "not_ready"
    };
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resumeai-api",
        "analysis_service": analysis_service,
    }))
}
