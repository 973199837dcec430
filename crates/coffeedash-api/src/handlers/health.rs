use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::HealthResponse;
use crate::state::AppState;

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "coffeedash-api",
        started_at: state.started_at,
        active_sessions: state.session_count(),
        dataset: state.pipeline.store().summary(),
    })
}
