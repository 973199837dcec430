use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Static dashboard data
        .route("/api/v1/kpis", get(handlers::get_kpis))
        .route("/api/v1/layers/{layer}", get(handlers::get_layer))

        // Interactive sessions
        .route("/api/v1/sessions", post(handlers::create_session))
        .route("/api/v1/sessions/{session_id}", delete(handlers::close_session))
        .route("/api/v1/sessions/{session_id}/click", post(handlers::click))
        .route("/api/v1/sessions/{session_id}/tab", post(handlers::change_tab))
        .route("/api/v1/sessions/{session_id}/outputs", get(handlers::get_outputs))

        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
