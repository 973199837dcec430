use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use coffeedash_core::models::{LonLat, ViewTab};
use coffeedash_pipeline::DashboardOutputs;
use uuid::Uuid;

use crate::dto::{ClickRequest, DeleteResponse, SessionResponse, TabRequest};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn create_session(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let (session_id, outputs) = state.create_session(|session| session.outputs())?;

    Ok((StatusCode::CREATED, Json(SessionResponse { session_id, outputs })))
}

pub async fn close_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.remove_session(session_id)?;

    Ok(Json(DeleteResponse::success("session", &session_id.to_string())))
}

pub async fn click(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ClickRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    tracing::info!(session_id = %session_id, lon = request.lon, lat = request.lat, "Map click");

    let point = LonLat::new(request.lon, request.lat);
    let outputs = state.with_session(session_id, |session| {
        session.on_map_click(point)?;
        Ok::<_, ApiError>(session.outputs())
    })??;

    Ok(Json(SessionResponse { session_id, outputs }))
}

pub async fn change_tab(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<TabRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let tab: ViewTab = request.tab.parse()?;
    tracing::info!(session_id = %session_id, tab = %tab, "Tab change");

    let outputs = state.with_session(session_id, |session| {
        session.on_tab_change(tab);
        session.outputs()
    })?;

    Ok(Json(SessionResponse { session_id, outputs }))
}

pub async fn get_outputs(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<DashboardOutputs>, ApiError> {
    let outputs = state.with_session(session_id, |session| session.outputs())?;

    Ok(Json(outputs))
}
