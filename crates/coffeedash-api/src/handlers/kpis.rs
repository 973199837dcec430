use std::sync::Arc;

use axum::{extract::State, Json};
use coffeedash_pipeline::FarmerKpis;

use crate::state::AppState;

pub async fn get_kpis(State(state): State<Arc<AppState>>) -> Json<FarmerKpis> {
    Json(state.pipeline.kpis().clone())
}
