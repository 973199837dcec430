use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use coffeedash_core::store::LayerKind;
use geojson::FeatureCollection;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_layer(
    State(state): State<Arc<AppState>>,
    Path(layer): Path<String>,
) -> Result<Json<FeatureCollection>, ApiError> {
    let kind: LayerKind = layer.parse()?;

    let collection = state.pipeline.store().layer_geojson(kind);
    tracing::debug!(layer = %kind, features = collection.features.len(), "Serving layer");

    Ok(Json(collection))
}
