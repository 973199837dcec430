use chrono::{DateTime, Utc};
use coffeedash_core::store::StoreSummary;
use coffeedash_pipeline::DashboardOutputs;
use serde::Serialize;
use uuid::Uuid;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub started_at: DateTime<Utc>,
    pub active_sessions: usize,
    pub dataset: StoreSummary,
}

/// Session id plus the outputs after the request was applied
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub outputs: DashboardOutputs,
}

/// Delete operation response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

impl DeleteResponse {
    pub fn success(entity: &str, id: &str) -> Self {
        Self { success: true, message: format!("Successfully deleted {} {}", entity, id) }
    }
}
