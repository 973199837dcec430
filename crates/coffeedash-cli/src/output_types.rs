use coffeedash_core::store::StoreSummary;
use coffeedash_pipeline::{DashboardOutputs, FarmerKpis};
use serde::Serialize;

/// Output for inspect command
#[derive(Debug, Serialize)]
pub struct InspectOutput {
    pub data_dir: String,
    pub geo_dir: String,
    pub dataset: StoreSummary,
    pub kpis: FarmerKpis,
}

/// Output for select command
#[derive(Debug, Serialize)]
pub struct SelectOutput {
    pub outputs: DashboardOutputs,
    /// Nodes evaluated while producing the outputs, by name
    pub recomputed: Vec<NodeCount>,
}

#[derive(Debug, Serialize)]
pub struct NodeCount {
    pub node: String,
    pub count: u64,
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub values: Vec<ConfigEntry>,
}

#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
    pub source: String,
}
