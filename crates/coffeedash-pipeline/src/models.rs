use coffeedash_core::models::{District, Farm, LonLat, Station, ViewTab};
use serde::{Deserialize, Serialize};

use crate::aggregates::{AggregateScope, BracketCount, TopicCount};
use crate::kpi::FarmerKpis;

/// Everything the presentation layer renders after one interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOutputs {
    pub tab: ViewTab,
    pub tab_label: String,
    pub clicked_point: Option<LonLat>,
    pub kpis: FarmerKpis,
    pub selection: SelectionView,
    /// Rows the aggregates below were computed over
    pub scope: AggregateScope,
    pub farm_area_total: f64,
    pub tree_count_by_age_bracket: Vec<BracketCount>,
    pub training_topic_counts: Vec<TopicCount>,
}

/// Selection made by the active tab's chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SelectionView {
    pub district: Option<DistrictSelection>,
    pub farms: Vec<Farm>,
    pub station: Option<StationSelection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictSelection {
    pub row: usize,
    pub name: String,
    pub boundary: geojson::Geometry,
}

impl DistrictSelection {
    pub fn new(row: usize, district: &District) -> Self {
        Self {
            row,
            name: district.name.clone(),
            boundary: geojson::Geometry::new(geojson::Value::from(&district.boundary)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationSelection {
    pub row: usize,
    #[serde(flatten)]
    pub station: Station,
    /// Geodesic distance from the clicked point
    pub distance_m: f64,
}
