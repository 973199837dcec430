use coffeedash_core::models::Farmer;
use serde::{Deserialize, Serialize};

use crate::settings::PipelineSettings;

/// Headline figures over the whole farmer table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmerKpis {
    pub farmers: usize,
    /// Share of female farmers, 0-100
    pub women_pct: f64,
    /// Share of farmers younger than the configured threshold, 0-100
    pub youth_pct: f64,
    pub youth_age_threshold: i64,
    /// Sum of household-youth counts, missing values skipped
    pub youth_in_households: i64,
    /// Share of farmers whose household-youth count is not zero, when enabled.
    /// A missing count is not zero, so it counts towards this share.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub households_with_youth_pct: Option<f64>,
}

impl FarmerKpis {
    /// An empty table yields zero counts and 0% shares
    pub fn compute(farmers: &[Farmer], settings: &PipelineSettings) -> Self {
        let total = farmers.len();
        let women = farmers.iter().filter(|f| f.is_female()).count();
        let young = farmers.iter().filter(|f| f.age < settings.youth_age_threshold).count();
        let youth_in_households = farmers.iter().filter_map(|f| f.youth_in_household).sum();

        let households_with_youth_pct = settings.households_with_youth_kpi.then(|| {
            let with_youth = farmers
                .iter()
                .filter(|f| f.youth_in_household != Some(0))
                .count();
            percentage(with_youth, total)
        });

        Self {
            farmers: total,
            women_pct: percentage(women, total),
            youth_pct: percentage(young, total),
            youth_age_threshold: settings.youth_age_threshold,
            youth_in_households,
            households_with_youth_pct,
        }
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
