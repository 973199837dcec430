use coffeedash_core::config::{LayeredConfig, DEFAULT_YOUTH_AGE_THRESHOLD};
use coffeedash_core::models::ViewTab;

/// Behaviour knobs for the selection pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    /// Farmers strictly younger than this count as youth
    pub youth_age_threshold: i64,
    pub households_with_youth_kpi: bool,
    /// Tab a new session starts on
    pub default_tab: ViewTab,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            youth_age_threshold: DEFAULT_YOUTH_AGE_THRESHOLD,
            households_with_youth_kpi: false,
            default_tab: ViewTab::Stations,
        }
    }
}

impl From<&LayeredConfig> for PipelineSettings {
    fn from(config: &LayeredConfig) -> Self {
        Self {
            youth_age_threshold: config.youth_age_threshold.value,
            households_with_youth_kpi: config.households_with_youth_kpi.value,
            default_tab: config.default_tab.value,
        }
    }
}
