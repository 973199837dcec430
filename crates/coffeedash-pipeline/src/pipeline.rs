use std::sync::Arc;

use coffeedash_core::GeoDataStore;

use crate::kpi::FarmerKpis;
use crate::session::SelectionSession;
use crate::settings::PipelineSettings;

/// Read-only part of the dashboard shared by every session
#[derive(Debug)]
pub struct SelectionPipeline {
    store: Arc<GeoDataStore>,
    settings: PipelineSettings,
    kpis: FarmerKpis,
}

impl SelectionPipeline {
    /// KPI scalars do not depend on interaction, so they are computed here once
    pub fn new(store: Arc<GeoDataStore>, settings: PipelineSettings) -> Self {
        let kpis = FarmerKpis::compute(store.farmers(), &settings);

        tracing::info!(
            farmers = kpis.farmers,
            youth_age_threshold = settings.youth_age_threshold,
            default_tab = %settings.default_tab,
            "Selection pipeline ready"
        );

        Self { store, settings, kpis }
    }

    pub fn store(&self) -> &GeoDataStore {
        &self.store
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    pub fn kpis(&self) -> &FarmerKpis {
        &self.kpis
    }

    /// Start a session on the configured default tab with no point
    pub fn session(self: &Arc<Self>) -> SelectionSession {
        SelectionSession::new(Arc::clone(self))
    }
}
