//! Per-session interaction state and memoised node values.

use std::sync::Arc;

use coffeedash_core::geo::geodesic_distance;
use coffeedash_core::models::{LonLat, ViewTab};

use crate::aggregates::{self, AggregateScope, BracketCount, TopicCount};
use crate::error::{Result, SelectionError};
use crate::graph::{Input, InputVersions, Memo, Node, RecomputeStats};
use crate::models::{DashboardOutputs, DistrictSelection, SelectionView, StationSelection};
use crate::pipeline::SelectionPipeline;
use crate::selection;

/// Clicked point and active tab of one dashboard session
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    point: Option<LonLat>,
    tab: ViewTab,
    versions: InputVersions,
}

impl InteractionState {
    pub fn new(tab: ViewTab) -> Self {
        Self { point: None, tab, versions: InputVersions::default() }
    }

    pub fn point(&self) -> Option<LonLat> {
        self.point
    }

    pub fn tab(&self) -> ViewTab {
        self.tab
    }

    pub fn versions(&self) -> &InputVersions {
        &self.versions
    }

    /// Returns whether the point actually changed
    fn set_point(&mut self, point: Option<LonLat>) -> bool {
        if self.point == point {
            return false;
        }
        self.point = point;
        self.versions.bump(Input::Point);
        true
    }

    fn set_tab(&mut self, tab: ViewTab) -> bool {
        if self.tab == tab {
            return false;
        }
        self.tab = tab;
        self.versions.bump(Input::Tab);
        true
    }
}

#[derive(Debug, Default)]
struct NodeCache {
    district: Memo<Option<usize>>,
    farms: Memo<Vec<usize>>,
    station: Memo<Option<usize>>,
    area: Memo<f64>,
    brackets: Memo<Vec<BracketCount>>,
    topics: Memo<Vec<TopicCount>>,
}

/// One user's view of the dashboard.
///
/// Events update the inputs; node values are pulled lazily and recomputed
/// only when an input they depend on has changed since the last read.
#[derive(Debug)]
pub struct SelectionSession {
    pipeline: Arc<SelectionPipeline>,
    state: InteractionState,
    cache: NodeCache,
    stats: RecomputeStats,
}

impl SelectionSession {
    pub fn new(pipeline: Arc<SelectionPipeline>) -> Self {
        let state = InteractionState::new(pipeline.settings().default_tab);
        Self { pipeline, state, cache: NodeCache::default(), stats: RecomputeStats::default() }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn stats(&self) -> RecomputeStats {
        self.stats
    }

    pub fn pipeline(&self) -> &Arc<SelectionPipeline> {
        &self.pipeline
    }

    /// Map click on the active tab
    pub fn on_map_click(&mut self, point: LonLat) -> Result<()> {
        if !point.is_valid() {
            return Err(SelectionError::InvalidPoint { lon: point.lon, lat: point.lat });
        }

        if self.state.set_point(Some(point)) {
            tracing::debug!(lon = point.lon, lat = point.lat, tab = %self.state.tab, "Map click");
        }
        Ok(())
    }

    /// Switching tabs clears the clicked point
    pub fn on_tab_change(&mut self, tab: ViewTab) {
        if self.state.set_tab(tab) {
            self.state.set_point(None);
            tracing::debug!(tab = %tab, "Tab changed");
        }
    }

    fn key(&self, node: Node) -> u64 {
        self.state.versions.key(node)
    }

    fn record(&mut self, node: Node, key: u64) {
        self.stats.record(node);
        tracing::trace!(node = %node, key, "Recomputed node");
    }

    pub fn selected_district(&mut self) -> Option<usize> {
        let key = self.key(Node::SelectedDistrict);
        if let Some(district) = self.cache.district.cached(key) {
            return district;
        }

        let district = selection::selected_district(self.pipeline.store(), self.state.point);
        self.cache.district.store(key, district);
        self.record(Node::SelectedDistrict, key);
        district
    }

    pub fn selected_farms(&mut self) -> Vec<usize> {
        let key = self.key(Node::SelectedFarms);
        if let Some(farms) = self.cache.farms.cached(key) {
            return farms;
        }

        let district = self.selected_district();
        let farms = selection::selected_farms(self.pipeline.store(), district);
        self.cache.farms.store(key, farms.clone());
        self.record(Node::SelectedFarms, key);
        farms
    }

    pub fn selected_station(&mut self) -> Option<usize> {
        let key = self.key(Node::SelectedStation);
        if let Some(station) = self.cache.station.cached(key) {
            return station;
        }

        let station = selection::selected_station(self.pipeline.store(), self.state.point);
        self.cache.station.store(key, station);
        self.record(Node::SelectedStation, key);
        station
    }

    /// Aggregate filter implied by the active tab and its selection
    pub fn scope(&mut self) -> AggregateScope {
        let tab = self.state.tab;
        match tab {
            ViewTab::Farms if self.selected_district().is_some() => AggregateScope::District,
            ViewTab::Stations if self.selected_station().is_some() => AggregateScope::Station,
            _ => AggregateScope::All,
        }
    }

    /// Farm rows the aggregates run over; `None` means every farm
    fn farm_filter(&mut self) -> Option<Vec<usize>> {
        let tab = self.state.tab;
        match tab {
            ViewTab::Farms => match self.selected_district() {
                Some(_) => Some(self.selected_farms()),
                None => None,
            },
            ViewTab::Stations => self
                .selected_station()
                .map(|station| selection::station_farms(self.pipeline.store(), station)),
        }
    }

    /// Farmer rows the topic table runs over; `None` means every farmer
    fn farmer_filter(&mut self) -> Option<Vec<usize>> {
        let tab = self.state.tab;
        match tab {
            ViewTab::Farms => self
                .selected_district()
                .map(|district| selection::district_farmers(self.pipeline.store(), district)),
            ViewTab::Stations => self
                .selected_station()
                .map(|station| selection::station_farmers(self.pipeline.store(), station)),
        }
    }

    pub fn farm_area_total(&mut self) -> f64 {
        let key = self.key(Node::FarmAreaTotal);
        if let Some(total) = self.cache.area.cached(key) {
            return total;
        }

        let filter = self.farm_filter();
        let pipeline = Arc::clone(&self.pipeline);
        let total = aggregates::farm_area_total(pick(pipeline.store().farms(), filter.as_deref()));

        self.cache.area.store(key, total);
        self.record(Node::FarmAreaTotal, key);
        total
    }

    pub fn tree_count_by_age_bracket(&mut self) -> Vec<BracketCount> {
        let key = self.key(Node::TreeCountByAgeBracket);
        if let Some(table) = self.cache.brackets.cached(key) {
            return table;
        }

        let filter = self.farm_filter();
        let pipeline = Arc::clone(&self.pipeline);
        let table =
            aggregates::tree_count_by_age_bracket(pick(pipeline.store().farms(), filter.as_deref()));

        self.cache.brackets.store(key, table.clone());
        self.record(Node::TreeCountByAgeBracket, key);
        table
    }

    pub fn training_topic_counts(&mut self) -> Vec<TopicCount> {
        let key = self.key(Node::TrainingTopicCounts);
        if let Some(table) = self.cache.topics.cached(key) {
            return table;
        }

        let filter = self.farmer_filter();
        let pipeline = Arc::clone(&self.pipeline);
        let table =
            aggregates::training_topic_counts(pick(pipeline.store().farmers(), filter.as_deref()));

        self.cache.topics.store(key, table.clone());
        self.record(Node::TrainingTopicCounts, key);
        table
    }

    /// Selection of the active tab's chain
    pub fn selection(&mut self) -> SelectionView {
        let pipeline = Arc::clone(&self.pipeline);
        let store = pipeline.store();
        let tab = self.state.tab;

        match tab {
            ViewTab::Farms => SelectionView {
                district: self.selected_district().and_then(|row| {
                    store.districts().get(row).map(|district| DistrictSelection::new(row, district))
                }),
                farms: pick(store.farms(), Some(self.selected_farms().as_slice()))
                    .into_iter()
                    .cloned()
                    .collect(),
                station: None,
            },
            ViewTab::Stations => {
                let point = self.state.point;
                let station = self.selected_station().and_then(|row| {
                    let station = store.stations().get(row)?;
                    Some(StationSelection {
                        row,
                        station: station.clone(),
                        distance_m: point
                            .map(|point| geodesic_distance(point, station.location))
                            .unwrap_or(0.0),
                    })
                });
                SelectionView { district: None, farms: Vec::new(), station }
            }
        }
    }

    /// Pull every output node
    pub fn outputs(&mut self) -> DashboardOutputs {
        let selection = self.selection();

        DashboardOutputs {
            tab: self.state.tab,
            tab_label: self.state.tab.label().to_string(),
            clicked_point: self.state.point,
            kpis: self.pipeline.kpis().clone(),
            scope: self.scope(),
            selection,
            farm_area_total: self.farm_area_total(),
            tree_count_by_age_bracket: self.tree_count_by_age_bracket(),
            training_topic_counts: self.training_topic_counts(),
        }
    }
}

fn pick<'a, T>(table: &'a [T], rows: Option<&[usize]>) -> Vec<&'a T> {
    match rows {
        Some(rows) => rows.iter().filter_map(|row| table.get(*row)).collect(),
        None => table.iter().collect(),
    }
}
