//! Immutable in-memory snapshot of every dashboard input.
//!
//! The store is loaded once at startup and then shared read-only. Row
//! positions in each table are stable and are used as selection handles by
//! the pipeline.

mod export;
mod layers;
mod paths;
mod records;
mod table;

pub use export::LayerKind;
pub use layers::DISTRICT_PROPERTY;
pub use paths::{
    DataPaths, LoadOptions, COUNTRY_FILE, DISTRICTS_FILE, FARMERS_FILE, FARMS_FILE, LAKES_FILE,
    PARKS_FILE, STATIONS_FILE,
};

use serde::Serialize;

use crate::error::Result;
use crate::geo::{area_measure, SpatialIndex};
use crate::models::{District, Farm, Farmer, ReferenceLayer, Station};

/// Row counts per table and layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreSummary {
    pub stations: usize,
    pub farmers: usize,
    pub farms: usize,
    pub districts: usize,
    pub country_features: usize,
    pub lake_features: usize,
    pub park_features: usize,
}

/// Display-only layers that never take part in filtering
#[derive(Debug, Clone, Default)]
pub struct ReferenceLayers {
    pub country: ReferenceLayer,
    pub lakes: ReferenceLayer,
    pub parks: ReferenceLayer,
}

#[derive(Debug)]
pub struct GeoDataStore {
    stations: Vec<Station>,
    farmers: Vec<Farmer>,
    farms: Vec<Farm>,
    districts: Vec<District>,
    layers: ReferenceLayers,
    district_index: SpatialIndex,
    farm_index: SpatialIndex,
}

impl GeoDataStore {
    /// Read, validate and normalise every input. Any failure is fatal.
    pub fn load(paths: &DataPaths, options: &LoadOptions) -> Result<Self> {
        let measure = area_measure(options.area_method, &options.area_crs)?;

        let stations = records::load_stations(&paths.stations)?;
        let farmers = records::load_farmers(&paths.farmers)?;
        let farms = records::load_farms(&paths.farms, measure.as_ref())?;

        let layers = ReferenceLayers {
            country: layers::load_reference_layer("country", &paths.country)?,
            lakes: layers::load_reference_layer("lakes", &paths.lakes)?,
            parks: layers::load_reference_layer("parks", &paths.parks)?,
        };
        let districts = layers::load_districts(&paths.districts)?;

        let store = Self::from_parts(stations, farmers, farms, districts, layers);
        let summary = store.summary();
        tracing::info!(
            stations = summary.stations,
            farmers = summary.farmers,
            farms = summary.farms,
            districts = summary.districts,
            "Data store ready"
        );

        Ok(store)
    }

    /// Assemble a store from already-normalised rows and build the indexes
    pub fn from_parts(
        stations: Vec<Station>,
        farmers: Vec<Farmer>,
        farms: Vec<Farm>,
        districts: Vec<District>,
        layers: ReferenceLayers,
    ) -> Self {
        let district_index = SpatialIndex::from_boundaries(districts.iter().map(|d| &d.boundary));
        let farm_index = SpatialIndex::from_points(farms.iter().map(|f| f.location.to_point()));

        Self { stations, farmers, farms, districts, layers, district_index, farm_index }
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn farmers(&self) -> &[Farmer] {
        &self.farmers
    }

    pub fn farms(&self) -> &[Farm] {
        &self.farms
    }

    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    pub fn reference_layers(&self) -> &ReferenceLayers {
        &self.layers
    }

    /// Bounding-box index over district boundaries
    pub fn district_index(&self) -> &SpatialIndex {
        &self.district_index
    }

    /// Point index over farm centroids
    pub fn farm_index(&self) -> &SpatialIndex {
        &self.farm_index
    }

    pub fn summary(&self) -> StoreSummary {
        StoreSummary {
            stations: self.stations.len(),
            farmers: self.farmers.len(),
            farms: self.farms.len(),
            districts: self.districts.len(),
            country_features: self.layers.country.len(),
            lake_features: self.layers.lakes.len(),
            park_features: self.layers.parks.len(),
        }
    }
}
