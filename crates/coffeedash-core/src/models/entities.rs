//! Entity rows held by the [`GeoDataStore`](crate::store::GeoDataStore).
//!
//! All rows are immutable after load. Identifiers are kept as text because the
//! source tables mix numeric and alphanumeric codes and the joins between
//! them are plain string equality.

use geo::MultiPolygon;
use serde::{Deserialize, Serialize};

use super::geometry::LonLat;

/// A coffee-cherry collection and processing facility (washing station)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub ownership: String,
    /// Rated capacity in tonnes
    pub capacity: f64,
    pub location: LonLat,
}

/// A registered coffee farmer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Farmer {
    pub national_id: String,
    pub gender: String,
    pub age: i64,
    /// Young people living in the farmer's household, when surveyed
    pub youth_in_household: Option<i64>,
    /// Lower-cased district name
    pub district: String,
    pub station_id: String,
    /// Raw space-separated training topic tags
    pub training_topics: String,
}

impl Farmer {
    pub fn is_female(&self) -> bool {
        self.gender.trim().eq_ignore_ascii_case("female")
    }

    /// Individual training topic tokens, empty tokens skipped
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.training_topics.split_whitespace()
    }
}

/// A coffee farm reduced to its centroid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Farm {
    /// National id of the owning farmer
    pub national_id: String,
    pub station_id: String,
    pub location: LonLat,
    /// Measured polygon area divided by [`AREA_UNIT_DIVISOR`](crate::geo::AREA_UNIT_DIVISOR)
    pub area: f64,
    pub tree_age_bracket: String,
    pub tree_count: Option<u64>,
}

impl Farm {
    pub fn trees(&self) -> u64 {
        self.tree_count.unwrap_or(0)
    }
}

/// Administrative district boundary used for click filtering
#[derive(Debug, Clone, PartialEq)]
pub struct District {
    /// Lower-cased district name
    pub name: String,
    pub boundary: MultiPolygon<f64>,
}

/// One feature of a reference layer that is only displayed, never filtered
#[derive(Debug, Clone, PartialEq)]
pub struct LayerFeature {
    pub properties: serde_json::Map<String, serde_json::Value>,
    pub geometry: geo::Geometry<f64>,
}

/// A display-only vector layer (country outline, lakes, national parks)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReferenceLayer {
    pub name: String,
    pub features: Vec<LayerFeature>,
}

impl ReferenceLayer {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
