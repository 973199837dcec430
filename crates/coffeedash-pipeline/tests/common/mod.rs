//! Fixture builders shared by the pipeline integration tests

#![allow(dead_code)]

use std::sync::Arc;

use coffeedash_core::models::{District, Farm, Farmer, LonLat, Station};
use coffeedash_core::store::ReferenceLayers;
use coffeedash_core::GeoDataStore;
use coffeedash_pipeline::{PipelineSettings, SelectionPipeline, SelectionSession};
use geo::{polygon, MultiPolygon};

/// Axis-aligned square district boundary
pub fn square(x0: f64, y0: f64, size: f64) -> MultiPolygon<f64> {
    MultiPolygon::new(vec![polygon![
        (x: x0, y: y0),
        (x: x0 + size, y: y0),
        (x: x0 + size, y: y0 + size),
        (x: x0, y: y0 + size),
        (x: x0, y: y0),
    ]])
}

pub fn district(name: &str, boundary: MultiPolygon<f64>) -> District {
    District { name: name.to_string(), boundary }
}

pub fn station(id: &str, lon: f64, lat: f64) -> Station {
    Station {
        id: id.to_string(),
        name: format!("Station {}", id),
        ownership: "cooperative".to_string(),
        capacity: 100.0,
        location: LonLat::new(lon, lat),
    }
}

pub fn farmer(id: &str, gender: &str, age: i64, district: &str, station: &str, topics: &str) -> Farmer {
    Farmer {
        national_id: id.to_string(),
        gender: gender.to_string(),
        age,
        youth_in_household: Some(1),
        district: district.to_string(),
        station_id: station.to_string(),
        training_topics: topics.to_string(),
    }
}

pub fn farm(owner: &str, lon: f64, lat: f64, area: f64, bracket: &str, trees: Option<u64>) -> Farm {
    Farm {
        national_id: owner.to_string(),
        station_id: String::new(),
        location: LonLat::new(lon, lat),
        area,
        tree_age_bracket: bracket.to_string(),
        tree_count: trees,
    }
}

/// Districts A (x 29.0..29.1) and B (x 29.1..29.2), both y -2.1..-2.0.
/// Farms: two in A, one in B. Stations: S1 near A, S2 near B, S3 far north.
pub fn two_district_store() -> GeoDataStore {
    let districts = vec![
        district("a", square(29.0, -2.1, 0.1)),
        district("b", square(29.1, -2.1, 0.1)),
    ];

    let farmers = vec![
        farmer("n1", "female", 25, "a", "s1", "pruning mulching"),
        farmer("n2", "male", 45, "a", "s2", "pruning"),
        farmer("n3", "female", 38, "b", "s2", "composting"),
    ];

    let farms = vec![
        farm("n1", 29.02, -2.05, 12.5, "3_to_7", Some(120)),
        farm("n2", 29.08, -2.02, 7.5, "more_30", Some(30)),
        farm("n3", 29.15, -2.05, 40.0, "less_3", Some(60)),
    ];

    let stations = vec![station("s1", 29.03, -2.06), station("s2", 29.16, -2.04), station("s3", 29.1, -1.5)];

    GeoDataStore::from_parts(stations, farmers, farms, districts, ReferenceLayers::default())
}

pub fn session_for(store: GeoDataStore) -> SelectionSession {
    session_with(store, PipelineSettings::default())
}

pub fn session_with(store: GeoDataStore, settings: PipelineSettings) -> SelectionSession {
    Arc::new(SelectionPipeline::new(Arc::new(store), settings)).session()
}
