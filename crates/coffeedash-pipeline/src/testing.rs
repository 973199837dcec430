//! Shared unit-test fixture: two adjacent districts, three farms, two stations.

use coffeedash_core::models::{District, Farm, Farmer, LonLat, Station};
use coffeedash_core::store::ReferenceLayers;
use coffeedash_core::GeoDataStore;
use geo::{polygon, MultiPolygon};

fn square(x0: f64, y0: f64) -> MultiPolygon<f64> {
    MultiPolygon::new(vec![polygon![
        (x: x0, y: y0),
        (x: x0 + 1.0, y: y0),
        (x: x0 + 1.0, y: y0 + 1.0),
        (x: x0, y: y0 + 1.0),
        (x: x0, y: y0),
    ]])
}

fn farmer(id: &str, gender: &str, age: i64, district: &str, station: &str, topics: &str) -> Farmer {
    Farmer {
        national_id: id.to_string(),
        gender: gender.to_string(),
        age,
        youth_in_household: None,
        district: district.to_string(),
        station_id: station.to_string(),
        training_topics: topics.to_string(),
    }
}

fn farm(owner: &str, station: &str, lon: f64, lat: f64, area: f64, bracket: &str, trees: Option<u64>) -> Farm {
    Farm {
        national_id: owner.to_string(),
        station_id: station.to_string(),
        location: LonLat::new(lon, lat),
        area,
        tree_age_bracket: bracket.to_string(),
        tree_count: trees,
    }
}

/// District `alpha` spans x 0..1, `beta` spans x 1..2; both y 0..1.
/// Station `cws-a` serves farmers f1 and f3, `cws-b` serves f2.
pub(crate) fn fixture_store() -> GeoDataStore {
    let districts = vec![
        District { name: "alpha".to_string(), boundary: square(0.0, 0.0) },
        District { name: "beta".to_string(), boundary: square(1.0, 0.0) },
    ];

    let farmers = vec![
        farmer("f1", "female", 28, "alpha", "cws-a", "pruning mulching"),
        farmer("f2", "male", 52, "alpha", "cws-b", "pruning"),
        farmer("f3", "female", 40, "beta", "cws-a", "composting pruning"),
    ];

    let farms = vec![
        farm("f1", "cws-a", 0.25, 0.5, 10.0, "3_to_7", Some(100)),
        farm("f2", "cws-b", 0.75, 0.25, 20.0, "more_30", None),
        farm("f3", "cws-a", 1.5, 0.5, 5.0, "legacy", Some(7)),
    ];

    let stations = vec![
        Station {
            id: "cws-a".to_string(),
            name: "Alpha Station".to_string(),
            ownership: "cooperative".to_string(),
            capacity: 100.0,
            location: LonLat::new(0.2, 0.2),
        },
        Station {
            id: "cws-b".to_string(),
            name: "Beta Station".to_string(),
            ownership: "private".to_string(),
            capacity: 50.0,
            location: LonLat::new(1.8, 0.8),
        },
    ];

    GeoDataStore::from_parts(stations, farmers, farms, districts, ReferenceLayers::default())
}
