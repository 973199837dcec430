use std::fmt;
use std::str::FromStr;

use geojson::{Feature, FeatureCollection, JsonObject};
use serde_json::json;

use super::GeoDataStore;
use crate::error::CoffeeError;
use crate::models::{LonLat, ReferenceLayer};

/// Map layers a presentation layer can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Country,
    Lakes,
    Parks,
    Districts,
    Stations,
    Farms,
}

impl LayerKind {
    pub const ALL: [LayerKind; 6] = [
        LayerKind::Country,
        LayerKind::Lakes,
        LayerKind::Parks,
        LayerKind::Districts,
        LayerKind::Stations,
        LayerKind::Farms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayerKind::Country => "country",
            LayerKind::Lakes => "lakes",
            LayerKind::Parks => "parks",
            LayerKind::Districts => "districts",
            LayerKind::Stations => "stations",
            LayerKind::Farms => "farms",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayerKind {
    type Err = CoffeeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayerKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| CoffeeError::ConfigInvalid {
                key: "layer".to_string(),
                reason: format!(
                    "Unknown layer: {}. Use one of country, lakes, parks, districts, stations, farms",
                    s
                ),
            })
    }
}

fn feature(geometry: &geo::Geometry<f64>, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(geojson::Value::from(geometry))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn point_feature(location: LonLat, properties: serde_json::Value) -> Feature {
    let properties = match properties {
        serde_json::Value::Object(map) => map,
        _ => JsonObject::new(),
    };
    feature(&geo::Geometry::Point(location.to_point()), properties)
}

fn reference_features(layer: &ReferenceLayer) -> Vec<Feature> {
    layer
        .features
        .iter()
        .map(|f| feature(&f.geometry, f.properties.clone()))
        .collect()
}

impl GeoDataStore {
    /// Render one layer as a GeoJSON FeatureCollection in EPSG:4326
    pub fn layer_geojson(&self, kind: LayerKind) -> FeatureCollection {
        let layers = self.reference_layers();

        let features = match kind {
            LayerKind::Country => reference_features(&layers.country),
            LayerKind::Lakes => reference_features(&layers.lakes),
            LayerKind::Parks => reference_features(&layers.parks),
            LayerKind::Districts => self
                .districts()
                .iter()
                .map(|district| {
                    let mut properties = JsonObject::new();
                    properties.insert("district".to_string(), json!(district.name));
                    feature(&geo::Geometry::MultiPolygon(district.boundary.clone()), properties)
                })
                .collect(),
            LayerKind::Stations => self
                .stations()
                .iter()
                .map(|station| {
                    point_feature(
                        station.location,
                        json!({
                            "cws_id": station.id,
                            "cws_name": station.name,
                            "cws_ownership": station.ownership,
                            "actual_capacity": station.capacity,
                        }),
                    )
                })
                .collect(),
            LayerKind::Farms => self
                .farms()
                .iter()
                .map(|farm| {
                    point_feature(
                        farm.location,
                        json!({
                            "national_id": farm.national_id,
                            "cws_id": farm.station_id,
                            "area": farm.area,
                            "age_range_coffee_trees": farm.tree_age_bracket,
                            "nbr_coffee_trees": farm.tree_count,
                        }),
                    )
                })
                .collect(),
        };

        FeatureCollection { bbox: None, features, foreign_members: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{District, Station};
    use crate::store::ReferenceLayers;
    use geo::{polygon, MultiPolygon};

    fn store() -> GeoDataStore {
        let station = Station {
            id: "cws-1".to_string(),
            name: "Maraba".to_string(),
            ownership: "cooperative".to_string(),
            capacity: 150.0,
            location: LonLat::new(29.7, -2.6),
        };
        let district = District {
            name: "huye".to_string(),
            boundary: MultiPolygon::new(vec![polygon![
                (x: 29.6, y: -2.7),
                (x: 29.8, y: -2.7),
                (x: 29.8, y: -2.5),
                (x: 29.6, y: -2.7),
            ]]),
        };
        GeoDataStore::from_parts(vec![station], vec![], vec![], vec![district], ReferenceLayers::default())
    }

    #[test]
    fn test_parse_layer_kind() {
        assert_eq!("Districts".parse::<LayerKind>().unwrap(), LayerKind::Districts);
        assert!("roads".parse::<LayerKind>().is_err());
    }

    #[test]
    fn test_station_layer_properties() {
        let collection = store().layer_geojson(LayerKind::Stations);
        assert_eq!(collection.features.len(), 1);

        let feature = &collection.features[0];
        assert_eq!(feature.property("cws_name").and_then(|v| v.as_str()), Some("Maraba"));
        assert_eq!(feature.property("actual_capacity").and_then(|v| v.as_f64()), Some(150.0));
    }

    #[test]
    fn test_district_layer_carries_name() {
        let collection = store().layer_geojson(LayerKind::Districts);
        let feature = &collection.features[0];
        assert_eq!(feature.property("district").and_then(|v| v.as_str()), Some("huye"));
        assert!(collection.features[0].geometry.is_some());
        assert!(store().layer_geojson(LayerKind::Lakes).features.is_empty());
    }
}
