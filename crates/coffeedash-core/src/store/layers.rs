//! GeoJSON reference layers.

use std::fs;
use std::path::Path;

use geo::MultiPolygon;
use geojson::{Feature, GeoJson};

use crate::error::DataLoadError;
use crate::models::{District, LayerFeature, ReferenceLayer};

/// Property carrying the district name in the district layer
pub const DISTRICT_PROPERTY: &str = "district";

fn file_label(path: &Path) -> String {
    path.file_name().and_then(|name| name.to_str()).unwrap_or("layer").to_string()
}

fn read_features(path: &Path) -> Result<Vec<Feature>, DataLoadError> {
    if !path.is_file() {
        return Err(DataLoadError::MissingFile { path: path.to_path_buf() });
    }

    let file = file_label(path);
    let content = fs::read_to_string(path)
        .map_err(|e| DataLoadError::InvalidGeoJson { file: file.clone(), reason: e.to_string() })?;

    let geojson: GeoJson = content
        .parse()
        .map_err(|e: geojson::Error| DataLoadError::InvalidGeoJson { file: file.clone(), reason: e.to_string() })?;

    match geojson {
        GeoJson::FeatureCollection(collection) => Ok(collection.features),
        GeoJson::Feature(feature) => Ok(vec![feature]),
        GeoJson::Geometry(_) => Err(DataLoadError::InvalidGeoJson {
            file,
            reason: "expected a FeatureCollection, found a bare geometry".to_string(),
        }),
    }
}

fn feature_geometry(
    file: &str,
    index: usize,
    feature: &Feature,
) -> Result<Option<geo::Geometry<f64>>, DataLoadError> {
    let Some(geometry) = feature.geometry.clone() else {
        return Ok(None);
    };

    geometry.try_into().map(Some).map_err(|e: geojson::Error| DataLoadError::InvalidGeometry {
        file: file.to_string(),
        row: index + 1,
        reason: e.to_string(),
    })
}

/// Load a display-only layer; features without geometry are skipped
pub(crate) fn load_reference_layer(name: &str, path: &Path) -> Result<ReferenceLayer, DataLoadError> {
    let file = file_label(path);
    let features = read_features(path)?;

    let mut layer = ReferenceLayer { name: name.to_string(), features: Vec::with_capacity(features.len()) };

    for (index, feature) in features.iter().enumerate() {
        match feature_geometry(&file, index, feature)? {
            Some(geometry) => layer.features.push(LayerFeature {
                properties: feature.properties.clone().unwrap_or_default(),
                geometry,
            }),
            None => tracing::warn!(layer = name, feature = index, "Skipping feature without geometry"),
        }
    }

    tracing::info!(layer = name, features = layer.len(), "Loaded reference layer");

    Ok(layer)
}

/// Load district boundaries with lower-cased names, in file order
pub(crate) fn load_districts(path: &Path) -> Result<Vec<District>, DataLoadError> {
    let file = file_label(path);
    let features = read_features(path)?;

    let mut districts = Vec::with_capacity(features.len());
    for (index, feature) in features.iter().enumerate() {
        let name = feature
            .property(DISTRICT_PROPERTY)
            .and_then(|value| value.as_str())
            .ok_or_else(|| DataLoadError::MissingProperty {
                file: file.clone(),
                feature: index,
                property: DISTRICT_PROPERTY.to_string(),
            })?;

        let boundary = match feature_geometry(&file, index, feature)? {
            Some(geo::Geometry::MultiPolygon(polygons)) => polygons,
            Some(geo::Geometry::Polygon(polygon)) => MultiPolygon::new(vec![polygon]),
            Some(_) => {
                return Err(DataLoadError::InvalidGeometry {
                    file,
                    row: index + 1,
                    reason: "district boundary must be a Polygon or MultiPolygon".to_string(),
                })
            }
            None => {
                return Err(DataLoadError::InvalidGeometry {
                    file,
                    row: index + 1,
                    reason: "district has no geometry".to_string(),
                })
            }
        };

        districts.push(District { name: name.trim().to_lowercase(), boundary });
    }

    tracing::info!(districts = districts.len(), "Loaded district boundaries");

    Ok(districts)
}
