//! Farm footprint measurement: area and representative point.

use geo::algorithm::centroid::Centroid;
use geo::{Geometry, GeodesicArea};

use crate::error::Result;
use crate::models::{AreaMethod, Crs, LonLat};

/// Measured square meters are divided by this before being stored as `area`
pub const AREA_UNIT_DIVISOR: f64 = 100.0;

/// Area and centroid of one farm polygon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    /// Square meters divided by [`AREA_UNIT_DIVISOR`]
    pub area: f64,
    /// Centroid in EPSG:4326
    pub centroid: LonLat,
}

/// Strategy for measuring geographic (EPSG:4326) farm geometries
pub trait AreaMeasure {
    /// Returns `None` when the geometry is empty and has no centroid
    fn footprint(&self, geometry: &Geometry<f64>) -> Result<Option<Footprint>>;

    fn name(&self) -> &str;
}

/// Ellipsoidal area on WGS 84, centroid taken in geographic coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct GeodesicMeasure;

impl AreaMeasure for GeodesicMeasure {
    fn footprint(&self, geometry: &Geometry<f64>) -> Result<Option<Footprint>> {
        let square_meters = match geometry {
            Geometry::Polygon(polygon) => polygon.geodesic_area_unsigned(),
            Geometry::MultiPolygon(polygons) => polygons.geodesic_area_unsigned(),
            Geometry::Rect(rect) => rect.to_polygon().geodesic_area_unsigned(),
            Geometry::Triangle(triangle) => triangle.to_polygon().geodesic_area_unsigned(),
            // Points and lines have no area
            _ => 0.0,
        };

        Ok(geometry.centroid().map(|centroid| Footprint {
            area: square_meters / AREA_UNIT_DIVISOR,
            centroid: centroid.into(),
        }))
    }

    fn name(&self) -> &str {
        "geodesic"
    }
}

/// Build the measure selected by configuration.
///
/// `projected_crs` is only used by [`AreaMethod::Projected`], which needs the
/// `proj` feature.
pub fn area_measure(method: AreaMethod, projected_crs: &Crs) -> Result<Box<dyn AreaMeasure>> {
    match method {
        AreaMethod::Geodesic => Ok(Box::new(GeodesicMeasure)),
        AreaMethod::Projected => projected_measure(projected_crs),
    }
}

#[cfg(feature = "proj")]
fn projected_measure(projected_crs: &Crs) -> Result<Box<dyn AreaMeasure>> {
    Ok(Box::new(super::transform::ProjectedMeasure::new(projected_crs)?))
}

#[cfg(not(feature = "proj"))]
fn projected_measure(projected_crs: &Crs) -> Result<Box<dyn AreaMeasure>> {
    Err(crate::error::CoffeeError::ConfigInvalid {
        key: "area_method".to_string(),
        reason: format!(
            "projected area in {} requires the 'proj' feature; enable the proj feature or use geodesic",
            projected_crs.authority_code()
        ),
    })
}
