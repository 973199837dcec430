//! CRS reprojection for planar farm area measurement

use geo::algorithm::area::Area;
use geo::algorithm::centroid::Centroid;
use geo::algorithm::map_coords::MapCoords;
use geo::Geometry;
use proj::Proj;

use super::measure::{AreaMeasure, Footprint, AREA_UNIT_DIVISOR};
use crate::error::{CoffeeError, Result};
use crate::models::{Crs, LonLat};

/// Reprojects each farm to a projected CRS, measures it there and brings the
/// centroid back to EPSG:4326.
pub struct ProjectedMeasure {
    crs: Crs,
    forward: Proj,
    inverse: Proj,
}

impl ProjectedMeasure {
    pub fn new(projected_crs: &Crs) -> Result<Self> {
        let geographic = Crs::wgs84().authority_code();
        let projected = projected_crs.authority_code();

        let forward = Proj::new_known_crs(&geographic, &projected, None).map_err(|e| {
            CoffeeError::Projection {
                reason: format!(
                    "Failed to create projection from {} to {}: {}",
                    geographic, projected, e
                ),
            }
        })?;
        let inverse = Proj::new_known_crs(&projected, &geographic, None).map_err(|e| {
            CoffeeError::Projection {
                reason: format!(
                    "Failed to create projection from {} to {}: {}",
                    projected, geographic, e
                ),
            }
        })?;

        Ok(Self { crs: projected_crs.clone(), forward, inverse })
    }

    fn reproject(&self, geometry: &Geometry<f64>) -> Result<Geometry<f64>> {
        geometry.try_map_coords(|coord| {
            self.forward
                .convert((coord.x, coord.y))
                .map(|(x, y)| geo::Coord { x, y })
                .map_err(|e| CoffeeError::Projection {
                    reason: format!("to {}: {}", self.crs.authority_code(), e),
                })
        })
    }
}

impl AreaMeasure for ProjectedMeasure {
    fn footprint(&self, geometry: &Geometry<f64>) -> Result<Option<Footprint>> {
        let projected = self.reproject(geometry)?;

        let Some(centroid) = projected.centroid() else {
            return Ok(None);
        };
        let (lon, lat) = self.inverse.convert((centroid.x(), centroid.y())).map_err(|e| {
            CoffeeError::Projection {
                reason: format!("from {}: {}", self.crs.authority_code(), e),
            }
        })?;

        Ok(Some(Footprint {
            area: projected.unsigned_area() / AREA_UNIT_DIVISOR,
            centroid: LonLat::new(lon, lat),
        }))
    }

    fn name(&self) -> &str {
        "projected"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    #[test]
    fn test_projected_area_matches_geodesic() {
        use super::super::measure::GeodesicMeasure;

        let farm: Geometry<f64> = polygon![
            (x: 29.70, y: -2.60),
            (x: 29.701, y: -2.60),
            (x: 29.701, y: -2.599),
            (x: 29.70, y: -2.599),
            (x: 29.70, y: -2.60),
        ]
        .into();

        let projected = ProjectedMeasure::new(&Crs::utm_36s()).unwrap();
        let planar = projected.footprint(&farm).unwrap().unwrap();
        let geodesic = GeodesicMeasure.footprint(&farm).unwrap().unwrap();

        let relative = (planar.area - geodesic.area).abs() / geodesic.area;
        assert!(relative < 0.01, "planar {} vs geodesic {}", planar.area, geodesic.area);
        assert!((planar.centroid.lon - 29.7005).abs() < 1e-5);
        assert!((planar.centroid.lat + 2.5995).abs() < 1e-5);
    }
}
