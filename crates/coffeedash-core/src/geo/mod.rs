//! Geo module for spatial operations
//!
//! Point-in-boundary tests, geodesic nearest-neighbour search, bounding-box
//! indexing and farm footprint measurement.

pub mod index;
pub mod measure;
pub mod spatial;
#[cfg(feature = "proj")]
pub mod transform;

// Re-export key types for convenience
pub use index::{IndexedRow, SpatialIndex};
pub use measure::{area_measure, AreaMeasure, Footprint, GeodesicMeasure, AREA_UNIT_DIVISOR};
pub use spatial::{boundary_covers, geodesic_distance, nearest_by_geodesic};
#[cfg(feature = "proj")]
pub use transform::ProjectedMeasure;
