use crate::models::LonLat;
use geo::algorithm::intersects::Intersects;
use geo::{Distance, Geodesic, MultiPolygon, Point};

/// Check if a boundary covers a point, edges included
pub fn boundary_covers(boundary: &MultiPolygon<f64>, point: &Point<f64>) -> bool {
    boundary.intersects(point)
}

/// Calculate ellipsoidal (WGS 84) geodesic distance between two positions in meters
pub fn geodesic_distance(from: LonLat, to: LonLat) -> f64 {
    Geodesic.distance(from.to_point(), to.to_point())
}

/// Find the candidate closest to `origin` by geodesic distance.
///
/// Returns the candidate's position in the iteration order and its distance.
/// Ties keep the first minimum encountered. Candidates whose distance is not
/// finite are skipped.
pub fn nearest_by_geodesic<I>(origin: LonLat, candidates: I) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = LonLat>,
{
    let mut best: Option<(usize, f64)> = None;

    for (idx, candidate) in candidates.into_iter().enumerate() {
        let distance = geodesic_distance(origin, candidate);
        if !distance.is_finite() {
            continue;
        }
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((idx, distance)),
        }
    }

    best
}
