//! Spatial selection primitives over the data store.
//!
//! Selections are row positions into the store tables.

use std::collections::HashSet;

use coffeedash_core::geo::{boundary_covers, nearest_by_geodesic};
use coffeedash_core::models::LonLat;
use coffeedash_core::GeoDataStore;

/// The district whose boundary intersects `point`; first in table order on a tie
pub fn selected_district(store: &GeoDataStore, point: Option<LonLat>) -> Option<usize> {
    let point = point?.to_point();
    let districts = store.districts();

    store
        .district_index()
        .rows_at(point)
        .into_iter()
        .find(|row| boundary_covers(&districts[*row].boundary, &point))
}

/// Farms whose centroid intersects the selected district boundary, in table order
pub fn selected_farms(store: &GeoDataStore, district: Option<usize>) -> Vec<usize> {
    let Some(district) = district.and_then(|row| store.districts().get(row)) else {
        return Vec::new();
    };
    let farms = store.farms();

    store
        .farm_index()
        .rows_touching(&district.boundary)
        .into_iter()
        .filter(|row| boundary_covers(&district.boundary, &farms[*row].location.to_point()))
        .collect()
}

/// Station with the smallest geodesic distance to `point`; first minimum wins
pub fn selected_station(store: &GeoDataStore, point: Option<LonLat>) -> Option<usize> {
    let point = point?;
    nearest_by_geodesic(point, store.stations().iter().map(|station| station.location))
        .map(|(row, _)| row)
}

/// Farms owned by farmers attached to the station, in table order
pub fn station_farms(store: &GeoDataStore, station: usize) -> Vec<usize> {
    let Some(station) = store.stations().get(station) else {
        return Vec::new();
    };

    let owners: HashSet<&str> = store
        .farmers()
        .iter()
        .filter(|farmer| farmer.station_id == station.id)
        .map(|farmer| farmer.national_id.as_str())
        .collect();

    store
        .farms()
        .iter()
        .enumerate()
        .filter(|(_, farm)| owners.contains(farm.national_id.as_str()))
        .map(|(row, _)| row)
        .collect()
}

/// Farmers registered in the named district (already lower-cased)
pub fn district_farmers(store: &GeoDataStore, district: usize) -> Vec<usize> {
    let Some(district) = store.districts().get(district) else {
        return Vec::new();
    };

    store
        .farmers()
        .iter()
        .enumerate()
        .filter(|(_, farmer)| farmer.district == district.name)
        .map(|(row, _)| row)
        .collect()
}

/// Farmers attached to the station
pub fn station_farmers(store: &GeoDataStore, station: usize) -> Vec<usize> {
    let Some(station) = store.stations().get(station) else {
        return Vec::new();
    };

    store
        .farmers()
        .iter()
        .enumerate()
        .filter(|(_, farmer)| farmer.station_id == station.id)
        .map(|(row, _)| row)
        .collect()
}
