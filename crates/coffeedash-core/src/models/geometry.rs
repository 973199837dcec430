//! Coordinate types shared by the store, the pipeline and the adapters.

use serde::{Deserialize, Serialize};

/// Coordinate Reference System identified by EPSG code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crs {
    pub epsg: u32,
    pub name: String,
}

impl Default for Crs {
    fn default() -> Self {
        Self::wgs84()
    }
}

impl Crs {
    pub fn new(epsg: u32, name: impl Into<String>) -> Self {
        Self { epsg, name: name.into() }
    }

    /// WGS 84 (EPSG:4326), the CRS of every input file
    pub fn wgs84() -> Self {
        Self::new(4326, "WGS 84")
    }

    /// WGS 84 / UTM zone 36S (EPSG:32736)
    pub fn utm_36s() -> Self {
        Self::new(32736, "WGS 84 / UTM zone 36S")
    }

    pub fn from_epsg(epsg: u32) -> Self {
        match epsg {
            4326 => Self::wgs84(),
            32736 => Self::utm_36s(),
            other => Self::new(other, format!("EPSG:{}", other)),
        }
    }

    pub fn authority_code(&self) -> String {
        format!("EPSG:{}", self.epsg)
    }
}

/// A geographic position in EPSG:4326, longitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Both coordinates finite and inside the geographic domain
    pub fn is_valid(&self) -> bool {
        self.lon.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lon)
            && (-90.0..=90.0).contains(&self.lat)
    }

    pub fn to_point(self) -> geo::Point<f64> {
        geo::Point::new(self.lon, self.lat)
    }
}

impl From<geo::Point<f64>> for LonLat {
    fn from(point: geo::Point<f64>) -> Self {
        Self::new(point.x(), point.y())
    }
}
