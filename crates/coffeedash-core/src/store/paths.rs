use std::path::{Path, PathBuf};

use crate::models::{AreaMethod, Crs};

pub const STATIONS_FILE: &str = "Coffee_Washing_Stations.csv";
pub const FARMERS_FILE: &str = "Coffee_farmers.csv";
pub const FARMS_FILE: &str = "Coffee_farms.csv";
pub const COUNTRY_FILE: &str = "RW_country.geojson";
pub const LAKES_FILE: &str = "RW_lakes.geojson";
pub const PARKS_FILE: &str = "RW_national_parks.geojson";
pub const DISTRICTS_FILE: &str = "RW_districts.geojson";

/// Locations of every input read at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub stations: PathBuf,
    pub farmers: PathBuf,
    pub farms: PathBuf,
    pub country: PathBuf,
    pub lakes: PathBuf,
    pub parks: PathBuf,
    pub districts: PathBuf,
}

impl DataPaths {
    /// Default file names: tables under `data_dir`, reference layers under `geo_dir`
    pub fn from_dirs(data_dir: impl AsRef<Path>, geo_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        let geo_dir = geo_dir.as_ref();

        Self {
            stations: data_dir.join(STATIONS_FILE),
            farmers: data_dir.join(FARMERS_FILE),
            farms: data_dir.join(FARMS_FILE),
            country: geo_dir.join(COUNTRY_FILE),
            lakes: geo_dir.join(LAKES_FILE),
            parks: geo_dir.join(PARKS_FILE),
            districts: geo_dir.join(DISTRICTS_FILE),
        }
    }

    /// Everything in one directory
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        Self::from_dirs(dir.as_ref(), dir.as_ref())
    }
}

/// Load-time derivation settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    pub area_method: AreaMethod,
    /// Projected CRS used by [`AreaMethod::Projected`]
    pub area_crs: Crs,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { area_method: AreaMethod::Projected, area_crs: Crs::utm_36s() }
    }
}
