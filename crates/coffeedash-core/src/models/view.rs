use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoffeeError;

/// The dashboard map tabs. Each tab drives one selection chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewTab {
    /// Washing-station map: a click selects the nearest station
    #[default]
    Stations,
    /// Coffee-farm map: a click selects the enclosing district
    Farms,
}

impl ViewTab {
    pub const ALL: [ViewTab; 2] = [ViewTab::Stations, ViewTab::Farms];

    /// Tab caption shown in the dashboard
    pub fn label(&self) -> &'static str {
        match self {
            ViewTab::Stations => "CWS View",
            ViewTab::Farms => "Coffee Farms View",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewTab::Stations => "stations",
            ViewTab::Farms => "farms",
        }
    }
}

impl fmt::Display for ViewTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewTab {
    type Err = CoffeeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stations" | "station" | "cws" | "cws view" => Ok(ViewTab::Stations),
            "farms" | "farm" | "coffee farms view" => Ok(ViewTab::Farms),
            _ => Err(CoffeeError::ConfigInvalid {
                key: "tab".to_string(),
                reason: format!("Unknown view tab: {}. Use stations or farms", s),
            }),
        }
    }
}

/// How farm polygon areas are measured at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AreaMethod {
    /// Planar area after reprojection to the configured projected CRS
    #[default]
    Projected,
    /// Ellipsoidal area on WGS 84, for builds without the `proj` feature
    Geodesic,
}

impl FromStr for AreaMethod {
    type Err = CoffeeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "geodesic" => Ok(AreaMethod::Geodesic),
            "projected" => Ok(AreaMethod::Projected),
            _ => Err(CoffeeError::ConfigInvalid {
                key: "area_method".to_string(),
                reason: format!("Invalid area method: {}. Use geodesic or projected", s),
            }),
        }
    }
}
