use clap::{Parser, Subcommand};
use coffeedash_core::config::CliConfigOverrides;
use coffeedash_core::models::{AreaMethod, ViewTab};
use std::path::PathBuf;

/// Coffee dashboard - farmers, farms and washing stations on the map
#[derive(Parser, Debug)]
#[command(name = "coffeedash")]
#[command(about = "Inspect coffee dashboard data and replay map selections", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the CSV tables
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory holding the GeoJSON layers (defaults to the data directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub geo_dir: Option<PathBuf>,

    /// Farmers younger than this count as youth
    #[arg(long, global = true, value_name = "AGE")]
    pub youth_age_threshold: Option<i64>,

    /// Also report the share of households with young members
    #[arg(long, global = true)]
    pub households_with_youth: bool,

    /// Farm area measurement (geodesic or projected)
    #[arg(long, global = true, value_name = "METHOD")]
    pub area_method: Option<AreaMethod>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn config_overrides(&self) -> CliConfigOverrides {
        CliConfigOverrides {
            data_dir: self.data_dir.clone(),
            geo_dir: self.geo_dir.clone(),
            youth_age_threshold: self.youth_age_threshold,
            households_with_youth_kpi: self.households_with_youth.then_some(true),
            area_method: self.area_method,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show row counts per table and layer plus the KPI cards
    Inspect,

    /// Show the farmer KPIs
    Kpis,

    /// Replay a map interaction and print the selection and aggregates
    Select(SelectArgs),

    /// Show the effective configuration and where each value came from
    Config,
}

#[derive(Parser, Debug)]
pub struct SelectArgs {
    /// Map tab (stations or farms)
    #[arg(long)]
    pub tab: Option<ViewTab>,

    /// Clicked longitude
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Clicked latitude
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,
}
