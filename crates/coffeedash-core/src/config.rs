use crate::error::{CoffeeError, Result};
use crate::models::{AreaMethod, Crs, ViewTab};
use crate::store::{DataPaths, LoadOptions};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Youth KPI threshold when nothing else is configured (farmers younger than this)
pub const DEFAULT_YOUTH_AGE_THRESHOLD: i64 = 35;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered dashboard configuration
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub data_dir: ConfigValue<PathBuf>,
    /// Reference layer directory; `None` means "same as data_dir"
    pub geo_dir: ConfigValue<Option<PathBuf>>,
    pub youth_age_threshold: ConfigValue<i64>,
    pub households_with_youth_kpi: ConfigValue<bool>,
    pub area_method: ConfigValue<AreaMethod>,
    pub area_crs: ConfigValue<u32>,
    pub default_tab: ConfigValue<ViewTab>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            data_dir: ConfigValue::new(PathBuf::from("data"), ConfigSource::Default),
            geo_dir: ConfigValue::new(None, ConfigSource::Default),
            youth_age_threshold: ConfigValue::new(
                DEFAULT_YOUTH_AGE_THRESHOLD,
                ConfigSource::Default,
            ),
            households_with_youth_kpi: ConfigValue::new(false, ConfigSource::Default),
            area_method: ConfigValue::new(AreaMethod::Projected, ConfigSource::Default),
            area_crs: ConfigValue::new(Crs::utm_36s().epsg, ConfigSource::Default),
            default_tab: ConfigValue::new(ViewTab::Stations, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| CoffeeError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| CoffeeError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(data_dir) = file_config.data_dir {
            self.data_dir.update(data_dir, ConfigSource::File);
        }

        if let Some(geo_dir) = file_config.geo_dir {
            self.geo_dir.update(Some(geo_dir), ConfigSource::File);
        }

        if let Some(threshold) = file_config.youth_age_threshold {
            self.youth_age_threshold.update(threshold, ConfigSource::File);
        }

        if let Some(enabled) = file_config.households_with_youth_kpi {
            self.households_with_youth_kpi.update(enabled, ConfigSource::File);
        }

        if let Some(method) = file_config.area_method {
            self.area_method.update(method, ConfigSource::File);
        }

        if let Some(crs) = file_config.area_crs {
            self.area_crs.update(crs, ConfigSource::File);
        }

        if let Some(tab) = file_config.default_tab {
            self.default_tab.update(tab, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // COFFEEDASH_DATA_DIR
        if let Ok(dir) = env::var("COFFEEDASH_DATA_DIR") {
            self.data_dir.update(PathBuf::from(dir), ConfigSource::Environment);
        }

        // COFFEEDASH_GEO_DIR
        if let Ok(dir) = env::var("COFFEEDASH_GEO_DIR") {
            self.geo_dir.update(Some(PathBuf::from(dir)), ConfigSource::Environment);
        }

        // COFFEEDASH_YOUTH_AGE
        if let Ok(age_str) = env::var("COFFEEDASH_YOUTH_AGE") {
            match age_str.trim().parse::<i64>() {
                Ok(age) => self.youth_age_threshold.update(age, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid COFFEEDASH_YOUTH_AGE value '{}': expected an integer age",
                    age_str
                ),
            }
        }

        // COFFEEDASH_HH_WITH_YOUTH
        if let Ok(flag_str) = env::var("COFFEEDASH_HH_WITH_YOUTH") {
            match parse_flag(&flag_str) {
                Ok(flag) => {
                    self.households_with_youth_kpi.update(flag, ConfigSource::Environment)
                }
                Err(_) => tracing::warn!(
                    "Invalid COFFEEDASH_HH_WITH_YOUTH value '{}': expected true or false",
                    flag_str
                ),
            }
        }

        // COFFEEDASH_AREA_METHOD
        if let Ok(method_str) = env::var("COFFEEDASH_AREA_METHOD") {
            match method_str.parse::<AreaMethod>() {
                Ok(method) => self.area_method.update(method, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid COFFEEDASH_AREA_METHOD value '{}': expected geodesic or projected",
                    method_str
                ),
            }
        }

        // COFFEEDASH_AREA_CRS
        if let Ok(crs_str) = env::var("COFFEEDASH_AREA_CRS") {
            match crs_str.trim().parse::<u32>() {
                Ok(crs) => self.area_crs.update(crs, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid COFFEEDASH_AREA_CRS value '{}': expected integer EPSG code",
                    crs_str
                ),
            }
        }

        // COFFEEDASH_DEFAULT_TAB
        if let Ok(tab_str) = env::var("COFFEEDASH_DEFAULT_TAB") {
            match tab_str.parse::<ViewTab>() {
                Ok(tab) => self.default_tab.update(tab, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid COFFEEDASH_DEFAULT_TAB value '{}': expected stations or farms",
                    tab_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(data_dir) = overrides.data_dir {
            self.data_dir.update(data_dir, ConfigSource::Cli);
        }

        if let Some(geo_dir) = overrides.geo_dir {
            self.geo_dir.update(Some(geo_dir), ConfigSource::Cli);
        }

        if let Some(threshold) = overrides.youth_age_threshold {
            self.youth_age_threshold.update(threshold, ConfigSource::Cli);
        }

        if let Some(enabled) = overrides.households_with_youth_kpi {
            self.households_with_youth_kpi.update(enabled, ConfigSource::Cli);
        }

        if let Some(method) = overrides.area_method {
            self.area_method.update(method, ConfigSource::Cli);
        }
    }

    /// Input file locations derived from the directory settings
    pub fn data_paths(&self) -> DataPaths {
        let geo_dir = self.geo_dir.value.clone().unwrap_or_else(|| self.data_dir.value.clone());
        DataPaths::from_dirs(&self.data_dir.value, geo_dir)
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            area_method: self.area_method.value,
            area_crs: Crs::from_epsg(self.area_crs.value),
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "data_dir".to_string(),
            (self.data_dir.value.display().to_string(), self.data_dir.source),
        );

        let geo_dir = match &self.geo_dir.value {
            Some(dir) => dir.display().to_string(),
            None => format!("{} (data_dir)", self.data_dir.value.display()),
        };
        map.insert("geo_dir".to_string(), (geo_dir, self.geo_dir.source));

        map.insert(
            "youth_age_threshold".to_string(),
            (self.youth_age_threshold.value.to_string(), self.youth_age_threshold.source),
        );

        map.insert(
            "households_with_youth_kpi".to_string(),
            (
                self.households_with_youth_kpi.value.to_string(),
                self.households_with_youth_kpi.source,
            ),
        );

        map.insert(
            "area_method".to_string(),
            (format!("{:?}", self.area_method.value), self.area_method.source),
        );

        map.insert(
            "area_crs".to_string(),
            (format!("EPSG:{}", self.area_crs.value), self.area_crs.source),
        );

        map.insert(
            "default_tab".to_string(),
            (self.default_tab.value.to_string(), self.default_tab.source),
        );

        map
    }
}

impl Default for LayeredConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    geo_dir: Option<PathBuf>,
    youth_age_threshold: Option<i64>,
    households_with_youth_kpi: Option<bool>,
    area_method: Option<AreaMethod>,
    area_crs: Option<u32>,
    default_tab: Option<ViewTab>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub data_dir: Option<PathBuf>,
    pub geo_dir: Option<PathBuf>,
    pub youth_age_threshold: Option<i64>,
    pub households_with_youth_kpi: Option<bool>,
    pub area_method: Option<AreaMethod>,
}

/// Parse a boolean switch from string
pub fn parse_flag(s: &str) -> Result<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(CoffeeError::ConfigInvalid {
            key: "flag".to_string(),
            reason: format!("Invalid boolean: {}. Use true or false", s),
        }),
    }
}
