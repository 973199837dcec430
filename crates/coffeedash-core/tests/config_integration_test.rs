//! Integration tests for layered configuration
//!
//! Precedence: CLI arguments > Environment variables > Config file > Defaults

use coffeedash_core::config::{CliConfigOverrides, ConfigSource, LayeredConfig};
use coffeedash_core::models::{AreaMethod, ViewTab};
use coffeedash_core::CoffeeError;
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

const ENV_VARS: [&str; 7] = [
    "COFFEEDASH_DATA_DIR",
    "COFFEEDASH_GEO_DIR",
    "COFFEEDASH_YOUTH_AGE",
    "COFFEEDASH_HH_WITH_YOUTH",
    "COFFEEDASH_AREA_METHOD",
    "COFFEEDASH_AREA_CRS",
    "COFFEEDASH_DEFAULT_TAB",
];

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_partial_file_configuration() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
youth_age_threshold = 30
# Everything else stays at the defaults
"#
    )
    .unwrap();

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

    assert_eq!(config.youth_age_threshold.value, 30);
    assert_eq!(config.youth_age_threshold.source, ConfigSource::File);
    assert_eq!(config.data_dir.source, ConfigSource::Default);
    assert_eq!(config.default_tab.value, ViewTab::Stations);
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    clear_env();

    env::set_var("COFFEEDASH_YOUTH_AGE", "30");
    env::set_var("COFFEEDASH_HH_WITH_YOUTH", "yes");
    env::set_var("COFFEEDASH_DEFAULT_TAB", "farms");

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
youth_age_threshold = 40
households_with_youth_kpi = false
data_dir = "/srv/coffee"
"#
    )
    .unwrap();

    let config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap()
        .load_from_env();

    assert_eq!(config.youth_age_threshold.value, 30);
    assert_eq!(config.youth_age_threshold.source, ConfigSource::Environment);
    assert!(config.households_with_youth_kpi.value);
    assert_eq!(config.default_tab.value, ViewTab::Farms);
    // Not set in the environment, so the file wins
    assert_eq!(config.data_dir.value, PathBuf::from("/srv/coffee"));
    assert_eq!(config.data_dir.source, ConfigSource::File);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_environment_values_are_ignored() {
    clear_env();

    env::set_var("COFFEEDASH_YOUTH_AGE", "young");
    env::set_var("COFFEEDASH_AREA_METHOD", "planar");
    env::set_var("COFFEEDASH_AREA_CRS", "utm");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.youth_age_threshold.value, 35);
    assert_eq!(config.youth_age_threshold.source, ConfigSource::Default);
    assert_eq!(config.area_method.value, AreaMethod::Projected);
    assert_eq!(config.area_method.source, ConfigSource::Default);
    assert_eq!(config.area_crs.value, 32736);

    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides_all() {
    clear_env();
    env::set_var("COFFEEDASH_DATA_DIR", "/from/env");
    env::set_var("COFFEEDASH_YOUTH_AGE", "30");

    let mut config = LayeredConfig::with_defaults().load_from_env();

    config.update_from_cli(CliConfigOverrides {
        data_dir: Some(PathBuf::from("/from/cli")),
        geo_dir: Some(PathBuf::from("/from/cli/wgs84")),
        youth_age_threshold: Some(25),
        households_with_youth_kpi: Some(true),
        area_method: None,
    });

    assert_eq!(config.data_dir.value, PathBuf::from("/from/cli"));
    assert_eq!(config.data_dir.source, ConfigSource::Cli);
    assert_eq!(config.youth_age_threshold.value, 25);
    assert_eq!(config.youth_age_threshold.source, ConfigSource::Cli);
    assert_eq!(config.area_method.source, ConfigSource::Default);

    let paths = config.data_paths();
    assert_eq!(paths.stations, PathBuf::from("/from/cli/Coffee_Washing_Stations.csv"));
    assert_eq!(paths.lakes, PathBuf::from("/from/cli/wgs84/RW_lakes.geojson"));

    clear_env();
}

#[test]
fn test_load_options_follow_config() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "area_method = \"projected\"\narea_crs = 32735").unwrap();

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();
    let options = config.load_options();

    assert_eq!(options.area_method, AreaMethod::Projected);
    assert_eq!(options.area_crs.epsg, 32735);
}

#[test]
fn test_invalid_toml_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "invalid toml content [[[").unwrap();

    let result = LayeredConfig::with_defaults().load_from_file(file.path());

    assert!(result.is_err());
}

#[test]
fn test_unknown_tab_in_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("coffeedash.toml");
    fs::write(&config_path, "default_tab = \"satellite\"\n").unwrap();

    assert!(LayeredConfig::with_defaults().load_from_file(&config_path).is_err());
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let non_existent = temp_dir.path().join("does_not_exist.toml");

    let result = LayeredConfig::with_defaults().load_from_file(&non_existent);

    match result {
        Err(CoffeeError::ConfigInvalid { key, reason }) => {
            assert_eq!(key, "file");
            assert!(reason.contains("Failed to read config file"));
        }
        other => panic!("expected ConfigInvalid, got {:?}", other.map(|_| ())),
    }
}
