//! Configuration and data loading shared by the commands

use std::sync::Arc;

use anyhow::{Context, Result};
use coffeedash_core::config::LayeredConfig;
use coffeedash_core::GeoDataStore;
use coffeedash_pipeline::{PipelineSettings, SelectionPipeline};

use crate::cli::Cli;

/// Defaults, then the optional file, then environment, then command-line flags
pub fn load_config(cli: &Cli) -> Result<LayeredConfig> {
    let config = LayeredConfig::with_defaults();
    let mut config = match &cli.config {
        Some(path) => config
            .load_from_file(path)
            .with_context(|| format!("Failed to load configuration file {}", path.display()))?,
        None => config,
    }
    .load_from_env();

    config.update_from_cli(cli.config_overrides());
    Ok(config)
}

/// Load the data directory and build the shared pipeline
pub fn load_pipeline(config: &LayeredConfig) -> Result<Arc<SelectionPipeline>> {
    let store = GeoDataStore::load(&config.data_paths(), &config.load_options())
        .with_context(|| format!("Failed to load dashboard data from {}", config.data_dir.value.display()))?;

    Ok(Arc::new(SelectionPipeline::new(Arc::new(store), PipelineSettings::from(config))))
}
