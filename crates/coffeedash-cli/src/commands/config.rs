//! Config command implementation

use anyhow::Result;
use coffeedash_core::config::LayeredConfig;
use tabled::Tabled;

use crate::output::OutputWriter;
use crate::output_types::{ConfigEntry, ConfigOutput};

#[derive(Tabled)]
struct ConfigRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Source")]
    source: String,
}

fn entries(config: &LayeredConfig) -> Vec<ConfigEntry> {
    let mut entries: Vec<ConfigEntry> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| ConfigEntry { key, value, source: format!("{:?}", source) })
        .collect();

    // Sort by key for consistent output
    entries.sort_by(|a, b| a.key.cmp(&b.key));
    entries
}

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let values = entries(config);

    if output.is_json() {
        output.result(ConfigOutput { values })?;
        return Ok(());
    }

    output.heading("Configuration Values");
    output.table(
        values
            .into_iter()
            .map(|entry| ConfigRow { key: entry.key, value: entry.value, source: entry.source })
            .collect(),
    );

    output.heading("Configuration Precedence");
    output.note("CLI arguments > Environment variables > Config file > Defaults");

    Ok(())
}
