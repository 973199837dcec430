//! Inspect command implementation

use anyhow::Result;
use coffeedash_core::config::LayeredConfig;
use coffeedash_core::store::StoreSummary;
use tabled::Tabled;

use crate::commands::kpis::print_kpi_cards;
use crate::config_loader::load_pipeline;
use crate::format;
use crate::output::OutputWriter;
use crate::output_types::InspectOutput;

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "Table")]
    name: &'static str,
    #[tabled(rename = "Rows")]
    rows: String,
}

fn table_rows(summary: &StoreSummary) -> Vec<TableRow> {
    [
        ("Washing stations", summary.stations),
        ("Farmers", summary.farmers),
        ("Farms", summary.farms),
        ("Districts", summary.districts),
        ("Country", summary.country_features),
        ("Lakes", summary.lake_features),
        ("National parks", summary.park_features),
    ]
    .into_iter()
    .map(|(name, rows)| TableRow { name, rows: format::count(rows as u64) })
    .collect()
}

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let pipeline = load_pipeline(config)?;
    let summary = pipeline.store().summary();
    let paths = config.data_paths();

    if output.is_json() {
        output.result(InspectOutput {
            data_dir: config.data_dir.value.display().to_string(),
            geo_dir: paths
                .districts
                .parent()
                .map(|dir| dir.display().to_string())
                .unwrap_or_default(),
            dataset: summary,
            kpis: pipeline.kpis().clone(),
        })?;
        return Ok(());
    }

    output.heading("Dataset");
    output.field("Data directory", config.data_dir.value.display());
    if let Some(dir) = paths.districts.parent() {
        output.field("Layer directory", dir.display());
    }
    output.table(table_rows(&summary));

    print_kpi_cards(pipeline.kpis(), output);

    let total_area: f64 = pipeline.store().farms().iter().map(|farm| farm.area).sum();
    output.field("Total farm area", format::area(total_area));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows_cover_every_layer() {
        let summary = StoreSummary {
            stations: 2,
            farmers: 1500,
            farms: 3,
            districts: 30,
            country_features: 1,
            lake_features: 0,
            park_features: 4,
        };

        let rows = table_rows(&summary);

        assert_eq!(rows.len(), 7);
        assert_eq!(rows[1].name, "Farmers");
        assert_eq!(rows[1].rows, "1,500");
        assert_eq!(rows[5].rows, "0");
    }
}
