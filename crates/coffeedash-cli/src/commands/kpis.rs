//! Kpis command implementation

use anyhow::Result;
use coffeedash_core::config::LayeredConfig;
use coffeedash_pipeline::FarmerKpis;

use crate::config_loader::load_pipeline;
use crate::format;
use crate::output::OutputWriter;

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let pipeline = load_pipeline(config)?;
    let kpis = pipeline.kpis();

    if output.is_json() {
        output.result(kpis)?;
    } else {
        print_kpi_cards(kpis, output);
    }

    Ok(())
}

/// The dashboard's headline cards
pub fn print_kpi_cards(kpis: &FarmerKpis, output: &OutputWriter) {
    output.heading("Farmer KPIs");
    output.field("Farmers", format::count(kpis.farmers as u64));
    output.field("Women", format::percent(kpis.women_pct));
    output.field(
        format!("Youth (under {})", kpis.youth_age_threshold),
        format::percent(kpis.youth_pct),
    );
    output.field("Youth in households", kpis.youth_in_households);
    if let Some(pct) = kpis.households_with_youth_pct {
        output.field("Households with youth", format::percent(pct));
    }
}
