//! Select command implementation

use anyhow::{Context, Result};
use coffeedash_core::config::LayeredConfig;
use coffeedash_core::models::LonLat;
use coffeedash_pipeline::{AggregateScope, DashboardOutputs, RecomputeStats};
use tabled::Tabled;

use crate::cli::SelectArgs;
use crate::config_loader::load_pipeline;
use crate::format;
use crate::output::OutputWriter;
use crate::output_types::{NodeCount, SelectOutput};

#[derive(Tabled)]
struct BracketRow {
    #[tabled(rename = "Tree age")]
    bracket: String,
    #[tabled(rename = "Trees")]
    trees: String,
}

#[derive(Tabled)]
struct TopicRow {
    #[tabled(rename = "Training topic")]
    topic: String,
    #[tabled(rename = "Farmers")]
    count: String,
}

pub fn execute(args: SelectArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let pipeline = load_pipeline(config)?;
    let mut session = pipeline.session();

    if let Some(tab) = args.tab {
        session.on_tab_change(tab);
    }
    if let (Some(lon), Some(lat)) = (args.lon, args.lat) {
        session
            .on_map_click(LonLat::new(lon, lat))
            .context("Map click rejected")?;
    }

    let outputs = session.outputs();
    let stats = session.stats();

    if output.is_json() {
        output.result(SelectOutput { outputs, recomputed: recomputed(&stats) })?;
    } else {
        print_outputs(&outputs, output);
    }

    Ok(())
}

fn recomputed(stats: &RecomputeStats) -> Vec<NodeCount> {
    stats
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(node, count)| NodeCount { node: node.name().to_string(), count })
        .collect()
}

fn scope_label(scope: AggregateScope) -> &'static str {
    match scope {
        AggregateScope::All => "all farms",
        AggregateScope::District => "selected district",
        AggregateScope::Station => "selected station",
    }
}

fn print_outputs(outputs: &DashboardOutputs, output: &OutputWriter) {
    output.heading(&outputs.tab_label);
    match outputs.clicked_point {
        Some(point) => output.field("Clicked", format!("{:.5}, {:.5}", point.lon, point.lat)),
        None => output.note("No map click: aggregates cover the whole dataset"),
    }

    if let Some(district) = &outputs.selection.district {
        output.field("District", &district.name);
        output.field("Farms in district", outputs.selection.farms.len());
    }
    if let Some(station) = &outputs.selection.station {
        output.field("Station", format!("{} ({})", station.station.name, station.station.id));
        output.field("Ownership", &station.station.ownership);
        output.field("Distance", format!("{} m", format::area(station.distance_m)));
    }

    output.field("Scope", scope_label(outputs.scope));
    output.field("Farm area", format::area(outputs.farm_area_total));

    output.heading("Coffee trees by age");
    output.table(
        outputs
            .tree_count_by_age_bracket
            .iter()
            .map(|row| BracketRow { bracket: row.bracket.clone(), trees: format::count(row.trees) })
            .collect(),
    );

    output.heading("Training topics");
    output.table(
        outputs
            .training_topic_counts
            .iter()
            .map(|row| TopicRow { topic: row.topic.clone(), count: format::count(row.count) })
            .collect(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use coffeedash_pipeline::Node;

    #[test]
    fn test_recomputed_skips_idle_nodes() {
        let mut stats = RecomputeStats::default();
        stats.record(Node::SelectedStation);
        stats.record(Node::FarmAreaTotal);
        stats.record(Node::FarmAreaTotal);

        let counts = recomputed(&stats);

        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].node, "selected_station");
        assert_eq!(counts[1].node, "farm_area_total");
        assert_eq!(counts[1].count, 2);
    }
}
