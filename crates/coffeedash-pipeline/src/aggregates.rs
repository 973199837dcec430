//! Chart tables and totals over a filtered subset of farms or farmers.

use std::collections::HashMap;

use coffeedash_core::models::{Farm, Farmer};
use serde::{Deserialize, Serialize};

/// Tree-age brackets in display order
pub const CANONICAL_BRACKETS: [&str; 5] = ["less_3", "3_to_7", "8_to_15", "16_to_30", "more_30"];

/// Which rows the aggregates are computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateScope {
    /// No selection on the active tab
    All,
    /// Farms view with a selected district
    District,
    /// Stations view with a selected station
    Station,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketCount {
    pub bracket: String,
    pub trees: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCount {
    pub topic: String,
    pub count: u64,
}

pub fn farm_area_total<'a>(farms: impl IntoIterator<Item = &'a Farm>) -> f64 {
    farms.into_iter().map(|farm| farm.area).sum()
}

/// Summed tree counts per bracket.
///
/// The five canonical brackets always come first, in order, zero-filled;
/// any other label found in the data follows, ordered by label.
pub fn tree_count_by_age_bracket<'a>(farms: impl IntoIterator<Item = &'a Farm>) -> Vec<BracketCount> {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for farm in farms {
        *totals.entry(farm.tree_age_bracket.as_str()).or_default() += farm.trees();
    }

    let mut table: Vec<BracketCount> = CANONICAL_BRACKETS
        .iter()
        .map(|bracket| BracketCount {
            bracket: bracket.to_string(),
            trees: totals.remove(bracket).unwrap_or(0),
        })
        .collect();

    let mut others: Vec<(&str, u64)> = totals.into_iter().collect();
    others.sort_by(|a, b| a.0.cmp(b.0));
    table.extend(others.into_iter().map(|(bracket, trees)| BracketCount {
        bracket: bracket.to_string(),
        trees,
    }));

    table
}

/// Training topic mentions, most frequent first; ties ordered by topic
pub fn training_topic_counts<'a>(farmers: impl IntoIterator<Item = &'a Farmer>) -> Vec<TopicCount> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for farmer in farmers {
        for topic in farmer.topics() {
            *counts.entry(topic).or_default() += 1;
        }
    }

    let mut table: Vec<TopicCount> = counts
        .into_iter()
        .map(|(topic, count)| TopicCount { topic: topic.to_string(), count })
        .collect();
    table.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.topic.cmp(&b.topic)));
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use coffeedash_core::models::LonLat;

    fn farm(bracket: &str, trees: Option<u64>, area: f64) -> Farm {
        Farm {
            national_id: "n".to_string(),
            station_id: "s".to_string(),
            location: LonLat::new(0.0, 0.0),
            area,
            tree_age_bracket: bracket.to_string(),
            tree_count: trees,
        }
    }

    fn farmer(topics: &str) -> Farmer {
        Farmer {
            national_id: "n".to_string(),
            gender: "male".to_string(),
            age: 40,
            youth_in_household: None,
            district: "d".to_string(),
            station_id: "s".to_string(),
            training_topics: topics.to_string(),
        }
    }

    #[test]
    fn test_brackets_always_canonical_first() {
        let table = tree_count_by_age_bracket(&[]);
        let labels: Vec<_> = table.iter().map(|row| row.bracket.as_str()).collect();
        assert_eq!(labels, CANONICAL_BRACKETS);
        assert!(table.iter().all(|row| row.trees == 0));
    }

    #[test]
    fn test_unmapped_brackets_follow_in_label_order() {
        let farms = vec![
            farm("unknown", Some(4), 1.0),
            farm("3_to_7", Some(10), 1.0),
            farm("3_to_7", None, 1.0),
            farm("", Some(2), 1.0),
            farm("more_30", Some(1), 1.0),
        ];

        let table = tree_count_by_age_bracket(&farms);

        assert_eq!(table.len(), 7);
        assert_eq!(table[1], BracketCount { bracket: "3_to_7".to_string(), trees: 10 });
        assert_eq!(table[4].trees, 1);
        assert_eq!(table[5], BracketCount { bracket: "".to_string(), trees: 2 });
        assert_eq!(table[6], BracketCount { bracket: "unknown".to_string(), trees: 4 });
    }

    #[test]
    fn test_topic_counts_sorted() {
        let farmers = vec![farmer("pruning mulching"), farmer("mulching  composting"), farmer("")];

        let table = training_topic_counts(&farmers);

        assert_eq!(
            table,
            vec![
                TopicCount { topic: "mulching".to_string(), count: 2 },
                TopicCount { topic: "composting".to_string(), count: 1 },
                TopicCount { topic: "pruning".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_area_total() {
        let farms = vec![farm("less_3", None, 12.5), farm("less_3", None, 7.5)];
        assert_eq!(farm_area_total(&farms), 20.0);
        assert_eq!(farm_area_total(&[]), 0.0);
    }
}
