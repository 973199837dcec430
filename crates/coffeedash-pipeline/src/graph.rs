//! Dependency graph of derived dashboard values.
//!
//! Every derived node declares what it reads. A node's cache key is the sum of
//! the versions of the inputs it transitively depends on; input versions only
//! grow, so a changed key means at least one upstream input changed.

use serde::Serialize;
use std::fmt;

/// Mutable interaction inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Input {
    Point,
    Tab,
}

/// Derived values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    SelectedDistrict,
    SelectedFarms,
    SelectedStation,
    FarmAreaTotal,
    TreeCountByAgeBracket,
    TrainingTopicCounts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    Input(Input),
    Node(Node),
}

const NODE_COUNT: usize = 6;

impl Node {
    pub const ALL: [Node; NODE_COUNT] = [
        Node::SelectedDistrict,
        Node::SelectedFarms,
        Node::SelectedStation,
        Node::FarmAreaTotal,
        Node::TreeCountByAgeBracket,
        Node::TrainingTopicCounts,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Node::SelectedDistrict => "selected_district",
            Node::SelectedFarms => "selected_farms",
            Node::SelectedStation => "selected_station",
            Node::FarmAreaTotal => "farm_area_total",
            Node::TreeCountByAgeBracket => "tree_count_by_age_bracket",
            Node::TrainingTopicCounts => "training_topic_counts",
        }
    }

    /// Direct dependencies
    pub fn dependencies(&self) -> &'static [Dependency] {
        use Dependency::{Input as I, Node as N};

        match self {
            Node::SelectedDistrict => &[I(Input::Point)],
            Node::SelectedFarms => &[N(Node::SelectedDistrict)],
            Node::SelectedStation => &[I(Input::Point)],
            Node::FarmAreaTotal | Node::TreeCountByAgeBracket => {
                &[I(Input::Tab), N(Node::SelectedFarms), N(Node::SelectedStation)]
            }
            Node::TrainingTopicCounts => {
                &[I(Input::Tab), N(Node::SelectedDistrict), N(Node::SelectedStation)]
            }
        }
    }

    /// Inputs reachable through the dependency edges, each listed once
    pub fn inputs(&self) -> Vec<Input> {
        let mut inputs = Vec::new();
        self.collect_inputs(&mut inputs);
        inputs
    }

    fn collect_inputs(&self, inputs: &mut Vec<Input>) {
        for dependency in self.dependencies() {
            match dependency {
                Dependency::Input(input) => {
                    if !inputs.contains(input) {
                        inputs.push(*input);
                    }
                }
                Dependency::Node(node) => node.collect_inputs(inputs),
            }
        }
    }

    fn slot(&self) -> usize {
        match self {
            Node::SelectedDistrict => 0,
            Node::SelectedFarms => 1,
            Node::SelectedStation => 2,
            Node::FarmAreaTotal => 3,
            Node::TreeCountByAgeBracket => 4,
            Node::TrainingTopicCounts => 5,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Version counters of the interaction inputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputVersions {
    point: u64,
    tab: u64,
}

impl InputVersions {
    pub fn get(&self, input: Input) -> u64 {
        match input {
            Input::Point => self.point,
            Input::Tab => self.tab,
        }
    }

    pub fn bump(&mut self, input: Input) {
        match input {
            Input::Point => self.point += 1,
            Input::Tab => self.tab += 1,
        }
    }

    /// Cache key for a node
    pub fn key(&self, node: Node) -> u64 {
        node.inputs().into_iter().map(|input| self.get(input)).sum()
    }
}

/// One cached node value tagged with the key it was computed under
#[derive(Debug, Clone)]
pub struct Memo<T> {
    entry: Option<(u64, T)>,
}

impl<T: Clone> Memo<T> {
    pub fn new() -> Self {
        Self { entry: None }
    }

    /// The cached value, if it was computed under `key`
    pub fn cached(&self, key: u64) -> Option<T> {
        match &self.entry {
            Some((cached_key, value)) if *cached_key == key => Some(value.clone()),
            _ => None,
        }
    }

    pub fn store(&mut self, key: u64, value: T) {
        self.entry = Some((key, value));
    }
}

impl<T: Clone> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// How many times each node has been computed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecomputeStats {
    counts: [u64; NODE_COUNT],
}

impl RecomputeStats {
    pub fn record(&mut self, node: Node) {
        self.counts[node.slot()] += 1;
    }

    pub fn count(&self, node: Node) -> u64 {
        self.counts[node.slot()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Node, u64)> + '_ {
        Node::ALL.iter().map(move |node| (*node, self.count(*node)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitive_inputs() {
        assert_eq!(Node::SelectedDistrict.inputs(), vec![Input::Point]);
        assert_eq!(Node::SelectedFarms.inputs(), vec![Input::Point]);
        assert_eq!(Node::FarmAreaTotal.inputs(), vec![Input::Tab, Input::Point]);
        assert_eq!(Node::TrainingTopicCounts.inputs(), vec![Input::Tab, Input::Point]);
    }

    #[test]
    fn test_tab_change_keeps_point_keys() {
        let mut versions = InputVersions::default();
        let district_key = versions.key(Node::SelectedDistrict);
        let area_key = versions.key(Node::FarmAreaTotal);

        versions.bump(Input::Tab);

        assert_eq!(versions.key(Node::SelectedDistrict), district_key);
        assert_ne!(versions.key(Node::FarmAreaTotal), area_key);
    }

    #[test]
    fn test_memo_hit_and_miss() {
        let mut memo = Memo::new();
        assert_eq!(memo.cached(0), None::<f64>);

        memo.store(3, 12.5);
        assert_eq!(memo.cached(3), Some(12.5));
        assert_eq!(memo.cached(4), None);
    }

    #[test]
    fn test_stats_counts_per_node() {
        let mut stats = RecomputeStats::default();
        stats.record(Node::SelectedStation);
        stats.record(Node::SelectedStation);
        stats.record(Node::FarmAreaTotal);

        assert_eq!(stats.count(Node::SelectedStation), 2);
        assert_eq!(stats.count(Node::SelectedDistrict), 0);
        assert_eq!(stats.total(), 3);
    }
}
