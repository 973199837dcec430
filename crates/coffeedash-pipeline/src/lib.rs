//! Coffee dashboard pipeline - reactive map selection and aggregates
//!
//! A [`SelectionPipeline`] wraps the shared data store; each dashboard user
//! gets a [`SelectionSession`] that turns map clicks and tab switches into
//! selections, chart tables and KPI values.

pub mod aggregates;
pub mod error;
pub mod graph;
pub mod kpi;
pub mod models;
pub mod pipeline;
pub mod selection;
pub mod session;
pub mod settings;

#[cfg(test)]
mod testing;

pub use aggregates::{AggregateScope, BracketCount, TopicCount, CANONICAL_BRACKETS};
pub use error::{Result, SelectionError};
pub use graph::{Input, Node, RecomputeStats};
pub use kpi::FarmerKpis;
pub use models::{DashboardOutputs, DistrictSelection, SelectionView, StationSelection};
pub use pipeline::SelectionPipeline;
pub use session::{InteractionState, SelectionSession};
pub use settings::PipelineSettings;
