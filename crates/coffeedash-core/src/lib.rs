//! Coffee dashboard core - entity models, data store and configuration
//!
//! This crate loads the coffee-sector tables and reference layers into an
//! immutable snapshot and provides the spatial primitives the selection
//! pipeline is built on.

pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod store;

pub use error::{CoffeeError, DataLoadError, Result};
pub use store::{DataPaths, GeoDataStore, LoadOptions};
