//! Error types for the dashboard core

use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures while loading the startup snapshot.
///
/// None of these are retried: the dashboard never starts with partial data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("Required input not found: {path}")]
    MissingFile { path: PathBuf },

    #[error("{file}: missing required column '{column}'")]
    MissingColumn { file: String, column: String },

    #[error("{file}: cannot read row {row}: {reason}")]
    MalformedRow {
        file: String,
        row: usize,
        reason: String,
    },

    #[error("{file}: invalid geometry at row {row}: {reason}")]
    InvalidGeometry {
        file: String,
        row: usize,
        reason: String,
    },

    #[error("{file}: column '{column}' at row {row} is not numeric: '{value}'")]
    NotNumeric {
        file: String,
        row: usize,
        column: String,
        value: String,
    },

    #[error("{file}: feature {feature} is missing property '{property}'")]
    MissingProperty {
        file: String,
        feature: usize,
        property: String,
    },

    #[error("{file}: invalid GeoJSON: {reason}")]
    InvalidGeoJson { file: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CoffeeError {
    #[error("Data load failed: {0}")]
    DataLoad(#[from] DataLoadError),

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    #[error("Projection failed: {reason}")]
    Projection { reason: String },
}

pub type Result<T> = std::result::Result<T, CoffeeError>;
