use thiserror::Error;

/// Rejected interaction events. The session state is unchanged when one is returned.
#[derive(Debug, Error, PartialEq)]
pub enum SelectionError {
    #[error("Invalid map position: lon={lon}, lat={lat}")]
    InvalidPoint { lon: f64, lat: f64 },
}

pub type Result<T> = std::result::Result<T, SelectionError>;
