use serde::Deserialize;

/// Map click body, EPSG:4326
#[derive(Debug, Deserialize)]
pub struct ClickRequest {
    pub lon: f64,
    pub lat: f64,
}

/// Tab switch body; accepts `stations`/`farms` or the tab captions
#[derive(Debug, Deserialize)]
pub struct TabRequest {
    pub tab: String,
}
