pub mod entities;
pub mod geometry;
pub mod view;

pub use entities::{District, Farm, Farmer, LayerFeature, ReferenceLayer, Station};
pub use geometry::{Crs, LonLat};
pub use view::{AreaMethod, ViewTab};
