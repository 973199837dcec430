mod health;
mod kpis;
mod layers;
mod sessions;

pub use health::health_check;
pub use kpis::get_kpis;
pub use layers::get_layer;
pub use sessions::{change_tab, click, close_session, create_session, get_outputs};
