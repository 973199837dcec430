mod request;
mod response;

pub use request::{ClickRequest, TabRequest};
pub use response::{DeleteResponse, HealthResponse, SessionResponse};
