use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use coffeedash_core::CoffeeError;
use coffeedash_pipeline::SelectionError;
use serde::Serialize;

/// Unified API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into(), details: None }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self { status: StatusCode::NOT_FOUND, message: message.into(), details: None }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: message.into(), details: None }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.message, details: self.details };
        (self.status, Json(body)).into_response()
    }
}

impl From<CoffeeError> for ApiError {
    fn from(err: CoffeeError) -> Self {
        match &err {
            // Unknown tab or layer names supplied by the client
            CoffeeError::ConfigInvalid { key, .. } if key == "tab" || key == "layer" => {
                Self::bad_request(format!("Invalid {}", key)).with_details(err.to_string())
            }
            _ => Self::internal("Internal error").with_details(err.to_string()),
        }
    }
}

impl From<SelectionError> for ApiError {
    fn from(err: SelectionError) -> Self {
        match err {
            SelectionError::InvalidPoint { .. } => {
                Self::bad_request("Invalid coordinates").with_details(err.to_string())
            }
        }
    }
}
