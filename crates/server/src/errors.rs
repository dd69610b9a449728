use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// JSON error body: `{"error": "<fixed message>", "detail": "<cause>"}`.
#[derive(Debug, Serialize)]
pub struct JsonApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &str, detail: Option<String>) -> Self {
        Self { status, error: error.to_string(), detail }
    }

    /// Map a service failure onto the operation's fixed messages.
    /// `not_found` is used for `NotFound`, `failure` for everything else.
    pub fn from_service(e: ServiceError, not_found: &str, failure: &str) -> Self {
        if e.is_not_found() {
            warn!(error = %e, "{}", not_found);
            Self::new(StatusCode::NOT_FOUND, not_found, Some(e.to_string()))
        } else {
            Self::internal(e, failure)
        }
    }

    /// For operations where NotFound cannot happen.
    pub fn internal(e: ServiceError, failure: &str) -> Self {
        error!(error = %e, "{}", failure);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, failure, Some(e.to_string()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("runtime check failed: {0}")]
    Runtime(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let e = JsonApiError::from_service(ServiceError::not_found("record"), "Record not found", "Failed to update record");
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.error, "Record not found");
    }

    #[test]
    fn storage_maps_to_500() {
        let e = JsonApiError::from_service(ServiceError::Storage("disk".into()), "Record not found", "Failed to update record");
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.error, "Failed to update record");
        assert_eq!(e.detail.as_deref(), Some("storage error: disk"));
    }
}
