use crate::api::validation::FieldError;
use crate::constants::{INTERNAL_ERROR_MESSAGE, REMOTE_FAILURE_MESSAGE, VALIDATION_FAILED_MESSAGE};
use crate::errors::Error;
use crate::remote::RemoteError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub message: String,
    pub code: u16,
    /// Per-field failures, only present on validation errors
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiError({}, {})", self.code, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::Json(self);
        (status, body).into_response()
    }
}

/// Helper function to create API errors
pub fn api_error(status: StatusCode, message: &str) -> ApiError {
    ApiError {
        message: message.to_string(),
        code: status.as_u16(),
        errors: Vec::new(),
    }
}

/// 400 response listing every failed field
pub fn validation_error(errors: Vec<FieldError>) -> ApiError {
    ApiError {
        errors,
        ..api_error(StatusCode::BAD_REQUEST, VALIDATION_FAILED_MESSAGE)
    }
}

impl From<Vec<FieldError>> for ApiError {
    fn from(errors: Vec<FieldError>) -> Self {
        validation_error(errors)
    }
}

/// Storage failures are logged in full and reported without details
impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        error!("Storage error: {}", err);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}

impl From<RemoteError> for ApiError {
    fn from(err: RemoteError) -> Self {
        error!("Remote function error: {}", err);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, REMOTE_FAILURE_MESSAGE)
    }
}
