//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use smarthome_domain::error::SmartHomeError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`SmartHomeError`] to an HTTP response with appropriate status code.
pub struct ApiError(SmartHomeError);

impl From<SmartHomeError> for ApiError {
    fn from(err: SmartHomeError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            SmartHomeError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SmartHomeError::NotFound(_) => StatusCode::NOT_FOUND,
            SmartHomeError::Conflict(_) | SmartHomeError::Inconsistent(_) => {
                StatusCode::BAD_REQUEST
            }
            SmartHomeError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self.0 {
            SmartHomeError::Validation(err) => err.to_string(),
            SmartHomeError::NotFound(err) => err.to_string(),
            SmartHomeError::Conflict(err) => err.to_string(),
            SmartHomeError::Inconsistent(err) => err.to_string(),
            SmartHomeError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                "internal server error".to_string()
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
