//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use holonet_domain::error::{HolonetError, NotFoundError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`HolonetError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(HolonetError);

impl From<HolonetError> for ApiError {
    fn from(err: HolonetError) -> Self {
        Self(err)
    }
}

impl From<NotFoundError> for ApiError {
    fn from(err: NotFoundError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            HolonetError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            HolonetError::Conflict(err) => (StatusCode::CONFLICT, err.to_string()),
            HolonetError::Storage(err) => {
                tracing::error!(error = ?err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
