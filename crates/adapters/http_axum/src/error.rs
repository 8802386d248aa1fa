//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use pantry_domain::error::PantryError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`PantryError`] to an HTTP response with appropriate status code.
pub struct ApiError(PantryError);

impl From<PantryError> for ApiError {
    fn from(err: PantryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            PantryError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            PantryError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            PantryError::Export(err) => {
                tracing::error!(error = %err, "report export error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "report export failed".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
