//! Domain error to HTTP response mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use razzie_common::Error;

/// Wrapper turning domain errors into JSON error responses
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            Error::NotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),
            Error::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),
            // Storage and other faults propagate here unchanged; the
            // response hides the detail, the log keeps it
            other => {
                tracing::error!("Internal error serving request: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
