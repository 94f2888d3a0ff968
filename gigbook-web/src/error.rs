//! HTTP error mapping for store failures

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gigbook_common::Error;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request body (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Store or validation failure
    #[error(transparent)]
    Store(#[from] Error),
}

/// HTTP status for a store error
///
/// Shared by the JSON API and the HTML pages so both report a failure the
/// same way.
pub fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::Validation(_) => StatusCode::BAD_REQUEST,
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        Error::ConstraintViolation(_) => StatusCode::CONFLICT,
        Error::StorageFault(_) | Error::Io(_) | Error::Config(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Store(ref err) => (status_for(err), err.code(), err.to_string()),
        };

        if status.is_server_error() {
            error!(code = error_code, "Request failed: {}", message);
        }

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&Error::Validation("name is required".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&Error::NotFound("venue 9".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&Error::ConstraintViolation("FOREIGN KEY".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&Error::StorageFault(sqlx::Error::PoolClosed)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_bad_request_response_status() {
        let response = ApiError::BadRequest("missing body".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
