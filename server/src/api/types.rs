//! Shared API types

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::search::CollectError;

/// JSON body of every error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Snake-cased HTTP reason, e.g. `bad_request`
    pub error: String,
    /// Stable machine-readable code, e.g. `INVALID_FILTER`
    pub code: &'static str,
    pub message: String,
}

/// Error returned by handlers and extractors
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn not_found(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, code, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    fn body(self) -> ErrorBody {
        let error = self
            .status
            .canonical_reason()
            .unwrap_or("error")
            .to_ascii_lowercase()
            .replace(' ', "_");
        ErrorBody {
            error,
            code: self.code,
            message: self.message,
        }
    }
}

impl From<CollectError> for ApiError {
    fn from(e: CollectError) -> Self {
        tracing::debug!(error = %e, "Rejected search form");
        Self::bad_request("INVALID_FILTER", e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_error_is_invalid_filter() {
        let err: ApiError = CollectError::MissingBound {
            field: "max_hp".to_string(),
        }
        .into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "INVALID_FILTER");
        assert!(err.message.contains("max_hp"));
    }

    #[test]
    fn test_error_name_follows_status() {
        assert_eq!(ApiError::bad_request("X", "x").body().error, "bad_request");
        assert_eq!(ApiError::not_found("X", "x").body().error, "not_found");
        assert_eq!(
            ApiError::new(StatusCode::UNSUPPORTED_MEDIA_TYPE, "X", "x")
                .body()
                .error,
            "unsupported_media_type"
        );
    }

    #[test]
    fn test_into_response_keeps_status() {
        let response = ApiError::not_found("ROUTE_NOT_FOUND", "nope").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
