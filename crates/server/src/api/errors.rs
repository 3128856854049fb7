//! API error types mapped to HTTP status codes.
//!
//! Each [`ApiError`] variant maps to a specific HTTP status code and produces
//! a JSON response body `{"error": "message"}`.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use string_store_rs::filter::{FilterError, FilterErrorKind};
use string_store_rs::ManagerError;

/// Application-level error type that implements `IntoResponse`.
///
/// - `NotFound` → 404
/// - `BadRequest` → 400
/// - `Conflict` → 409
/// - `Unprocessable` → 422
/// - `Internal` → 500
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found (404).
    NotFound(String),
    /// Malformed request or unparseable query (400).
    BadRequest(String),
    /// Resource already exists (409).
    Conflict(String),
    /// Well-formed request with unusable content (422).
    Unprocessable(String),
    /// Unexpected server error (500).
    Internal(String),
}

impl ApiError {
    /// Maps an error from the structured filter path.
    ///
    /// Typed query parameters never reach the interpreter, so any filter
    /// error there is a bad parameter.
    pub fn from_structured_filter(err: FilterError) -> Self {
        ApiError::BadRequest(format!("invalid query parameters: {}", err))
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FilterError> for ApiError {
    fn from(err: FilterError) -> Self {
        match err.kind() {
            FilterErrorKind::Unparseable | FilterErrorKind::InvalidParameter => {
                ApiError::BadRequest(err.to_string())
            }
            FilterErrorKind::ConflictingFilters => ApiError::Unprocessable(format!(
                "query parsed but resulted in conflicting filters: {}",
                err
            )),
        }
    }
}

impl From<ManagerError> for ApiError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::InvalidValue { .. } => ApiError::Unprocessable(err.to_string()),
            ManagerError::AlreadyExists { .. } => ApiError::Conflict(err.to_string()),
            ManagerError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            ManagerError::Filter(e) => e.into(),
            ManagerError::Store(e) => {
                tracing::error!(error = %e, "catalog store failure");
                ApiError::Internal("failed to access string store".to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Valid JSON of the wrong shape, e.g. a non-string value
            JsonRejection::JsonDataError(e) => ApiError::Unprocessable(e.body_text()),
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(format!("invalid query parameters: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::NotFound(msg)
            | ApiError::BadRequest(msg)
            | ApiError::Conflict(msg)
            | ApiError::Unprocessable(msg)
            | ApiError::Internal(msg) => msg,
        };
        if status.is_client_error() {
            tracing::warn!(status = status.as_u16(), %message, "request rejected");
        }
        let body = axum::Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use string_store_rs::filter::QueryInterpreter;

    #[test]
    fn test_unparseable_maps_to_400() {
        let err = QueryInterpreter::parse("banana").unwrap_err();
        assert_eq!(ApiError::from(err).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_maps_to_422() {
        let err = QueryInterpreter::parse("single word strings with three words").unwrap_err();
        let api = ApiError::from(err);
        assert_eq!(api.status(), StatusCode::UNPROCESSABLE_ENTITY);
        match api {
            ApiError::Unprocessable(msg) => {
                assert!(msg.contains("word_count"), "{}", msg);
            }
            other => panic!("expected Unprocessable, got {:?}", other),
        }
    }

    #[test]
    fn test_structured_filter_errors_are_400() {
        let err = QueryInterpreter::parse("longer than 10 characters and shorter than 2 characters")
            .unwrap_err();
        assert_eq!(
            ApiError::from_structured_filter(err).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_manager_errors() {
        let not_found = ManagerError::NotFound {
            value: "x".to_string(),
            suggestion: None,
        };
        assert_eq!(ApiError::from(not_found).status(), StatusCode::NOT_FOUND);

        let dup = ManagerError::AlreadyExists {
            value: "x".to_string(),
        };
        assert_eq!(ApiError::from(dup).status(), StatusCode::CONFLICT);

        let invalid = ManagerError::InvalidValue {
            reason: "empty".to_string(),
        };
        assert_eq!(
            ApiError::from(invalid).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
