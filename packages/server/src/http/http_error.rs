//! HTTP error handling
//!
//! Provides consistent JSON error responses for the API endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use bookmarkd_core::BookmarkError;
use serde::Serialize;

/// HTTP error response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpError {
    /// User-facing error message
    pub message: String,
    /// Machine-readable error code
    pub code: String,
    /// Optional detailed error information for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl HttpError {
    /// Create a new HTTP error
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            details: None,
        }
    }

    /// Create a new HTTP error with details
    pub fn with_details(
        message: impl Into<String>,
        code: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            details: Some(details.into()),
        }
    }

    /// HTTP status for this error's code
    pub fn status(&self) -> StatusCode {
        match self.code.as_str() {
            "ROOT_NOT_FOUND" => StatusCode::NOT_FOUND,
            "INVALID_INPUT" => StatusCode::BAD_REQUEST,
            "PARSE_ERROR" => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl From<BookmarkError> for HttpError {
    fn from(err: BookmarkError) -> Self {
        let code = err.code();
        match err {
            BookmarkError::Io { ref path, .. } => HttpError::with_details(
                err.to_string(),
                code,
                format!("path: {}", path.display()),
            ),
            BookmarkError::Parse(ref source) => HttpError::with_details(
                err.to_string(),
                code,
                format!("line {}, column {}", source.line(), source.column()),
            ),
            _ => HttpError::new(err.to_string(), code),
        }
    }
}
