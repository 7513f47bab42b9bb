use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pawprint_core::error::CoreError;
use serde_json::json;

/// Message returned in place of any internal or database failure detail.
pub const GENERIC_FAILURE: &str = "An internal error occurred";

/// Message returned when a listing query fails.
pub const READ_FAILURE: &str = "Failed to load data";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Renders as the write envelope `{ "success": false, "error": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `pawprint_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The caller's origin is not on the allow-list.
    #[error("Origin not allowed")]
    OriginNotAllowed,

    /// Wrong HTTP verb for the endpoint.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    RequestTimeout,

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Status and user-facing message. Internal details are logged here and
    /// replaced with [`GENERIC_FAILURE`].
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Core(CoreError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string())
            }
            AppError::OriginNotAllowed => (StatusCode::FORBIDDEN, self.to_string()),
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, self.to_string()),
            AppError::RequestTimeout => (StatusCode::REQUEST_TIMEOUT, self.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        let body = json!({
            "success": false,
            "error": message,
        });
        (status, axum::Json(body)).into_response()
    }
}

/// Error type for the listing handlers.
///
/// Same mapping as [`AppError`] except that database failures are a 400
/// with [`READ_FAILURE`], and the body carries an empty `data` array so
/// clients can render "no results" without branching.
#[derive(Debug)]
pub struct ReadError(pub AppError);

impl From<AppError> for ReadError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<CoreError> for ReadError {
    fn from(err: CoreError) -> Self {
        Self(AppError::Core(err))
    }
}

impl From<sqlx::Error> for ReadError {
    fn from(err: sqlx::Error) -> Self {
        Self(AppError::Database(err))
    }
}

impl IntoResponse for ReadError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::Database(err) => {
                tracing::error!(error = %err, "Listing query failed");
                (StatusCode::BAD_REQUEST, READ_FAILURE.to_string())
            }
            other => other.status_and_message(),
        };
        let body = json!({
            "success": false,
            "error": message,
            "data": [],
        });
        (status, axum::Json(body)).into_response()
    }
}
