//! Request timeout and panic recovery.
//!
//! Both failures are rendered as the JSON error envelope. [`guarded`] is
//! applied inside the CORS gate on `/api/v1`, so a timed-out or panicking
//! request still leaves with the CORS and hardening headers.

use std::any::Any;
use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;

use crate::error::AppError;

/// Wrap `router` with a request timeout and panic recovery.
pub fn guarded<S>(router: Router<S>, timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        // Panic recovery: catch panics and return the 500 envelope.
        .layer(CatchPanicLayer::custom(panic_response))
        // Request timeout.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        // The timeout layer answers with an empty body; give it the envelope.
        .layer(axum::middleware::map_response(timeout_envelope))
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::InternalError(format!("handler panicked: {detail}")).into_response()
}

async fn timeout_envelope(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT
        && !response.headers().contains_key(CONTENT_TYPE)
    {
        tracing::warn!("Request timed out");
        return AppError::RequestTimeout.into_response();
    }
    response
}
