//! CORS gate for the public API.
//!
//! Runs before routing so rejected callers never reach a handler:
//!
//! - `OPTIONS` is answered here with `200 ok`, whatever the origin.
//! - Any other method from an origin not on the allow-list gets
//!   `403 { success: false, error: "Origin not allowed" }`.
//! - Admitted requests continue to the router.
//!
//! Every response leaving the gate carries the header set from
//! [`CorsDecision::headers`].

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::ORIGIN;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use pawprint_core::cors::{CorsDecision, CorsPolicy};

use crate::error::AppError;

/// Axum middleware; install with `from_fn_with_state(policy, cors_gate)`.
pub async fn cors_gate(
    State(policy): State<Arc<CorsPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let decision = policy.decide(origin.as_deref());

    let mut response = if request.method() == Method::OPTIONS {
        (StatusCode::OK, "ok").into_response()
    } else if !decision.admitted {
        tracing::warn!(
            origin = origin.as_deref().unwrap_or("<none>"),
            method = %request.method(),
            path = %request.uri().path(),
            "Rejected request from origin not on the allow-list",
        );
        AppError::OriginNotAllowed.into_response()
    } else {
        next.run(request).await
    };

    apply_headers(response.headers_mut(), &decision);
    response
}

fn apply_headers(headers: &mut HeaderMap, decision: &CorsDecision) {
    for (name, value) in decision.headers() {
        match HeaderValue::from_str(&value) {
            Ok(value) => {
                headers.insert(HeaderName::from_static(name), value);
            }
            Err(e) => tracing::warn!(header = name, error = %e, "Skipping invalid CORS header"),
        }
    }
}
