use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::{reports, write_method_not_allowed};
use crate::state::AppState;

/// Report submission route mounted at `/reports`.
///
/// ```text
/// POST   /    -> submit_report
/// ```
///
/// `body_limit` must fit a base64 attachment of the configured maximum size.
pub fn router(body_limit: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(reports::submit_report).fallback(write_method_not_allowed),
        )
        .layer(DefaultBodyLimit::max(body_limit))
}
