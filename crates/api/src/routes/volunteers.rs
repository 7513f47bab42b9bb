use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::{volunteers, write_method_not_allowed};
use crate::state::AppState;

/// Volunteer sign-up route mounted at `/volunteers`.
///
/// ```text
/// POST   /    -> submit_volunteer
/// ```
pub fn router(body_limit: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(volunteers::submit_volunteer).fallback(write_method_not_allowed),
        )
        .layer(DefaultBodyLimit::max(body_limit))
}
