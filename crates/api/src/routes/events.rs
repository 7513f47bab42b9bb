use axum::routing::get;
use axum::Router;

use crate::handlers::{events, read_method_not_allowed};
use crate::state::AppState;

/// Event listing routes mounted at `/events`.
///
/// ```text
/// GET    /    -> list_events
/// POST   /    -> search_events
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(events::list_events)
            .post(events::search_events)
            .fallback(read_method_not_allowed),
    )
}
