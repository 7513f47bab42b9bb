pub mod animals;
pub mod events;
pub mod health;
pub mod reports;
pub mod volunteers;

use axum::Router;

use crate::middleware::cors::cors_gate;
use crate::middleware::guard::guarded;
use crate::state::AppState;

/// Build the `/api/v1` route tree behind the CORS gate.
///
/// Route hierarchy:
///
/// ```text
/// /animals        GET (query string), POST (JSON filter)
/// /events         GET (query string), POST (JSON filter or {"id": ...})
/// /reports        POST report submission
/// /volunteers     POST volunteer sign-up
/// ```
///
/// Every path answers `OPTIONS` from the gate; unsupported methods get a
/// 405 envelope. Timeouts and panics are caught inside the gate so their
/// responses carry the CORS headers too.
pub fn api_routes(state: &AppState) -> Router<AppState> {
    let body_limit = state.config.submission_body_limit();

    let routes = Router::new()
        .nest("/animals", animals::router())
        .nest("/events", events::router())
        .nest("/reports", reports::router(body_limit))
        .nest("/volunteers", volunteers::router(body_limit));

    guarded(routes, state.config.request_timeout())
        .layer(axum::middleware::from_fn_with_state(
            state.cors.clone(),
            cors_gate,
        ))
}
