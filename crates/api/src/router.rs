//! Shared application router builder.
//!
//! Provides [`build_app_router`] so both the production binary (`main.rs`)
//! and integration tests (`tests/common/mod.rs`) use the exact same
//! middleware stack.

use std::path::Path;

use axum::http::{header, HeaderName, HeaderValue};
use axum::Router;
use pawprint_storage::PUBLIC_OBJECT_PATH;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::StorageBackend;
use crate::middleware::guard::guarded;
use crate::routes;
use crate::state::AppState;

/// Build the full application [`Router`] with all middleware layers.
///
/// The middleware stack is applied bottom-up:
///
/// 1. Set request ID on incoming requests
/// 2. Structured request/response tracing
/// 3. Propagate request ID to response
///
/// Timeout and panic recovery sit inside each route group (see
/// [`guarded`]). On `/api/v1` they run inside the CORS gate (see
/// [`routes::api_routes`]); `/health` and locally stored attachments are
/// reachable without an `Origin`.
pub fn build_app_router(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    // Health check at root level (not under /api/v1).
    let mut public = Router::new().merge(routes::health::router());

    // Attachments written by the local backend are served back from disk.
    if let StorageBackend::Local { root } = &state.config.storage {
        public = public.merge(attachment_routes(root));
    }

    Router::new()
        .merge(guarded(public, state.config.request_timeout()))
        // API v1 routes.
        .nest("/api/v1", routes::api_routes(&state))
        // -- Middleware stack (applied bottom-up) --
        // Propagate request ID to response.
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        // Structured request/response tracing.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Set request ID on incoming requests.
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        // Shared state.
        .with_state(state)
}

/// Uploaded files are untrusted; browsers must neither sniff nor render them
/// inline.
fn attachment_routes<S>(root: &Path) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .nest_service(&format!("/{PUBLIC_OBJECT_PATH}"), ServeDir::new(root))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static("attachment"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static("default-src 'none'; sandbox"),
        ))
}
