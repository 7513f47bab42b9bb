use axum::routing::get;
use axum::Router;

use crate::handlers::{animals, read_method_not_allowed};
use crate::state::AppState;

/// Animal listing routes mounted at `/animals`.
///
/// ```text
/// GET    /    -> list_animals
/// POST   /    -> search_animals
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(animals::list_animals)
            .post(animals::search_animals)
            .fallback(read_method_not_allowed),
    )
}
