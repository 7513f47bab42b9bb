//! Handlers for the public animal listing.
//!
//! The same filter can arrive as a query string (`GET`) or a JSON body
//! (`POST`); both paths converge on [`list`].

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::Json;
use pawprint_core::filter::AnimalFilter;
use pawprint_db::models::animal::Animal;
use pawprint_db::repositories::AnimalRepo;

use crate::error::ReadError;
use crate::response::ListResponse;
use crate::state::AppState;

type AnimalList = Json<ListResponse<Animal, AnimalFilter>>;

/// GET /api/v1/animals
pub async fn list_animals(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<AnimalList, ReadError> {
    let filter = AnimalFilter::from_query(&params)?;
    list(&state, filter).await
}

/// POST /api/v1/animals
///
/// A body that is not a JSON object is treated as "no filters".
pub async fn search_animals(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<AnimalList, ReadError> {
    let filter = AnimalFilter::from_json_body(&body)?;
    list(&state, filter).await
}

async fn list(state: &AppState, mut filter: AnimalFilter) -> Result<AnimalList, ReadError> {
    let page = state
        .config
        .animals_page_size
        .resolve(filter.limit, filter.offset);
    let animals = AnimalRepo::list_available(&state.pool, &filter, page).await?;

    tracing::debug!(count = animals.len(), limit = page.limit, offset = page.offset, "Listed animals");
    // Echo the window that was actually queried.
    filter.limit = Some(page.limit);
    filter.offset = Some(page.offset);
    Ok(Json(ListResponse::new(animals, filter)))
}
