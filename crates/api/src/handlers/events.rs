//! Handlers for the public event listing.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::Json;
use pawprint_core::filter::EventFilter;
use pawprint_db::models::event::Event;
use pawprint_db::repositories::EventRepo;

use crate::error::ReadError;
use crate::response::ListResponse;
use crate::state::AppState;

type EventList = Json<ListResponse<Event, EventFilter>>;

/// GET /api/v1/events
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<EventList, ReadError> {
    let filter = EventFilter::from_query(&params)?;
    list(&state, filter).await
}

/// POST /api/v1/events
///
/// `{"id": "..."}` fetches a single event by id, public or not.
pub async fn search_events(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<EventList, ReadError> {
    let filter = EventFilter::from_json_body(&body)?;
    list(&state, filter).await
}

async fn list(state: &AppState, mut filter: EventFilter) -> Result<EventList, ReadError> {
    let page = state
        .config
        .events_page_size
        .resolve(filter.limit, filter.offset);
    let events = EventRepo::list(&state.pool, &filter, page).await?;

    tracing::debug!(
        count = events.len(),
        by_id = filter.id.is_some(),
        limit = page.limit,
        offset = page.offset,
        "Listed events",
    );
    // Echo the window that was actually queried.
    filter.limit = Some(page.limit);
    filter.offset = Some(page.offset);
    Ok(Json(ListResponse::new(events, filter)))
}
