//! Repository for the `events` table.

use pawprint_core::filter::EventFilter;
use pawprint_core::pagination::Page;
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event};
use crate::query::{bind_all, events_query};

/// Column list for `events` queries.
const COLUMNS: &str = "\
    id, title, description, event_type, venue, start_at, end_at, \
    image_url, signup_url, status, is_public, created_at, updated_at";

/// Provides read operations for the public events listing.
pub struct EventRepo;

impl EventRepo {
    /// List events matching `filter`, soonest first.
    ///
    /// `upcoming` is evaluated against the current time.
    pub async fn list(
        pool: &PgPool,
        filter: &EventFilter,
        page: Page,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let built = events_query(filter, page, chrono::Utc::now());
        let query = format!("SELECT {COLUMNS} FROM events {}", built.clause);
        tracing::debug!(sql = %query, binds = built.binds.len(), "Listing events");

        bind_all(sqlx::query_as::<_, Event>(&query), built.binds)
            .fetch_all(pool)
            .await
    }

    /// Insert an event, returning the full row.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events \
                (id, title, description, event_type, venue, start_at, end_at, \
                 image_url, signup_url, is_public) \
             VALUES (COALESCE($1, gen_random_uuid()::text), $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.event_type)
            .bind(&input.venue)
            .bind(input.start_at)
            .bind(input.end_at)
            .bind(&input.image_url)
            .bind(&input.signup_url)
            .bind(input.is_public)
            .fetch_one(pool)
            .await
    }
}
