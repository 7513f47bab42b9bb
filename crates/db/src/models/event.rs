//! Event entity model and DTOs.

use pawprint_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `events` table.
///
/// Event ids are text so that hand-picked slugs (`evt-1`) and generated
/// UUIDs can coexist.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub event_type: Option<String>,
    pub venue: Option<String>,
    pub start_at: Timestamp,
    pub end_at: Option<Timestamp>,
    pub image_url: Option<String>,
    pub signup_url: Option<String>,
    pub status: String,
    pub is_public: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting an event.
#[derive(Debug, Clone)]
pub struct CreateEvent {
    /// Generated when `None`.
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub event_type: Option<String>,
    pub venue: Option<String>,
    pub start_at: Timestamp,
    pub end_at: Option<Timestamp>,
    pub image_url: Option<String>,
    pub signup_url: Option<String>,
    pub is_public: bool,
}

impl CreateEvent {
    /// A public event with only a title and start time.
    pub fn public(title: &str, start_at: Timestamp) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            description: None,
            event_type: None,
            venue: None,
            start_at,
            end_at: None,
            image_url: None,
            signup_url: None,
            is_public: true,
        }
    }
}
