//! Volunteer entity model and DTOs.

use pawprint_core::types::{RowId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `volunteers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Volunteer {
    pub id: RowId,
    pub fullname: String,
    pub email: String,
    pub whatsapp: String,
    pub state: String,
    pub volunteer_role: String,
    pub consent_given: bool,
    pub motivation: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a volunteer. Status is always `pending` on insert.
#[derive(Debug, Clone)]
pub struct CreateVolunteer {
    pub fullname: String,
    pub email: String,
    pub whatsapp: String,
    pub state: String,
    pub volunteer_role: String,
    pub consent_given: bool,
    pub motivation: Option<String>,
}
