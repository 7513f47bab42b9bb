//! Repository for the `volunteers` table.

use pawprint_core::submission::STATUS_PENDING;
use pawprint_core::types::RowId;
use sqlx::PgPool;

use crate::models::volunteer::{CreateVolunteer, Volunteer};

/// Column list for `volunteers` queries.
const COLUMNS: &str = "\
    id, fullname, email, whatsapp, state, volunteer_role, \
    consent_given, motivation, status, created_at";

/// Provides insert/lookup operations for volunteer sign-ups.
pub struct VolunteerRepo;

impl VolunteerRepo {
    /// Insert a new `pending` volunteer, returning the full row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateVolunteer,
    ) -> Result<Volunteer, sqlx::Error> {
        let query = format!(
            "INSERT INTO volunteers \
                (fullname, email, whatsapp, state, volunteer_role, \
                 consent_given, motivation, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Volunteer>(&query)
            .bind(&input.fullname)
            .bind(&input.email)
            .bind(&input.whatsapp)
            .bind(&input.state)
            .bind(&input.volunteer_role)
            .bind(input.consent_given)
            .bind(&input.motivation)
            .bind(STATUS_PENDING)
            .fetch_one(pool)
            .await
    }

    /// Find a volunteer by ID.
    pub async fn find_by_id(pool: &PgPool, id: RowId) -> Result<Option<Volunteer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM volunteers WHERE id = $1");
        sqlx::query_as::<_, Volunteer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of stored volunteers.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM volunteers")
            .fetch_one(pool)
            .await
    }
}
