//! Repository for the `reports` table.

use pawprint_core::submission::STATUS_PENDING;
use pawprint_core::types::RowId;
use sqlx::PgPool;

use crate::models::report::{CreateReport, Report};

/// Column list for `reports` queries.
const COLUMNS: &str = "\
    id, reporter_name, reporter_email, reporter_whatsapp, incident_address, \
    address_cep, address_street, address_number, address_complement, \
    address_neighborhood, address_city, address_state, \
    description, report_type, proof_url, status, created_at";

/// Provides insert/lookup operations for abuse reports.
pub struct ReportRepo;

impl ReportRepo {
    /// Insert a new `pending` report, returning the full row.
    pub async fn create(pool: &PgPool, input: &CreateReport) -> Result<Report, sqlx::Error> {
        let query = format!(
            "INSERT INTO reports \
                (reporter_name, reporter_email, reporter_whatsapp, incident_address, \
                 address_cep, address_street, address_number, address_complement, \
                 address_neighborhood, address_city, address_state, \
                 description, report_type, proof_url, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(&input.reporter_name)
            .bind(&input.reporter_email)
            .bind(&input.reporter_whatsapp)
            .bind(&input.incident_address)
            .bind(&input.address_cep)
            .bind(&input.address_street)
            .bind(&input.address_number)
            .bind(&input.address_complement)
            .bind(&input.address_neighborhood)
            .bind(&input.address_city)
            .bind(&input.address_state)
            .bind(&input.description)
            .bind(&input.report_type)
            .bind(&input.proof_url)
            .bind(STATUS_PENDING)
            .fetch_one(pool)
            .await
    }

    /// Find a report by ID.
    pub async fn find_by_id(pool: &PgPool, id: RowId) -> Result<Option<Report>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reports WHERE id = $1");
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of stored reports.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM reports")
            .fetch_one(pool)
            .await
    }
}
