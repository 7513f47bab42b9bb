//! Report entity model and DTOs.

use pawprint_core::types::{RowId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `reports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Report {
    pub id: RowId,
    pub reporter_name: String,
    pub reporter_email: String,
    pub reporter_whatsapp: String,
    pub incident_address: String,
    pub address_cep: Option<String>,
    pub address_street: Option<String>,
    pub address_number: Option<String>,
    pub address_complement: Option<String>,
    pub address_neighborhood: Option<String>,
    pub address_city: Option<String>,
    pub address_state: Option<String>,
    pub description: String,
    pub report_type: String,
    pub proof_url: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a report. Status is always `pending` on insert.
#[derive(Debug, Clone, Default)]
pub struct CreateReport {
    pub reporter_name: String,
    pub reporter_email: String,
    pub reporter_whatsapp: String,
    pub incident_address: String,
    pub address_cep: Option<String>,
    pub address_street: Option<String>,
    pub address_number: Option<String>,
    pub address_complement: Option<String>,
    pub address_neighborhood: Option<String>,
    pub address_city: Option<String>,
    pub address_state: Option<String>,
    pub description: String,
    pub report_type: String,
    pub proof_url: Option<String>,
}
