//! Success envelopes returned by the API handlers.
//!
//! Failures are rendered by [`crate::error::AppError`] and
//! [`crate::error::ReadError`]; everything here has `success: true`.

use pawprint_core::types::RowId;
use serde::Serialize;

/// `{ "success": true, "data": [...], "count": n, "filters": {...} }`.
///
/// `filters` echoes the parsed filter so clients can see how their request
/// was interpreted.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize, F: Serialize> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
    pub filters: F,
}

impl<T: Serialize, F: Serialize> ListResponse<T, F> {
    pub fn new(data: Vec<T>, filters: F) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
            filters,
        }
    }
}

/// Body of a successful `POST /reports`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCreated {
    pub success: bool,
    pub message: &'static str,
    pub report_id: RowId,
    /// Public URL of the stored attachment; `null` if none was stored.
    pub proof_url: Option<String>,
}

/// Body of a successful `POST /volunteers`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerCreated {
    pub success: bool,
    pub message: &'static str,
    pub volunteer_id: RowId,
}
