//! Handler for animal-abuse report submissions.
//!
//! Validation (required fields, email shape, attachment size) completes
//! before any I/O. The attachment upload is best-effort: if it fails the
//! report is still stored, without a proof URL.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use pawprint_core::attachment::{self, DEFAULT_CONTENT_TYPE, REPORTS_BUCKET};
use pawprint_core::submission::{non_blank, ProofFile, ReportSubmission};
use pawprint_db::models::report::CreateReport;
use pawprint_db::repositories::ReportRepo;

use crate::error::{AppError, AppResult};
use crate::response::ReportCreated;
use crate::state::AppState;

pub const REPORT_RECEIVED: &str = "Report submitted successfully. We will be in touch soon.";

/// POST /api/v1/reports
pub async fn submit_report(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<ReportCreated>> {
    let submission: ReportSubmission = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))?;

    submission.validate()?;
    if let Some(file) = submission.attachment() {
        let (payload, _) = attachment::strip_data_url(file.base64.as_deref().unwrap_or_default());
        attachment::validate_size(payload, state.config.max_attachment_bytes)?;
    }

    let proof_url = match submission.attachment() {
        Some(file) => store_attachment(&state, file).await,
        None => None,
    };

    let report = ReportRepo::create(&state.pool, &to_create_report(&submission, proof_url)).await?;

    tracing::info!(
        report_id = %report.id,
        report_type = %report.report_type,
        has_proof = report.proof_url.is_some(),
        "Report submitted",
    );

    Ok(Json(ReportCreated {
        success: true,
        message: REPORT_RECEIVED,
        report_id: report.id,
        proof_url: report.proof_url,
    }))
}

/// Decode and upload the attachment, returning its public URL.
///
/// Failures are logged and yield `None`.
async fn store_attachment(state: &AppState, file: &ProofFile) -> Option<String> {
    let (payload, data_url_mime) =
        attachment::strip_data_url(file.base64.as_deref().unwrap_or_default());

    let bytes = match attachment::decode(payload) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "Discarding undecodable attachment");
            return None;
        }
    };

    let file_name =
        attachment::generate_file_name(file.name.as_deref().unwrap_or_default(), chrono::Utc::now());
    let key = attachment::object_key(&file_name);
    let content_type = non_blank(&file.mime_type)
        .or_else(|| data_url_mime.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

    match state
        .blob_store
        .put(REPORTS_BUCKET, &key, bytes, &content_type)
        .await
    {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!(error = %e, key = %key, "Attachment upload failed, storing report without proof");
            None
        }
    }
}

fn to_create_report(submission: &ReportSubmission, proof_url: Option<String>) -> CreateReport {
    let address = submission.address_data.clone().unwrap_or_default();
    CreateReport {
        reporter_name: non_blank(&submission.name).unwrap_or_default(),
        reporter_email: non_blank(&submission.email).unwrap_or_default(),
        reporter_whatsapp: non_blank(&submission.whatsapp).unwrap_or_default(),
        incident_address: non_blank(&submission.address).unwrap_or_default(),
        address_cep: non_blank(&address.cep),
        address_street: non_blank(&address.street),
        address_number: non_blank(&address.number),
        address_complement: non_blank(&address.complement),
        address_neighborhood: non_blank(&address.neighborhood),
        address_city: non_blank(&address.city),
        address_state: non_blank(&address.state),
        description: non_blank(&submission.message).unwrap_or_default(),
        report_type: submission.report_type_or_default(),
        proof_url,
    }
}
