//! Handler for volunteer sign-ups.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use pawprint_core::submission::{non_blank, VolunteerSubmission};
use pawprint_db::models::volunteer::CreateVolunteer;
use pawprint_db::repositories::VolunteerRepo;

use crate::error::{AppError, AppResult};
use crate::response::VolunteerCreated;
use crate::state::AppState;

pub const VOLUNTEER_RECEIVED: &str = "Registration received. We will be in touch soon.";

/// POST /api/v1/volunteers
pub async fn submit_volunteer(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<VolunteerCreated>> {
    let submission: VolunteerSubmission = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))?;
    submission.validate()?;

    let input = CreateVolunteer {
        fullname: non_blank(&submission.fullname).unwrap_or_default(),
        email: non_blank(&submission.email).unwrap_or_default(),
        whatsapp: non_blank(&submission.whatsapp).unwrap_or_default(),
        state: submission.state_or_default(),
        volunteer_role: non_blank(&submission.volunteer_role).unwrap_or_default(),
        consent_given: submission.consent_given(state.config.volunteer_consent_default),
        motivation: non_blank(&submission.motivation),
    };
    let volunteer = VolunteerRepo::create(&state.pool, &input).await?;

    tracing::info!(
        volunteer_id = %volunteer.id,
        role = %volunteer.volunteer_role,
        consent_given = volunteer.consent_given,
        "Volunteer registered",
    );

    Ok(Json(VolunteerCreated {
        success: true,
        message: VOLUNTEER_RECEIVED,
        volunteer_id: volunteer.id,
    }))
}
