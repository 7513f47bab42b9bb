//! Public form submissions (animal-abuse reports, volunteer sign-ups).
//!
//! Validation is all-or-nothing and runs before any I/O: every required
//! field must be present and non-blank after trimming, and the email must
//! look like `local@domain.tld`.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Status of every newly inserted report or volunteer row.
pub const STATUS_PENDING: &str = "pending";

/// Report type stored when the form sent none.
pub const DEFAULT_REPORT_TYPE: &str = "other";

/// State stored for volunteers who did not pick one.
pub const DEFAULT_VOLUNTEER_STATE: &str = "SP";

/// Maximum length of free-text fields (message, motivation), in characters.
pub const MAX_FREE_TEXT_LENGTH: usize = 10_000;

/// Shape check only; deliverability is not verified.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Structured address captured by the postal-code lookup on the form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressData {
    pub cep: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// Attachment sent inline as base64.
#[derive(Debug, Clone, Deserialize)]
pub struct ProofFile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub base64: Option<String>,
}

/// Body of `POST /reports`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub address_data: Option<AddressData>,
    pub whatsapp: Option<String>,
    pub message: Option<String>,
    pub report_type: Option<String>,
    pub proof_file: Option<ProofFile>,
}

/// Body of `POST /volunteers`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerSubmission {
    pub volunteer_role: Option<String>,
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub whatsapp: Option<String>,
    pub state: Option<String>,
    pub consent: Option<bool>,
    pub motivation: Option<String>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

impl ReportSubmission {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_fields(&[
            ("name", &self.name),
            ("email", &self.email),
            ("address", &self.address),
            ("whatsapp", &self.whatsapp),
            ("message", &self.message),
        ])?;
        validate_email(self.email.as_deref().unwrap_or_default())?;
        validate_free_text("message", self.message.as_deref().unwrap_or_default())
    }

    /// Report type to store, falling back to [`DEFAULT_REPORT_TYPE`].
    pub fn report_type_or_default(&self) -> String {
        non_blank(&self.report_type).unwrap_or_else(|| DEFAULT_REPORT_TYPE.to_string())
    }

    /// The attachment, if one with a non-empty payload was sent.
    pub fn attachment(&self) -> Option<&ProofFile> {
        self.proof_file
            .as_ref()
            .filter(|f| f.base64.as_deref().is_some_and(|b| !b.trim().is_empty()))
    }
}

impl VolunteerSubmission {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_fields(&[
            ("volunteerRole", &self.volunteer_role),
            ("fullname", &self.fullname),
            ("email", &self.email),
            ("whatsapp", &self.whatsapp),
        ])?;
        validate_email(self.email.as_deref().unwrap_or_default())?;
        if let Some(motivation) = &self.motivation {
            validate_free_text("motivation", motivation)?;
        }
        Ok(())
    }

    /// Consent as sent, or `default` when the field was omitted.
    pub fn consent_given(&self, default: bool) -> bool {
        self.consent.unwrap_or(default)
    }

    pub fn state_or_default(&self) -> String {
        non_blank(&self.state).unwrap_or_else(|| DEFAULT_VOLUNTEER_STATE.to_string())
    }
}

/// Fail with every missing field named if any value is absent or blank.
pub fn require_fields(fields: &[(&str, &Option<String>)]) -> Result<(), CoreError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(CoreError::Validation("Invalid email".into()))
    }
}

fn validate_free_text(field: &str, value: &str) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > MAX_FREE_TEXT_LENGTH {
        return Err(CoreError::Validation(format!(
            "'{field}' exceeds maximum length of {MAX_FREE_TEXT_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

/// Trimmed value, `None` when absent or blank.
pub fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
