//! Origin allow-list and CORS response headers.
//!
//! [`CorsPolicy::decide`] is a pure function of the caller's `Origin` header:
//! it says whether the request is admitted and which headers every response
//! (admitted, rejected or preflight) must carry. The HTTP layer applies the
//! decision; nothing here touches a request.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Origin sent by browsers for pages opened from `file://`.
pub const FILE_ORIGIN: &str = "null";

/// Request headers the browser client is allowed to send.
pub const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Methods exposed by the API.
pub const ALLOW_METHODS: &str = "POST, GET, OPTIONS";

/// Preflight cache lifetime (24 hours).
pub const MAX_AGE_SECS: &str = "86400";

/// Hardening headers attached to every response regardless of admission.
pub const SECURITY_HEADERS: &[(&str, &str)] = &[
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("x-xss-protection", "1; mode=block"),
];

/// Origins admitted when `CORS_ORIGINS` is not set (local development).
pub const DEFAULT_DEV_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:5500",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5500",
    "http://localhost:5173",
];

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// A fixed, ordered allow-list of caller origins.
///
/// Entries are exact origins (`https://example.org`) or patterns with a
/// single `*` wildcard (`https://*.vercel.app`). The first entry doubles as
/// the `Access-Control-Allow-Origin` value for rejected callers.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allowed_origins: Vec<String>,
}

/// Outcome of checking one request origin against a [`CorsPolicy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsDecision {
    /// Whether a non-preflight request may proceed to the handler.
    pub admitted: bool,
    /// Value of `Access-Control-Allow-Origin` for this response.
    pub allow_origin: String,
}

impl CorsPolicy {
    /// Build a policy from an ordered allow-list.
    ///
    /// The list must be non-empty and each entry may contain at most one `*`.
    pub fn new(allowed_origins: Vec<String>) -> Result<Self, CoreError> {
        if allowed_origins.is_empty() {
            return Err(CoreError::Validation(
                "CORS allow-list must contain at least one origin".into(),
            ));
        }
        if let Some(bad) = allowed_origins
            .iter()
            .find(|o| o.trim().is_empty() || o.matches('*').count() > 1)
        {
            return Err(CoreError::Validation(format!(
                "Invalid CORS origin pattern '{bad}'"
            )));
        }
        Ok(Self { allowed_origins })
    }

    /// Whether `origin` may use the API.
    ///
    /// A missing header is never admitted; the literal `"null"` always is.
    pub fn is_allowed(&self, origin: Option<&str>) -> bool {
        match origin {
            None => false,
            Some(FILE_ORIGIN) => true,
            Some(origin) => self
                .allowed_origins
                .iter()
                .any(|allowed| origin_matches(allowed, origin)),
        }
    }

    /// Decide admission and the `Access-Control-Allow-Origin` value.
    ///
    /// Admitted callers get their own origin echoed back (never `*`, so
    /// credentialed requests work). Everyone else gets the first allow-list
    /// entry.
    pub fn decide(&self, origin: Option<&str>) -> CorsDecision {
        match origin {
            Some(o) if self.is_allowed(Some(o)) => CorsDecision {
                admitted: true,
                allow_origin: o.to_string(),
            },
            _ => CorsDecision {
                admitted: false,
                allow_origin: self.allowed_origins[0].clone(),
            },
        }
    }
}

impl CorsDecision {
    /// Full response header set for this decision, lowercase names.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![
            ("access-control-allow-origin", self.allow_origin.clone()),
            ("access-control-allow-headers", ALLOW_HEADERS.to_string()),
            ("access-control-allow-methods", ALLOW_METHODS.to_string()),
            ("access-control-max-age", MAX_AGE_SECS.to_string()),
            ("vary", "Origin".to_string()),
        ];
        headers.extend(
            SECURITY_HEADERS
                .iter()
                .map(|(name, value)| (*name, (*value).to_string())),
        );
        headers
    }
}

/// Match an origin against an exact entry or a single-`*` pattern.
fn origin_matches(allowed: &str, origin: &str) -> bool {
    match allowed.split_once('*') {
        None => allowed == origin,
        Some((prefix, suffix)) => {
            origin.len() >= prefix.len() + suffix.len()
                && origin.starts_with(prefix)
                && origin.ends_with(suffix)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
