use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use pawprint_core::attachment::DEFAULT_MAX_ATTACHMENT_BYTES;
use pawprint_core::cors::DEFAULT_DEV_ORIGINS;
use pawprint_core::pagination::{
    PageSize, DEFAULT_ANIMALS_PAGE_SIZE, DEFAULT_EVENTS_PAGE_SIZE, DEFAULT_MAX_PAGE_SIZE,
};

/// Where report attachments are stored.
#[derive(Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Files under a local directory, served back by this API.
    Local { root: PathBuf },
    /// Supabase Storage REST API.
    Supabase { url: String, service_key: String },
}

impl StorageBackend {
    pub fn name(&self) -> &'static str {
        match self {
            StorageBackend::Local { .. } => "local",
            StorageBackend::Supabase { .. } => "supabase",
        }
    }
}

// Keeps the service-role key out of logs.
impl fmt::Debug for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Local { root } => f.debug_struct("Local").field("root", root).finish(),
            StorageBackend::Supabase { url, .. } => f
                .debug_struct("Supabase")
                .field("url", url)
                .field("service_key", &"<redacted>")
                .finish(),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL (read in `main`) have defaults
/// suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Ordered origin allow-list. The first entry is echoed to rejected callers.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Wait for a pooled database connection, in seconds (default: `5`).
    /// Always shorter than the request timeout.
    pub db_acquire_timeout_secs: u64,
    pub animals_page_size: PageSize,
    pub events_page_size: PageSize,
    /// Cap on the decoded size of a report attachment.
    pub max_attachment_bytes: usize,
    /// Consent stored when a volunteer form omits the field.
    pub volunteer_consent_default: bool,
    /// Origin this server is reachable at; prefixes local attachment URLs.
    pub public_base_url: String,
    pub storage: StorageBackend,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                      |
    /// |-----------------------------|------------------------------|
    /// | `HOST`                      | `0.0.0.0`                    |
    /// | `PORT`                      | `3000`                       |
    /// | `CORS_ORIGINS`              | local dev origins            |
    /// | `REQUEST_TIMEOUT_SECS`      | `30`                         |
    /// | `DB_ACQUIRE_TIMEOUT_SECS`   | `5`                          |
    /// | `ANIMALS_PAGE_SIZE`         | `12`                         |
    /// | `EVENTS_PAGE_SIZE`          | `20`                         |
    /// | `MAX_PAGE_SIZE`             | `100`                        |
    /// | `MAX_ATTACHMENT_BYTES`      | `10485760`                   |
    /// | `VOLUNTEER_CONSENT_DEFAULT` | `true`                       |
    /// | `STORAGE_BACKEND`           | `local` (or `supabase`)      |
    /// | `STORAGE_LOCAL_ROOT`        | `./storage`                  |
    /// | `PUBLIC_BASE_URL`           | `http://localhost:3000`      |
    /// | `SUPABASE_URL`              | required for `supabase`      |
    /// | `SUPABASE_SERVICE_ROLE_KEY` | required for `supabase`      |
    ///
    /// Panics on malformed values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = env_or("PORT", 3000);

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_DEV_ORIGINS.join(",")),
        );

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", 30);
        let db_acquire_timeout_secs: u64 = env_or(
            "DB_ACQUIRE_TIMEOUT_SECS",
            pawprint_db::DEFAULT_ACQUIRE_TIMEOUT.as_secs(),
        );
        if db_acquire_timeout_secs == 0 || db_acquire_timeout_secs >= request_timeout_secs {
            panic!(
                "DB_ACQUIRE_TIMEOUT_SECS ({db_acquire_timeout_secs}) must be positive and \
                 below REQUEST_TIMEOUT_SECS ({request_timeout_secs})"
            );
        }

        let max_page_size: i64 = env_or("MAX_PAGE_SIZE", DEFAULT_MAX_PAGE_SIZE);
        let animals_page_size = PageSize::new(
            env_or("ANIMALS_PAGE_SIZE", DEFAULT_ANIMALS_PAGE_SIZE),
            max_page_size,
        );
        let events_page_size = PageSize::new(
            env_or("EVENTS_PAGE_SIZE", DEFAULT_EVENTS_PAGE_SIZE),
            max_page_size,
        );

        let max_attachment_bytes: usize =
            env_or("MAX_ATTACHMENT_BYTES", DEFAULT_MAX_ATTACHMENT_BYTES);

        let volunteer_consent_default = std::env::var("VOLUNTEER_CONSENT_DEFAULT")
            .map(|v| {
                parse_bool(&v).unwrap_or_else(|| {
                    panic!("VOLUNTEER_CONSENT_DEFAULT must be a boolean, got '{v}'")
                })
            })
            .unwrap_or(true);

        let public_base_url =
            std::env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".into());

        let storage = match std::env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "local".into())
            .to_ascii_lowercase()
            .as_str()
        {
            "local" => StorageBackend::Local {
                root: std::env::var("STORAGE_LOCAL_ROOT")
                    .unwrap_or_else(|_| "./storage".into())
                    .into(),
            },
            "supabase" => StorageBackend::Supabase {
                url: std::env::var("SUPABASE_URL")
                    .expect("SUPABASE_URL must be set when STORAGE_BACKEND=supabase"),
                service_key: std::env::var("SUPABASE_SERVICE_ROLE_KEY").expect(
                    "SUPABASE_SERVICE_ROLE_KEY must be set when STORAGE_BACKEND=supabase",
                ),
            },
            other => panic!("STORAGE_BACKEND must be 'local' or 'supabase', got '{other}'"),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_acquire_timeout_secs,
            animals_page_size,
            events_page_size,
            max_attachment_bytes,
            volunteer_consent_default,
            public_base_url,
            storage,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn db_acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.db_acquire_timeout_secs)
    }

    /// Largest request body accepted by the submission routes.
    ///
    /// Base64 inflates the payload by a third; the margin leaves room for
    /// the form fields so oversize attachments reach the size check and get
    /// a proper error envelope instead of a bare 413.
    pub fn submission_body_limit(&self) -> usize {
        self.max_attachment_bytes
            .saturating_mul(2)
            .saturating_add(64 * 1024)
    }
}

/// Parse an env var, falling back to `default` when unset.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} is invalid ('{raw}'): {e}")),
        Err(_) => default,
    }
}

/// Split a comma-separated origin list, dropping blanks and trailing slashes.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_origins_trims_and_drops_blanks() {
        assert_eq!(
            parse_origins(" https://a.org/ ,, https://*.vercel.app,"),
            vec!["https://a.org", "https://*.vercel.app"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" 0 "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn submission_body_limit_leaves_room_for_base64() {
        let config = ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            cors_origins: vec!["http://localhost:3000".into()],
            request_timeout_secs: 30,
            db_acquire_timeout_secs: 5,
            animals_page_size: PageSize::new(12, 100),
            events_page_size: PageSize::new(20, 100),
            max_attachment_bytes: 3 * 1024,
            volunteer_consent_default: true,
            public_base_url: "http://localhost:3000".into(),
            storage: StorageBackend::Local {
                root: "./storage".into(),
            },
        };
        assert!(config.submission_body_limit() > config.max_attachment_bytes * 4 / 3);
    }

    #[test]
    fn storage_debug_redacts_service_key() {
        let backend = StorageBackend::Supabase {
            url: "https://abc.supabase.co".into(),
            service_key: "super-secret".into(),
        };
        let rendered = format!("{backend:?}");
        assert!(rendered.contains("abc.supabase.co"));
        assert!(!rendered.contains("super-secret"));
        assert_eq!(backend.name(), "supabase");
    }
}
