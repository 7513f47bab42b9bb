//! Report attachments: size cap, base64 decoding and object naming.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use rand::Rng;

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default cap on the decoded attachment size (10 MiB, same as the web form).
pub const DEFAULT_MAX_ATTACHMENT_BYTES: usize = 10 * 1024 * 1024;

/// Bucket holding report attachments.
pub const REPORTS_BUCKET: &str = "reports";

/// Key prefix for report attachments inside [`REPORTS_BUCKET`].
pub const REPORTS_PREFIX: &str = "reports";

/// Extension used when the original file name has none.
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Extensions kept on stored attachments: images, video and PDF. Anything
/// else (`html`, `svg`, ...) is stored as [`DEFAULT_EXTENSION`].
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "heic", "heif", "bmp", "mp4", "mov", "webm", "pdf",
];

/// Content type used when the client sent none.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 6;

/// Standard alphabet, padding optional (browsers are not consistent).
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

// ---------------------------------------------------------------------------
// Payload handling
// ---------------------------------------------------------------------------

/// Split an optional `data:<mime>;base64,` prefix off a payload.
///
/// Returns the bare base64 text and the MIME type from the prefix, if any.
pub fn strip_data_url(payload: &str) -> (&str, Option<&str>) {
    let Some(rest) = payload.strip_prefix("data:") else {
        return (payload, None);
    };
    match rest.split_once(',') {
        Some((meta, data)) => {
            let mime = meta
                .strip_suffix(";base64")
                .unwrap_or(meta)
                .split(';')
                .next()
                .filter(|m| !m.is_empty());
            (data, mime)
        }
        None => (payload, None),
    }
}

/// Decoded byte length of a base64 payload, without decoding it.
pub fn decoded_len(base64_text: &str) -> usize {
    let significant: Vec<u8> = base64_text
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let padding = significant.iter().rev().take_while(|b| **b == b'=').count();
    let data_chars = significant.len() - padding;
    data_chars * 3 / 4
}

/// Reject payloads whose decoded size exceeds `max_bytes`.
pub fn validate_size(base64_text: &str, max_bytes: usize) -> Result<(), CoreError> {
    let size = decoded_len(base64_text);
    if size > max_bytes {
        return Err(CoreError::Validation(format!(
            "Attachment exceeds the maximum size of {} MB",
            max_bytes / (1024 * 1024)
        )));
    }
    Ok(())
}

/// Decode a base64 payload, ignoring embedded whitespace.
pub fn decode(base64_text: &str) -> Result<Vec<u8>, CoreError> {
    let cleaned: String = base64_text
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    LENIENT_STANDARD
        .decode(cleaned)
        .map_err(|e| CoreError::Validation(format!("Attachment is not valid base64: {e}")))
}

// ---------------------------------------------------------------------------
// Naming
// ---------------------------------------------------------------------------

/// Lowercase extension of `original_name` if it is in
/// [`ALLOWED_EXTENSIONS`], otherwise [`DEFAULT_EXTENSION`].
pub fn file_extension(original_name: &str) -> String {
    original_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}

/// Collision-resistant name: `report_<unix-millis>_<6 base36 chars>.<ext>`.
pub fn generate_file_name(original_name: &str, now: Timestamp) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect();
    format!(
        "report_{}_{}.{}",
        now.timestamp_millis(),
        suffix,
        file_extension(original_name)
    )
}

/// Object key of a report attachment inside [`REPORTS_BUCKET`].
pub fn object_key(file_name: &str) -> String {
    format!("{REPORTS_PREFIX}/{file_name}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
