//! Typed listing filters and their parsing from either transport.
//!
//! A GET query string and a POST JSON body describing the same filter produce
//! identical [`AnimalFilter`] / [`EventFilter`] values. Absent, `null` and
//! empty values are dropped so that "field is `Some`" always means "filter
//! requested". Unknown keys are ignored; a known key carrying a value outside
//! its domain is a validation error.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Closed value sets
// ---------------------------------------------------------------------------

/// Define a closed string-valued enum with `as_str`, `parse` and `Serialize`.
macro_rules! filter_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every accepted wire value, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($value => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

filter_enum!(
    /// Species of a listed animal.
    AnimalType { Dog => "dog", Cat => "cat" }
);

filter_enum!(
    /// Size class: small, medium, large.
    AnimalSize { Small => "p", Medium => "m", Large => "g" }
);

filter_enum!(
    Gender { Male => "male", Female => "female" }
);

filter_enum!(
    /// Which listing page is asking: adoption or sponsorship availability.
    PageType { Adoption => "adoption", Sponsorship => "sponsorship" }
);

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Filter for the animal listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalFilter {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub animal_type: Option<AnimalType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<AnimalSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_puppy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_type: Option<PageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
}

/// Filter for the event listing.
///
/// When `id` is set every other predicate is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upcoming: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
}

impl AnimalFilter {
    /// Build from GET query parameters.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, CoreError> {
        Self::from_source(&Source::Query(params))
    }

    /// Build from a POST body. Unparsable or non-object JSON yields the
    /// empty filter.
    pub fn from_json_body(body: &[u8]) -> Result<Self, CoreError> {
        match json_object(body) {
            Some(map) => Self::from_source(&Source::Json(&map)),
            None => Ok(Self::default()),
        }
    }

    fn from_source(src: &Source<'_>) -> Result<Self, CoreError> {
        Ok(Self {
            animal_type: src.choice("type", AnimalType::parse, AnimalType::VALUES)?,
            size: src.choice("size", AnimalSize::parse, AnimalSize::VALUES)?,
            gender: src.choice("gender", Gender::parse, Gender::VALUES)?,
            is_puppy: src.flag("isPuppy")?,
            page_type: src.choice("pageType", PageType::parse, PageType::VALUES)?,
            limit: src.int("limit")?,
            offset: src.int("offset")?,
        })
    }
}

impl EventFilter {
    /// Build from GET query parameters.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, CoreError> {
        Self::from_source(&Source::Query(params))
    }

    /// Build from a POST body. Unparsable or non-object JSON yields the
    /// empty filter.
    pub fn from_json_body(body: &[u8]) -> Result<Self, CoreError> {
        match json_object(body) {
            Some(map) => Self::from_source(&Source::Json(&map)),
            None => Ok(Self::default()),
        }
    }

    fn from_source(src: &Source<'_>) -> Result<Self, CoreError> {
        let start = src
            .text("start")?
            .map(|s| parse_bound("start", &s, Bound::Start))
            .transpose()?;
        let end = src
            .text("end")?
            .map(|s| parse_bound("end", &s, Bound::End))
            .transpose()?;

        Ok(Self {
            id: src.text("id")?,
            start,
            end,
            upcoming: src.flag("upcoming")?,
            search: src.text("search")?,
            venue: src.text("venue")?,
            limit: src.int("limit")?,
            offset: src.int("offset")?,
        })
    }
}

// ---------------------------------------------------------------------------
// Transport-independent field access
// ---------------------------------------------------------------------------

enum Source<'a> {
    Query(&'a HashMap<String, String>),
    Json(&'a Map<String, Value>),
}

impl Source<'_> {
    /// A non-empty string value.
    fn text(&self, key: &str) -> Result<Option<String>, CoreError> {
        let raw = match self {
            Source::Query(params) => params.get(key).cloned(),
            Source::Json(map) => match map.get(key) {
                None | Some(Value::Null) => None,
                Some(Value::String(s)) => Some(s.clone()),
                Some(Value::Number(n)) => Some(n.to_string()),
                Some(_) => return Err(invalid(key)),
            },
        };
        Ok(raw
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()))
    }

    /// A boolean. Query strings can only switch a flag on (`"true"`).
    fn flag(&self, key: &str) -> Result<Option<bool>, CoreError> {
        match self {
            Source::Query(params) => Ok(params
                .get(key)
                .filter(|v| v.as_str() == "true")
                .map(|_| true)),
            Source::Json(map) => match map.get(key) {
                None | Some(Value::Null) => Ok(None),
                Some(Value::Bool(b)) => Ok(Some(*b)),
                Some(Value::String(s)) if s == "true" => Ok(Some(true)),
                Some(Value::String(s)) if s == "false" => Ok(Some(false)),
                Some(Value::String(s)) if s.is_empty() => Ok(None),
                Some(_) => Err(invalid(key)),
            },
        }
    }

    /// An integer. Unparsable strings are treated as absent.
    fn int(&self, key: &str) -> Result<Option<i64>, CoreError> {
        match self {
            Source::Query(params) => Ok(params.get(key).and_then(|v| v.trim().parse().ok())),
            Source::Json(map) => match map.get(key) {
                None | Some(Value::Null) => Ok(None),
                Some(Value::Number(n)) => Ok(n.as_i64()),
                Some(Value::String(s)) => Ok(s.trim().parse().ok()),
                Some(_) => Err(invalid(key)),
            },
        }
    }

    /// One of a closed set of values.
    fn choice<T>(
        &self,
        key: &str,
        parse: fn(&str) -> Option<T>,
        allowed: &[&str],
    ) -> Result<Option<T>, CoreError> {
        match self.text(key)? {
            None => Ok(None),
            Some(raw) => parse(&raw).map(Some).ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid value '{raw}' for '{key}'. Must be one of: {allowed:?}"
                ))
            }),
        }
    }
}

fn invalid(key: &str) -> CoreError {
    CoreError::Validation(format!("Invalid value type for '{key}'"))
}

fn json_object(body: &[u8]) -> Option<Map<String, Value>> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Date bounds
// ---------------------------------------------------------------------------

#[derive(Clone, Copy)]
enum Bound {
    Start,
    End,
}

/// Parse an RFC 3339 timestamp, a zone-less `YYYY-MM-DDTHH:MM:SS` (taken as
/// UTC) or a bare date. A bare date covers the whole UTC day.
fn parse_bound(key: &str, value: &str, bound: Bound) -> Result<Timestamp, CoreError> {
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&chrono::Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }
    let invalid_date = || {
        CoreError::Validation(format!(
            "Invalid date '{value}' for '{key}'. Expected YYYY-MM-DD or an RFC 3339 timestamp"
        ))
    };
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid_date())?;
    let naive = match bound {
        Bound::Start => date.and_hms_opt(0, 0, 0),
        Bound::End => date.and_hms_micro_opt(23, 59, 59, 999_999),
    };
    naive.map(|n| n.and_utc()).ok_or_else(invalid_date)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
