//! Offset/limit pagination shared by the listing endpoints.
//!
//! Page sizes are configuration, not constants baked into queries: each
//! resource carries its own [`PageSize`].

/// Default page size for animal listings.
pub const DEFAULT_ANIMALS_PAGE_SIZE: i64 = 12;

/// Default page size for event listings.
pub const DEFAULT_EVENTS_PAGE_SIZE: i64 = 20;

/// Upper bound for any caller-supplied `limit`.
pub const DEFAULT_MAX_PAGE_SIZE: i64 = 100;

/// Default and maximum page size for one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize {
    pub default: i64,
    pub max: i64,
}

/// A resolved result window: rows `[offset, offset + limit)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl PageSize {
    pub fn new(default: i64, max: i64) -> Self {
        let max = max.max(1);
        Self {
            default: default.clamp(1, max),
            max,
        }
    }

    /// Resolve caller-supplied `limit`/`offset` into a concrete window.
    pub fn resolve(&self, limit: Option<i64>, offset: Option<i64>) -> Page {
        Page {
            limit: clamp_limit(limit, self.default, self.max),
            offset: clamp_offset(offset),
        }
    }
}

/// Clamp a user-provided limit into `1..=max`.
///
/// Missing, zero and negative values fall back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    match limit {
        Some(l) if l > 0 => l.min(max),
        _ => default.min(max),
    }
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
