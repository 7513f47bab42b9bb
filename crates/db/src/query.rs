//! Listing query builder.
//!
//! Translates a typed filter into the `WHERE … ORDER BY … LIMIT … OFFSET …`
//! tail of a `SELECT`, plus the ordered list of values to bind. Building is
//! pure so the generated SQL can be asserted without a database; the
//! repositories prepend `SELECT {COLUMNS} FROM {table}` and execute it.

use pawprint_core::filter::{AnimalFilter, EventFilter, PageType};
use pawprint_core::pagination::Page;
use pawprint_core::types::Timestamp;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

use crate::models::animal::STATUS_AVAILABLE;

/// A value bound to one `$n` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Bool(bool),
    Timestamp(Timestamp),
    Int(i64),
}

/// Query tail (everything after `FROM table`) and its bind values in
/// placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredQuery {
    pub clause: String,
    pub binds: Vec<BindValue>,
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Available animals matching `filter`, newest first.
pub fn animals_query(filter: &AnimalFilter, page: Page) -> FilteredQuery {
    let mut conditions = Conditions::default();

    conditions.push("status", "=", BindValue::Text(STATUS_AVAILABLE.into()));

    match filter.page_type {
        Some(PageType::Adoption) => {
            conditions.push("available_for_adoption", "=", BindValue::Bool(true));
        }
        Some(PageType::Sponsorship) => {
            conditions.push("available_for_sponsorship", "=", BindValue::Bool(true));
        }
        None => {}
    }
    if let Some(t) = filter.animal_type {
        conditions.push("\"type\"", "=", BindValue::Text(t.as_str().into()));
    }
    if let Some(size) = filter.size {
        conditions.push("size", "=", BindValue::Text(size.as_str().into()));
    }
    if let Some(gender) = filter.gender {
        conditions.push("gender", "=", BindValue::Text(gender.as_str().into()));
    }
    if let Some(is_puppy) = filter.is_puppy {
        conditions.push("is_puppy", "=", BindValue::Bool(is_puppy));
    }

    conditions.finish("created_at DESC, id DESC", page)
}

/// Events matching `filter`, soonest first.
///
/// A lookup by `id` ignores every other predicate, including the
/// `is_public` restriction. `now` is the cut-off for `upcoming`.
pub fn events_query(filter: &EventFilter, page: Page, now: Timestamp) -> FilteredQuery {
    let mut conditions = Conditions::default();

    if let Some(id) = &filter.id {
        conditions.push("id", "=", BindValue::Text(id.clone()));
        return conditions.finish("start_at ASC, id ASC", page);
    }

    conditions.push("is_public", "=", BindValue::Bool(true));

    if let Some(start) = filter.start {
        conditions.push("start_at", ">=", BindValue::Timestamp(start));
    }
    if let Some(end) = filter.end {
        conditions.push("start_at", "<=", BindValue::Timestamp(end));
    }
    if filter.upcoming == Some(true) {
        conditions.push("start_at", ">=", BindValue::Timestamp(now));
    }
    if let Some(term) = &filter.search {
        let pattern = format!("%{}%", escape_like(term));
        conditions.push_any_ilike(&["title", "description"], BindValue::Text(pattern));
    }
    if let Some(venue) = &filter.venue {
        conditions.push("venue", "=", BindValue::Text(venue.clone()));
    }

    conditions.finish("start_at ASC, id ASC", page)
}

/// Escape `LIKE` metacharacters so a search term matches literally.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Bind `binds` onto `query` in placeholder order.
pub fn bind_all<'q, O>(
    mut query: QueryAs<'q, Postgres, O, PgArguments>,
    binds: Vec<BindValue>,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for value in binds {
        query = match value {
            BindValue::Text(v) => query.bind(v),
            BindValue::Bool(v) => query.bind(v),
            BindValue::Timestamp(v) => query.bind(v),
            BindValue::Int(v) => query.bind(v),
        };
    }
    query
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Conditions {
    clauses: Vec<String>,
    binds: Vec<BindValue>,
}

impl Conditions {
    /// Register a bind value and return its placeholder.
    fn param(&mut self, value: BindValue) -> String {
        self.binds.push(value);
        format!("${}", self.binds.len())
    }

    fn push(&mut self, column: &str, op: &str, value: BindValue) {
        let p = self.param(value);
        self.clauses.push(format!("{column} {op} {p}"));
    }

    /// `(a ILIKE $n OR b ILIKE $n)` sharing one placeholder.
    fn push_any_ilike(&mut self, columns: &[&str], pattern: BindValue) {
        let p = self.param(pattern);
        let alternatives: Vec<String> = columns.iter().map(|c| format!("{c} ILIKE {p}")).collect();
        self.clauses.push(format!("({})", alternatives.join(" OR ")));
    }

    fn finish(mut self, order_by: &str, page: Page) -> FilteredQuery {
        let where_clause = if self.clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {} ", self.clauses.join(" AND "))
        };
        let limit = self.param(BindValue::Int(page.limit));
        let offset = self.param(BindValue::Int(page.offset));

        FilteredQuery {
            clause: format!("{where_clause}ORDER BY {order_by} LIMIT {limit} OFFSET {offset}"),
            binds: self.binds,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
