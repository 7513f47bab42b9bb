//! Row models and insert DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//!
//! Rows serialize with their column names, which is the shape the web
//! client reads.

pub mod animal;
pub mod event;
pub mod report;
pub mod volunteer;
