//! Domain logic for the Pawprint public API.
//!
//! Everything in this crate is pure: origin admission, filter parsing,
//! pagination, submission validation and attachment handling. I/O lives in
//! `pawprint-db`, `pawprint-storage` and `pawprint-api`.

pub mod attachment;
pub mod cors;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod submission;
pub mod types;
