//! Request middleware.
//!
//! - [`cors::cors_gate`] -- Origin allow-list, preflight answers and
//!   hardening headers for every `/api/v1` response.
//! - [`guard::guarded`] -- Request timeout and panic recovery with JSON
//!   error bodies.

pub mod cors;
pub mod guard;
