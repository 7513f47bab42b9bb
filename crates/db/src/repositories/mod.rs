//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod animal_repo;
pub mod event_repo;
pub mod report_repo;
pub mod volunteer_repo;

pub use animal_repo::AnimalRepo;
pub use event_repo::EventRepo;
pub use report_repo::ReportRepo;
pub use volunteer_repo::VolunteerRepo;
