//! Animal entity model and DTOs.

use chrono::NaiveDate;
use pawprint_core::types::{RowId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Only rows in this status are ever listed.
pub const STATUS_AVAILABLE: &str = "available";

/// A row from the `animals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Animal {
    pub id: RowId,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub animal_type: String,
    pub size: Option<String>,
    pub gender: Option<String>,
    pub is_puppy: bool,
    pub breed: Option<String>,
    pub description: Option<String>,
    pub quote: Option<String>,
    pub photo_url: Option<String>,
    pub photo_before_url: Option<String>,
    pub photo_after_url: Option<String>,
    pub gallery_urls: Vec<String>,
    pub care_features: Vec<String>,
    pub rescue_date: Option<NaiveDate>,
    pub sponsorship_monthly_cost: Option<f64>,
    pub status: String,
    pub available_for_adoption: bool,
    pub available_for_sponsorship: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting an animal (admin tooling and fixtures).
#[derive(Debug, Clone)]
pub struct CreateAnimal {
    pub name: String,
    pub animal_type: String,
    pub size: Option<String>,
    pub gender: Option<String>,
    pub is_puppy: bool,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    pub status: String,
    pub available_for_adoption: bool,
    pub available_for_sponsorship: bool,
    /// Defaults to `now()` when `None`.
    pub created_at: Option<Timestamp>,
}

impl CreateAnimal {
    /// An available, adoptable animal with every optional field empty.
    pub fn available(name: &str, animal_type: &str) -> Self {
        Self {
            name: name.to_string(),
            animal_type: animal_type.to_string(),
            size: None,
            gender: None,
            is_puppy: false,
            description: None,
            photo_url: None,
            status: STATUS_AVAILABLE.to_string(),
            available_for_adoption: true,
            available_for_sponsorship: false,
            created_at: None,
        }
    }
}
