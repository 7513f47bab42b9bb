//! Repository for the `animals` table.

use pawprint_core::filter::AnimalFilter;
use pawprint_core::pagination::Page;
use sqlx::PgPool;

use crate::models::animal::{Animal, CreateAnimal};
use crate::query::{animals_query, bind_all};

/// Column list for `animals` queries.
const COLUMNS: &str = "\
    id, name, \"type\", size, gender, is_puppy, breed, description, quote, \
    photo_url, photo_before_url, photo_after_url, gallery_urls, care_features, \
    rescue_date, sponsorship_monthly_cost, status, \
    available_for_adoption, available_for_sponsorship, created_at, updated_at";

/// Provides read operations for the public animal listing.
pub struct AnimalRepo;

impl AnimalRepo {
    /// List available animals matching `filter`, newest first.
    pub async fn list_available(
        pool: &PgPool,
        filter: &AnimalFilter,
        page: Page,
    ) -> Result<Vec<Animal>, sqlx::Error> {
        let built = animals_query(filter, page);
        let query = format!("SELECT {COLUMNS} FROM animals {}", built.clause);
        tracing::debug!(sql = %query, binds = built.binds.len(), "Listing animals");

        bind_all(sqlx::query_as::<_, Animal>(&query), built.binds)
            .fetch_all(pool)
            .await
    }

    /// Insert an animal, returning the full row.
    pub async fn create(pool: &PgPool, input: &CreateAnimal) -> Result<Animal, sqlx::Error> {
        let query = format!(
            "INSERT INTO animals \
                (name, \"type\", size, gender, is_puppy, description, photo_url, status, \
                 available_for_adoption, available_for_sponsorship, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, COALESCE($11, now())) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Animal>(&query)
            .bind(&input.name)
            .bind(&input.animal_type)
            .bind(&input.size)
            .bind(&input.gender)
            .bind(input.is_puppy)
            .bind(&input.description)
            .bind(&input.photo_url)
            .bind(&input.status)
            .bind(input.available_for_adoption)
            .bind(input.available_for_sponsorship)
            .bind(input.created_at)
            .fetch_one(pool)
            .await
    }
}
