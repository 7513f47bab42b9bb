use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    pawprint_db::health_check(&pool).await.unwrap();

    for table in ["animals", "events", "reports", "volunteers"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Status and type columns reject values outside their domain.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_animal_check_constraints(pool: PgPool) {
    let result = sqlx::query("INSERT INTO animals (name, \"type\") VALUES ('Tweety', 'bird')")
        .execute(&pool)
        .await;
    assert!(result.is_err(), "unknown animal type must be rejected");
}
