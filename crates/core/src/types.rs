/// Primary key of `animals`, `reports` and `volunteers` rows.
pub type RowId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
