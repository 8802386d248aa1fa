//! `SQLite` implementation of [`KeyValueStore`].

use std::future::Future;

use sqlx::SqlitePool;

use pantry_app::ports::KeyValueStore;
use pantry_domain::error::PantryError;

use crate::error::StorageError;

const SELECT_BY_KEY: &str = "SELECT value FROM kv_store WHERE key = ?";

const UPSERT: &str = r"
    INSERT INTO kv_store (key, value) VALUES (?, ?)
    ON CONFLICT (key) DO UPDATE SET value = excluded.value
";

/// `SQLite`-backed key-value store. Each key is one row; a write replaces
/// the row's value in a single statement.
#[derive(Clone)]
pub struct SqliteKeyValueStore {
    pool: SqlitePool,
}

impl SqliteKeyValueStore {
    /// Create a new store using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn read(&self, key: &str) -> impl Future<Output = Result<Option<String>, PantryError>> + Send {
        let pool = self.pool.clone();
        let key = key.to_string();
        async move {
            let row: Option<(String,)> = sqlx::query_as(SELECT_BY_KEY)
                .bind(&key)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|(value,)| value))
        }
    }

    fn write(
        &self,
        key: &str,
        value: String,
    ) -> impl Future<Output = Result<(), PantryError>> + Send {
        let pool = self.pool.clone();
        let key = key.to_string();
        async move {
            sqlx::query(UPSERT)
                .bind(&key)
                .bind(value)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
