use crate::models::Mapping;
use crate::storage::{validate_table_name, MappingStore, StorageResult};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

pub struct SqliteStore {
    pool: Arc<SqlitePool>,
    table: String,
}

impl SqliteStore {
    pub async fn new(
        database_url: &str,
        table_name: &str,
        max_connections: u32,
        connect_timeout: Duration,
    ) -> StorageResult<Self> {
        validate_table_name(table_name)?;

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(connect_timeout)
            .connect_with(options)
            .await?;

        Ok(Self {
            pool: Arc::new(pool),
            table: table_name.to_string(),
        })
    }
}

#[async_trait]
impl MappingStore for SqliteStore {
    async fn init(&self) -> StorageResult<()> {
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS "{}" (
                short_id TEXT PRIMARY KEY NOT NULL,
                long_url TEXT NOT NULL
            )
            "#,
            self.table
        ))
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn put(&self, short_id: &str, long_url: &str) -> StorageResult<()> {
        sqlx::query(&format!(
            r#"
            INSERT INTO "{}" (short_id, long_url)
            VALUES (?, ?)
            ON CONFLICT(short_id) DO UPDATE SET long_url = excluded.long_url
            "#,
            self.table
        ))
        .bind(short_id)
        .bind(long_url)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn get(&self, short_id: &str) -> StorageResult<Option<Mapping>> {
        let mapping = sqlx::query_as::<_, Mapping>(&format!(
            r#"
            SELECT short_id, long_url
            FROM "{}"
            WHERE short_id = ?
            "#,
            self.table
        ))
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }
}
