use crate::models::Mapping;
use crate::storage::{validate_table_name, MappingStore, StorageResult};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

pub struct PostgresStore {
    pool: Arc<PgPool>,
    table: String,
}

impl PostgresStore {
    pub async fn new(
        database_url: &str,
        table_name: &str,
        max_connections: u32,
        connect_timeout: Duration,
    ) -> StorageResult<Self> {
        validate_table_name(table_name)?;

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(connect_timeout)
            .connect(database_url)
            .await?;

        Ok(Self {
            pool: Arc::new(pool),
            table: table_name.to_string(),
        })
    }
}

#[async_trait]
impl MappingStore for PostgresStore {
    async fn init(&self) -> StorageResult<()> {
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS "{}" (
                short_id TEXT PRIMARY KEY,
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
            VALUES ($1, $2)
            ON CONFLICT (short_id) DO UPDATE SET long_url = EXCLUDED.long_url
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
            WHERE short_id = $1
            "#,
            self.table
        ))
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }
}
