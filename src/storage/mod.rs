pub mod memory;
pub mod postgres;
pub mod sqlite;
pub mod trait_def;

#[cfg(test)]
pub(crate) mod test_support;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use sqlite::SqliteStore;
pub use trait_def::{validate_table_name, MappingStore, StorageError, StorageResult};

use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::{StoreBackend, StoreConfig};

/// Build the configured backend and make sure its table exists.
pub async fn open_store(config: &StoreConfig) -> StorageResult<Arc<dyn MappingStore>> {
    let connect_timeout = Duration::from_secs(config.connect_timeout_secs);

    let store: Arc<dyn MappingStore> = match config.backend {
        StoreBackend::Sqlite => {
            info!("Using SQLite store: {} (table {})", config.url, config.table_name);
            Arc::new(
                SqliteStore::new(
                    &config.url,
                    &config.table_name,
                    config.max_connections,
                    connect_timeout,
                )
                .await?,
            )
        }
        StoreBackend::Postgres => {
            info!("Using PostgreSQL store (table {})", config.table_name);
            Arc::new(
                PostgresStore::new(
                    &config.url,
                    &config.table_name,
                    config.max_connections,
                    connect_timeout,
                )
                .await?,
            )
        }
        StoreBackend::Memory => {
            info!("Using in-memory store; mappings are lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    store.init().await?;
    Ok(store)
}
