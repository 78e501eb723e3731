use crate::models::Mapping;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid table name '{0}': expected letters, digits and underscores")]
    InvalidTableName(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Durable map from short id to long URL.
///
/// Both operations are single point operations; atomicity is the backend's
/// responsibility and callers add no locking or retries around them.
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Initialize the storage (create the table if needed)
    async fn init(&self) -> StorageResult<()>;

    /// Insert or overwrite the mapping for `short_id`. Last write wins.
    async fn put(&self, short_id: &str, long_url: &str) -> StorageResult<()>;

    /// Get the mapping for `short_id`, if any
    async fn get(&self, short_id: &str) -> StorageResult<Option<Mapping>>;
}

const MAX_TABLE_NAME_LEN: usize = 63;

/// Check that `name` can be spliced into SQL as a quoted identifier.
pub fn validate_table_name(name: &str) -> StorageResult<()> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid_start && valid_rest && name.len() <= MAX_TABLE_NAME_LEN {
        Ok(())
    } else {
        Err(StorageError::InvalidTableName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        for name in ["urls", "UrlShortenerTable", "_mappings", "links_v2"] {
            assert!(validate_table_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_names_that_need_escaping() {
        for name in [
            "",
            "2urls",
            "url-table",
            "urls; DROP TABLE users",
            "urls\"",
            "tâble",
        ] {
            assert!(
                matches!(
                    validate_table_name(name),
                    Err(StorageError::InvalidTableName(_))
                ),
                "{name} should be rejected"
            );
        }

        assert!(validate_table_name(&"a".repeat(64)).is_err());
    }
}
