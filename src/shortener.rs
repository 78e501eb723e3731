//! Shortener: derive the short id for a long URL and persist the mapping.

use std::sync::Arc;
use tracing::info;

use crate::error::{ServiceError, ServiceResult, MISSING_LONG_URL};
use crate::short_id::{build_short_url, ShortIdGenerator};
use crate::storage::MappingStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortened {
    pub short_id: String,
    pub short_url: String,
}

pub struct Shortener {
    store: Arc<dyn MappingStore>,
    generator: ShortIdGenerator,
    base_url: String,
}

impl Shortener {
    pub fn new(
        store: Arc<dyn MappingStore>,
        generator: ShortIdGenerator,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            store,
            generator,
            base_url: base_url.into(),
        }
    }

    /// Shorten `long_url`, overwriting whatever mapping already holds its id.
    ///
    /// Colliding URLs are not detected: the later write replaces the earlier one.
    pub async fn shorten(&self, long_url: &str) -> ServiceResult<Shortened> {
        if long_url.is_empty() {
            return Err(ServiceError::InvalidInput(MISSING_LONG_URL));
        }

        let short_id = self.generator.derive(long_url);
        self.store.put(&short_id, long_url).await?;

        let short_url = build_short_url(&self.base_url, &short_id);
        info!(short_id = %short_id, "stored mapping");

        Ok(Shortened {
            short_id,
            short_url,
        })
    }
}
