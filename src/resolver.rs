//! Resolver: look up the long URL stored for a short id.

use std::sync::Arc;
use tracing::info;

use crate::error::{ServiceError, ServiceResult, MISSING_SHORT_ID};
use crate::storage::MappingStore;

pub struct Resolver {
    store: Arc<dyn MappingStore>,
}

impl Resolver {
    pub fn new(store: Arc<dyn MappingStore>) -> Self {
        Self { store }
    }

    /// Return the stored long URL unmodified. Read-only.
    pub async fn resolve(&self, short_id: &str) -> ServiceResult<String> {
        if short_id.is_empty() {
            return Err(ServiceError::InvalidInput(MISSING_SHORT_ID));
        }

        info!(short_id = %short_id, "looking up short id");
        match self.store.get(short_id).await? {
            Some(mapping) => Ok(mapping.long_url),
            None => {
                info!(short_id = %short_id, "short id not found");
                Err(ServiceError::NotFound)
            }
        }
    }
}
