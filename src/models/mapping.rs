use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored association between a short id and the submitted URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Mapping {
    pub short_id: String,
    /// Stored exactly as submitted
    pub long_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
