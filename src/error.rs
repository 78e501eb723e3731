use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::storage::StorageError;

pub const MISSING_LONG_URL: &str = "Missing long_url parameter";
pub const MISSING_SHORT_ID: &str = "Missing shortId in path";

/// Failure of a shorten or resolve operation.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The caller supplied missing or malformed data
    #[error("{0}")]
    InvalidInput(&'static str),
    #[error("Short URL not found")]
    NotFound,
    #[error(transparent)]
    StoreUnavailable(#[from] StorageError),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::StoreUnavailable(_) | ServiceError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// The 500 body carries the underlying error text verbatim. Existing clients
// read it, but it can leak backend details such as driver messages.
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(status = %status, error = %self, "request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
