use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::error::{ServiceError, MISSING_LONG_URL};
use crate::models::ShortenResponse;
use crate::shortener::Shortener;

pub struct ApiState {
    pub shortener: Arc<Shortener>,
}

const ALLOWED_METHODS: &str = "POST, OPTIONS";
const ALLOWED_HEADERS: &str = "*";

/// Pull a usable `long_url` out of a request body.
///
/// Anything other than a non-empty string counts as missing.
fn extract_long_url(body: &Value) -> Result<&str, ServiceError> {
    body.get("long_url")
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .ok_or(ServiceError::InvalidInput(MISSING_LONG_URL))
}

/// Shorten a long URL
pub async fn shorten_url(
    State(state): State<Arc<ApiState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let body = body.map_err(|e| ServiceError::Unexpected(e.into()))?;
    let payload: Value = serde_json::from_slice(&body)
        .map_err(|e| ServiceError::Unexpected(e.into()))?;
    let long_url = extract_long_url(&payload)?;

    let shortened = state.shortener.shorten(long_url).await?;

    Ok((
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
        ],
        Json(ShortenResponse {
            short_url: shortened.short_url,
        }),
    ))
}

/// CORS preflight for the shorten endpoint
pub async fn shorten_preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
        ],
    )
}
